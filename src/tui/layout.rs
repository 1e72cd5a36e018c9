//! Layout — panel focus and detail-tab selection.

/// Which panel currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPanel {
    Controls,
    Visualization,
    Detail,
}

impl FocusPanel {
    /// Cycle to the next panel.
    pub fn next(self) -> Self {
        match self {
            Self::Controls => Self::Visualization,
            Self::Visualization => Self::Detail,
            Self::Detail => Self::Controls,
        }
    }
}

/// Which tab the detail panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailTab {
    Analysis,
    Cultural,
}

impl DetailTab {
    /// Toggle between the two tabs.
    pub fn toggle(self) -> Self {
        match self {
            Self::Analysis => Self::Cultural,
            Self::Cultural => Self::Analysis,
        }
    }

    /// Tab title for the panel header.
    pub fn title(self) -> &'static str {
        match self {
            Self::Analysis => "Analysis",
            Self::Cultural => "Cultural Context",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_cycles_back_to_start() {
        let start = FocusPanel::Controls;
        assert_eq!(start.next().next().next(), start);
    }

    #[test]
    fn focus_order() {
        assert_eq!(FocusPanel::Controls.next(), FocusPanel::Visualization);
        assert_eq!(FocusPanel::Visualization.next(), FocusPanel::Detail);
        assert_eq!(FocusPanel::Detail.next(), FocusPanel::Controls);
    }

    #[test]
    fn tab_toggle() {
        assert_eq!(DetailTab::Analysis.toggle(), DetailTab::Cultural);
        assert_eq!(DetailTab::Cultural.toggle(), DetailTab::Analysis);
    }
}
