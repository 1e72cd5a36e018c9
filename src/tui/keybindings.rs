//! Key bindings — maps key events to application actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Application-level actions triggered by key events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application.
    Quit,
    /// Toggle play/pause.
    TogglePlayback,
    /// Adjust tempo by a delta in BPM (clamped to 60–180 by the app).
    AdjustTempo(i32),
    /// Adjust movement intensity by a delta (clamped to 0–100).
    AdjustIntensity(i32),
    /// Select a genre by catalog position.
    SelectGenre(usize),
    /// Select the next genre, wrapping.
    NextGenre,
    /// Select the previous genre, wrapping.
    PrevGenre,
    /// Toggle the detail panel between analysis and cultural context.
    ToggleTab,
    /// Cycle focus to the next panel.
    CycleFocus,
    /// Cycle to the next theme.
    CycleTheme,
    /// Toggle tone muting.
    ToggleMute,
    /// Toggle the help overlay.
    ToggleHelp,
    /// Escape key (close overlays).
    Escape,
}

/// Map a key event to an action. `help_visible` narrows the bindings to
/// overlay dismissal while the help screen is up.
pub fn map_key(key: KeyEvent, help_visible: bool) -> Option<Action> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    // Quit always works.
    if ctrl && key.code == KeyCode::Char('q') {
        return Some(Action::Quit);
    }

    if help_visible {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => Some(Action::Escape),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(' ') => Some(Action::TogglePlayback),
        KeyCode::Up if shift => Some(Action::AdjustTempo(10)),
        KeyCode::Down if shift => Some(Action::AdjustTempo(-10)),
        KeyCode::Up => Some(Action::AdjustTempo(1)),
        KeyCode::Down => Some(Action::AdjustTempo(-1)),
        KeyCode::Right => Some(Action::AdjustIntensity(5)),
        KeyCode::Left => Some(Action::AdjustIntensity(-5)),
        KeyCode::Char(c @ '1'..='9') => {
            Some(Action::SelectGenre(c as usize - '1' as usize))
        }
        KeyCode::Tab => Some(Action::NextGenre),
        KeyCode::BackTab => Some(Action::PrevGenre),
        KeyCode::Char('c') => Some(Action::ToggleTab),
        KeyCode::Char('f') => Some(Action::CycleFocus),
        KeyCode::Char('t') => Some(Action::CycleTheme),
        KeyCode::Char('m') => Some(Action::ToggleMute),
        KeyCode::Char('?') | KeyCode::Char('h') => Some(Action::ToggleHelp),
        KeyCode::Esc => Some(Action::Escape),
        _ => None,
    }
}

/// Key/description pairs for the help overlay.
pub fn help_entries() -> &'static [(&'static str, &'static str)] {
    &[
        ("Space", "play / pause the beat"),
        ("Up/Down", "tempo ±1 BPM (Shift: ±10)"),
        ("Left/Right", "intensity ±5"),
        ("1-4", "select genre"),
        ("Tab / Shift-Tab", "next / previous genre"),
        ("c", "analysis / cultural context tab"),
        ("f", "cycle panel focus"),
        ("t", "cycle theme"),
        ("m", "mute tones"),
        ("?", "toggle this help"),
        ("q / Ctrl-Q", "quit"),
    ]
}
