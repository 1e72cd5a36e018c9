//! Theme system — color schemes for the explorer, with optional YAML override
//! from `~/.quickstep/theme.yaml`.

use ratatui::style::Color;
use serde::Deserialize;

/// A complete color theme.
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,

    // Chrome
    pub border: Color,
    pub border_focused: Color,
    pub title: Color,
    pub text: Color,
    pub text_dim: Color,

    // Status bar
    pub status_fg: Color,
    pub status_bg: Color,
    pub play: Color,
    pub stop: Color,
    pub warn: Color,

    // Controls
    pub gauge_tempo: Color,
    pub gauge_intensity: Color,
    pub beat_active: Color,
    pub beat_idle: Color,

    // Visualization
    pub curve_classical: Color,
    pub curve_hiphop: Color,
    pub curve_contemporary: Color,
    pub curve_latin: Color,
    pub guide: Color,
    pub guide_active: Color,
}

/// The default "Studio" theme, matching the web palette.
pub fn studio() -> Theme {
    Theme {
        name: "Studio".into(),
        border: Color::DarkGray,
        border_focused: Color::Magenta,
        title: Color::White,
        text: Color::Gray,
        text_dim: Color::DarkGray,
        status_fg: Color::White,
        status_bg: Color::Rgb(30, 30, 46),
        play: Color::Green,
        stop: Color::Red,
        warn: Color::Yellow,
        gauge_tempo: Color::Magenta,
        gauge_intensity: Color::Cyan,
        beat_active: Color::Rgb(139, 92, 246),
        beat_idle: Color::DarkGray,
        curve_classical: Color::Rgb(139, 92, 246),
        curve_hiphop: Color::Rgb(239, 68, 68),
        curve_contemporary: Color::Rgb(16, 185, 129),
        curve_latin: Color::Rgb(245, 158, 11),
        guide: Color::DarkGray,
        guide_active: Color::Rgb(99, 102, 241),
    }
}

/// High-contrast variant for dim terminals.
pub fn neon() -> Theme {
    Theme {
        name: "Neon".into(),
        border: Color::Blue,
        border_focused: Color::LightCyan,
        title: Color::LightCyan,
        text: Color::White,
        text_dim: Color::Gray,
        status_fg: Color::Black,
        status_bg: Color::LightCyan,
        play: Color::LightGreen,
        stop: Color::LightRed,
        warn: Color::LightYellow,
        gauge_tempo: Color::LightMagenta,
        gauge_intensity: Color::LightBlue,
        beat_active: Color::LightMagenta,
        beat_idle: Color::Blue,
        curve_classical: Color::LightMagenta,
        curve_hiphop: Color::LightRed,
        curve_contemporary: Color::LightGreen,
        curve_latin: Color::LightYellow,
        guide: Color::Blue,
        guide_active: Color::LightCyan,
    }
}

/// Monochrome fallback for limited terminals.
pub fn mono() -> Theme {
    Theme {
        name: "Mono".into(),
        border: Color::Gray,
        border_focused: Color::White,
        title: Color::White,
        text: Color::Gray,
        text_dim: Color::DarkGray,
        status_fg: Color::Black,
        status_bg: Color::Gray,
        play: Color::White,
        stop: Color::DarkGray,
        warn: Color::White,
        gauge_tempo: Color::White,
        gauge_intensity: Color::Gray,
        beat_active: Color::White,
        beat_idle: Color::DarkGray,
        curve_classical: Color::White,
        curve_hiphop: Color::White,
        curve_contemporary: Color::White,
        curve_latin: Color::White,
        guide: Color::DarkGray,
        guide_active: Color::White,
    }
}

/// All builtin themes, in cycle order.
pub fn all_builtins() -> Vec<Theme> {
    vec![studio(), neon(), mono()]
}

/// Load a theme: tries the YAML override first, falls back to Studio.
pub fn load_theme() -> Theme {
    load_theme_from_yaml().unwrap_or_else(studio)
}

/// Cycle to the next theme in the list, wrapping around.
pub fn cycle_theme(current: &Theme, themes: &[Theme]) -> Theme {
    if themes.is_empty() {
        return current.clone();
    }
    let idx = themes
        .iter()
        .position(|t| t.name == current.name)
        .map(|i| (i + 1) % themes.len())
        .unwrap_or(0);
    themes[idx].clone()
}

/// YAML override — all fields optional, unset fields keep Studio values.
#[derive(Debug, Default, Deserialize)]
struct ThemeConfig {
    name: Option<String>,
    border: Option<String>,
    border_focused: Option<String>,
    title: Option<String>,
    text: Option<String>,
    text_dim: Option<String>,
    status_fg: Option<String>,
    status_bg: Option<String>,
    play: Option<String>,
    stop: Option<String>,
    warn: Option<String>,
    gauge_tempo: Option<String>,
    gauge_intensity: Option<String>,
    beat_active: Option<String>,
    beat_idle: Option<String>,
    curve_classical: Option<String>,
    curve_hiphop: Option<String>,
    curve_contemporary: Option<String>,
    curve_latin: Option<String>,
    guide: Option<String>,
    guide_active: Option<String>,
}

/// Parse a color string: "#RRGGBB" hex or a named terminal color.
fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();
    if let Some(hex) = s.strip_prefix('#') {
        if hex.len() == 6 {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            return Some(Color::Rgb(r, g, b));
        }
        return None;
    }
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "white" => Some(Color::White),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" => Some(Color::DarkGray),
        "lightred" => Some(Color::LightRed),
        "lightgreen" => Some(Color::LightGreen),
        "lightyellow" => Some(Color::LightYellow),
        "lightblue" => Some(Color::LightBlue),
        "lightmagenta" => Some(Color::LightMagenta),
        "lightcyan" => Some(Color::LightCyan),
        _ => None,
    }
}

fn apply_config(config: ThemeConfig) -> Theme {
    let mut theme = studio();
    let set = |slot: &mut Color, value: &Option<String>| {
        if let Some(color) = value.as_deref().and_then(parse_color) {
            *slot = color;
        }
    };
    if let Some(name) = config.name {
        theme.name = name;
    }
    set(&mut theme.border, &config.border);
    set(&mut theme.border_focused, &config.border_focused);
    set(&mut theme.title, &config.title);
    set(&mut theme.text, &config.text);
    set(&mut theme.text_dim, &config.text_dim);
    set(&mut theme.status_fg, &config.status_fg);
    set(&mut theme.status_bg, &config.status_bg);
    set(&mut theme.play, &config.play);
    set(&mut theme.stop, &config.stop);
    set(&mut theme.warn, &config.warn);
    set(&mut theme.gauge_tempo, &config.gauge_tempo);
    set(&mut theme.gauge_intensity, &config.gauge_intensity);
    set(&mut theme.beat_active, &config.beat_active);
    set(&mut theme.beat_idle, &config.beat_idle);
    set(&mut theme.curve_classical, &config.curve_classical);
    set(&mut theme.curve_hiphop, &config.curve_hiphop);
    set(&mut theme.curve_contemporary, &config.curve_contemporary);
    set(&mut theme.curve_latin, &config.curve_latin);
    set(&mut theme.guide, &config.guide);
    set(&mut theme.guide_active, &config.guide_active);
    theme
}

fn load_theme_from_yaml() -> Option<Theme> {
    let path = dirs::home_dir()?.join(".quickstep").join("theme.yaml");
    let text = std::fs::read_to_string(path).ok()?;
    let config: ThemeConfig = serde_yaml::from_str(&text).ok()?;
    Some(apply_config(config))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtins_have_distinct_names() {
        let themes = all_builtins();
        for (i, theme) in themes.iter().enumerate() {
            assert!(!themes[..i].iter().any(|t| t.name == theme.name));
        }
    }

    #[test]
    fn cycle_advances_and_wraps() {
        let themes = all_builtins();
        let next = cycle_theme(&themes[0], &themes);
        assert_eq!(next.name, themes[1].name);
        let wrapped = cycle_theme(themes.last().unwrap(), &themes);
        assert_eq!(wrapped.name, themes[0].name);
    }

    #[test]
    fn cycle_empty_returns_current() {
        let theme = studio();
        assert_eq!(cycle_theme(&theme, &[]).name, "Studio");
    }

    #[test]
    fn cycle_unknown_falls_back_to_first() {
        let themes = all_builtins();
        let mut stranger = studio();
        stranger.name = "Custom".into();
        assert_eq!(cycle_theme(&stranger, &themes).name, themes[0].name);
    }

    #[test]
    fn parse_hex_color() {
        assert_eq!(parse_color("#8b5cf6"), Some(Color::Rgb(0x8b, 0x5c, 0xf6)));
        assert_eq!(parse_color("#FFF"), None);
        assert_eq!(parse_color("#gggggg"), None);
    }

    #[test]
    fn parse_named_color() {
        assert_eq!(parse_color("magenta"), Some(Color::Magenta));
        assert_eq!(parse_color(" GREY "), Some(Color::Gray));
        assert_eq!(parse_color("mauve"), None);
    }

    #[test]
    fn config_overrides_only_set_fields() {
        let config = ThemeConfig {
            name: Some("Custom".into()),
            curve_latin: Some("#112233".into()),
            ..Default::default()
        };
        let theme = apply_config(config);
        assert_eq!(theme.name, "Custom");
        assert_eq!(theme.curve_latin, Color::Rgb(0x11, 0x22, 0x33));
        assert_eq!(theme.border, studio().border);
    }

    #[test]
    fn bad_color_string_keeps_default() {
        let config = ThemeConfig {
            play: Some("chartreuse-ish".into()),
            ..Default::default()
        };
        assert_eq!(apply_config(config).play, studio().play);
    }
}
