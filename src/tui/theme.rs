// Theme system for the TUI
//
// Two built-in palettes, switchable at runtime with `t`. Views never pick
// raw colors; they read semantic slots from the active `Theme`.

use ratatui::style::Color;
use ratatui::widgets::BorderType;

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeKind {
    #[default]
    Dark,
    Light,
}

impl ThemeKind {
    /// Parse a config value; unknown names fall back to dark
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "light" => ThemeKind::Light,
            _ => ThemeKind::Dark,
        }
    }

    /// Get the next theme in the cycle
    pub fn next(self) -> Self {
        match self {
            ThemeKind::Dark => ThemeKind::Light,
            ThemeKind::Light => ThemeKind::Dark,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            ThemeKind::Dark => "dark",
            ThemeKind::Light => "light",
        }
    }

    pub fn theme(&self) -> Theme {
        match self {
            ThemeKind::Dark => Theme::dark(),
            ThemeKind::Light => Theme::light(),
        }
    }
}

/// Resolved colors for every UI slot
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,

    // ─── Terminal Colors ─────────────────────────────────────
    pub background: Color,
    pub foreground: Color,
    pub muted: Color,

    // ─── Chrome ──────────────────────────────────────────────
    pub title: Color,
    pub border: Color,
    pub highlight: Color,
    pub status_bar: Color,
    pub border_type: BorderType,

    // ─── Selection ───────────────────────────────────────────
    pub selection: Color,
    pub selection_fg: Color,

    // ─── Semantic ────────────────────────────────────────────
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub accent: Color,

    /// Log footer border
    pub panel_logs: Color,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: Color::Rgb(22, 24, 29),
            foreground: Color::Rgb(220, 223, 228),
            muted: Color::Rgb(128, 134, 145),
            title: Color::Rgb(97, 175, 239),
            border: Color::Rgb(62, 68, 81),
            highlight: Color::Rgb(229, 192, 123),
            status_bar: Color::Rgb(150, 156, 166),
            border_type: BorderType::Rounded,
            selection: Color::Rgb(62, 68, 81),
            selection_fg: Color::Rgb(255, 255, 255),
            success: Color::Rgb(152, 195, 121),
            warning: Color::Rgb(229, 192, 123),
            error: Color::Rgb(224, 108, 117),
            accent: Color::Rgb(198, 120, 221),
            panel_logs: Color::Rgb(86, 182, 194),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "light",
            background: Color::Rgb(250, 250, 250),
            foreground: Color::Rgb(56, 58, 66),
            muted: Color::Rgb(140, 142, 150),
            title: Color::Rgb(64, 120, 242),
            border: Color::Rgb(200, 202, 208),
            highlight: Color::Rgb(193, 132, 1),
            status_bar: Color::Rgb(105, 108, 119),
            border_type: BorderType::Rounded,
            selection: Color::Rgb(64, 120, 242),
            selection_fg: Color::Rgb(255, 255, 255),
            success: Color::Rgb(80, 161, 79),
            warning: Color::Rgb(193, 132, 1),
            error: Color::Rgb(228, 86, 73),
            accent: Color::Rgb(166, 38, 164),
            panel_logs: Color::Rgb(1, 132, 188),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
