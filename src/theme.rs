//! Theme configuration for CLI output
//!
//! Centralizes all color and style definitions. Colors are expressed as
//! crossterm colors and rendered as ANSI escape codes.

use crossterm::style::Color;

/// Colors used by prompts, banners and command output.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Primary text color (used for most content)
    pub text_primary: Color,
    /// Secondary/dimmed text color (hints, footers)
    pub text_secondary: Color,
    /// Accent color for the highlighted option and chosen values
    pub accent: Color,
    /// Error/warning color
    pub error: Color,
    /// Success color
    pub success: Color,
    /// Border color for boxed prompts
    pub border: Color,
    /// When false every helper returns the text unchanged
    pub enabled: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self::sjphy()
    }
}

impl Theme {
    /// Default palette: yellow highlights, cyan borders.
    pub fn sjphy() -> Self {
        Self {
            text_primary: Color::Reset,
            text_secondary: Color::DarkGrey,
            accent: Color::DarkYellow,
            error: Color::DarkRed,
            success: Color::DarkGreen,
            border: Color::DarkCyan,
            enabled: true,
        }
    }

    /// No escape codes at all (NO_COLOR, pipes, tests).
    pub fn plain() -> Self {
        Self {
            enabled: false,
            ..Self::sjphy()
        }
    }

    fn paint(&self, color: Color, bold: bool, text: &str) -> String {
        if !self.enabled {
            return text.to_string();
        }
        let weight = if bold { ANSI_BOLD } else { "" };
        format!("{}{}{}{}", weight, color_to_ansi(color), text, ANSI_RESET)
    }

    /// Format text with the accent color.
    pub fn accent_text(&self, text: &str) -> String {
        self.paint(self.accent, false, text)
    }

    /// Format text with the accent color in bold (selected option, choices).
    pub fn accent_bold_text(&self, text: &str) -> String {
        self.paint(self.accent, true, text)
    }

    /// Format text with the primary color.
    pub fn primary_text(&self, text: &str) -> String {
        self.paint(self.text_primary, false, text)
    }

    /// Format text with the secondary color.
    pub fn secondary_text(&self, text: &str) -> String {
        self.paint(self.text_secondary, false, text)
    }

    /// Format text with the error color.
    pub fn error_text(&self, text: &str) -> String {
        self.paint(self.error, false, text)
    }

    /// Format text with the success color in bold.
    pub fn success_text(&self, text: &str) -> String {
        self.paint(self.success, true, text)
    }

    /// Format box-drawing characters with the border color.
    pub fn border_text(&self, text: &str) -> String {
        self.paint(self.border, false, text)
    }

    /// Format text with a 24-bit color (banner gradient).
    pub fn rgb_text(&self, (r, g, b): (u8, u8, u8), text: &str) -> String {
        self.paint(Color::Rgb { r, g, b }, false, text)
    }
}

/// ANSI reset sequence
const ANSI_RESET: &str = "\x1b[0m";
const ANSI_BOLD: &str = "\x1b[1m";

/// Convert a crossterm Color to an ANSI escape code.
fn color_to_ansi(color: Color) -> String {
    let code = match color {
        Color::Black => "30",
        Color::DarkRed => "31",
        Color::DarkGreen => "32",
        Color::DarkYellow => "33",
        Color::DarkBlue => "34",
        Color::DarkMagenta => "35",
        Color::DarkCyan => "36",
        Color::Grey => "37",
        Color::DarkGrey => "90",
        Color::Red => "91",
        Color::Green => "92",
        Color::Yellow => "93",
        Color::Blue => "94",
        Color::Magenta => "95",
        Color::Cyan => "96",
        Color::White => "97",
        Color::Rgb { r, g, b } => return format!("\x1b[38;2;{};{};{}m", r, g, b),
        Color::AnsiValue(n) => return format!("\x1b[38;5;{}m", n),
        Color::Reset => return String::new(),
    };
    format!("\x1b[{}m", code)
}

/// Theme for the current process: plain when `NO_COLOR` is set.
pub fn current_theme() -> Theme {
    match std::env::var_os("NO_COLOR") {
        Some(v) if !v.is_empty() => Theme::plain(),
        _ => Theme::default(),
    }
}
