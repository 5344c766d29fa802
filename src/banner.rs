//! The `sjphy about` banner.

use unicode_width::UnicodeWidthStr;

use crate::theme::Theme;

const TITLE_ART: &str = r"
███████╗     ██╗██████╗ ██╗  ██╗██╗   ██╗
██╔════╝     ██║██╔══██╗██║  ██║╚██╗ ██╔╝
███████╗     ██║██████╔╝███████║ ╚████╔╝
╚════██║██   ██║██╔═══╝ ██╔══██║  ╚██╔╝
███████║╚█████╔╝██║     ██║  ██║   ██║
╚══════╝ ╚════╝ ╚═╝     ╚═╝  ╚═╝   ╚═╝
";

pub const TAGLINE: &str = "End-to-end physics experiment calculator";

const GRADIENT_FROM: (u8, u8, u8) = (0xfc, 0xcb, 0x90);
const GRADIENT_TO: (u8, u8, u8) = (0xd5, 0x7e, 0xeb);

const DESCRIPTION: &[&str] = &[
    "SJPHY is a suite of jupyter notebooks that aims to",
    "automatically analyze results from SJTU physics experiments.",
    "",
    "For more information, view the README.md file",
];

const FEATURES: &[(&str, &str)] = &[
    ("Automated", "physics experiment analysis"),
    ("Jupyter", "notebook based workflow"),
    ("Rich", "visualizations and reports"),
    ("Configurable", "analysis parameters"),
];

/// Linear interpolation between the two gradient stops, `t` in `[0, 1]`.
fn gradient_at(t: f32) -> (u8, u8, u8) {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    (
        mix(GRADIENT_FROM.0, GRADIENT_TO.0),
        mix(GRADIENT_FROM.1, GRADIENT_TO.1),
        mix(GRADIENT_FROM.2, GRADIENT_TO.2),
    )
}

/// One art line coloured left to right.
fn gradient_line(theme: &Theme, line: &str) -> String {
    if !theme.enabled {
        return line.to_string();
    }
    let chars: Vec<char> = line.chars().collect();
    let span = chars.len().saturating_sub(1).max(1) as f32;
    chars
        .iter()
        .enumerate()
        .map(|(i, c)| theme.rgb_text(gradient_at(i as f32 / span), &c.to_string()))
        .collect()
}

/// Rounded box with a title in the top border.
fn boxed(theme: &Theme, title: &str, lines: &[String]) -> String {
    let inner = lines
        .iter()
        .map(|l| strip_width(l))
        .chain(std::iter::once(title.width() + 2))
        .max()
        .unwrap_or(0)
        + 2;

    let mut out = String::new();
    let top_rule = "─".repeat(inner.saturating_sub(title.width() + 3));
    out.push_str(&theme.border_text("╭─ "));
    out.push_str(&theme.accent_bold_text(title));
    out.push_str(&theme.border_text(&format!(" {}╮", top_rule)));
    out.push('\n');
    for line in lines {
        let pad = inner - 2 - strip_width(line);
        out.push_str(&theme.border_text("│"));
        out.push(' ');
        out.push_str(line);
        out.push_str(&" ".repeat(pad));
        out.push(' ');
        out.push_str(&theme.border_text("│"));
        out.push('\n');
    }
    out.push_str(&theme.border_text(&format!("╰{}╯", "─".repeat(inner))));
    out.push('\n');
    out
}

/// Display width of text that may carry SGR escape sequences.
fn strip_width(text: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in text.chars() {
        match (in_escape, c) {
            (false, '\x1b') => in_escape = true,
            (true, 'm') => in_escape = false,
            (true, _) => {}
            (false, c) => width += unicode_width::UnicodeWidthChar::width(c).unwrap_or(0),
        }
    }
    width
}

/// Full banner: gradient title, tagline, description and feature boxes.
pub fn render(theme: &Theme) -> String {
    let mut out = String::from("\n");
    for line in TITLE_ART.lines().filter(|l| !l.is_empty()) {
        out.push(' ');
        out.push_str(&gradient_line(theme, line));
        out.push('\n');
    }
    out.push('\n');
    out.push(' ');
    out.push_str(&theme.secondary_text(TAGLINE));
    out.push_str("\n\n");

    let description: Vec<String> = DESCRIPTION.iter().map(|l| l.to_string()).collect();
    out.push_str(&boxed(theme, "About SJPHY", &description));
    out.push('\n');

    let features: Vec<String> = FEATURES
        .iter()
        .map(|(word, rest)| format!("• {} {}", theme.success_text(word), rest))
        .collect();
    out.push_str(&boxed(theme, "Features", &features));
    out
}
