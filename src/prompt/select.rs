//! Keyboard-driven option selector.
//!
//! Two layouts share one state machine:
//!
//! - **List**: prompt, blank line, one option per line, blank line, footer.
//!   Navigated with ↑/↓. Occupies `options + 4` lines.
//! - **Panel**: a rounded box holding the prompt and all options on a single
//!   row. Navigated with ←/→. Always occupies 5 lines.
//!
//! The selector renders once, then loops on read key → update → erase →
//! render until Enter or Ctrl-C. On Enter the menu is erased and replaced by
//! a single summary line.

use std::io::Write;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::error::PromptError;
use super::key::{Key, KeySource};
use super::screen::{erase_lines, hidden_cursor};
use super::terminal::{exit_cancelled, Terminal};
use crate::theme::{current_theme, Theme};

/// Footer shown under list-style menus.
pub const LIST_FOOTER: &str = "Use ↑/↓ to navigate, Enter to select";

/// Lines occupied by a panel-style menu, whatever the option count.
pub const PANEL_LINES: usize = 5;

/// Default outer width cap for panel-style menus.
pub const DEFAULT_PANEL_WIDTH: usize = 60;

/// Box border plus one space of padding on each side.
const PANEL_CHROME: usize = 4;

/// Menu layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectStyle {
    /// Vertical list, ↑/↓
    #[default]
    List,
    /// Horizontal row inside a box, ←/→
    Panel,
}

/// The highlighted index, always within `0..len`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    len: usize,
}

impl Selection {
    /// Start at `default_index`, clamped into range. `len` must be at least 1.
    pub fn new(default_index: usize, len: usize) -> Self {
        debug_assert!(len > 0);
        Self {
            index: default_index.min(len.saturating_sub(1)),
            len,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Move forward, wrapping from the last option to the first.
    pub fn next(&mut self) {
        self.index = (self.index + 1) % self.len;
    }

    /// Move back, wrapping from the first option to the last.
    pub fn prev(&mut self) {
        self.index = (self.index + self.len - 1) % self.len;
    }
}

/// How a selector session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Selected(usize),
    /// Ctrl-C. The interactive entry points turn this into a process exit.
    Cancelled,
}

/// One render and the number of terminal lines it occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub lines: usize,
}

impl Frame {
    fn new(text: String) -> Self {
        let lines = text.matches('\n').count();
        Self { text, lines }
    }
}

/// A configured menu.
#[derive(Debug, Clone)]
pub struct Selector {
    prompt: String,
    options: Vec<String>,
    default_index: usize,
    style: SelectStyle,
    max_width: usize,
    terminal_width: Option<usize>,
    theme: Theme,
}

impl Selector {
    pub fn new<I, S>(prompt: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            prompt: prompt.into(),
            options: options.into_iter().map(Into::into).collect(),
            default_index: 0,
            style: SelectStyle::List,
            max_width: DEFAULT_PANEL_WIDTH,
            terminal_width: None,
            theme: current_theme(),
        }
    }

    /// Initially highlighted option (clamped).
    pub fn default_index(mut self, index: usize) -> Self {
        self.default_index = index;
        self
    }

    pub fn style(mut self, style: SelectStyle) -> Self {
        self.style = style;
        self
    }

    /// Outer width cap for the panel layout.
    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = width;
        self
    }

    /// Terminal width the panel must fit in.
    pub fn terminal_width(mut self, width: usize) -> Self {
        self.terminal_width = Some(width);
        self
    }

    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    /// Run on the controlling terminal and return the chosen index.
    ///
    /// Ctrl-C terminates the process with status 0; this function does not
    /// return in that case.
    pub fn interact(&self) -> Result<usize, PromptError> {
        let mut terminal = Terminal::open()?;
        let mut selector = self.clone();
        if selector.terminal_width.is_none() {
            selector.terminal_width = terminal.width();
        }

        let (keys, out) = terminal.split();
        match selector.run(keys, out)? {
            Outcome::Selected(index) => Ok(index),
            Outcome::Cancelled => exit_cancelled(),
        }
    }

    /// Drive one session against any key source and writer.
    ///
    /// The cursor is hidden for the whole session and shown again on every
    /// way out, including errors.
    pub fn run<K, W>(&self, keys: &mut K, out: &mut W) -> Result<Outcome, PromptError>
    where
        K: KeySource + ?Sized,
        W: Write,
    {
        if self.options.is_empty() {
            return Err(PromptError::NoOptions);
        }
        let mut selection = Selection::new(self.default_index, self.options.len());

        hidden_cursor(out, |out| {
            let mut frame = self.render(&selection);
            draw(out, &frame)?;

            loop {
                let key = keys.read_key()?;
                match key {
                    Key::Enter => {
                        erase_lines(out, frame.lines)?;
                        writeln!(out, "{}", self.summary(selection.index()))?;
                        out.flush()?;
                        tracing::debug!(index = selection.index(), "option selected");
                        return Ok(Outcome::Selected(selection.index()));
                    }
                    Key::Cancel => return Ok(Outcome::Cancelled),
                    _ => {
                        if !self.navigate(&mut selection, key) {
                            continue;
                        }
                        erase_lines(out, frame.lines)?;
                        frame = self.render(&selection);
                        draw(out, &frame)?;
                    }
                }
            }
        })
    }

    /// Apply a navigation key for this layout. Returns false for keys that
    /// do not move the highlight.
    fn navigate(&self, selection: &mut Selection, key: Key) -> bool {
        match (self.style, key) {
            (SelectStyle::List, Key::Up) | (SelectStyle::Panel, Key::Left) => selection.prev(),
            (SelectStyle::List, Key::Down) | (SelectStyle::Panel, Key::Right) => selection.next(),
            _ => return false,
        }
        true
    }

    /// Render the menu for `selection`.
    pub fn render(&self, selection: &Selection) -> Frame {
        match self.style {
            SelectStyle::List => self.render_list(selection),
            SelectStyle::Panel => self.render_panel(selection),
        }
    }

    fn render_list(&self, selection: &Selection) -> Frame {
        let theme = &self.theme;
        // Without a known width nothing is clipped; with one, no line may wrap
        let clip = |text: &str, width: Option<usize>| match width {
            Some(width) => fit(text, width).0,
            None => text.to_string(),
        };
        let width = self.terminal_width.map(|w| w.max(3));
        let row_width = width.map(|w| w - 2);

        let mut text = String::new();
        for line in self.prompt.split('\n') {
            text.push_str(&clip(line, width));
            text.push('\n');
        }
        text.push('\n');

        for (i, option) in self.options.iter().enumerate() {
            let option = clip(option, row_width);
            if i == selection.index() {
                text.push_str(&theme.accent_bold_text(&format!("> {}", option)));
            } else {
                text.push_str("  ");
                text.push_str(&option);
            }
            text.push('\n');
        }

        text.push('\n');
        text.push_str(&theme.secondary_text(&clip(LIST_FOOTER, width)));
        text.push('\n');
        Frame::new(text)
    }

    fn render_panel(&self, selection: &Selection) -> Frame {
        let theme = &self.theme;

        let cap = match self.terminal_width {
            Some(columns) => self.max_width.min(columns),
            None => self.max_width,
        };
        let inner_cap = cap.saturating_sub(PANEL_CHROME).max(1);

        // Every option takes its width plus two columns: brackets when
        // selected, spaces otherwise.
        let row_width: usize = self.options.iter().map(|o| o.width() + 2).sum::<usize>()
            + self.options.len().saturating_sub(1);
        let inner = self.prompt.width().max(row_width).min(inner_cap);

        let (prompt, prompt_width) = fit(&self.prompt, inner);

        let mut row = String::new();
        let mut remaining = inner;
        for (i, option) in self.options.iter().enumerate() {
            if remaining == 0 {
                break;
            }
            if i > 0 {
                row.push(' ');
                remaining -= 1;
            }
            let item = if i == selection.index() {
                format!("[{}]", option)
            } else {
                format!(" {} ", option)
            };
            let (item, used) = fit(&item, remaining);
            remaining -= used;
            if i == selection.index() {
                row.push_str(&theme.accent_bold_text(&item));
            } else {
                row.push_str(&item);
            }
        }

        let bar = "─".repeat(inner + 2);
        let side = theme.border_text("│");
        let mut text = String::new();
        text.push_str(&theme.border_text(&format!("╭{}╮", bar)));
        text.push('\n');
        push_boxed(&mut text, &side, &prompt, inner - prompt_width);
        push_boxed(&mut text, &side, "", inner);
        push_boxed(&mut text, &side, &row, remaining);
        text.push_str(&theme.border_text(&format!("╰{}╯", bar)));
        text.push('\n');
        Frame::new(text)
    }

    /// The line left on screen after a choice is made.
    fn summary(&self, index: usize) -> String {
        format!(
            "{} {}",
            self.prompt,
            self.theme.accent_bold_text(&self.options[index])
        )
    }
}

fn draw<W: Write + ?Sized>(out: &mut W, frame: &Frame) -> Result<(), PromptError> {
    out.write_all(frame.text.as_bytes())?;
    out.flush()?;
    Ok(())
}

fn push_boxed(text: &mut String, side: &str, content: &str, padding: usize) {
    text.push_str(side);
    text.push(' ');
    text.push_str(content);
    text.push_str(&" ".repeat(padding));
    text.push(' ');
    text.push_str(side);
    text.push('\n');
}

/// Truncate `text` to at most `width` display columns.
///
/// Line breaks become spaces so a boxed row never spills onto a second
/// line. Returns the truncated text and its width.
fn fit(text: &str, width: usize) -> (String, usize) {
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let c = if c == '\n' || c == '\r' { ' ' } else { c };
        let w = c.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        out.push(c);
        used += w;
    }
    (out, used)
}

/// Ask the user to pick one of `options` and return its index.
pub fn select<S: AsRef<str>>(
    prompt: &str,
    options: &[S],
    default_index: usize,
    style: SelectStyle,
) -> Result<usize, PromptError> {
    Selector::new(prompt, options.iter().map(|o| o.as_ref().to_string()))
        .default_index(default_index)
        .style(style)
        .interact()
}

/// Boxed horizontal selector, e.g. for yes/no questions.
pub fn panel_select<S: AsRef<str>>(
    prompt: &str,
    options: &[S],
    default_index: usize,
    max_width: usize,
) -> Result<usize, PromptError> {
    Selector::new(prompt, options.iter().map(|o| o.as_ref().to_string()))
        .default_index(default_index)
        .style(SelectStyle::Panel)
        .max_width(max_width)
        .interact()
}
