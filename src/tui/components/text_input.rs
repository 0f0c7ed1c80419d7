// Text input widget
//
// Renders a `TextField` as a bordered one-line box. When focused the
// cursor cell is drawn reversed; long values scroll to keep it visible.

use crate::dashboard::TextField;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub struct TextInput<'a> {
    pub label: &'a str,
    /// What to draw; differs from the field for masked input
    pub display: String,
    pub field: Option<&'a TextField>,
    pub focused: bool,
    pub disabled: bool,
}

impl<'a> TextInput<'a> {
    /// Editable field, drawn with its own contents
    pub fn editable(label: &'a str, field: &'a TextField, focused: bool) -> Self {
        Self {
            label,
            display: field.value().to_string(),
            field: Some(field),
            focused,
            disabled: false,
        }
    }

    /// Non-editable value
    pub fn readonly(label: &'a str, value: &str) -> Self {
        Self {
            label,
            display: value.to_string(),
            field: None,
            focused: false,
            disabled: true,
        }
    }

    pub fn masked(mut self, display: String) -> Self {
        self.display = display;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn render(self, f: &mut Frame, area: Rect, theme: &Theme) {
        let border = if self.focused {
            theme.highlight
        } else {
            theme.border
        };
        let text_style = if self.disabled {
            Style::default().fg(theme.muted)
        } else {
            Style::default().fg(theme.foreground)
        };

        let inner_width = area.width.saturating_sub(2) as usize;
        let line = match self.field.filter(|_| self.focused) {
            Some(field) => {
                // Cursor position in the displayed string (same char count when masked)
                let chars: Vec<char> = self.display.chars().collect();
                let cursor = field.cursor().min(chars.len());
                let before: String = chars[..cursor].iter().collect();
                let at: String = chars.get(cursor).map(|c| c.to_string()).unwrap_or_else(|| " ".into());
                let after: String = chars.iter().skip(cursor + 1).collect();

                // Scroll so the cursor cell stays in view
                let mut before = before;
                while before.width() + 1 > inner_width && !before.is_empty() {
                    before.remove(0);
                }

                Line::from(vec![
                    Span::styled(before, text_style),
                    Span::styled(at, text_style.add_modifier(Modifier::REVERSED)),
                    Span::styled(after, text_style),
                ])
            }
            None => Line::from(Span::styled(self.display, text_style)),
        };

        let widget = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", self.label)),
        );
        f.render_widget(widget, area);
    }
}
