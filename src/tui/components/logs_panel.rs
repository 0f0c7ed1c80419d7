//! Log footer
//!
//! Shows the newest entries from the in-memory log buffer, color-coded by
//! level. Always pinned to the bottom; toggle with `l`.

use crate::logging::{LogEntry, LogLevel};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Rows in the open footer, borders included
pub const LOGS_HEIGHT: u16 = 8;

fn log_level_style(level: &LogLevel, theme: &Theme) -> Style {
    match level {
        LogLevel::Error => Style::default().fg(theme.error),
        LogLevel::Warn => Style::default().fg(theme.warning),
        LogLevel::Info => Style::default().fg(theme.foreground),
        LogLevel::Debug | LogLevel::Trace => Style::default().fg(theme.muted),
    }
}

fn format_log_entry(entry: &LogEntry) -> String {
    format!(
        "{} {:5} {}",
        entry.timestamp.format("%H:%M:%S"),
        entry.level.as_str(),
        entry.message
    )
}

pub fn render(f: &mut Frame, area: Rect, entries: &[LogEntry], theme: &Theme) {
    let items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(format_log_entry(entry)).style(log_level_style(&entry.level, theme))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.panel_logs))
            .title(" System Logs (l to hide) "),
    );

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Local;

    #[test]
    fn entry_line_has_level_and_message() {
        let entry = LogEntry {
            timestamp: Local::now(),
            level: LogLevel::Warn,
            message: "Call page failed".into(),
        };
        let line = format_log_entry(&entry);
        assert!(line.contains("WARN"));
        assert!(line.ends_with("Call page failed"));
    }
}
