// Title bar component
//
// App title, the current tab, and a spinner while anything is in flight.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let bold_title = Style::default()
        .fg(app.theme.title)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::styled(format!(" ☰ {}", app.title), bold_title)];

    if app.session.is_authenticated() {
        spans.push(Span::styled(
            format!(" ──── {}", app.shell.tab.label()),
            Style::default().fg(app.theme.foreground),
        ));
    }
    if app.is_busy() {
        spans.push(Span::styled(
            format!(" {}", app.spinner_char()),
            Style::default().fg(app.theme.highlight),
        ));
    }

    let hint = if app.session.is_authenticated() {
        " m menu · ? help "
    } else {
        " Esc quit "
    };

    let title = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.title))
            .title_top(Line::from(hint).right_aligned()),
    );

    f.render_widget(title, area);
}
