// Calls view
//
// Newest first. Each row: sentiment dot, caller, time, duration, cost, and
// the summary. A trailing "Load more" row appears while the backend may
// have older calls.

use crate::api::Call;
use crate::tui::app::App;
use crate::tui::components::{format_call_time, format_cost, format_duration, truncate};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let log = &app.calls;

    let title = if log.calls().is_empty() {
        " Calls ".to_string()
    } else {
        format!(" Calls ({}) ", log.calls().len())
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
        .title(title);

    if let Some(error) = &log.error {
        let p = Paragraph::new(error.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.error))
            .block(block);
        f.render_widget(p, area);
        return;
    }

    if log.calls().is_empty() {
        let text = if log.is_loading() {
            format!("{} Loading calls...", app.spinner_char())
        } else {
            "No calls yet".to_string()
        };
        let p = Paragraph::new(text)
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.muted))
            .block(block);
        f.render_widget(p, area);
        return;
    }

    let width = area.width.saturating_sub(6) as usize;
    let mut items: Vec<ListItem> = log
        .calls()
        .iter()
        .map(|call| call_item(call, width, app))
        .collect();

    if log.has_more() {
        let label = if log.is_loading() {
            format!("  {} Loading...", app.spinner_char())
        } else {
            "  Load more".to_string()
        };
        items.push(ListItem::new(Line::from(Span::styled(
            label,
            Style::default().fg(app.theme.accent),
        ))));
    }

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .fg(app.theme.selection_fg)
            .bg(app.theme.selection),
    );
    let mut state = ListState::default().with_selected(Some(log.selected));
    f.render_stateful_widget(list, area, &mut state);
}

fn call_item<'a>(call: &Call, width: usize, app: &App) -> ListItem<'a> {
    let dot = if call.is_positive() {
        app.theme.success
    } else {
        app.theme.warning
    };
    let when = call
        .started_at()
        .map(|t| format_call_time(&t))
        .unwrap_or_else(|| "—".to_string());

    let header = Line::from(vec![
        Span::styled("● ", Style::default().fg(dot)),
        Span::styled(
            call.from_number.clone(),
            Style::default()
                .fg(app.theme.foreground)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}", when), Style::default().fg(app.theme.muted)),
        Span::styled(
            format!(
                "  {} · {}",
                format_duration(call.duration_secs()),
                format_cost(call.cost_dollars())
            ),
            Style::default().fg(app.theme.accent),
        ),
    ]);
    let summary = Line::from(Span::styled(
        format!("  {}", truncate(&call.call_analysis.call_summary, width)),
        Style::default().fg(app.theme.muted),
    ));

    ListItem::new(vec![header, summary])
}
