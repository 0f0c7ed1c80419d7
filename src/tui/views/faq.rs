// FAQ view
//
// One row per entry plus a trailing "+ Add New FAQ" row. The entry being
// edited expands into question and answer inputs.

use crate::dashboard::{FaqField, LoadState};
use crate::tui::app::App;
use crate::tui::components::{truncate, TextInput};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let editor = &app.faq;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
        .title(" FAQ Management ");

    match &editor.state {
        LoadState::Failed(message) => {
            let p = Paragraph::new(message.as_str())
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.error))
                .block(block);
            f.render_widget(p, area);
            return;
        }
        LoadState::Idle | LoadState::Loading => {
            let p = Paragraph::new(format!("{} Loading FAQs...", app.spinner_char()))
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.muted))
                .block(block);
            f.render_widget(p, area);
            return;
        }
        LoadState::Ready => {}
    }

    let inner = block.inner(area);
    f.render_widget(block, area);

    // Editor pane below the list while a draft is open
    let (list_area, edit_area, error_area) = {
        let mut constraints = vec![Constraint::Min(3)];
        if editor.is_editing() {
            constraints.push(Constraint::Length(7));
        }
        constraints.push(Constraint::Length(1));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(inner);
        let edit = editor.is_editing().then(|| chunks[1]);
        (chunks[0], edit, chunks[chunks.len() - 1])
    };

    let width = list_area.width.saturating_sub(6) as usize;
    let editing_index = editor.draft().map(|d| d.index);

    let mut items: Vec<ListItem> = editor
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let question = if entry.question.trim().is_empty() {
                Span::styled("(empty question)", Style::default().fg(app.theme.muted))
            } else {
                Span::styled(
                    truncate(&entry.question, width),
                    Style::default()
                        .fg(app.theme.foreground)
                        .add_modifier(Modifier::BOLD),
                )
            };
            let marker = if editing_index == Some(i) { "✎ " } else { "  " };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(marker, Style::default().fg(app.theme.accent)),
                    question,
                ]),
                Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        truncate(&entry.answer, width),
                        Style::default().fg(app.theme.muted),
                    ),
                ]),
            ])
        })
        .collect();

    let add_style = if editor.is_busy() {
        Style::default().fg(app.theme.muted)
    } else {
        Style::default().fg(app.theme.accent)
    };
    items.push(ListItem::new(Line::from(Span::styled(
        "  + Add New FAQ",
        add_style,
    ))));

    let list = List::new(items).highlight_style(
        Style::default()
            .fg(app.theme.selection_fg)
            .bg(app.theme.selection),
    );
    let mut state = ListState::default().with_selected(Some(editor.selected));
    f.render_stateful_widget(list, list_area, &mut state);

    if let (Some(edit_area), Some(draft)) = (edit_area, editor.draft()) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(edit_area);
        let busy = editor.is_busy();
        TextInput::editable("Question", &draft.question, draft.focus == FaqField::Question)
            .disabled(busy)
            .render(f, rows[0], &app.theme);
        TextInput::editable("Answer", &draft.answer, draft.focus == FaqField::Answer)
            .disabled(busy)
            .render(f, rows[1], &app.theme);
        let hint = if busy {
            format!("{} Saving...", app.spinner_char())
        } else {
            "Tab switch field · Enter/Esc save".to_string()
        };
        f.render_widget(
            Paragraph::new(hint).style(Style::default().fg(app.theme.muted)),
            rows[2],
        );
    }

    if let Some(error) = &editor.error {
        f.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(app.theme.error)),
            error_area,
        );
    }
}
