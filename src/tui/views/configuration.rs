// Configuration view
//
// Layout:
// ┌ Status ───────────────────────────────────┐
// │ ● Pam is Answering Calls            [ON ] │
// │ Your customers are being taken care of... │
// └───────────────────────────────────────────┘
// ┌ Phone Numbers ────────────────────────────┐
// │ Customer / Pam / Fallback inputs          │
// └───────────────────────────────────────────┘

use crate::dashboard::{ConfigFocus, LoadState};
use crate::tui::app::App;
use crate::tui::components::TextInput;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let panel = &app.config_panel;

    let config = match (&panel.state, panel.config()) {
        (LoadState::Failed(message), _) => {
            render_message(f, area, app, message, app.theme.error);
            return;
        }
        (_, Some(config)) => config,
        _ => {
            let text = format!("{} Loading configuration...", app.spinner_char());
            render_message(f, area, app, &text, app.theme.muted);
            return;
        }
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(1),
            Constraint::Min(11),
        ])
        .split(area);

    // Status card
    let answering = config.forward_to_pam;
    let (heading, detail, dot) = if answering {
        (
            "Pam is Answering Calls",
            "Your customers are being taken care of by our AI assistant",
            app.theme.success,
        )
    } else {
        (
            "You are Answering Calls",
            "Calls are being forwarded directly to your number",
            app.theme.warning,
        )
    };

    let focused = panel.focus == ConfigFocus::Forwarding && !panel.is_editing();
    let switch_style = if panel.is_busy() {
        Style::default().fg(app.theme.muted)
    } else if focused {
        Style::default()
            .fg(app.theme.selection_fg)
            .bg(app.theme.selection)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.accent)
    };
    let switch = if answering { "[ ON  ●]" } else { "[●  OFF]" };

    let mut status_lines = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(dot)),
            Span::styled(
                heading,
                Style::default()
                    .fg(app.theme.foreground)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("   "),
            Span::styled(switch, switch_style),
        ]),
        Line::from(Span::styled(detail, Style::default().fg(app.theme.muted))),
    ];
    if let Some(error) = &panel.error {
        status_lines.push(Line::from(Span::styled(
            error.as_str(),
            Style::default().fg(app.theme.error),
        )));
    }

    let status = Paragraph::new(status_lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.border))
            .title(" Status "),
    );
    f.render_widget(status, chunks[0]);

    // Phone numbers
    let numbers_block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border))
        .title(" Phone Numbers ");
    let inner = numbers_block.inner(chunks[2]);
    f.render_widget(numbers_block, chunks[2]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(inner);

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[0]);
    TextInput::readonly("Customer Phone Number", &config.customer_facing_number)
        .render(f, halves[0], &app.theme);
    f.render_widget(
        caption("The number customers call to reach BlackSalt", app),
        inset(halves[1]),
    );

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[1]);
    TextInput::readonly("Pam's Phone Number", &config.pam_phone_number)
        .render(f, halves[0], &app.theme);
    f.render_widget(caption("This number cannot be modified", app), inset(halves[1]));

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    let fallback_focused = panel.focus == ConfigFocus::Fallback;
    let mut fallback = TextInput::editable(
        "Fallback Number (Your Number)",
        &panel.fallback,
        panel.is_editing(),
    )
    .masked(panel.displayed_fallback().to_string())
    .disabled(panel.is_busy());
    if fallback_focused && !panel.is_editing() {
        // Highlight the border without drawing a cursor
        fallback.focused = true;
        fallback.field = None;
    }
    fallback.render(f, halves[0], &app.theme);

    let hint = if panel.is_editing() {
        "Enter to save · Esc to finish"
    } else if fallback_focused {
        "Enter to edit"
    } else {
        ""
    };
    f.render_widget(caption(hint, app), inset(halves[1]));
}

fn caption<'a>(text: &'a str, app: &App) -> Paragraph<'a> {
    Paragraph::new(text).style(Style::default().fg(app.theme.muted))
}

/// Vertically center a caption next to a 3-row input
fn inset(area: Rect) -> Rect {
    Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(1),
        area.height.saturating_sub(2).min(1),
    )
}

fn render_message(
    f: &mut Frame,
    area: Rect,
    app: &App,
    text: &str,
    color: ratatui::style::Color,
) {
    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.border))
                .title(" Configuration "),
        );
    f.render_widget(paragraph, area);
}
