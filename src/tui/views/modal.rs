// Modal overlay rendering
//
// Modals are rendered on top of the main content:
// - Help modal: keyboard shortcuts and current theme
// - Call detail modal: metadata, summary, recording link, transcript

use super::centered_rect;
use crate::api::{Call, Role};
use crate::tui::app::App;
use crate::tui::components::{format_call_time, format_cost, format_duration, wrap_text};
use crate::tui::modal::Modal;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render a modal dialog as a centered overlay
pub fn render(f: &mut Frame, modal: &Modal, app: &mut App) {
    match modal {
        Modal::Help => render_help(f, app),
        Modal::CallDetail => render_call_detail(f, app),
    }
}

/// Render the help modal overlay
fn render_help(f: &mut Frame, app: &App) {
    let key_style = Style::default().fg(app.theme.accent);
    let desc_style = Style::default().fg(app.theme.foreground);
    let header_style = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);
    let divider_style = Style::default().fg(app.theme.border);

    // Keybind line: "    key         description"
    let kb = |key: &str, desc: &str| -> Line {
        Line::from(vec![
            Span::raw("    "),
            Span::styled(format!("{:<12}", key), key_style),
            Span::styled(desc.to_string(), desc_style),
        ])
    };

    let content = Text::from(vec![
        Line::raw(""),
        Line::from(Span::styled("  Navigation", header_style)),
        kb("1 / 2 / 3", "Configuration / Calls / FAQ"),
        kb("Tab", "Next tab"),
        kb("m", "Open menu"),
        kb("r", "Reload current tab"),
        Line::raw(""),
        Line::from(Span::styled("  Configuration", header_style)),
        kb("↑/↓", "Move focus"),
        kb("Space", "Toggle who answers"),
        kb("Enter", "Edit fallback number"),
        Line::raw(""),
        Line::from(Span::styled("  Calls", header_style)),
        kb("Enter", "Call details / load more"),
        kb("n", "Load more"),
        kb("o / y", "Open / copy recording"),
        Line::raw(""),
        Line::from(Span::styled("  FAQ", header_style)),
        kb("Enter", "Edit entry"),
        kb("a", "Add entry"),
        kb("Tab", "Question ↔ answer"),
        Line::raw(""),
        Line::from(Span::styled("  General", header_style)),
        kb("t", "Switch theme"),
        kb("l", "Toggle logs"),
        kb("?", "Toggle this help"),
        kb("q", "Quit"),
        Line::raw(""),
        Line::from(Span::styled(
            "  ──────────────────────────────────",
            divider_style,
        )),
        Line::from(vec![
            Span::styled("  Theme: ", desc_style),
            Span::styled(app.theme.name, key_style),
        ]),
    ]);

    let area = centered_rect(46, 34, f.area());
    f.render_widget(Clear, area);

    let paragraph = Paragraph::new(content)
        .style(Style::default().bg(app.theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(app.theme.highlight))
                .border_type(app.theme.border_type)
                .title(" Help ")
                .title_bottom(Line::from(" Press ? or Esc to close ").centered()),
        );

    f.render_widget(paragraph, area);
}

/// Build the detail body, wrapped to `width`
fn detail_lines(call: &Call, width: usize, app: &App) -> Vec<Line<'static>> {
    let label = Style::default().fg(app.theme.muted);
    let value = Style::default().fg(app.theme.foreground);
    let heading = Style::default()
        .fg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);

    let field = |name: &str, text: String| -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{:<12}", name), label),
            Span::styled(text, value),
        ])
    };

    let when = call
        .started_at()
        .map(|t| format_call_time(&t))
        .unwrap_or_else(|| "—".to_string());
    let sentiment_color = if call.is_positive() {
        app.theme.success
    } else {
        app.theme.warning
    };
    let recording = if call.recording_url.is_empty() {
        "Not available".to_string()
    } else {
        call.recording_url.clone()
    };

    let mut lines = vec![
        Line::from(Span::styled("Call Details", heading)),
        Line::raw(""),
        field("From", call.from_number.clone()),
        field("Started", when),
        field("Duration", format_duration(call.duration_secs())),
        field("Cost", format_cost(call.cost_dollars())),
        Line::from(vec![
            Span::styled(format!("{:<12}", "Sentiment"), label),
            Span::styled(
                call.call_analysis.user_sentiment.label().to_string(),
                Style::default().fg(sentiment_color),
            ),
        ]),
        field("Recording", recording),
        Line::raw(""),
        Line::from(Span::styled("Summary", heading)),
    ];
    for line in wrap_text(&call.call_analysis.call_summary, width) {
        lines.push(Line::from(Span::styled(line, value)));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled("Transcript", heading)));
    if call.transcript_object.is_empty() {
        lines.push(Line::from(Span::styled("No transcript", label)));
    }
    for turn in &call.transcript_object {
        let speaker_color = if turn.role == Role::Agent {
            app.theme.accent
        } else {
            app.theme.highlight
        };
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            turn.role.label(),
            Style::default()
                .fg(speaker_color)
                .add_modifier(Modifier::BOLD),
        )));
        for line in wrap_text(&turn.content, width) {
            lines.push(Line::from(Span::styled(line, value)));
        }
    }

    lines
}

/// Render the call detail modal (nearly full screen, vertical scroll)
fn render_call_detail(f: &mut Frame, app: &mut App) {
    let frame_area = f.area();
    let width = (frame_area.width * 90 / 100).max(60);
    let height = (frame_area.height * 85 / 100).max(20);
    let area = centered_rect(width, height, frame_area);

    let viewport_height = area.height.saturating_sub(2) as usize;
    let viewport_width = area.width.saturating_sub(4) as usize;

    let Some(lines) = app
        .calls
        .detail()
        .map(|call| detail_lines(call, viewport_width, app))
    else {
        return;
    };
    let total_lines = lines.len();

    app.detail_scroll
        .update_dimensions(total_lines, viewport_height);
    let offset = app.detail_scroll.offset();

    let scroll_info = if app.detail_scroll.is_scrollable() {
        format!(" ({}/{}) ", offset + 1, total_lines)
    } else {
        String::new()
    };

    f.render_widget(Clear, area);
    let paragraph = Paragraph::new(lines)
        .style(
            Style::default()
                .fg(app.theme.foreground)
                .bg(app.theme.background),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(app.theme.border_type)
                .border_style(Style::default().fg(app.theme.highlight))
                .title(format!(" Call{} ", scroll_info))
                .title_bottom(
                    Line::from(" ↑↓:scroll  o:open recording  y:copy link  Esc:close ")
                        .centered(),
                ),
        )
        .scroll((offset as u16, 0));

    f.render_widget(paragraph, area);
}
