// Login view
//
// Centered card with username and password inputs. The error line sits
// between the inputs and the submit hint.

use super::centered_rect;
use crate::dashboard::LoginFocus;
use crate::tui::app::App;
use crate::tui::components::TextInput;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

const CARD_WIDTH: u16 = 48;
const CARD_HEIGHT: u16 = 16;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let card = centered_rect(CARD_WIDTH, CARD_HEIGHT, area);
    f.render_widget(Clear, card);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.title))
        .style(Style::default().bg(app.theme.background))
        .title(Line::from(format!(" {} ", app.title)).centered());
    let inner = block.inner(card);
    f.render_widget(block, card);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // heading
            Constraint::Length(1),
            Constraint::Length(3), // username
            Constraint::Length(3), // password
            Constraint::Length(1), // error
            Constraint::Length(1),
            Constraint::Length(1), // submit
        ])
        .split(inner);

    let heading = Paragraph::new("Sign in to your dashboard")
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(app.theme.foreground)
                .add_modifier(Modifier::BOLD),
        );
    f.render_widget(heading, rows[0]);

    let pending = app.session.is_login_pending();
    let form = &app.login;

    TextInput::editable("Username", &form.username, form.focus == LoginFocus::Username)
        .disabled(pending)
        .render(f, rows[2], &app.theme);
    TextInput::editable("Password", &form.password, form.focus == LoginFocus::Password)
        .masked(form.masked_password())
        .disabled(pending)
        .render(f, rows[3], &app.theme);

    if let Some(error) = &app.session.login_error {
        let error = Paragraph::new(error.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(app.theme.error));
        f.render_widget(error, rows[4]);
    }

    let submit = if pending {
        Line::from(Span::styled(
            format!("{} Signing in...", app.spinner_char()),
            Style::default().fg(app.theme.muted),
        ))
    } else if form.is_submittable() {
        Line::from(vec![
            Span::styled("[ Enter ]", Style::default().fg(app.theme.accent)),
            Span::styled(" Sign In", Style::default().fg(app.theme.foreground)),
        ])
    } else {
        Line::from(Span::styled(
            "Enter username and password",
            Style::default().fg(app.theme.muted),
        ))
    };
    f.render_widget(Paragraph::new(submit).alignment(Alignment::Center), rows[6]);
}

/// Shown while stored credentials are being re-validated
pub fn render_checking(f: &mut Frame, area: Rect, app: &App) {
    let splash = centered_rect(CARD_WIDTH, 5, area);
    let text = Paragraph::new(vec![
        Line::from(Span::styled(
            app.title.as_str(),
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format!("{} Checking session…", app.spinner_char()),
            Style::default().fg(app.theme.muted),
        )),
    ])
    .alignment(Alignment::Center);
    f.render_widget(text, splash);
}
