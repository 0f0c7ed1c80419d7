// Views module - screen-level rendering logic
//
// Each view is a full-screen experience within the TUI:
// - Login: Sign-in form (and the splash while a stored session is checked)
// - Configuration: Forwarding switch and phone numbers
// - Calls: Paginated call log
// - FAQ: Question/answer editor
//
// This module builds the shell and dispatches to the view for the active tab.

mod calls;
mod configuration;
mod faq;
mod login;
mod modal;

use super::app::App;
use crate::dashboard::Tab;
use crate::session::SessionState;
use crate::tui::components::{self, logs_panel};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &mut App) {
    let bg_block = Block::default().style(Style::default().bg(app.theme.background));
    f.render_widget(bg_block, f.area());

    match app.session.state() {
        SessionState::Checking => login::render_checking(f, f.area(), app),
        SessionState::SignedOut => login::render(f, f.area(), app),
        SessionState::SignedIn => draw_dashboard(f, app),
    }

    if let Some(toast) = &app.toast {
        toast.render(f, f.area(), &app.theme);
    }
    app.clear_expired_toast();
}

/// Title, tab content, optional log footer, status bar; overlays on top
fn draw_dashboard(f: &mut Frame, app: &mut App) {
    let mut constraints = vec![Constraint::Length(3), Constraint::Min(8)];
    if app.show_logs {
        constraints.push(Constraint::Length(logs_panel::LOGS_HEIGHT));
    }
    constraints.push(Constraint::Length(2));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(f.area());

    components::title_bar::render(f, chunks[0], app);

    let content = chunks[1];
    match app.shell.tab {
        Tab::Configuration => configuration::render(f, content, app),
        Tab::Calls => calls::render(f, content, app),
        Tab::Faq => faq::render(f, content, app),
    }

    if app.show_logs {
        let visible = logs_panel::LOGS_HEIGHT.saturating_sub(2) as usize;
        let entries = app.log_buffer.recent(visible);
        logs_panel::render(f, chunks[2], &entries, &app.theme);
    }
    components::status_bar::render(f, chunks[chunks.len() - 1], app);

    if app.shell.menu_open {
        components::menu::render(f, content, app);
    }

    if let Some(modal) = app.modal.clone() {
        modal::render(f, &modal, app);
    }
}

/// Center a box of the given size inside `area`
pub(super) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
