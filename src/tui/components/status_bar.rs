// Status bar component
//
// Who is signed in, which backend, and the keys that matter right now.

use crate::dashboard::Tab;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Key hints for the current context
fn hints(app: &App) -> &'static str {
    if !app.session.is_authenticated() {
        return "Tab switch field │ Enter sign in │ Esc quit";
    }
    if app.config_panel.is_editing() || app.faq.is_editing() {
        return "Enter/Esc save │ Tab next field";
    }
    match app.shell.tab {
        Tab::Configuration => "↑/↓ focus │ Space toggle │ Enter edit │ 1-3 tabs │ q quit",
        Tab::Calls => "↑/↓ select │ Enter details │ n more │ 1-3 tabs │ q quit",
        Tab::Faq => "↑/↓ select │ Enter edit │ a add │ 1-3 tabs │ q quit",
    }
}

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let who = match app.session.username() {
        Some(user) => format!(" 👤 {} │ {} │ ", user, app.api_url),
        None => format!(" {} │ ", app.api_url),
    };

    let status = Paragraph::new(format!("{}{}", who, hints(app)))
        .style(Style::default().fg(app.theme.status_bar))
        .block(Block::default().borders(Borders::TOP));

    f.render_widget(status, area);
}
