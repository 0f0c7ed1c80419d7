// Slide-in menu
//
// Drawn over the left edge of the content area while `Shell::menu_open`.

use crate::dashboard::MenuItem;
use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

const MENU_WIDTH: u16 = 28;

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let width = MENU_WIDTH.min(area.width);
    let menu_area = Rect::new(area.x, area.y, width, area.height);

    let items: Vec<ListItem> = MenuItem::ALL
        .iter()
        .enumerate()
        .map(|(i, item)| {
            let key = match item {
                MenuItem::Open(tab) => tab.hotkey().to_string(),
                MenuItem::SignOut => " ".to_string(),
            };
            let current = matches!(item, MenuItem::Open(tab) if *tab == app.shell.tab);

            let style = if i == app.shell.menu_cursor {
                Style::default()
                    .fg(app.theme.selection_fg)
                    .bg(app.theme.selection)
                    .add_modifier(Modifier::BOLD)
            } else if current {
                Style::default().fg(app.theme.highlight)
            } else {
                Style::default().fg(app.theme.foreground)
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", key), Style::default().fg(app.theme.muted)),
                Span::styled(format!(" {}", item.label()), style),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(app.theme.border_type)
            .border_style(Style::default().fg(app.theme.highlight))
            .style(Style::default().bg(app.theme.background))
            .title(" Menu ")
            .title_bottom(Line::from(" Enter open · Esc close ").centered()),
    );

    f.render_widget(Clear, menu_area);
    f.render_widget(list, menu_area);
}
