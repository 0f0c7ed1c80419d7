// Shell state - tab switcher and slide-in menu
//
// Pure UI state, no network. The shell owns which tab is showing and
// whether the menu is open; views read it, and the key handler mutates it.

/// Content tabs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Configuration,
    Calls,
    Faq,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Configuration, Tab::Calls, Tab::Faq];

    /// Menu / title label
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Configuration => "Configuration",
            Tab::Calls => "Call Logs",
            Tab::Faq => "FAQ Management",
        }
    }

    /// Direct-select key shown in the menu and help
    pub fn hotkey(&self) -> char {
        match self {
            Tab::Configuration => '1',
            Tab::Calls => '2',
            Tab::Faq => '3',
        }
    }

    pub fn from_hotkey(c: char) -> Option<Tab> {
        Tab::ALL.into_iter().find(|t| t.hotkey() == c)
    }

    pub fn next(self) -> Self {
        match self {
            Tab::Configuration => Tab::Calls,
            Tab::Calls => Tab::Faq,
            Tab::Faq => Tab::Configuration,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Tab::Configuration => Tab::Faq,
            Tab::Calls => Tab::Configuration,
            Tab::Faq => Tab::Calls,
        }
    }
}

/// Rows in the slide-in menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Open(Tab),
    SignOut,
}

impl MenuItem {
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Open(Tab::Configuration),
        MenuItem::Open(Tab::Calls),
        MenuItem::Open(Tab::Faq),
        MenuItem::SignOut,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Open(tab) => tab.label(),
            MenuItem::SignOut => "Sign out",
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Shell {
    pub tab: Tab,
    pub menu_open: bool,
    /// Highlighted menu row
    pub menu_cursor: usize,
}

impl Shell {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
        if self.menu_open {
            // Open on the current tab's row
            self.menu_cursor = MenuItem::ALL
                .iter()
                .position(|item| *item == MenuItem::Open(self.tab))
                .unwrap_or(0);
        }
    }

    pub fn menu_up(&mut self) {
        self.menu_cursor = self.menu_cursor.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        self.menu_cursor = (self.menu_cursor + 1).min(MenuItem::ALL.len() - 1);
    }

    pub fn highlighted(&self) -> MenuItem {
        MenuItem::ALL
            .get(self.menu_cursor)
            .copied()
            .unwrap_or(MenuItem::Open(Tab::Configuration))
    }

    /// Activate the highlighted row and close the menu
    pub fn choose(&mut self) -> MenuItem {
        let item = self.highlighted();
        self.menu_open = false;
        item
    }

    /// Switch tab. Returns true if the tab actually changed (needs mounting).
    pub fn select(&mut self, tab: Tab) -> bool {
        if self.tab == tab {
            return false;
        }
        self.tab = tab;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_opens_on_current_tab() {
        let mut shell = Shell {
            tab: Tab::Faq,
            ..Shell::default()
        };
        shell.toggle_menu();
        assert!(shell.menu_open);
        assert_eq!(shell.highlighted(), MenuItem::Open(Tab::Faq));
    }

    #[test]
    fn choose_closes_menu() {
        let mut shell = Shell::default();
        shell.toggle_menu();
        shell.menu_down();
        assert_eq!(shell.choose(), MenuItem::Open(Tab::Calls));
        assert!(!shell.menu_open);
    }

    #[test]
    fn cursor_is_clamped() {
        let mut shell = Shell::default();
        shell.toggle_menu();
        for _ in 0..10 {
            shell.menu_down();
        }
        assert_eq!(shell.highlighted(), MenuItem::SignOut);
        for _ in 0..10 {
            shell.menu_up();
        }
        assert_eq!(shell.menu_cursor, 0);
    }

    #[test]
    fn reselecting_current_tab_is_not_a_change() {
        let mut shell = Shell::default();
        assert!(!shell.select(Tab::Configuration));
        assert!(shell.select(Tab::Calls));
        assert_eq!(shell.tab, Tab::Calls);
    }

    #[test]
    fn hotkeys_and_cycling() {
        assert_eq!(Tab::from_hotkey('2'), Some(Tab::Calls));
        assert_eq!(Tab::from_hotkey('9'), None);
        assert_eq!(Tab::Faq.next(), Tab::Configuration);
        assert_eq!(Tab::Configuration.prev(), Tab::Faq);
    }
}
