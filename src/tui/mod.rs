// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, finished API requests)
// - Layered key dispatch

pub mod app;
pub mod components;
pub mod handoff;
pub mod modal;
pub mod scroll;
pub mod theme;
pub mod views;

use crate::api::{ApiEvent, ApiRequest};
use crate::dashboard::{ConfigFocus, Tab, TextField};
use crate::session::SessionState;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use modal::{Modal, ModalAction};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Run the TUI
///
/// Sets up the terminal, issues the startup session check if there is one,
/// runs the event loop, and restores the terminal even if the loop failed.
pub async fn run_tui(
    mut app: App,
    startup: Option<ApiRequest>,
    mut api_rx: mpsc::Receiver<ApiEvent>,
) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    app.dispatch_opt(startup);

    let result = run_event_loop(&mut terminal, &mut app, &mut api_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources and handles whichever is ready first:
/// 1. Keyboard/mouse input
/// 2. Timer ticks (spinner animation, toast expiry)
/// 3. Finished API requests from the dispatcher
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api_rx: &mut mpsc::Receiver<ApiEvent>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard or mouse input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    match event::read() {
                        Ok(Event::Key(key_event)) => handle_key_event(app, key_event),
                        Ok(Event::Mouse(mouse_event)) => handle_mouse_event(app, mouse_event),
                        _ => {}
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(api_event) = api_rx.recv() => {
                app.apply_event(api_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input
///
/// Layered dispatch: Session gate → Modal → Menu → Text editing → Global → View
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C always quits, even mid-typing
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        app.should_quit = true;
        return;
    }

    match app.session.state() {
        SessionState::Checking => {
            if matches!(key_event.code, KeyCode::Char('q') | KeyCode::Esc) {
                app.should_quit = true;
            }
        }
        SessionState::SignedOut => handle_login_keys(app, &key_event),
        SessionState::SignedIn => {
            if handle_modal_input(app, &key_event) {
                return;
            }
            if handle_menu_input(app, &key_event) {
                return;
            }
            if handle_editing_input(app, &key_event) {
                return;
            }
            if handle_global_keys(app, &key_event) {
                return;
            }
            handle_view_keys(app, &key_event);
        }
    }
}

/// Handle mouse input: wheel scrolls whatever Up/Down would
fn handle_mouse_event(app: &mut App, mouse_event: MouseEvent) {
    let code = match mouse_event.kind {
        MouseEventKind::ScrollUp => KeyCode::Up,
        MouseEventKind::ScrollDown => KeyCode::Down,
        _ => return,
    };
    if app.is_typing() {
        return;
    }
    handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
}

/// Cursor movement and character entry for a single-line field.
/// Returns true if the key was a text-editing key.
fn edit_text(field: &mut TextField, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char(c) => field.insert(c),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Left => field.move_left(),
        KeyCode::Right => field.move_right(),
        KeyCode::Home => field.move_home(),
        KeyCode::End => field.move_end(),
        _ => return false,
    }
    true
}

// ─────────────────────────────────────────────────────────────────────────────
// Login screen
// ─────────────────────────────────────────────────────────────────────────────

fn handle_login_keys(app: &mut App, key_event: &KeyEvent) {
    if app.session.is_login_pending() {
        if key_event.code == KeyCode::Esc {
            app.should_quit = true;
        }
        return;
    }

    match key_event.code {
        KeyCode::Esc => app.should_quit = true,
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
            app.login.toggle_focus();
        }
        KeyCode::Enter => {
            if app.login.is_submittable() {
                app.submit_login();
            } else {
                app.login.toggle_focus();
            }
        }
        _ => {
            edit_text(app.login.focused_mut(), key_event);
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Dashboard layers
// ─────────────────────────────────────────────────────────────────────────────

/// Handle modal input - returns true if modal absorbed the input
fn handle_modal_input(app: &mut App, key_event: &KeyEvent) -> bool {
    let Some(modal) = &app.modal else {
        return false;
    };

    match modal.handle_input(key_event.code) {
        ModalAction::None => {}
        ModalAction::Close => app.close_modal(),
        ModalAction::ScrollUp => app.detail_scroll.scroll_up(),
        ModalAction::ScrollDown => app.detail_scroll.scroll_down(),
        ModalAction::ScrollTop => app.detail_scroll.scroll_to_top(),
        ModalAction::ScrollBottom => app.detail_scroll.scroll_to_bottom(),
        ModalAction::PageUp => app.detail_scroll.page_up(),
        ModalAction::PageDown => app.detail_scroll.page_down(),
        ModalAction::OpenRecording => app.open_recording(),
        ModalAction::CopyRecording => app.copy_recording(),
    }

    true
}

/// Slide-in menu owns the keyboard while open
fn handle_menu_input(app: &mut App, key_event: &KeyEvent) -> bool {
    if !app.shell.menu_open {
        return false;
    }

    match key_event.code {
        KeyCode::Up | KeyCode::Char('k') => app.shell.menu_up(),
        KeyCode::Down | KeyCode::Char('j') => app.shell.menu_down(),
        KeyCode::Enter => app.choose_menu_item(),
        KeyCode::Esc | KeyCode::Char('m') => app.shell.toggle_menu(),
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char(c) => {
            if let Some(tab) = Tab::from_hotkey(c) {
                app.shell.toggle_menu();
                app.select_tab(tab);
            }
        }
        _ => {}
    }
    true
}

/// A focused text field gets every key until it is left
fn handle_editing_input(app: &mut App, key_event: &KeyEvent) -> bool {
    match app.shell.tab {
        Tab::Configuration if app.config_panel.is_editing() => {
            match key_event.code {
                // Leaving the field submits it
                KeyCode::Enter | KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => {
                    let request = app.config_panel.commit_fallback();
                    app.dispatch_opt(request);
                }
                _ => {
                    edit_text(&mut app.config_panel.fallback, key_event);
                }
            }
            true
        }
        Tab::Faq if app.faq.is_editing() => {
            // Inputs are disabled while the save is in flight
            if app.faq.is_busy() {
                return true;
            }
            match key_event.code {
                KeyCode::Tab | KeyCode::BackTab => app.faq.switch_field(),
                KeyCode::Enter | KeyCode::Esc => {
                    let request = app.faq.commit_edit();
                    app.dispatch_opt(request);
                }
                _ => {
                    if let Some(draft) = app.faq.draft_mut() {
                        edit_text(draft.focused_mut(), key_event);
                    }
                }
            }
            true
        }
        _ => false,
    }
}

/// Handle global keys - returns true if handled
fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.should_quit = true,
        KeyCode::Char('?') => app.modal = Some(Modal::Help),
        KeyCode::Char('m') => app.shell.toggle_menu(),
        KeyCode::Char('l') => app.toggle_logs(),
        KeyCode::Char('t') => app.next_theme(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Tab => app.select_tab(app.shell.tab.next()),
        KeyCode::BackTab => app.select_tab(app.shell.tab.prev()),
        KeyCode::Char(c) => match Tab::from_hotkey(c) {
            Some(tab) => app.select_tab(tab),
            None => return false,
        },
        _ => return false,
    }
    true
}

/// Keys that mean something only on the current tab
fn handle_view_keys(app: &mut App, key_event: &KeyEvent) {
    match app.shell.tab {
        Tab::Configuration => match key_event.code {
            KeyCode::Up | KeyCode::Down | KeyCode::Char('k') | KeyCode::Char('j') => {
                app.config_panel.focus_next();
            }
            KeyCode::Char(' ') => {
                if app.config_panel.focus == ConfigFocus::Forwarding {
                    let request = app.config_panel.toggle_forwarding();
                    app.dispatch_opt(request);
                }
            }
            KeyCode::Enter | KeyCode::Char('e') => match app.config_panel.focus {
                ConfigFocus::Forwarding => {
                    let request = app.config_panel.toggle_forwarding();
                    app.dispatch_opt(request);
                }
                ConfigFocus::Fallback => app.config_panel.begin_fallback_edit(),
            },
            _ => {}
        },
        Tab::Faq => match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => app.faq.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.faq.select_next(),
            KeyCode::Enter | KeyCode::Char('e') => {
                let request = app.faq.activate();
                app.dispatch_opt(request);
            }
            KeyCode::Char('a') => {
                let request = app.faq.add_entry();
                app.dispatch_opt(request);
            }
            _ => {}
        },
        Tab::Calls => match key_event.code {
            KeyCode::Up | KeyCode::Char('k') => app.calls.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => app.calls.select_next(),
            KeyCode::Enter => app.activate_call_row(),
            KeyCode::Char('n') => {
                let request = app.calls.load_more();
                app.dispatch_opt(request);
            }
            _ => {}
        },
    }
}
