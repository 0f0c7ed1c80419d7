// App state - everything the TUI renders and mutates
//
// The App is the one place state modules, the session, and the dispatcher
// meet. Key handlers call into it; ApiEvents from the dispatcher come back
// through `apply_event`. Views only read it (plus per-frame scroll sizing).

use super::components::Toast;
use super::handoff;
use super::modal::Modal;
use super::scroll::ScrollState;
use super::theme::{Theme, ThemeKind};
use crate::api::{ApiEvent, ApiRequest, Dispatcher};
use crate::config::Config;
use crate::dashboard::{CallLog, ConfigPanel, FaqEditor, LoginForm, MenuItem, Shell, Tab};
use crate::logging::LogBuffer;
use crate::session::{Session, SessionState};

const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];

pub struct App {
    pub title: String,
    /// Backend host, shown in the status bar
    pub api_url: String,
    pub theme_kind: ThemeKind,
    pub theme: Theme,
    pub log_buffer: LogBuffer,

    pub session: Session,
    pub login: LoginForm,
    pub shell: Shell,

    pub config_panel: ConfigPanel,
    pub faq: FaqEditor,
    pub calls: CallLog,

    pub modal: Option<Modal>,
    pub toast: Option<Toast>,
    /// Call detail scroll position
    pub detail_scroll: ScrollState,
    pub show_logs: bool,
    pub should_quit: bool,

    animation_frame: usize,
    dispatcher: Dispatcher,
}

impl App {
    pub fn new(config: &Config, log_buffer: LogBuffer, session: Session, dispatcher: Dispatcher) -> Self {
        let theme_kind = ThemeKind::from_name(&config.theme);
        Self {
            title: config.title.clone(),
            api_url: dispatcher.client().base_url().to_string(),
            theme_kind,
            theme: theme_kind.theme(),
            log_buffer,
            session,
            login: LoginForm::new(),
            shell: Shell::default(),
            config_panel: ConfigPanel::new(),
            faq: FaqEditor::new(),
            calls: CallLog::new(),
            modal: None,
            toast: None,
            detail_scroll: ScrollState::new(),
            show_logs: config.show_logs,
            should_quit: false,
            animation_frame: 0,
            dispatcher,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Requests and responses
    // ─────────────────────────────────────────────────────────────────────────

    /// Hand a request to the background dispatcher
    pub fn dispatch(&self, request: ApiRequest) {
        self.dispatcher.submit(self.session.credentials(), request);
    }

    pub fn dispatch_opt(&self, request: Option<ApiRequest>) {
        if let Some(request) = request {
            self.dispatch(request);
        }
    }

    /// Apply a finished request to whichever component issued it
    pub fn apply_event(&mut self, event: ApiEvent) {
        match event {
            ApiEvent::Authenticated {
                credentials,
                purpose,
                result,
            } => {
                let was_signed_in = self.session.is_authenticated();
                self.session.apply(credentials, purpose, result);

                if !was_signed_in && self.session.is_authenticated() {
                    self.login.reset();
                    self.enter_dashboard();
                } else if self.session.login_error.is_some() {
                    self.login.clear_password();
                }
            }
            ApiEvent::Config { ticket, result } => match ticket.tab {
                Tab::Configuration => {
                    self.config_panel.apply(ticket.generation, result);
                }
                Tab::Faq => {
                    self.faq.apply(ticket.generation, result);
                }
                Tab::Calls => {
                    tracing::debug!("Configuration response addressed to call log, ignoring");
                }
            },
            ApiEvent::Calls { ticket, result } => {
                self.calls.apply(ticket.generation, result);
                // A failed page drops the list, and with it any open detail
                if self.modal == Some(Modal::CallDetail) && self.calls.detail().is_none() {
                    self.modal = None;
                }
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Session
    // ─────────────────────────────────────────────────────────────────────────

    pub fn is_checking_session(&self) -> bool {
        self.session.state() == SessionState::Checking
    }

    pub fn submit_login(&mut self) {
        if !self.login.is_submittable() {
            return;
        }
        let (username, password) = self.login.values();
        let request = self.session.login(username, password);
        self.dispatch_opt(request);
    }

    fn enter_dashboard(&mut self) {
        self.shell = Shell::default();
        self.mount(self.shell.tab);
        if let Some(user) = self.session.username().map(str::to_owned) {
            self.show_toast(Toast::info(format!("Signed in as {}", user)));
        }
    }

    pub fn logout(&mut self) {
        self.session.logout();
        for tab in Tab::ALL {
            self.unmount(tab);
        }
        self.shell = Shell::default();
        self.modal = None;
        self.login.reset();
        self.show_toast(Toast::info("Signed out"));
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    fn mount(&mut self, tab: Tab) {
        let request = match tab {
            Tab::Configuration => self.config_panel.mount(),
            Tab::Calls => self.calls.mount(),
            Tab::Faq => self.faq.mount(),
        };
        self.dispatch(request);
    }

    fn unmount(&mut self, tab: Tab) {
        match tab {
            Tab::Configuration => self.config_panel.unmount(),
            Tab::Calls => self.calls.unmount(),
            Tab::Faq => self.faq.unmount(),
        }
    }

    /// Switch tabs. The old tab is torn down and the new one fetched fresh.
    pub fn select_tab(&mut self, tab: Tab) {
        let old = self.shell.tab;
        if self.shell.select(tab) {
            tracing::debug!("Switching to {}", tab.label());
            self.unmount(old);
            self.modal = None;
            self.mount(tab);
        }
    }

    /// Re-fetch the current tab from scratch
    pub fn reload(&mut self) {
        self.mount(self.shell.tab);
    }

    /// Activate the highlighted menu row
    pub fn choose_menu_item(&mut self) {
        match self.shell.choose() {
            MenuItem::Open(tab) => self.select_tab(tab),
            MenuItem::SignOut => self.logout(),
        }
    }

    /// Some text field owns the keyboard
    pub fn is_typing(&self) -> bool {
        match self.session.state() {
            SessionState::SignedOut => true,
            SessionState::Checking => false,
            SessionState::SignedIn => match self.shell.tab {
                Tab::Configuration => self.config_panel.is_editing(),
                Tab::Faq => self.faq.is_editing(),
                Tab::Calls => false,
            },
        }
    }

    /// Any request outstanding for what is on screen
    pub fn is_busy(&self) -> bool {
        if self.session.is_login_pending() || self.is_checking_session() {
            return true;
        }
        match self.shell.tab {
            Tab::Configuration => self.config_panel.is_busy(),
            Tab::Faq => self.faq.is_busy(),
            Tab::Calls => self.calls.is_loading(),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Call detail
    // ─────────────────────────────────────────────────────────────────────────

    /// Enter on the call list: open the detail modal or load more
    pub fn activate_call_row(&mut self) {
        let request = self.calls.activate();
        if request.is_some() {
            self.dispatch_opt(request);
        } else if self.calls.detail().is_some() {
            self.detail_scroll.reset();
            self.modal = Some(Modal::CallDetail);
        }
    }

    pub fn close_modal(&mut self) {
        if self.modal.take() == Some(Modal::CallDetail) {
            self.calls.dismiss();
            self.detail_scroll.reset();
        }
    }

    fn recording_url(&self) -> Option<String> {
        self.calls
            .detail()
            .map(|call| call.recording_url.clone())
            .filter(|url| !url.is_empty())
    }

    pub fn open_recording(&mut self) {
        let Some(url) = self.recording_url() else {
            self.show_toast(Toast::failure("No recording for this call"));
            return;
        };
        match handoff::open_url(&url) {
            Ok(()) => self.show_toast(Toast::success("Opening recording")),
            Err(e) => {
                tracing::warn!("Could not open recording: {:#}", e);
                self.show_toast(Toast::failure("Failed to open recording"));
            }
        }
    }

    pub fn copy_recording(&mut self) {
        let Some(url) = self.recording_url() else {
            self.show_toast(Toast::failure("No recording for this call"));
            return;
        };
        match handoff::copy_to_clipboard(&url) {
            Ok(()) => self.show_toast(Toast::success("Recording link copied")),
            Err(e) => {
                tracing::warn!("Clipboard unavailable: {:#}", e);
                self.show_toast(Toast::failure("Failed to copy"));
            }
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Chrome
    // ─────────────────────────────────────────────────────────────────────────

    pub fn next_theme(&mut self) {
        self.theme_kind = self.theme_kind.next();
        self.theme = self.theme_kind.theme();
    }

    pub fn toggle_logs(&mut self) {
        self.show_logs = !self.show_logs;
    }

    pub fn show_toast(&mut self, toast: Toast) {
        self.toast = Some(toast);
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }

    /// Advance spinner frame (called on tick)
    pub fn tick_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }

    pub fn spinner_char(&self) -> char {
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}
