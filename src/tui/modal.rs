// Modal system for TUI overlays
//
// Self-contained modal dialogs that handle their own input and return actions.
// App just holds Option<Modal>, input routing acts on returned ModalAction.

use crossterm::event::KeyCode;

/// Actions returned by modal input handling
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalAction {
    /// Input consumed, no state change needed
    None,
    /// Close the modal
    Close,
    ScrollUp,
    ScrollDown,
    ScrollTop,
    ScrollBottom,
    PageUp,
    PageDown,
    /// Hand the recording URL to the system opener
    OpenRecording,
    /// Copy the recording URL
    CopyRecording,
}

/// Available modal types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// Help overlay - shows keyboard shortcuts
    Help,
    /// Call detail; the call itself is `CallLog::detail()`
    CallDetail,
}

impl Modal {
    /// Handle keyboard input, return action for caller to execute
    pub fn handle_input(&self, key: KeyCode) -> ModalAction {
        match self {
            Modal::Help => match key {
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => ModalAction::Close,
                _ => ModalAction::None,
            },
            Modal::CallDetail => match key {
                KeyCode::Esc | KeyCode::Char('q') => ModalAction::Close,
                KeyCode::Up | KeyCode::Char('k') => ModalAction::ScrollUp,
                KeyCode::Down | KeyCode::Char('j') => ModalAction::ScrollDown,
                KeyCode::PageUp => ModalAction::PageUp,
                KeyCode::PageDown | KeyCode::Char(' ') => ModalAction::PageDown,
                KeyCode::Home | KeyCode::Char('g') => ModalAction::ScrollTop,
                KeyCode::End | KeyCode::Char('G') => ModalAction::ScrollBottom,
                KeyCode::Char('o') => ModalAction::OpenRecording,
                KeyCode::Char('y') => ModalAction::CopyRecording,
                _ => ModalAction::None,
            },
        }
    }
}
