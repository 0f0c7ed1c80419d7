// Dashboard state - one module per screen
//
// Everything here is plain synchronous state: operations either change
// local state, or change it and hand back an `ApiRequest` for the dispatcher.
// Responses come back through each module's `apply`. No module here touches
// the terminal or the network, which keeps them testable in isolation.

pub mod call_log;
pub mod config_panel;
pub mod faq;
pub mod field;
pub mod login;
pub mod shell;

pub use call_log::CallLog;
pub use config_panel::{ConfigFocus, ConfigPanel};
pub use faq::{FaqEditor, FaqField};
pub use field::TextField;
pub use login::{LoginFocus, LoginForm};
pub use shell::{MenuItem, Shell, Tab};

/// Monotonic request counter owned by a component.
///
/// Every request a component issues carries the generation current at
/// issue time. Mounting, unmounting, or issuing a newer request advances it,
/// so late responses for superseded requests can be recognized and dropped.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Generation(u64);

impl Generation {
    /// The generation after this one
    pub fn next(self) -> Self {
        Generation(self.0.wrapping_add(1))
    }

    /// Advance in place and return the new value
    pub fn bump(&mut self) -> Self {
        *self = self.next();
        *self
    }
}

/// Request lifecycle for a component's initial load
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadState {
    /// Not mounted yet
    #[default]
    Idle,
    Loading,
    Ready,
    /// Load failed; the message replaces the component's content
    Failed(String),
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_advances() {
        let mut g = Generation::default();
        let first = g.bump();
        let second = g.bump();
        assert_ne!(first, second);
        assert_eq!(g, second);
        assert_eq!(first.next(), second);
    }
}
