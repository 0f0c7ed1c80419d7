// Components module - reusable UI building blocks
//
// Shell components are rendered on every screen:
// - Title bar: App name, current tab, busy spinner
// - Status bar: Signed-in user, backend, key hints
// - Logs panel: System log footer
// - Menu: Slide-in tab switcher
//
// Text input and formatters are shared by the views.

pub mod formatters;
pub mod logs_panel;
pub mod menu;
pub mod status_bar;
pub mod text_input;
pub mod title_bar;
pub mod toast;

pub use text_input::TextInput;
pub use toast::Toast;

pub use formatters::{format_call_time, format_cost, format_duration, truncate, wrap_text};
