// Login form - two fields and a submit
//
// Holds only what is typed. Submitting hands the values to the session,
// which owns the request and the resulting error message.

use super::TextField;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginFocus {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: TextField,
    pub password: TextField,
    pub focus: LoginFocus,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn focused_mut(&mut self) -> &mut TextField {
        match self.focus {
            LoginFocus::Username => &mut self.username,
            LoginFocus::Password => &mut self.password,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginFocus::Username => LoginFocus::Password,
            LoginFocus::Password => LoginFocus::Username,
        };
    }

    /// Both fields have something in them
    pub fn is_submittable(&self) -> bool {
        !self.username.value().trim().is_empty() && !self.password.is_empty()
    }

    /// Values to submit, exactly as typed
    pub fn values(&self) -> (String, String) {
        (
            self.username.value().to_string(),
            self.password.value().to_string(),
        )
    }

    /// Masked password for display
    pub fn masked_password(&self) -> String {
        "•".repeat(self.password.value().chars().count())
    }

    /// Forget the password after a failed attempt, keep the username
    pub fn clear_password(&mut self) {
        self.password.clear();
        self.focus = LoginFocus::Password;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
