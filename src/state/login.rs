#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::User;

/// Local state for the login form: both field values, the in-flight flag,
/// the stored fetch failure, and the last fetched user.
///
/// Held in a single `RwSignal` by the form component; never reset
/// automatically. `error` keeps the failure value as delivered — the UI only
/// consumes its presence, and the component never clears it.
#[derive(Clone, Debug, Default)]
pub struct LoginState {
    pub username: String,
    pub password: String,
    pub loading: bool,
    pub error: Option<String>,
    pub user: Option<User>,
}

impl LoginState {
    /// Whether the submit button is disabled: only when both fields are
    /// empty. Either field being non-empty enables it, and `loading` plays
    /// no part in the guard.
    pub fn submit_disabled(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }

    /// Label shown on the submit button.
    pub fn submit_label(&self) -> &'static str {
        if self.loading { "Loading..." } else { "Login" }
    }

    /// Name rendered above the form; empty until a fetch succeeds.
    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("", |u| u.name.as_str())
    }

    /// Whether the error text is visible.
    pub fn error_visible(&self) -> bool {
        self.error.is_some()
    }

    /// Mark a submit as in flight.
    pub fn begin_submit(&mut self) {
        self.loading = true;
    }

    /// Apply the outcome of the fetch: store the user on success, store the
    /// failure on error (success leaves an earlier failure in place), and
    /// clear the in-flight flag either way.
    pub fn resolve(&mut self, outcome: Result<User, String>) {
        match outcome {
            Ok(user) => self.user = Some(user),
            Err(e) => self.error = Some(e),
        }
        self.loading = false;
    }
}
