//! UI components.

pub mod login_form;
