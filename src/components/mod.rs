//! Reusable view components shared by pages.

pub mod form_field;
pub mod require_session;
pub mod transition_shell;
