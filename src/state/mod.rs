//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`form`, `session`, `transition`) and kept free of
//! Leptos types so pages can wrap it in signals and tests can drive it
//! directly.

pub mod form;
pub mod session;
pub mod transition;
