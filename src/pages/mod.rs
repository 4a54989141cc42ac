//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (signals, request lifetime,
//! navigation) and delegates outcome handling to pure functions that the
//! page tests drive directly.

pub mod home;
pub mod login;
pub mod signup;
