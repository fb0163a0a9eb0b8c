//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `loader`, `plans`) so components depend
//! on small focused models. `auth` and `loader` are provided as `RwSignal`
//! contexts by `App`; `plans` is constant data.

pub mod auth;
pub mod loader;
pub mod plans;
