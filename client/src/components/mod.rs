//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are pure functions of their props; pages own state and hand
//! them callbacks plus a shared disabled signal.

pub mod button;
pub mod loader_overlay;
pub mod pricing_card;
pub mod timestamp;
