//! Reactive application state.
//!
//! DESIGN
//! ======
//! Plain structs with pure mutation methods. Components wrap them in
//! `RwSignal`s (see `flows::ViewContext`), which keeps every state transition
//! testable without a browser.

pub mod activities;
pub mod signup;
