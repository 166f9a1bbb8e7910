//! User- and timer-triggered flows over the shared view.
//!
//! SYSTEM CONTEXT
//! ==============
//! `refresh` rebuilds the activity list from the backend. `removal` and
//! `signup` each issue one mutating request, apply short-lived feedback, and
//! then schedule a `refresh`. Every flow receives the `ViewContext`
//! explicitly; none of them reaches for ambient globals.
//!
//! CONCURRENCY
//! ===========
//! Flows run as `spawn_local` tasks on the browser event loop and suspend at
//! network calls and fixed timers. Nothing coordinates concurrent flows;
//! stale refresh results are dropped by sequence number in
//! `ActivitiesState`.

pub mod refresh;
pub mod removal;
pub mod signup;

use std::time::Duration;

use leptos::prelude::*;

use crate::state::activities::ActivitiesState;
use crate::state::signup::SignupState;

/// Pause between a successful removal and the refresh that replaces the row.
pub const REMOVAL_REFRESH_DELAY: Duration = Duration::from_millis(300);

/// Pause between a successful signup and the refresh that shows the new row.
pub const SIGNUP_REFRESH_DELAY: Duration = Duration::from_millis(500);

/// How long a signup status message stays visible.
pub const MESSAGE_HIDE_DELAY: Duration = Duration::from_millis(5000);

/// Handles to the shared view state. Built once by the root component and
/// handed to every flow.
#[derive(Clone, Copy, Debug)]
pub struct ViewContext {
    pub activities: RwSignal<ActivitiesState>,
    pub signup: RwSignal<SignupState>,
}

impl ViewContext {
    pub fn new() -> Self {
        Self {
            activities: RwSignal::new(ActivitiesState::default()),
            signup: RwSignal::new(SignupState::default()),
        }
    }
}

impl Default for ViewContext {
    fn default() -> Self {
        Self::new()
    }
}
