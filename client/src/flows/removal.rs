//! Participant removal: unregister, dim the row, then refresh.

#[cfg(test)]
#[path = "removal_test.rs"]
mod removal_test;

use crate::net::api::ApiError;
use crate::state::activities::ParticipantKey;

use super::ViewContext;

/// Alert text for any failed removal.
pub const REMOVAL_FAILED_TEXT: &str = "Failed to remove participant";

/// What the view does once the unregister call settles.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RemovalOutcome {
    /// Dim the row now and refresh after `REMOVAL_REFRESH_DELAY`.
    Removed,
    /// Show the blocking alert; leave the list as it is.
    Failed,
}

pub fn removal_outcome(result: &Result<(), ApiError>) -> RemovalOutcome {
    match result {
        Ok(()) => RemovalOutcome::Removed,
        Err(_) => RemovalOutcome::Failed,
    }
}

/// Handle activation of a row's removal control.
///
/// `key` is the (activity, email) pair the row was rendered with.
pub fn remove_participant(ctx: ViewContext, key: ParticipantKey) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use leptos::prelude::*;

        let result = crate::net::api::unregister(&key.activity, &key.email).await;
        match &result {
            Err(e @ ApiError::Transport(_)) => leptos::logging::error!("Error removing participant: {e}"),
            Err(e) => leptos::logging::warn!("unregister {} from {} rejected: {e}", key.email, key.activity),
            Ok(()) => {}
        }

        match removal_outcome(&result) {
            RemovalOutcome::Removed => {
                let _ = ctx.activities.try_update(|s| s.mark_removing(key));
                gloo_timers::future::sleep(super::REMOVAL_REFRESH_DELAY).await;
                super::refresh::refresh(ctx);
            }
            RemovalOutcome::Failed => alert(REMOVAL_FAILED_TEXT),
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = (ctx, key);
}

#[cfg(feature = "hydrate")]
fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}
