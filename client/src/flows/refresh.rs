//! Activity list synchronisation: fetch the listing and rebuild the view.

#[cfg(test)]
#[path = "refresh_test.rs"]
mod refresh_test;

use leptos::prelude::*;

use super::ViewContext;
use crate::net::api::ApiError;
use crate::net::types::ActivityCollection;

/// Re-fetch `/activities` and replace the rendered list and selector.
///
/// Returns immediately; the fetch runs as a local task. Failures end up in
/// the list area, never as a panic.
pub fn refresh(ctx: ViewContext) {
    let Some(seq) = ctx.activities.try_update(|s| s.begin_refresh()) else {
        return;
    };

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let result = crate::net::api::fetch_activities().await;
        apply_fetch_result(ctx, seq, result);
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = seq;
}

/// Fold one listing result into the view. Results from a superseded refresh
/// are dropped. A selected activity that the new listing no longer offers is
/// cleared from the form.
pub fn apply_fetch_result(ctx: ViewContext, seq: u64, result: Result<ActivityCollection, ApiError>) {
    match result {
        Ok(collection) => {
            let applied = ctx.activities.try_update(|s| s.apply_loaded(seq, &collection));
            if applied != Some(true) {
                leptos::logging::log!("dropping stale activities refresh #{seq}");
                return;
            }
            let options = ctx.activities.with_untracked(|s| s.options.clone());
            let _ = ctx.signup.try_update(|s| s.retain_activity(&options));
        }
        Err(e) => {
            leptos::logging::error!("Error fetching activities: {e}");
            let _ = ctx.activities.try_update(|s| s.apply_failed(seq));
        }
    }
}
