//! Signup submission: post the form, show the result, refresh on success.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use crate::net::api::{ApiError, SignupResponse};
use crate::state::signup::StatusMessage;

use super::ViewContext;

/// Shown when the backend rejects a signup without a `detail`.
pub const GENERIC_ERROR_TEXT: &str = "An error occurred";

/// Shown when the signup request itself fails.
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";

/// How the view reacts to a settled signup request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupFeedback {
    pub message: StatusMessage,
    /// Reset the form and schedule a refresh.
    pub succeeded: bool,
}

pub fn signup_feedback(result: &Result<SignupResponse, ApiError>) -> SignupFeedback {
    match result {
        Ok(resp) if resp.ok => SignupFeedback {
            message: StatusMessage::success(resp.message.clone().unwrap_or_default()),
            succeeded: true,
        },
        Ok(resp) => SignupFeedback {
            message: StatusMessage::error(resp.detail.clone().unwrap_or_else(|| GENERIC_ERROR_TEXT.to_owned())),
            succeeded: false,
        },
        Err(_) => SignupFeedback { message: StatusMessage::error(SIGNUP_FAILED_TEXT), succeeded: false },
    }
}

/// Submit the current form values.
///
/// On success the form is cleared and a refresh follows after
/// `SIGNUP_REFRESH_DELAY`. Whatever the outcome, the message is hidden again
/// after `MESSAGE_HIDE_DELAY`.
pub fn submit_signup(ctx: ViewContext) {
    #[cfg(feature = "hydrate")]
    {
        use leptos::prelude::*;

        let Some((activity, email)) = ctx.signup.try_with_untracked(|s| (s.activity.clone(), s.email.clone())) else {
            return;
        };

        leptos::task::spawn_local(async move {
            let result = crate::net::api::signup(&activity, &email).await;
            if let Err(e) = &result {
                leptos::logging::error!("Error signing up: {e}");
            }

            let SignupFeedback { message, succeeded } = signup_feedback(&result);
            let Some(seq) = ctx.signup.try_update(|s| {
                if succeeded {
                    s.reset_form();
                }
                s.show_message(message)
            }) else {
                return;
            };

            if succeeded {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::sleep(super::SIGNUP_REFRESH_DELAY).await;
                    super::refresh::refresh(ctx);
                });
            }

            gloo_timers::future::sleep(super::MESSAGE_HIDE_DELAY).await;
            let _ = ctx.signup.try_update(|s| s.hide_message(seq));
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = ctx;
}
