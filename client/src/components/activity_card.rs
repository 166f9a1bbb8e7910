//! Card for one activity, with its participant roster and removal controls.
//!
//! DESIGN
//! ======
//! Each participant row carries `data-activity` / `data-email` attributes and
//! its removal control is bound to that same pair, so a click always targets
//! exactly the row that was rendered.

#[cfg(test)]
#[path = "activity_card_test.rs"]
mod activity_card_test;

use leptos::prelude::*;

use crate::flows::ViewContext;
use crate::flows::removal::remove_participant;
use crate::state::activities::{ActivityCard, ParticipantKey};

/// Placeholder text for an activity with an empty roster.
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

/// Inline style applied to a row whose removal has been accepted.
const REMOVING_ROW_STYLE: &str = "opacity: 0.5; text-decoration: line-through;";

fn row_style(removing: bool) -> &'static str {
    if removing { REMOVING_ROW_STYLE } else { "" }
}

#[component]
pub fn ActivityCardView(card: ActivityCard, ctx: ViewContext) -> impl IntoView {
    let availability = card.availability_label();
    let participants = if card.participants.is_empty() {
        view! {
            <p class="no-participants">
                <em>{NO_PARTICIPANTS_TEXT}</em>
            </p>
        }
        .into_any()
    } else {
        view! {
            <ul class="participants-list">
                {card
                    .participants
                    .into_iter()
                    .map(|participant| view! { <ParticipantRow participant=participant ctx=ctx/> })
                    .collect::<Vec<_>>()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {card.schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
            <div class="participants-section">
                <strong>"Current Participants:"</strong>
                {participants}
            </div>
        </div>
    }
}

#[component]
fn ParticipantRow(participant: ParticipantKey, ctx: ViewContext) -> impl IntoView {
    let data_activity = participant.activity.clone();
    let data_email = participant.email.clone();
    let label = participant.email.clone();
    let removing = {
        let participant = participant.clone();
        move || ctx.activities.with(|s| s.is_removing(&participant))
    };
    let on_remove = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        remove_participant(ctx, participant.clone());
    };

    view! {
        <li
            class="participant-item"
            data-activity=data_activity
            data-email=data_email
            style=move || row_style(removing())
        >
            <span>{label}</span>
            <button class="delete-btn" title="Remove participant" on:click=on_remove>
                "✕"
            </button>
        </li>
    }
}
