//! The `#activities-list` container: loading text, failure text, or cards.

use leptos::prelude::*;

use crate::components::activity_card::ActivityCardView;
use crate::flows::ViewContext;
use crate::state::activities::{LOAD_FAILED_TEXT, LOADING_TEXT, ListStatus};

#[component]
pub fn ActivityList(ctx: ViewContext) -> impl IntoView {
    let status = Memo::new(move |_| ctx.activities.with(|s| s.status));
    let cards = Memo::new(move |_| ctx.activities.with(|s| s.cards.clone()));

    view! {
        <div id="activities-list">
            {move || match status.get() {
                ListStatus::Loading => view! { <p>{LOADING_TEXT}</p> }.into_any(),
                ListStatus::Failed => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_any(),
                ListStatus::Ready => {
                    cards
                        .get()
                        .into_iter()
                        .map(|card| view! { <ActivityCardView card=card ctx=ctx/> })
                        .collect::<Vec<_>>()
                        .into_any()
                }
            }}
        </div>
    }
}
