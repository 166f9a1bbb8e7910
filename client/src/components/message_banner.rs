//! `#message`: signup result text, styled `success`/`error`, toggled with `hidden`.

use leptos::prelude::*;

use crate::flows::ViewContext;
use crate::state::signup::SignupState;

#[component]
pub fn MessageBanner(ctx: ViewContext) -> impl IntoView {
    view! {
        <div id="message" class=move || ctx.signup.with(SignupState::message_class)>
            {move || ctx.signup.with(SignupState::message_text)}
        </div>
    }
}
