//! Signup form: email input, activity selector, and submit button.
//!
//! The selector's displayed choice is always derived from
//! `SignupState::activity`: both the select value and each option's
//! `selected` property re-evaluate when the option list is rebuilt.

use leptos::prelude::*;

use crate::components::message_banner::MessageBanner;
use crate::flows::ViewContext;
use crate::flows::signup::submit_signup;

/// Label of the empty first option of the activity selector.
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

#[component]
pub fn SignupForm(ctx: ViewContext) -> impl IntoView {
    let options = Memo::new(move |_| ctx.activities.with(|s| s.options.clone()));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_signup(ctx);
    };

    view! {
        <form id="signup-form" on:submit=on_submit>
            <div class="form-group">
                <label for="email">"Student Email:"</label>
                <input
                    type="email"
                    id="email"
                    required
                    placeholder="your-email@mergington.edu"
                    prop:value=move || ctx.signup.with(|s| s.email.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.signup.update(|s| s.email = value);
                    }
                />
            </div>
            <div class="form-group">
                <label for="activity">"Select Activity:"</label>
                <select
                    id="activity"
                    required
                    prop:value=move || {
                        options.track();
                        ctx.signup.with(|s| s.activity.clone())
                    }
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        ctx.signup.update(|s| s.activity = value);
                    }
                >
                    <option value="">{SELECT_PLACEHOLDER}</option>
                    {move || {
                        options
                            .get()
                            .into_iter()
                            .map(|name| {
                                let value = name.clone();
                                let chosen = name.clone();
                                let selected = move || ctx.signup.with(|s| s.activity == chosen);
                                view! { <option value=value prop:selected=selected>{name}</option> }
                            })
                            .collect::<Vec<_>>()
                    }}
                </select>
            </div>
            <button type="submit">"Sign Up"</button>
        </form>
        <MessageBanner ctx=ctx/>
    }
}
