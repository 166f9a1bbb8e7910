//! Landing page: the activity list beside the signup form.
//!
//! SYSTEM CONTEXT
//! ==============
//! The only route. It pulls the `ViewContext` from context, kicks off the
//! initial refresh once mounted in the browser, and lays out the two
//! sections.

use leptos::prelude::*;

use crate::components::activity_list::ActivityList;
use crate::components::signup_form::SignupForm;
use crate::flows::ViewContext;
use crate::flows::refresh::refresh;

#[component]
pub fn ActivitiesPage() -> impl IntoView {
    let ctx = expect_context::<ViewContext>();

    // Effects only run in the browser, so the server render keeps the
    // loading text and the client fetches after hydration.
    Effect::new(move || refresh(ctx));

    view! {
        <header>
            <h1>"Mergington High School"</h1>
            <h2>"Extracurricular Activities"</h2>
        </header>
        <main>
            <section id="activities-container">
                <h3>"Available Activities"</h3>
                <ActivityList ctx=ctx/>
            </section>
            <section id="signup-container">
                <h3>"Sign Up for an Activity"</h3>
                <SignupForm ctx=ctx/>
            </section>
        </main>
        <footer>
            <p>"© Mergington High School"</p>
        </footer>
    }
}
