//! Root application component with routing and the shared view context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::flows::ViewContext;
use crate::pages::activities::ActivitiesPage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Builds the one `ViewContext` every flow shares and provides it to the
/// page tree.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_context(ViewContext::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/activities.css"/>
        <Title text="Mergington High School Activities"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ActivitiesPage/>
            </Routes>
        </Router>
    }
}
