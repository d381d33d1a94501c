//! Root application component with client-side routing.

use leptos::prelude::*;
use leptos_meta::provide_meta_context;
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::catch_all::CatchAll;
use crate::pages::{index::IndexPage, not_found::NotFoundPage};
use crate::route::AppRoute;

/// Root application component.
///
/// `/` renders the index page and `/404` the not-found page. Anything else
/// falls through to `CatchAll`, which replace-redirects to `/404`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Router>
            <Routes fallback=|| view! { <CatchAll /> }>
                <Route path=StaticSegment(AppRoute::Index.segment()) view=IndexPage />
                <Route path=StaticSegment(AppRoute::NotFound.segment()) view=NotFoundPage />
            </Routes>
        </Router>
    }
}
