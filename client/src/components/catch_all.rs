//! Router fallback for paths the route table does not claim.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::pages::{index::IndexPage, not_found::NotFoundPage};
use crate::route::{self, AppRoute, Resolution};

/// Resolves the unmatched path and either redirects to the not-found route,
/// replacing the history entry, or renders the page a normalized path maps to.
#[component]
pub fn CatchAll() -> impl IntoView {
    let path = use_location().pathname.get_untracked();

    match route::resolve(&path) {
        Resolution::Redirect { to, replace } => {
            log::info!("no route for {path:?}, redirecting to {}", to.path());
            let options = NavigateOptions { replace, ..NavigateOptions::default() };
            view! { <Redirect path=to.path() options=options /> }.into_any()
        }
        Resolution::Render(AppRoute::Index) => view! { <IndexPage /> }.into_any(),
        Resolution::Render(AppRoute::NotFound) => view! { <NotFoundPage /> }.into_any(),
    }
}
