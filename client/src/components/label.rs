//! Plain text label.

use leptos::prelude::*;

/// Renders `input` verbatim as visible text.
#[component]
pub fn Label(#[prop(into)] input: String) -> impl IntoView {
    view! { <span class="label">{input}</span> }
}
