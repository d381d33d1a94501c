//! Development-only render check.
//!
//! DESIGN
//! ======
//! With the check enabled the children are rendered twice. The first pass is
//! mounted into a detached scratch element and unmounted again right away,
//! so every component runs once more, including the ones behind reactive
//! boundaries such as the route outlet. Its cleanups run before the real
//! tree is built. A component whose construction has side effects (listeners
//! that are not registered with `on_cleanup`, global writes, logging that
//! should happen once) shows up as duplicated behavior during development.
//!
//! The check is a diagnostic aid only. Release builds leave it disabled and
//! nothing relies on it for correctness.

use leptos::prelude::*;

/// Wraps `children`, optionally rendering them once more into a detached
/// element and discarding the result.
#[component]
pub fn StrictMode(#[prop(optional)] enabled: bool, children: ChildrenFn) -> impl IntoView {
    if enabled {
        rehearse(&children);
    }
    children()
}

#[cfg(feature = "csr")]
fn rehearse(children: &ChildrenFn) {
    use wasm_bindgen::JsCast as _;

    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        log::warn!("strict mode: no document, skipping rehearsal render");
        return;
    };
    let scratch = match document.create_element("div") {
        Ok(element) => element.unchecked_into::<web_sys::HtmlElement>(),
        Err(err) => {
            log::warn!("strict mode: cannot create scratch element: {err:?}");
            return;
        }
    };

    let children = children.clone();
    let handle = leptos::mount::mount_to(scratch, move || children());
    drop(handle);
    log::debug!("strict mode: discarded rehearsal render");
}

#[cfg(not(feature = "csr"))]
fn rehearse(children: &ChildrenFn) {
    use leptos::reactive::owner::Owner;

    let scratch = Owner::new();
    let discarded = scratch.with(|| children());
    drop(discarded);
    scratch.cleanup();
    log::debug!("strict mode: discarded rehearsal build");
}
