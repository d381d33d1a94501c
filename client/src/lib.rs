//! # client
//!
//! Leptos + WASM single-page frontend for TripFlow.
//!
//! The crate is a scaffold: `boot` mounts the component tree under the
//! host page's `#root` element, and `app` routes the URL path to the index
//! page, the not-found page, or a history-replacing redirect to `/404`.
//! `route` holds the route table and the pure path resolution the catch-all
//! relies on.

pub mod app;
pub mod boot;
pub mod components;
pub mod pages;
pub mod route;
