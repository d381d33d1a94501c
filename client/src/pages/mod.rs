//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page is the view for one `AppRoute` and delegates rendering details
//! to `components`.

pub mod index;
pub mod not_found;
