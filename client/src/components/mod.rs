//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components are leaves under the router: a text label used by pages, the
//! development-only strict-mode wrapper the bootstrapper installs, and the
//! catch-all fallback that turns unknown paths into a not-found redirect.

pub mod catch_all;
pub mod label;
pub mod strict_mode;
