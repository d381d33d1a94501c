//! Route table and path resolution.
//!
//! DESIGN
//! ======
//! Two concrete routes exist. Every other path resolves to a replace-redirect
//! onto the not-found route, so there is no "unhandled path" state. The router
//! in `app` owns matching for the concrete routes; the catch-all fallback
//! calls `resolve` for whatever the router did not claim.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

/// Path of the index view.
pub const INDEX_PATH: &str = "/";
/// Path of the not-found view and target of every catch-all redirect.
pub const NOT_FOUND_PATH: &str = "/404";

const APP_NAME: &str = "TripFlow";

/// A concrete, renderable route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Index,
    NotFound,
}

impl AppRoute {
    /// Canonical absolute path.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Index => INDEX_PATH,
            Self::NotFound => NOT_FOUND_PATH,
        }
    }

    /// Single router segment matched by `StaticSegment`.
    pub const fn segment(self) -> &'static str {
        match self {
            Self::Index => "",
            Self::NotFound => "404",
        }
    }

    /// Document title shown while the route is active.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Index => APP_NAME,
            Self::NotFound => "Page not found | TripFlow",
        }
    }

    /// Match a path against the route table after normalization.
    pub fn from_path(path: &str) -> Option<Self> {
        match normalize(path) {
            INDEX_PATH => Some(Self::Index),
            NOT_FOUND_PATH => Some(Self::NotFound),
            _ => None,
        }
    }
}

/// Outcome of resolving a URL path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// Render the route's view in place.
    Render(AppRoute),
    /// Navigate to `to`; `replace` overwrites the current history entry.
    Redirect { to: AppRoute, replace: bool },
}

/// Resolve a path to the view it renders.
///
/// Unknown paths redirect to [`NOT_FOUND_PATH`] with history replacement so
/// back navigation never returns to the invalid path.
pub fn resolve(path: &str) -> Resolution {
    match AppRoute::from_path(path) {
        Some(route) => Resolution::Render(route),
        None => Resolution::Redirect { to: AppRoute::NotFound, replace: true },
    }
}

/// Strip query, fragment and trailing slashes. The empty path is the root.
fn normalize(path: &str) -> &str {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { INDEX_PATH } else { trimmed }
}
