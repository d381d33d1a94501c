use super::*;

// =============================================================
// resolve
// =============================================================

#[test]
fn resolve_root_renders_index() {
    assert_eq!(resolve("/"), Resolution::Render(AppRoute::Index));
}

#[test]
fn resolve_not_found_path_renders_without_redirect() {
    assert_eq!(resolve("/404"), Resolution::Render(AppRoute::NotFound));
}

#[test]
fn resolve_unknown_paths_replace_redirect_to_not_found() {
    for path in ["/trips", "/trips/42", "/index.html", "/4040", "/404/extra", "/ "] {
        assert_eq!(
            resolve(path),
            Resolution::Redirect { to: AppRoute::NotFound, replace: true },
            "path {path:?} should redirect"
        );
    }
}

#[test]
fn resolve_redirect_target_is_terminal() {
    let Resolution::Redirect { to, .. } = resolve("/nowhere") else {
        panic!("expected a redirect");
    };
    assert_eq!(resolve(to.path()), Resolution::Render(AppRoute::NotFound));
}

// =============================================================
// normalization
// =============================================================

#[test]
fn empty_path_is_root() {
    assert_eq!(AppRoute::from_path(""), Some(AppRoute::Index));
}

#[test]
fn trailing_slash_is_ignored() {
    assert_eq!(AppRoute::from_path("/404/"), Some(AppRoute::NotFound));
    assert_eq!(AppRoute::from_path("//"), Some(AppRoute::Index));
}

#[test]
fn query_and_fragment_are_ignored() {
    assert_eq!(AppRoute::from_path("/?ref=home"), Some(AppRoute::Index));
    assert_eq!(AppRoute::from_path("/404#top"), Some(AppRoute::NotFound));
    assert_eq!(AppRoute::from_path("/trips?x=1"), None);
}

// =============================================================
// AppRoute
// =============================================================

#[test]
fn route_paths_round_trip_through_from_path() {
    for route in [AppRoute::Index, AppRoute::NotFound] {
        assert_eq!(AppRoute::from_path(route.path()), Some(route));
    }
}

#[test]
fn route_segments_match_paths() {
    assert_eq!(AppRoute::Index.segment(), "");
    assert_eq!(AppRoute::NotFound.segment(), "404");
    assert_eq!(format!("/{}", AppRoute::NotFound.segment()), NOT_FOUND_PATH);
}

#[test]
fn route_titles_name_the_app() {
    assert_eq!(AppRoute::Index.title(), "TripFlow");
    assert!(AppRoute::NotFound.title().contains("TripFlow"));
    assert_ne!(AppRoute::Index.title(), AppRoute::NotFound.title());
}
