use super::*;

#[test]
fn literal_paths_map_to_screens() {
    assert_eq!(Route::from_path("/"), Some(Route::Home));
    assert_eq!(Route::from_path("/login"), Some(Route::Login));
    assert_eq!(Route::from_path("/signup"), Some(Route::Signup));
}

#[test]
fn single_trailing_slash_is_tolerated() {
    assert_eq!(Route::from_path("/login/"), Some(Route::Login));
    assert_eq!(Route::from_path("/signup/"), Some(Route::Signup));
}

#[test]
fn unknown_paths_do_not_match() {
    for path in ["", "/logout", "/login/extra", "/login//", "/Login"] {
        assert_eq!(Route::from_path(path), None, "path {path:?}");
    }
}

#[test]
fn path_round_trips_through_from_path() {
    for route in Route::ALL {
        assert_eq!(Route::from_path(route.path()), Some(route));
    }
}

#[test]
fn segments_drop_leading_slash() {
    assert_eq!(Route::Home.segment(), "");
    assert_eq!(Route::Login.segment(), "login");
    assert_eq!(Route::Signup.segment(), "signup");
}
