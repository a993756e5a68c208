//! Tests for the route table
//!
//! Validates paths, parameter parsing and the access flags the route guards
//! rely on.

use crate::routes::MainRoute;
use strum::IntoEnumIterator;
use yew_router::Routable;

#[test]
fn paths_match_pages() {
    assert_eq!(MainRoute::Dashboard.to_path(), "/");
    assert_eq!(MainRoute::Login.to_path(), "/login");
    assert_eq!(MainRoute::Videos.to_path(), "/videos");
    assert_eq!(MainRoute::Learning.to_path(), "/learning");
    assert_eq!(MainRoute::Admin.to_path(), "/admin");
    assert_eq!(
        MainRoute::Player {
            id: "v1700000000".to_string()
        }
        .to_path(),
        "/videos/v1700000000"
    );
}

#[test]
fn recognizes_player_id() {
    assert_eq!(
        MainRoute::recognize("/videos/v1"),
        Some(MainRoute::Player {
            id: "v1".to_string()
        })
    );
    assert_eq!(MainRoute::recognize("/videos"), Some(MainRoute::Videos));
}

#[test]
fn unknown_paths_fall_back_to_not_found() {
    assert_eq!(MainRoute::recognize("/nowhere"), Some(MainRoute::NotFound));
    assert_eq!(MainRoute::not_found_route(), Some(MainRoute::NotFound));
}

#[test]
fn only_login_is_public() {
    let public: Vec<_> = MainRoute::iter().filter(MainRoute::is_public).collect();
    assert_eq!(public, [MainRoute::Login]);
}

#[test]
fn only_admin_requires_admin() {
    let admin: Vec<_> = MainRoute::iter()
        .filter(MainRoute::requires_admin)
        .collect();
    assert_eq!(admin, [MainRoute::Admin]);
}
