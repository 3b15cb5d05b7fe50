// ABOUTME: Unit tests for the view-to-path mapping
// ABOUTME: Validates lookups, fallbacks, admin predicates, and path normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

#![allow(clippy::unwrap_used, clippy::expect_used)]
#![allow(missing_docs)]

use gympulse::views::{
    is_admin_only_view, is_protected_path, normalize_app_path, path_for_view, view_for_path,
    View, ALL_VIEWS, PATH_NOT_FOUND, ROOT_PATH,
};

#[test]
fn path_for_view_resolves_registered_views() {
    assert_eq!(path_for_view("foodDiary"), "/diario-alimentar");
    assert_eq!(path_for_view("transactions"), "/dashboard");
    assert_eq!(path_for_view("agenda"), "/agenda");
    assert_eq!(path_for_view("users"), "/usuarios");
    assert_eq!(path_for_view("affiliates"), "/afiliados");
    assert_eq!(path_for_view("workout"), "/treino");
    assert_eq!(path_for_view("generalReport"), "/relatorio-geral");
}

#[test]
fn path_for_unknown_view_falls_back_to_dashboard() {
    assert_eq!(path_for_view("unknown"), "/dashboard");
    assert_eq!(path_for_view(""), "/dashboard");
}

#[test]
fn view_for_path_resolves_registered_paths() {
    assert_eq!(view_for_path("/usuarios"), "users");
    assert_eq!(view_for_path("/diario-alimentar"), "foodDiary");
    assert_eq!(view_for_path("/dashboard"), "transactions");
}

#[test]
fn view_for_unknown_path_falls_back_to_transactions() {
    assert_eq!(view_for_path("/nope"), "transactions");
}

#[test]
fn mapping_is_bijective_over_registered_views() {
    for view in ALL_VIEWS {
        assert_eq!(View::parse(view.as_str()), Some(view));
        assert_eq!(View::for_path(view.path()), Some(view));
        assert_eq!(view_for_path(path_for_view(view.as_str())), view.as_str());
    }
}

#[test]
fn only_users_and_affiliates_are_admin_only() {
    assert!(is_admin_only_view("users"));
    assert!(is_admin_only_view("affiliates"));

    for view in ALL_VIEWS {
        let expected = matches!(view, View::Users | View::Affiliates);
        assert_eq!(is_admin_only_view(view.as_str()), expected);
    }
    assert!(!is_admin_only_view("unknown"));
}

#[test]
fn protected_paths_are_exactly_the_registered_ones() {
    for view in ALL_VIEWS {
        assert!(is_protected_path(view.path()));
    }
    assert!(!is_protected_path("/"));
    assert!(!is_protected_path("/login"));
}

#[test]
fn normalize_app_path_keeps_root_and_protected_paths() {
    assert_eq!(normalize_app_path("/treino"), "/treino");
    assert_eq!(normalize_app_path(ROOT_PATH), "/");
    assert_eq!(normalize_app_path("/diario-alimentar"), "/diario-alimentar");
}

#[test]
fn normalize_app_path_rejects_unregistered_paths() {
    assert_eq!(normalize_app_path("/not-a-route"), PATH_NOT_FOUND);
    assert_eq!(normalize_app_path(""), "*");
    assert_eq!(normalize_app_path("/dashboard/extra"), "*");
}
