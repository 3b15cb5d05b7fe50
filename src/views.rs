// ABOUTME: Static bidirectional mapping between application views and URL paths
// ABOUTME: Provides protected/admin path classification and path normalization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymPulse

//! View-to-path mapping
//!
//! A fixed enumeration of application screens with two derived lookups and
//! classification predicates. Pure and stateless; unknown keys fall back to
//! the dashboard view rather than erroring.

/// Root path of the application
pub const ROOT_PATH: &str = "/";

/// Sentinel returned by [`normalize_app_path`] for unregistered paths
pub const PATH_NOT_FOUND: &str = "*";

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Financial dashboard
    Transactions,
    /// Scheduling
    Agenda,
    /// User management (admin only)
    Users,
    /// Affiliate management (admin only)
    Affiliates,
    /// Workout plans
    Workout,
    /// Food diary
    FoodDiary,
    /// General report
    GeneralReport,
}

/// All registered views, in declaration order
pub const ALL_VIEWS: [View; 7] = [
    View::Transactions,
    View::Agenda,
    View::Users,
    View::Affiliates,
    View::Workout,
    View::FoodDiary,
    View::GeneralReport,
];

impl View {
    /// View identifier as used by the frontend
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            View::Transactions => "transactions",
            View::Agenda => "agenda",
            View::Users => "users",
            View::Affiliates => "affiliates",
            View::Workout => "workout",
            View::FoodDiary => "foodDiary",
            View::GeneralReport => "generalReport",
        }
    }

    /// URL path for this view
    #[must_use]
    pub fn path(self) -> &'static str {
        match self {
            View::Transactions => "/dashboard",
            View::Agenda => "/agenda",
            View::Users => "/usuarios",
            View::Affiliates => "/afiliados",
            View::Workout => "/treino",
            View::FoodDiary => "/diario-alimentar",
            View::GeneralReport => "/relatorio-geral",
        }
    }

    /// Parse a view identifier
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        ALL_VIEWS.into_iter().find(|view| view.as_str() == name)
    }

    /// Find the view registered for a path
    #[must_use]
    pub fn for_path(path: &str) -> Option<Self> {
        ALL_VIEWS.into_iter().find(|view| view.path() == path)
    }

    /// Whether this view is restricted to privileged roles
    #[must_use]
    pub fn is_admin_only(self) -> bool {
        matches!(self, View::Users | View::Affiliates)
    }
}

/// Path for a view identifier, falling back to the dashboard for unknown views
#[must_use]
pub fn path_for_view(name: &str) -> &'static str {
    View::parse(name).unwrap_or(View::Transactions).path()
}

/// View identifier for a path, falling back to `transactions` for unknown paths
#[must_use]
pub fn view_for_path(path: &str) -> &'static str {
    View::for_path(path).unwrap_or(View::Transactions).as_str()
}

/// Whether a view identifier is restricted to privileged roles
#[must_use]
pub fn is_admin_only_view(name: &str) -> bool {
    View::parse(name).is_some_and(View::is_admin_only)
}

/// Whether a path is one of the registered protected paths
#[must_use]
pub fn is_protected_path(path: &str) -> bool {
    View::for_path(path).is_some()
}

/// Return the path unchanged if it is the root or a registered protected
/// path, otherwise the `"*"` not-found sentinel
#[must_use]
pub fn normalize_app_path(path: &str) -> &str {
    if path == ROOT_PATH || is_protected_path(path) {
        path
    } else {
        PATH_NOT_FOUND
    }
}
