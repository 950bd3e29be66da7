// 🧭 Routes - Named paths and the static page metadata table
//
// Every screen is reachable through a fixed path. The header reads its
// title/description from PAGE_META; anything not listed falls back to
// DEFAULT_PAGE_META.

use serde::{Deserialize, Serialize};

// ============================================================================
// ROUTE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Route {
    Login,
    ForgotPassword,
    PasswordRequestSent,
    Dashboard,
    RegisterParcel,
    ParcelSmsSuccess,
    Submissions,
    Reconciliation,
    ReconciliationSuccess,
}

impl Route {
    pub const ALL: [Route; 9] = [
        Route::Login,
        Route::ForgotPassword,
        Route::PasswordRequestSent,
        Route::Dashboard,
        Route::RegisterParcel,
        Route::ParcelSmsSuccess,
        Route::Submissions,
        Route::Reconciliation,
        Route::ReconciliationSuccess,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/login",
            Route::ForgotPassword => "/forgot-password",
            Route::PasswordRequestSent => "/password-request-sent",
            Route::Dashboard => "/dashboard",
            Route::RegisterParcel => "/parcels/register",
            Route::ParcelSmsSuccess => "/parcel-sms-success",
            Route::Submissions => "/submissions",
            Route::Reconciliation => "/reconciliation",
            Route::ReconciliationSuccess => "/reconciliation-success",
        }
    }

    /// Resolve a path to a route. A single trailing slash is tolerated.
    pub fn from_path(path: &str) -> Option<Route> {
        let trimmed = if path.len() > 1 {
            path.strip_suffix('/').unwrap_or(path)
        } else {
            path
        };

        Route::ALL.iter().copied().find(|r| r.path() == trimmed)
    }

    /// Auth screens render full-page, without the sidebar/header shell.
    pub fn uses_shell(&self) -> bool {
        !matches!(
            self,
            Route::Login | Route::ForgotPassword | Route::PasswordRequestSent
        )
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

// ============================================================================
// PAGE METADATA
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMeta {
    pub title: &'static str,
    pub description: &'static str,
}

pub const DEFAULT_PAGE_META: PageMeta = PageMeta {
    title: "Parcel Management",
    description: "Manage parcel operations",
};

pub const PAGE_META: &[(&str, PageMeta)] = &[
    (
        "/dashboard",
        PageMeta {
            title: "Dashboard",
            description: "Overview of today's parcel activity",
        },
    ),
    (
        "/parcels/register",
        PageMeta {
            title: "Register Parcel",
            description: "Capture parcel details, delivery costs and proof of delivery",
        },
    ),
    (
        "/parcel-sms-success",
        PageMeta {
            title: "Parcel Registered",
            description: "The receiver has been notified by SMS",
        },
    ),
    (
        "/submissions",
        PageMeta {
            title: "Review Submissions",
            description: "Check parcels submitted by intake staff",
        },
    ),
    (
        "/reconciliation",
        PageMeta {
            title: "Rider Reconciliation",
            description: "Confirm cash collected against deliveries made",
        },
    ),
    (
        "/reconciliation-success",
        PageMeta {
            title: "Reconciliation Confirmed",
            description: "The rider's figures have been signed off",
        },
    ),
];

/// Look up the header text for a path. Unknown paths get the default pair.
pub fn page_meta(path: &str) -> PageMeta {
    PAGE_META
        .iter()
        .find(|(p, _)| *p == path)
        .map(|(_, meta)| *meta)
        .unwrap_or(DEFAULT_PAGE_META)
}

// ============================================================================
// TESTS
// ============================================================================
