//! Static route table.
//!
//! The table is fixed at startup. Lookup is pure: [`RouteTable::resolve`]
//! never touches session state, it only reports which view a path binds to
//! and whether a guard has to run first.

#[cfg(test)]
#[path = "route_test.rs"]
mod route_test;

use std::borrow::Cow;
use std::collections::HashSet;

use crate::error::GateError;

/// Default route and redirect target for denied navigation.
pub const LOGIN_PATH: &str = "/";
pub const DASHBOARD_PATH: &str = "/dashboard";
pub const ADD_ENTRY_PATH: &str = "/add-accounting";
pub const LOGOUT_PATH: &str = "/logout";

/// Views the app can render.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ViewId {
    LoginPage,
    DashboardPage,
    AddAccounting,
}

impl ViewId {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::LoginPage => "LoginPage",
            Self::DashboardPage => "DashboardPage",
            Self::AddAccounting => "AddAccounting",
        }
    }
}

/// Checks run before a route is entered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Guard {
    /// Requires the session flag to hold the authenticated sentinel.
    RequireSession,
}

/// What entering a route does.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteTarget {
    /// Render a view.
    View(ViewId),
    /// Clear the session flag and redirect to the given path.
    Logout { redirect_to: &'static str },
}

/// One immutable row of the route table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    pub path: &'static str,
    pub target: RouteTarget,
    pub guard: Option<Guard>,
}

impl RouteEntry {
    #[must_use]
    pub const fn view(path: &'static str, view: ViewId) -> Self {
        Self { path, target: RouteTarget::View(view), guard: None }
    }

    #[must_use]
    pub const fn guarded(path: &'static str, view: ViewId, guard: Guard) -> Self {
        Self { path, target: RouteTarget::View(view), guard: Some(guard) }
    }

    #[must_use]
    pub const fn logout(path: &'static str, redirect_to: &'static str) -> Self {
        Self { path, target: RouteTarget::Logout { redirect_to }, guard: None }
    }

    /// View bound to this entry, if it renders one.
    #[must_use]
    pub fn view_id(&self) -> Option<ViewId> {
        match self.target {
            RouteTarget::View(view) => Some(view),
            RouteTarget::Logout { .. } => None,
        }
    }
}

/// Result of a table lookup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolved<'a> {
    Route(&'a RouteEntry),
    /// Undeclared path; the caller should redirect to `redirect_to`.
    Fallback { redirect_to: &'a str },
}

#[derive(Clone, Debug)]
pub struct RouteTable {
    entries: Vec<RouteEntry>,
    fallback: &'static str,
}

impl RouteTable {
    /// Build a table, rejecting malformed or duplicate paths.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::InvalidPath`] for a path without a leading `/`,
    /// [`GateError::DuplicateRoute`] when two entries normalize to the same
    /// path, and [`GateError::FallbackUnroutable`] when `fallback` does not
    /// name an unguarded view route.
    pub fn new(entries: Vec<RouteEntry>, fallback: &'static str) -> Result<Self, GateError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if !entry.path.starts_with('/') {
                return Err(GateError::InvalidPath(entry.path.to_owned()));
            }
            let normalized = normalize_path(entry.path).into_owned();
            if !seen.insert(normalized.clone()) {
                return Err(GateError::DuplicateRoute(normalized));
            }
        }

        let fallback_ok = entries.iter().any(|entry| {
            normalize_path(entry.path) == normalize_path(fallback)
                && entry.guard.is_none()
                && entry.view_id().is_some()
        });
        if !fallback_ok {
            return Err(GateError::FallbackUnroutable(fallback.to_owned()));
        }

        Ok(Self { entries, fallback })
    }

    /// The bookkee route table: login at `/`, guarded dashboard and entry
    /// form, and a logout route that returns to login.
    #[must_use]
    pub fn bookkee() -> Self {
        Self {
            entries: vec![
                RouteEntry::view(LOGIN_PATH, ViewId::LoginPage),
                RouteEntry::guarded(DASHBOARD_PATH, ViewId::DashboardPage, Guard::RequireSession),
                RouteEntry::guarded(ADD_ENTRY_PATH, ViewId::AddAccounting, Guard::RequireSession),
                RouteEntry::logout(LOGOUT_PATH, LOGIN_PATH),
            ],
            fallback: LOGIN_PATH,
        }
    }

    /// Look up `path` after normalization.
    #[must_use]
    pub fn resolve(&self, path: &str) -> Resolved<'_> {
        let wanted = normalize_path(path);
        self.entries
            .iter()
            .find(|entry| normalize_path(entry.path) == wanted)
            .map_or(Resolved::Fallback { redirect_to: self.fallback }, Resolved::Route)
    }

    /// Whether `path` resolves to a logout route.
    #[must_use]
    pub fn is_logout(&self, path: &str) -> bool {
        matches!(
            self.resolve(path),
            Resolved::Route(RouteEntry { target: RouteTarget::Logout { .. }, .. })
        )
    }

    #[must_use]
    pub fn fallback(&self) -> &'static str {
        self.fallback
    }

    pub fn entries(&self) -> impl Iterator<Item = &RouteEntry> {
        self.entries.iter()
    }
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::bookkee()
    }
}

/// Canonical form of a navigation path.
///
/// Drops any query string or fragment, strips trailing slashes, and maps the
/// empty path to `/`.
#[must_use]
pub fn normalize_path(raw: &str) -> Cow<'_, str> {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = raw[..end].trim_end_matches('/');
    if path.is_empty() {
        return Cow::Borrowed("/");
    }
    if path.starts_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("/{path}"))
    }
}
