//! Client-side route authorization for the bookkee app.
//!
//! This crate owns the routing decisions shared by the `client` UI and its
//! tests: which paths exist, which of them need a signed-in session, and what
//! happens when a navigation is denied. It has no browser dependency; the
//! client plugs its `localStorage` adapter in through [`FlagStore`].
//!
//! ARCHITECTURE
//! ============
//! `session` (flag storage) -> `route` (static table) -> `guard` (decision)
//! -> `navigator` (one navigation attempt end to end). `base` maps between
//! app-relative paths and the prefixed paths the browser sees.

pub mod base;
pub mod error;
pub mod guard;
pub mod navigator;
pub mod route;
pub mod session;

pub use base::{join_base, normalize_base, strip_base};
pub use error::GateError;
pub use guard::{Decision, NavigationGuard, NavigationRequest};
pub use navigator::{Navigator, Outcome, Settled};
pub use route::{
    ADD_ENTRY_PATH, DASHBOARD_PATH, Guard, LOGIN_PATH, LOGOUT_PATH, Resolved, RouteEntry, RouteTable, RouteTarget, ViewId,
    normalize_path,
};
pub use session::{AUTHENTICATED_SENTINEL, FlagStore, MemoryFlagStore, SESSION_FLAG_KEY, SessionState};
