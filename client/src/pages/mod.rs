//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! `route_gate` is the only component the router mounts. It asks the
//! navigator what the current path may show and renders one of the pages
//! below, or redirects.

pub mod add_entry;
pub mod dashboard;
pub mod login;
pub mod route_gate;
