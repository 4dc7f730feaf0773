//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`auth`, `ledger`, `session`) so pages depend on
//! small focused models. `session` is the persisted route-guard flag; `auth`
//! is the provider identity the network layer needs.

pub mod auth;
pub mod ledger;
pub mod session;
