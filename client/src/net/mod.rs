//! Hosted provider access: identity sign-in and the entry document store.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ProviderError>`; pages turn failures into a
//! message line instead of panicking.

pub mod error;
pub mod identity;
pub mod ledger;
pub mod types;
