//! Navigation guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! The guard is a pure decision over the session flag. It never navigates by
//! itself: callers act on the returned [`Decision`], or hand in a one-shot
//! continuation through [`NavigationGuard::before_enter`].

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::route::{Guard, LOGIN_PATH};
use crate::session::{FlagStore, SessionState};

/// Outcome of evaluating a guard for one navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Proceed to the requested route.
    Allow,
    /// Abandon the request and navigate to the given path instead.
    Redirect(String),
}

impl Decision {
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// A single navigation attempt, alive for one guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub to: String,
    pub from: Option<String>,
    /// Monotonic stamp assigned by the navigator; newer requests supersede older ones.
    pub seq: u64,
}

impl NavigationRequest {
    pub fn new(to: impl Into<String>, from: Option<String>, seq: u64) -> Self {
        Self { to: to.into(), from, seq }
    }
}

/// Evaluates route guards against the session flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavigationGuard {
    login_path: &'static str,
}

impl Default for NavigationGuard {
    fn default() -> Self {
        Self::new(LOGIN_PATH)
    }
}

impl NavigationGuard {
    #[must_use]
    pub const fn new(login_path: &'static str) -> Self {
        Self { login_path }
    }

    #[must_use]
    pub fn login_path(&self) -> &'static str {
        self.login_path
    }

    /// Decide whether a guarded route may be entered. Reads the flag once.
    pub fn decide<S: FlagStore>(&self, guard: Guard, session: &SessionState<S>) -> Decision {
        match guard {
            Guard::RequireSession if session.is_authenticated() => Decision::Allow,
            Guard::RequireSession => Decision::Redirect(self.login_path.to_owned()),
        }
    }

    /// Continuation form of [`Self::decide`].
    ///
    /// `next` receives `None` to proceed or `Some(path)` to redirect, and is
    /// called exactly once before this returns.
    pub fn before_enter<S, F>(
        &self,
        guard: Guard,
        request: &NavigationRequest,
        session: &SessionState<S>,
        next: F,
    ) -> Decision
    where
        S: FlagStore,
        F: FnOnce(Option<&str>),
    {
        let decision = self.decide(guard, session);
        match &decision {
            Decision::Allow => next(None),
            Decision::Redirect(path) => {
                log::debug!(
                    "navigation #{} to {} denied (from {:?}), redirecting to {path}",
                    request.seq,
                    request.to,
                    request.from
                );
                next(Some(path));
            }
        }
        decision
    }
}
