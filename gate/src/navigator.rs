//! One navigation attempt, end to end.
//!
//! The navigator ties the route table, the guard, and the session together:
//! a request is stamped, resolved, guarded, and turned into an [`Outcome`]
//! the view layer can act on. Logout routes clear the session flag here, as
//! part of producing their redirect.
//!
//! Requests carry a sequence number. Evaluation is synchronous, so in
//! practice only the latest request is ever completed; [`Navigator::complete`]
//! still drops results for superseded requests so an asynchronous store
//! could be plugged in without rendering stale views.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use std::cell::{Cell, RefCell};

use crate::error::GateError;
use crate::guard::{Decision, NavigationGuard, NavigationRequest};
use crate::route::{Resolved, RouteTable, RouteTarget, ViewId, normalize_path};
use crate::session::{FlagStore, SessionState};

/// Redirect hops [`Navigator::settle`] follows before giving up.
pub const MAX_REDIRECTS: usize = 8;

/// What the view layer should do for a navigation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Render(ViewId),
    Redirect(String),
}

/// Final state after following every redirect.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settled {
    pub path: String,
    pub view: ViewId,
    pub redirects: usize,
}

pub struct Navigator<S> {
    table: RouteTable,
    guard: NavigationGuard,
    session: SessionState<S>,
    latest_seq: Cell<u64>,
    current: RefCell<Option<String>>,
}

impl<S: FlagStore> Navigator<S> {
    /// Denied requests redirect to the table's fallback path.
    pub fn new(table: RouteTable, session: SessionState<S>) -> Self {
        let guard = NavigationGuard::new(table.fallback());
        Self { table, guard, session, latest_seq: Cell::new(0), current: RefCell::new(None) }
    }

    pub fn session(&self) -> &SessionState<S> {
        &self.session
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    /// Path of the last rendered route.
    pub fn current_path(&self) -> Option<String> {
        self.current.borrow().clone()
    }

    /// Open a new request to `to`, superseding any earlier one.
    pub fn begin(&self, to: &str) -> NavigationRequest {
        let seq = self.latest_seq.get() + 1;
        self.latest_seq.set(seq);
        NavigationRequest::new(normalize_path(to), self.current_path(), seq)
    }

    /// Resolve and guard `request`. Logout routes clear the session flag.
    pub fn evaluate(&self, request: &NavigationRequest) -> Outcome {
        let entry = match self.table.resolve(&request.to) {
            Resolved::Route(entry) => entry,
            Resolved::Fallback { redirect_to } => {
                log::info!("no route for {}, redirecting to {redirect_to}", request.to);
                return Outcome::Redirect(redirect_to.to_owned());
            }
        };

        match entry.target {
            RouteTarget::Logout { redirect_to } => {
                if self.session.clear_authenticated() {
                    log::info!("session cleared by {}, redirecting to {redirect_to}", request.to);
                } else {
                    log::warn!("{} could not clear the session flag, redirecting to {redirect_to}", request.to);
                }
                Outcome::Redirect(redirect_to.to_owned())
            }
            RouteTarget::View(view) => {
                let Some(guard) = entry.guard else {
                    return Outcome::Render(view);
                };
                match self.guard.decide(guard, &self.session) {
                    Decision::Allow => Outcome::Render(view),
                    Decision::Redirect(path) => {
                        log::debug!(
                            "navigation #{} to {} denied, redirecting to {path}",
                            request.seq,
                            request.to
                        );
                        Outcome::Redirect(path)
                    }
                }
            }
        }
    }

    /// Accept `outcome` for `request` unless a newer request has begun.
    pub fn complete(&self, request: &NavigationRequest, outcome: Outcome) -> Option<Outcome> {
        if request.seq != self.latest_seq.get() {
            log::debug!("discarding result of superseded navigation #{} to {}", request.seq, request.to);
            return None;
        }
        if matches!(outcome, Outcome::Render(_)) {
            *self.current.borrow_mut() = Some(request.to.clone());
        }
        Some(outcome)
    }

    /// Single-hop navigation: begin, evaluate, complete.
    pub fn navigate(&self, to: &str) -> Outcome {
        let request = self.begin(to);
        let outcome = self.evaluate(&request);
        match self.complete(&request, outcome.clone()) {
            Some(accepted) => accepted,
            None => outcome,
        }
    }

    /// Follow redirects from `to` until a view renders.
    ///
    /// # Errors
    ///
    /// Returns [`GateError::RedirectLoop`] if no view renders within
    /// [`MAX_REDIRECTS`] hops.
    pub fn settle(&self, to: &str) -> Result<Settled, GateError> {
        let mut path = normalize_path(to).into_owned();
        for redirects in 0..=MAX_REDIRECTS {
            match self.navigate(&path) {
                Outcome::Render(view) => return Ok(Settled { path, view, redirects }),
                Outcome::Redirect(next) => path = next,
            }
        }
        Err(GateError::RedirectLoop { start: normalize_path(to).into_owned(), hops: MAX_REDIRECTS })
    }
}
