use std::rc::Rc;

use gate::{MemoryFlagStore, RouteTable, SESSION_FLAG_KEY, SessionState};

use super::*;
use crate::net::types::IdentitySession;

fn navigator(store: &Rc<MemoryFlagStore>) -> Navigator<Rc<MemoryFlagStore>> {
    Navigator::new(RouteTable::bookkee(), SessionState::new(Rc::clone(store)))
}

fn signed_in() -> AuthState {
    AuthState {
        identity: Some(IdentitySession {
            id_token: "tok".to_owned(),
            local_id: "uid-1".to_owned(),
            email: "a@b.com".to_owned(),
            refresh_token: String::new(),
            expires_in: "3600".to_owned(),
        }),
    }
}

#[test]
fn logout_clears_flag_and_signs_out() {
    let store = Rc::new(MemoryFlagStore::with_flag("true"));
    let nav = navigator(&store);
    let mut auth = signed_in();

    let step = gate_step(&nav, "/bookkee", "/bookkee/logout");
    if step.signed_out {
        auth.forget();
    }

    assert_eq!(step.outcome, Outcome::Redirect("/".to_owned()));
    assert!(step.signed_out);
    assert_eq!(store.get(SESSION_FLAG_KEY), None);
    assert!(auth.identity.is_none());
}

#[test]
fn guarded_page_keeps_identity() {
    let store = Rc::new(MemoryFlagStore::with_flag("true"));
    let nav = navigator(&store);

    let step = gate_step(&nav, "/bookkee", "/bookkee/dashboard");

    assert_eq!(step, GateStep { outcome: Outcome::Render(ViewId::DashboardPage), signed_out: false });
    assert_eq!(store.get(SESSION_FLAG_KEY).as_deref(), Some("true"));
}

#[test]
fn path_outside_mount_goes_to_fallback_without_signing_out() {
    let store = Rc::new(MemoryFlagStore::with_flag("true"));
    let nav = navigator(&store);

    let step = gate_step(&nav, "/bookkee", "/bookkeeper/logout");

    assert_eq!(step, GateStep { outcome: Outcome::Redirect("/".to_owned()), signed_out: false });
    assert_eq!(store.get(SESSION_FLAG_KEY).as_deref(), Some("true"));
}

#[test]
fn root_mount_routes_logout_directly() {
    let store = Rc::new(MemoryFlagStore::with_flag("true"));
    let nav = navigator(&store);

    let step = gate_step(&nav, "", "/logout");

    assert!(step.signed_out);
    assert_eq!(store.get(SESSION_FLAG_KEY), None);
}
