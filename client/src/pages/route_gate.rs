//! Router bridge that puts every navigation through the route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! The Leptos router mounts this component for all paths. It strips the
//! mount prefix, asks the shared [`Navigator`] for an [`Outcome`], and either
//! renders the bound page or issues a client-side redirect. A guarded page is
//! never constructed unless the navigator returned `Render` for it.

#[cfg(test)]
#[path = "route_gate_test.rs"]
mod route_gate_test;

use gate::{FlagStore, Navigator, Outcome, ViewId, strip_base};
use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use crate::config::ClientConfig;
use crate::pages::add_entry::AddAccountingPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::state::auth::AuthState;
use crate::state::session::BrowserFlagStore;

pub type AppNavigator = Navigator<BrowserFlagStore>;

fn render_view(view: ViewId) -> AnyView {
    match view {
        ViewId::LoginPage => view! { <LoginPage/> }.into_any(),
        ViewId::DashboardPage => view! { <DashboardPage/> }.into_any(),
        ViewId::AddAccounting => view! { <AddAccountingPage/> }.into_any(),
    }
}

/// One routed location: what to show, and whether the visit signed the user out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct GateStep {
    pub outcome: Outcome,
    pub signed_out: bool,
}

/// Route `full_path` (still carrying the mount prefix) through `nav`.
///
/// Paths outside `base_path` go to the table fallback. A logout route sets
/// `signed_out`, so the caller also drops the remembered identity.
pub(crate) fn gate_step<S: FlagStore>(nav: &Navigator<S>, base_path: &str, full_path: &str) -> GateStep {
    let Some(path) = strip_base(base_path, full_path) else {
        log::info!("{full_path} is outside {base_path}, redirecting");
        return GateStep { outcome: Outcome::Redirect(nav.table().fallback().to_owned()), signed_out: false };
    };
    let signed_out = nav.table().is_logout(path);
    GateStep { outcome: nav.navigate(path), signed_out }
}

#[component]
pub fn RouteGate() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let navigator = expect_context::<StoredValue<AppNavigator, LocalStorage>>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    move || {
        let full_path = location.pathname.get();
        let step = navigator.with_value(|nav| gate_step(nav, &config.base_path, &full_path));
        if step.signed_out {
            auth.update(AuthState::forget);
        }

        match step.outcome {
            Outcome::Render(view) => render_view(view),
            Outcome::Redirect(to) => {
                let href = config.href(&to);
                view! { <Redirect path=href/> }.into_any()
            }
        }
    }
}
