//! Root application component with routing and context providers.

use gate::{Navigator, RouteTable};
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    WildcardSegment,
    components::{Route, Router, Routes},
};

use crate::config::ClientConfig;
use crate::pages::route_gate::{AppNavigator, RouteGate};
use crate::state::{auth::AuthState, ledger::LedgerState, session::browser_session};

/// Root application component.
///
/// Provides shared state contexts and hands every path to [`RouteGate`]; the
/// gate's route table, not the Leptos route list, decides what renders.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    if let Err(e) = config.provider.ensure_configured() {
        log::warn!("{e}; sign-in and entry storage will fail");
    }

    let navigator: StoredValue<AppNavigator, LocalStorage> =
        StoredValue::new_local(Navigator::new(RouteTable::bookkee(), browser_session()));
    let auth = RwSignal::new(AuthState::restore());
    let ledger = RwSignal::new(LedgerState::default());

    provide_context(config);
    provide_context(navigator);
    provide_context(auth);
    provide_context(ledger);

    view! {
        <Title text="Bookkee"/>

        <Router>
            <main class="app">
                <Routes fallback=|| view! { <RouteGate/> }>
                    <Route path=WildcardSegment("path") view=RouteGate/>
                </Routes>
            </main>
        </Router>
    }
}
