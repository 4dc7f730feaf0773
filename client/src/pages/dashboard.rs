//! Dashboard: ledger totals and the entry list.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route. The guard only proves the session flag is set; the entry
//! list additionally needs the remembered identity token, and its absence is
//! shown as a message rather than a redirect.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use gate::{ADD_ENTRY_PATH, LOGOUT_PATH};
use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::types::{AccountingEntry, EntryKind, StoredEntry};
use crate::state::auth::AuthState;
use crate::state::ledger::LedgerState;
use crate::util::money::format_cents;

pub(crate) const EXPIRED_SIGN_IN: &str = "Your sign-in has expired. Log out and sign in again.";

/// `+12.50` for income, `-12.50` for expenses.
pub(crate) fn signed_amount_label(entry: &AccountingEntry) -> String {
    let cents = entry.signed_cents();
    if cents >= 0 {
        format!("+{}", format_cents(cents))
    } else {
        format_cents(cents)
    }
}

pub(crate) fn kind_class(kind: EntryKind) -> &'static str {
    match kind {
        EntryKind::Income => "ledger-row ledger-row--income",
        EntryKind::Expense => "ledger-row ledger-row--expense",
    }
}

fn load_entries(config: &ClientConfig, auth: RwSignal<AuthState>, ledger: RwSignal<LedgerState>) {
    let Some(identity) = auth.get_untracked().identity else {
        ledger.update(|l| {
            l.loading = false;
            l.error = Some(EXPIRED_SIGN_IN.to_owned());
        });
        return;
    };
    ledger.update(|l| {
        l.loading = true;
        l.error = None;
    });

    #[cfg(feature = "csr")]
    {
        let provider = config.provider.clone();
        leptos::task::spawn_local(async move {
            match crate::net::ledger::list_entries(&provider, &identity).await {
                Ok(entries) => ledger.update(|l| {
                    l.entries = entries;
                    l.loading = false;
                }),
                Err(e) => {
                    log::warn!("loading entries failed: {e}");
                    ledger.update(|l| {
                        l.loading = false;
                        l.error = Some(format!("Could not load entries: {e}"));
                    });
                }
            }
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (config, identity);
        ledger.update(|l| l.loading = false);
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ledger = expect_context::<RwSignal<LedgerState>>();

    load_entries(&config, auth, ledger);

    let summary = Memo::new(move |_| ledger.with(LedgerState::summary));
    let who = move || auth.with(|a| a.display_email().unwrap_or("signed in").to_owned());

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h1>"Ledger"</h1>
                <span class="dashboard-page__user">{who}</span>
                <nav>
                    <a class="dashboard-page__add" href=config.href(ADD_ENTRY_PATH)>"Add entry"</a>
                    <a class="dashboard-page__logout" href=config.href(LOGOUT_PATH)>"Log out"</a>
                </nav>
            </header>
            <section class="ledger-summary">
                <div class="ledger-summary__card">
                    <span>"Income"</span>
                    <strong>{move || format_cents(summary.get().income_cents)}</strong>
                </div>
                <div class="ledger-summary__card">
                    <span>"Expenses"</span>
                    <strong>{move || format_cents(summary.get().expense_cents)}</strong>
                </div>
                <div class="ledger-summary__card">
                    <span>"Balance"</span>
                    <strong>{move || format_cents(summary.get().balance_cents())}</strong>
                </div>
            </section>
            <Show when=move || ledger.with(|l| l.error.is_some())>
                <p class="dashboard-message">{move || ledger.with(|l| l.error.clone().unwrap_or_default())}</p>
            </Show>
            <Show
                when=move || !ledger.with(|l| l.loading)
                fallback=|| view! { <p class="dashboard-message">"Loading entries..."</p> }
            >
                <table class="ledger-table">
                    <thead>
                        <tr>
                            <th>"Date"</th>
                            <th>"Category"</th>
                            <th>"Note"</th>
                            <th>"Amount"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || ledger.with(|l| l.entries.clone())
                            key=|stored: &StoredEntry| stored.id.clone()
                            children=move |stored: StoredEntry| {
                                let StoredEntry { entry, .. } = stored;
                                let amount = signed_amount_label(&entry);
                                view! {
                                    <tr class=kind_class(entry.kind)>
                                        <td>{entry.date}</td>
                                        <td>{entry.category}</td>
                                        <td>{entry.note}</td>
                                        <td class="ledger-row__amount">{amount}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
        </div>
    }
}
