//! Form for recording a new accounting entry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Guarded route. Input is validated locally into an [`AccountingEntry`]
//! before anything is sent; a successful write lands back on the dashboard
//! with the new entry already in ledger state.

#[cfg(test)]
#[path = "add_entry_test.rs"]
mod add_entry_test;

use gate::DASHBOARD_PATH;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

use crate::config::ClientConfig;
use crate::net::types::{AccountingEntry, EntryKind};
use crate::state::auth::AuthState;
use crate::state::ledger::LedgerState;
use crate::util::money::parse_amount_cents;

const ENTRY_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub(crate) const MAX_CATEGORY_LEN: usize = 40;
pub(crate) const MAX_NOTE_LEN: usize = 200;

/// Raw form field values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct EntryForm {
    pub date: String,
    pub kind: String,
    pub category: String,
    pub amount: String,
    pub note: String,
}

/// `YYYY-MM-DD` with a real calendar day.
pub(crate) fn is_valid_date(raw: &str) -> bool {
    // Fixed width keeps signed or widened years out.
    raw.len() == 10 && time::Date::parse(raw, ENTRY_DATE_FORMAT).is_ok()
}

pub(crate) fn parse_entry_form(form: &EntryForm) -> Result<AccountingEntry, &'static str> {
    let date = form.date.trim();
    if !is_valid_date(date) {
        return Err("Pick a valid date.");
    }
    let kind = EntryKind::parse(form.kind.trim()).ok_or("Choose income or expense.")?;
    let category = form.category.trim();
    if category.is_empty() {
        return Err("Enter a category.");
    }
    if category.chars().count() > MAX_CATEGORY_LEN {
        return Err("Category is too long.");
    }
    let amount_cents = parse_amount_cents(&form.amount)?;
    let note = form.note.trim();
    if note.chars().count() > MAX_NOTE_LEN {
        return Err("Note is too long.");
    }

    Ok(AccountingEntry {
        date: date.to_owned(),
        kind,
        category: category.to_owned(),
        amount_cents,
        note: note.to_owned(),
    })
}

#[component]
pub fn AddAccountingPage() -> impl IntoView {
    let config = expect_context::<ClientConfig>();
    let auth = expect_context::<RwSignal<AuthState>>();
    let ledger = expect_context::<RwSignal<LedgerState>>();
    let navigate = use_navigate();

    let form = RwSignal::new(EntryForm { kind: EntryKind::Expense.as_str().to_owned(), ..EntryForm::default() });
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let dashboard_href = config.href(DASHBOARD_PATH);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let entry = match parse_entry_form(&form.get()) {
            Ok(entry) => entry,
            Err(msg) => {
                info.set(msg.to_owned());
                return;
            }
        };
        let Some(identity) = auth.get().identity else {
            info.set("Your sign-in has expired. Log out and sign in again.".to_owned());
            return;
        };
        busy.set(true);
        info.set("Saving...".to_owned());

        #[cfg(feature = "csr")]
        {
            let provider = config.provider.clone();
            let dashboard = config.href(DASHBOARD_PATH);
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match crate::net::ledger::create_entry(&provider, &identity, &entry).await {
                    Ok(stored) => {
                        ledger.update(|l| l.insert(stored));
                        busy.set(false);
                        navigate(&dashboard, leptos_router::NavigateOptions::default());
                    }
                    Err(e) => {
                        log::warn!("saving entry failed: {e}");
                        info.set(format!("Could not save entry: {e}"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (&config, &navigate, ledger, entry, identity);
        }
    };

    view! {
        <div class="entry-page">
            <header class="entry-page__header">
                <h1>"New entry"</h1>
                <a href=dashboard_href>"Back to dashboard"</a>
            </header>
            <form class="entry-form" on:submit=on_submit>
                <label>
                    "Date"
                    <input
                        type="date"
                        prop:value=move || form.get().date
                        on:input=move |ev| form.update(|f| f.date = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Type"
                    <select prop:value=move || form.get().kind on:change=move |ev| form.update(|f| f.kind = event_target_value(&ev))>
                        <option value="expense">"Expense"</option>
                        <option value="income">"Income"</option>
                    </select>
                </label>
                <label>
                    "Category"
                    <input
                        type="text"
                        maxlength=MAX_CATEGORY_LEN.to_string()
                        placeholder="groceries"
                        prop:value=move || form.get().category
                        on:input=move |ev| form.update(|f| f.category = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Amount"
                    <input
                        type="text"
                        inputmode="decimal"
                        placeholder="0.00"
                        prop:value=move || form.get().amount
                        on:input=move |ev| form.update(|f| f.amount = event_target_value(&ev))
                    />
                </label>
                <label>
                    "Note"
                    <input
                        type="text"
                        maxlength=MAX_NOTE_LEN.to_string()
                        prop:value=move || form.get().note
                        on:input=move |ev| form.update(|f| f.note = event_target_value(&ev))
                    />
                </label>
                <button class="entry-form__submit" type="submit" disabled=move || busy.get()>
                    "Save entry"
                </button>
            </form>
            <Show when=move || !info.get().is_empty()>
                <p class="entry-message">{move || info.get()}</p>
            </Show>
        </div>
    }
}
