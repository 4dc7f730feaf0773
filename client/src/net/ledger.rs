//! Accounting entries in the hosted document store.
//!
//! SYSTEM CONTEXT
//! ==============
//! Entries live in a per-user collection, `users/{uid}/entries`, so the
//! provider's security rules can scope reads and writes to the signed-in user.
//! Documents use the typed-field JSON encoding of the REST API; the mapping
//! to [`AccountingEntry`] is kept pure so it can be tested without a network.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "ledger_test.rs"]
mod ledger_test;

use serde_json::{Value, json};

use super::error::ProviderError;
use super::types::{AccountingEntry, EntryKind, IdentitySession, StoredEntry};
use crate::config::ProviderConfig;

/// Documents requested per list page.
pub const LIST_PAGE_SIZE: u32 = 300;

#[cfg(any(test, feature = "csr"))]
pub(crate) fn entries_collection_url(config: &ProviderConfig, user_id: &str) -> String {
    format!(
        "{}/projects/{}/databases/(default)/documents/users/{user_id}/entries",
        config.firestore_base_url, config.project_id
    )
}

/// Query pairs for one list page. Values are passed unencoded; the request
/// builder percent-encodes them, since page tokens may carry `+`, `/` or `=`.
#[cfg(any(test, feature = "csr"))]
pub(crate) fn list_page_query(page_token: Option<&str>) -> Vec<(&'static str, String)> {
    let mut query = vec![("pageSize", LIST_PAGE_SIZE.to_string())];
    if let Some(token) = page_token {
        query.push(("pageToken", token.to_owned()));
    }
    query
}

/// Typed-field document body for `entry`.
pub fn encode_entry(entry: &AccountingEntry) -> Value {
    json!({
        "fields": {
            "date": { "stringValue": entry.date },
            "kind": { "stringValue": entry.kind.as_str() },
            "category": { "stringValue": entry.category },
            "amountCents": { "integerValue": entry.amount_cents.to_string() },
            "note": { "stringValue": entry.note },
        }
    })
}

fn string_field(fields: &Value, name: &str) -> Result<String, ProviderError> {
    fields
        .get(name)
        .and_then(|f| f.get("stringValue"))
        .and_then(Value::as_str)
        .map(str::to_owned)
        .ok_or_else(|| ProviderError::Parse(format!("missing string field {name}")))
}

fn integer_field(fields: &Value, name: &str) -> Result<i64, ProviderError> {
    // integerValue is a decimal string on the wire; accept a bare number too.
    let raw = fields
        .get(name)
        .and_then(|f| f.get("integerValue"))
        .ok_or_else(|| ProviderError::Parse(format!("missing integer field {name}")))?;
    match raw {
        Value::String(s) => s.parse().map_err(|_| ProviderError::Parse(format!("bad integer field {name}: {s}"))),
        Value::Number(n) => n.as_i64().ok_or_else(|| ProviderError::Parse(format!("bad integer field {name}"))),
        _ => Err(ProviderError::Parse(format!("bad integer field {name}"))),
    }
}

/// Decode one document into a [`StoredEntry`]; the id is the last name segment.
///
/// # Errors
///
/// Returns [`ProviderError::Parse`] when a field is missing or malformed.
pub fn decode_document(doc: &Value) -> Result<StoredEntry, ProviderError> {
    let name = doc
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| ProviderError::Parse("document without name".into()))?;
    let id = name.rsplit('/').next().unwrap_or(name).to_owned();
    let fields = doc
        .get("fields")
        .ok_or_else(|| ProviderError::Parse(format!("document {id} without fields")))?;

    let kind_raw = string_field(fields, "kind")?;
    let kind = EntryKind::parse(&kind_raw).ok_or_else(|| ProviderError::Parse(format!("unknown entry kind {kind_raw}")))?;
    // Notes are optional in older documents.
    let note = string_field(fields, "note").unwrap_or_default();

    Ok(StoredEntry {
        id,
        entry: AccountingEntry {
            date: string_field(fields, "date")?,
            kind,
            category: string_field(fields, "category")?,
            amount_cents: integer_field(fields, "amountCents")?,
            note,
        },
    })
}

/// Decode one list page. Returns the entries and the next page token.
///
/// An empty collection comes back as `{}`.
///
/// # Errors
///
/// Propagates the first [`decode_document`] failure.
pub fn decode_list_page(body: &Value) -> Result<(Vec<StoredEntry>, Option<String>), ProviderError> {
    let docs = match body.get("documents") {
        Some(Value::Array(docs)) => docs.iter().map(decode_document).collect::<Result<Vec<_>, _>>()?,
        Some(_) => return Err(ProviderError::Parse("documents is not an array".into())),
        None => Vec::new(),
    };
    let next = body
        .get("nextPageToken")
        .and_then(Value::as_str)
        .filter(|t| !t.is_empty())
        .map(str::to_owned);
    Ok((docs, next))
}

/// Newest date first; ties keep a stable id order.
pub fn sort_newest_first(entries: &mut [StoredEntry]) {
    entries.sort_by(|a, b| b.entry.date.cmp(&a.entry.date).then_with(|| a.id.cmp(&b.id)));
}

/// Store a new entry for the signed-in user.
///
/// # Errors
///
/// See [`ProviderError`]; [`ProviderError::Unavailable`] outside the browser.
pub async fn create_entry(
    config: &ProviderConfig,
    session: &IdentitySession,
    entry: &AccountingEntry,
) -> Result<StoredEntry, ProviderError> {
    config.ensure_configured()?;

    #[cfg(feature = "csr")]
    {
        use super::error::provider_error_message;

        let url = entries_collection_url(config, &session.local_id);
        let resp = gloo_net::http::Request::post(&url)
            .header("Authorization", &format!("Bearer {}", session.id_token))
            .json(&encode_entry(entry))
            .map_err(|e| ProviderError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, message: provider_error_message(&body) });
        }
        let doc = resp.json::<Value>().await.map_err(|e| ProviderError::Parse(e.to_string()))?;
        decode_document(&doc)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (session, entry);
        Err(ProviderError::Unavailable)
    }
}

/// Fetch every entry for the signed-in user, newest first.
///
/// # Errors
///
/// See [`ProviderError`]; [`ProviderError::Unavailable`] outside the browser.
pub async fn list_entries(config: &ProviderConfig, session: &IdentitySession) -> Result<Vec<StoredEntry>, ProviderError> {
    config.ensure_configured()?;

    #[cfg(feature = "csr")]
    {
        use super::error::provider_error_message;

        let base = entries_collection_url(config, &session.local_id);
        let mut all = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let query = list_page_query(page_token.as_deref());
            let resp = gloo_net::http::Request::get(&base)
                .query(query.iter().map(|(k, v)| (*k, v.as_str())))
                .header("Authorization", &format!("Bearer {}", session.id_token))
                .send()
                .await
                .map_err(|e| ProviderError::Network(e.to_string()))?;
            if !resp.ok() {
                let status = resp.status();
                let body = resp.text().await.unwrap_or_default();
                return Err(ProviderError::Status { status, message: provider_error_message(&body) });
            }
            let body = resp.json::<Value>().await.map_err(|e| ProviderError::Parse(e.to_string()))?;
            let (docs, next) = decode_list_page(&body)?;
            all.extend(docs);
            match next {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
        sort_newest_first(&mut all);
        Ok(all)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = session;
        Err(ProviderError::Unavailable)
    }
}
