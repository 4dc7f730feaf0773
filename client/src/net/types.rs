//! Records exchanged with the hosted provider.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Signed-in identity returned by the identity provider.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentitySession {
    pub id_token: String,
    pub local_id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub refresh_token: String,
    /// Token lifetime in seconds, as the provider's decimal string.
    #[serde(default)]
    pub expires_in: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "income" => Some(Self::Income),
            "expense" => Some(Self::Expense),
            _ => None,
        }
    }
}

/// One bookkeeping line. Amounts are unsigned cents; `kind` carries the sign.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountingEntry {
    /// `YYYY-MM-DD`.
    pub date: String,
    pub kind: EntryKind,
    pub category: String,
    pub amount_cents: i64,
    pub note: String,
}

impl AccountingEntry {
    /// Amount with the sign implied by `kind`.
    pub fn signed_cents(&self) -> i64 {
        match self.kind {
            EntryKind::Income => self.amount_cents,
            EntryKind::Expense => -self.amount_cents,
        }
    }
}

/// An entry together with its document id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoredEntry {
    pub id: String,
    pub entry: AccountingEntry,
}
