//! Build-time client configuration.
//!
//! Values come from `option_env!` so the WASM bundle carries them without a
//! runtime fetch. [`ClientConfig::from_lookup`] takes any key lookup, which is
//! what the tests use.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use gate::normalize_base;

use crate::net::error::ProviderError;

pub const DEFAULT_BASE_PATH: &str = "/bookkee";
pub const DEFAULT_IDENTITY_BASE_URL: &str = "https://identitytoolkit.googleapis.com/v1";
pub const DEFAULT_FIRESTORE_BASE_URL: &str = "https://firestore.googleapis.com/v1";

/// Hosted identity + document store settings.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProviderConfig {
    pub api_key: String,
    pub project_id: String,
    pub auth_domain: String,
    pub identity_base_url: String,
    pub firestore_base_url: String,
}

impl ProviderConfig {
    /// Fail early when the bundle was built without provider credentials.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Config`] naming the first missing variable.
    pub fn ensure_configured(&self) -> Result<(), ProviderError> {
        if self.api_key.is_empty() {
            return Err(ProviderError::Config("BOOKKEE_FIREBASE_API_KEY is not set".into()));
        }
        if self.project_id.is_empty() {
            return Err(ProviderError::Config("BOOKKEE_FIREBASE_PROJECT_ID is not set".into()));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Normalized mount point, `""` for the site root.
    pub base_path: String,
    pub provider: ProviderConfig,
}

impl ClientConfig {
    /// Configuration baked in at compile time.
    ///
    /// - `BOOKKEE_BASE_PATH`: default `/bookkee`
    /// - `BOOKKEE_FIREBASE_API_KEY`, `BOOKKEE_FIREBASE_PROJECT_ID`,
    ///   `BOOKKEE_FIREBASE_AUTH_DOMAIN`
    /// - `BOOKKEE_IDENTITY_BASE_URL`, `BOOKKEE_FIRESTORE_BASE_URL`: override
    ///   the Google endpoints (emulators)
    pub fn from_build_env() -> Self {
        Self::from_lookup(|key| match key {
            "BOOKKEE_BASE_PATH" => option_env!("BOOKKEE_BASE_PATH"),
            "BOOKKEE_FIREBASE_API_KEY" => option_env!("BOOKKEE_FIREBASE_API_KEY"),
            "BOOKKEE_FIREBASE_PROJECT_ID" => option_env!("BOOKKEE_FIREBASE_PROJECT_ID"),
            "BOOKKEE_FIREBASE_AUTH_DOMAIN" => option_env!("BOOKKEE_FIREBASE_AUTH_DOMAIN"),
            "BOOKKEE_IDENTITY_BASE_URL" => option_env!("BOOKKEE_IDENTITY_BASE_URL"),
            "BOOKKEE_FIRESTORE_BASE_URL" => option_env!("BOOKKEE_FIRESTORE_BASE_URL"),
            _ => None,
        })
    }

    pub fn from_lookup<'a, F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'a str>,
    {
        let value = |key: &str| lookup(key).map(str::trim).unwrap_or_default().to_owned();
        let url = |key: &str, default: &str| {
            lookup(key)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .unwrap_or(default)
                .trim_end_matches('/')
                .to_owned()
        };

        let project_id = value("BOOKKEE_FIREBASE_PROJECT_ID");
        let auth_domain = match value("BOOKKEE_FIREBASE_AUTH_DOMAIN") {
            domain if domain.is_empty() && !project_id.is_empty() => format!("{project_id}.firebaseapp.com"),
            domain => domain,
        };

        Self {
            base_path: normalize_base(lookup("BOOKKEE_BASE_PATH").unwrap_or(DEFAULT_BASE_PATH)),
            provider: ProviderConfig {
                api_key: value("BOOKKEE_FIREBASE_API_KEY"),
                project_id,
                auth_domain,
                identity_base_url: url("BOOKKEE_IDENTITY_BASE_URL", DEFAULT_IDENTITY_BASE_URL),
                firestore_base_url: url("BOOKKEE_FIRESTORE_BASE_URL", DEFAULT_FIRESTORE_BASE_URL),
            },
        }
    }

    /// Browser path for an app-relative route.
    pub fn href(&self, path: &str) -> String {
        gate::join_base(&self.base_path, path)
    }
}
