//! Email + password sign-in against the hosted identity provider.
//!
//! Browser build: real HTTP via `gloo-net`. Other builds return
//! [`ProviderError::Unavailable`].

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

#[cfg(any(test, feature = "csr"))]
use serde::Serialize;

use super::error::ProviderError;
use super::types::IdentitySession;
use crate::config::ProviderConfig;

#[cfg(any(test, feature = "csr"))]
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignInRequest<'a> {
    email: &'a str,
    password: &'a str,
    return_secure_token: bool,
}

#[cfg(any(test, feature = "csr"))]
fn sign_in_endpoint(config: &ProviderConfig) -> String {
    format!("{}/accounts:signInWithPassword?key={}", config.identity_base_url, config.api_key)
}

#[cfg(any(test, feature = "csr"))]
fn sign_in_body<'a>(email: &'a str, password: &'a str) -> SignInRequest<'a> {
    SignInRequest { email, password, return_secure_token: true }
}

/// Exchange credentials for an [`IdentitySession`].
///
/// # Errors
///
/// [`ProviderError::Config`] when credentials are missing from the build,
/// [`ProviderError::Status`] with a readable message when the provider
/// rejects the sign-in, and `Network`/`Parse` for transport failures.
pub async fn sign_in_with_password(
    config: &ProviderConfig,
    email: &str,
    password: &str,
) -> Result<IdentitySession, ProviderError> {
    config.ensure_configured()?;

    #[cfg(feature = "csr")]
    {
        use super::error::provider_error_message;

        let resp = gloo_net::http::Request::post(&sign_in_endpoint(config))
            .json(&sign_in_body(email, password))
            .map_err(|e| ProviderError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ProviderError::Network(e.to_string()))?;
        if !resp.ok() {
            let status = resp.status();
            let body = resp.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status, message: provider_error_message(&body) });
        }
        resp.json::<IdentitySession>()
            .await
            .map_err(|e| ProviderError::Parse(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (email, password);
        Err(ProviderError::Unavailable)
    }
}
