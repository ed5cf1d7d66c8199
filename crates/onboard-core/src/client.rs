//! HTTP client for the accounts API.

use std::future::Future;

use reqwest::{StatusCode, Url};

use crate::config::ClientConfig;
use crate::error::{SignupError, SignupResult};
use crate::form::SignupRequest;

/// Anything that can register a new account.
///
/// `SignupSession` only talks to this trait, so tests can swap the HTTP
/// client for an in-memory fake.
pub trait SignupApi {
    fn signup(&self, request: &SignupRequest) -> impl Future<Output = SignupResult<()>> + Send;
}

#[derive(Debug, Clone)]
pub struct SignupClient {
    http: reqwest::Client,
    signup_url: Url,
}

impl SignupClient {
    pub fn new(config: ClientConfig) -> SignupResult<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| SignupError::Network(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            signup_url: config.signup_url()?,
        })
    }

    pub fn signup_url(&self) -> &Url {
        &self.signup_url
    }
}

impl SignupApi for SignupClient {
    async fn signup(&self, request: &SignupRequest) -> SignupResult<()> {
        tracing::debug!(url = %self.signup_url, username = %request.username, "Posting signup request");

        let response = self
            .http
            .post(self.signup_url.clone())
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!("Signup request failed: {}", e);
                SignupError::Network(e.to_string())
            })?;

        let status = response.status();
        if status == StatusCode::OK {
            tracing::info!(username = %request.username, "Signup accepted");
            return Ok(());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                tracing::debug!("Failed to read signup error body: {}", e);
                String::new()
            }
        };
        let reason = rejection_reason(&body);
        tracing::warn!(
            status = status.as_u16(),
            reason = reason.as_deref().unwrap_or("<none>"),
            "Signup rejected"
        );

        Err(SignupError::Rejected {
            status: status.as_u16(),
            reason,
        })
    }
}

/// Extract the `message` field from an error body, if it is a non-empty string.
fn rejection_reason(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}
