//! Identity-service login: trades the configured credentials for a token.
//!
//! DESIGN
//! ======
//! One `POST` with HTTP Basic auth per call. No retry, no caching; the token
//! is passed through untouched. Pure parsing in `parse_token` for testability.

use crate::config::IdentityConfig;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity credentials are not configured")]
    MissingCredentials,
    #[error("identity request failed: {0}")]
    Request(String),
    #[error("identity service returned status {status}")]
    Status { status: u16, body: String },
    #[error("identity response parse failed: {0}")]
    Parse(String),
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

/// Anything that can hand out an identity token. Mocked in route tests.
#[async_trait::async_trait]
pub trait TokenSource: Send + Sync {
    async fn get_token(&self) -> Result<String, IdentityError>;
}

// =============================================================================
// CLIENT
// =============================================================================

pub struct IdentityClient {
    http: reqwest::Client,
    config: IdentityConfig,
}

impl IdentityClient {
    /// Build a client with reqwest's default timeouts.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: IdentityConfig) -> Result<Self, IdentityError> {
        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| IdentityError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, config })
    }
}

#[async_trait::async_trait]
impl TokenSource for IdentityClient {
    async fn get_token(&self) -> Result<String, IdentityError> {
        let Some(creds) = &self.config.credentials else {
            return Err(IdentityError::MissingCredentials);
        };

        let response = self
            .http
            .post(&self.config.login_url)
            .basic_auth(&creds.username, Some(&creds.password))
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.without_url().to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| IdentityError::Request(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(IdentityError::Status { status: status.as_u16(), body: text });
        }

        parse_token(&text)
    }
}

// =============================================================================
// PARSING
// =============================================================================

#[derive(serde::Deserialize)]
struct LoginResponse {
    token: String,
}

fn parse_token(json: &str) -> Result<String, IdentityError> {
    let resp: LoginResponse = serde_json::from_str(json).map_err(|e| IdentityError::Parse(e.to_string()))?;
    if resp.token.is_empty() {
        return Err(IdentityError::Parse("empty token".into()));
    }
    Ok(resp.token)
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
