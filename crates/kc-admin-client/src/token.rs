//! Client-credentials token acquisition.

use std::fmt;

use serde::Deserialize;

use crate::client::{response_text, AdminClient};
use crate::error::{AdminError, AdminResult};

/// Bearer token presented on every admin API call of a run.
///
/// Expiry is not tracked: a token is acquired once per run.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw bearer token.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw token value, for the `Authorization` header.
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken([REDACTED])")
    }
}

/// Token endpoint response; only the access token is used.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    #[serde(default)]
    access_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
}

impl AdminClient<'_> {
    /// Exchanges the client credentials for a bearer token.
    ///
    /// Any status other than `200 OK` is an authentication failure carrying
    /// the server's response body.
    pub async fn acquire_token(&self) -> AdminResult<AccessToken> {
        let ctx = self.context();
        let form = [
            ("client_id", ctx.client_id()),
            ("client_secret", ctx.client_secret()),
            ("grant_type", "client_credentials"),
        ];

        let response = self
            .http()
            .post(ctx.token_url())
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if status != reqwest::StatusCode::OK {
            let body = response_text(response).await;
            tracing::error!(
                client_id = ctx.client_id(),
                status = status.as_u16(),
                "Problem with login - Server response: {}",
                body
            );
            return Err(AdminError::Authentication {
                status: status.as_u16(),
                body,
            });
        }

        let token: TokenResponse = response.json().await?;
        if token.access_token.is_empty() {
            return Err(AdminError::Authentication {
                status: status.as_u16(),
                body: "token response has no access_token".to_string(),
            });
        }

        tracing::debug!(
            client_id = ctx.client_id(),
            expires_in = ?token.expires_in,
            "Acquired access token"
        );
        Ok(AccessToken(token.access_token))
    }
}
