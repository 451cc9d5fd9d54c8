//! HTTP client shared by every admin API call.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::credentials::CredentialContext;
use crate::error::{AdminError, AdminResult};
use crate::token::AccessToken;

/// User agent sent with every request.
pub const USER_AGENT: &str = "Mozilla/5.0 (Keycloak Bulk Users; Linux)";

/// Request timeout applied by [`AdminClient::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the realm-scoped Keycloak admin API.
///
/// Holds no token itself: callers acquire one with
/// [`AdminClient::acquire_token`] and pass it to every call of the run.
#[derive(Debug, Clone)]
pub struct AdminClient<'a> {
    http: reqwest::Client,
    ctx: &'a CredentialContext,
}

impl<'a> AdminClient<'a> {
    /// Creates a new admin client.
    pub fn new(ctx: &'a CredentialContext) -> AdminResult<Self> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(DEFAULT_TIMEOUT)
            .build()?;

        Ok(Self { http, ctx })
    }

    /// Credential context this client was built with.
    pub fn context(&self) -> &CredentialContext {
        self.ctx
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Makes an authorized GET request against an admin path and decodes the
    /// JSON body.
    pub(crate) async fn get_json<T, Q>(
        &self,
        token: &AccessToken,
        path: &str,
        query: &Q,
    ) -> AdminResult<T>
    where
        T: DeserializeOwned,
        Q: serde::Serialize + ?Sized,
    {
        let url = self.ctx.admin_url(path);
        let response = self
            .http
            .get(&url)
            .bearer_auth(token.secret())
            .query(query)
            .send()
            .await?;
        handle_response(response).await
    }

    /// Makes an authorized PUT request without a body.
    pub(crate) async fn put_empty(
        &self,
        token: &AccessToken,
        path: &str,
    ) -> AdminResult<reqwest::Response> {
        let url = self.ctx.admin_url(path);
        let response = self
            .http
            .put(&url)
            .bearer_auth(token.secret())
            .send()
            .await?;
        Ok(response)
    }
}

/// Handles a response with a JSON body.
async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> AdminResult<T> {
    let status = response.status();

    if status.is_success() {
        response.json().await.map_err(AdminError::Transport)
    } else {
        Err(AdminError::Api {
            status: status.as_u16(),
            body: response_text(response).await,
        })
    }
}

/// Reads a response body for diagnostics.
pub(crate) async fn response_text(response: reqwest::Response) -> String {
    response
        .text()
        .await
        .unwrap_or_else(|_| "<unreadable response body>".to_string())
}
