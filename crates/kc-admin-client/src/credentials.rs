//! Credential context.

use std::fmt;

use url::Url;

use crate::error::{AdminError, AdminResult};

/// Client credentials and location of the realm to administer.
///
/// Built once at process start and passed by reference to every call.
#[derive(Clone)]
pub struct CredentialContext {
    client_id: String,
    client_secret: String,
    base_url: String,
    realm: String,
}

impl CredentialContext {
    /// Creates a credential context.
    ///
    /// The base URL must be an absolute `http` or `https` URL. A trailing
    /// `/` is dropped so endpoint paths can be appended directly.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        base_url: &str,
        realm: impl Into<String>,
    ) -> AdminResult<Self> {
        let client_id = client_id.into();
        let client_secret = client_secret.into();
        let realm = realm.into();

        if client_id.trim().is_empty() {
            return Err(AdminError::InvalidConfig("client id is empty".to_string()));
        }
        if client_secret.is_empty() {
            return Err(AdminError::InvalidConfig("client secret is empty".to_string()));
        }
        if realm.trim().is_empty() {
            return Err(AdminError::InvalidConfig("realm is empty".to_string()));
        }

        let parsed = Url::parse(base_url)
            .map_err(|e| AdminError::InvalidConfig(format!("invalid base URL '{base_url}': {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(AdminError::InvalidConfig(format!(
                "unsupported base URL scheme: {}",
                parsed.scheme()
            )));
        }

        Ok(Self {
            client_id,
            client_secret,
            base_url: base_url.trim_end_matches('/').to_string(),
            realm,
        })
    }

    /// OAuth2 client id.
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// OAuth2 client secret.
    pub fn client_secret(&self) -> &str {
        &self.client_secret
    }

    /// Server base URL, without trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Realm name.
    pub fn realm(&self) -> &str {
        &self.realm
    }

    /// Token endpoint of the realm.
    pub fn token_url(&self) -> String {
        format!(
            "{}/realms/{}/protocol/openid-connect/token",
            self.base_url, self.realm
        )
    }

    /// Builds an admin API URL for a path relative to the realm.
    pub fn admin_url(&self, path: &str) -> String {
        format!("{}/admin/realms/{}{}", self.base_url, self.realm, path)
    }
}

impl fmt::Debug for CredentialContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialContext")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .field("realm", &self.realm)
            .finish()
    }
}
