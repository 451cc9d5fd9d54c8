//! Test fixtures for the group tools.
//!
//! [`MockKeycloak`] wraps a `wiremock` server that answers the admin API
//! calls the tools make. Authenticated endpoints only match requests that
//! carry the fixture's bearer token and the tools' user agent.

use kc_admin_client::{CredentialContext, USER_AGENT};
use serde_json::{json, Value};
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

/// Realm used by every fixture.
pub const TEST_REALM: &str = "staff";

/// Client id used by every fixture.
pub const TEST_CLIENT_ID: &str = "bulk-users";

/// Client secret used by every fixture.
pub const TEST_CLIENT_SECRET: &str = "s3cret";

/// Access token issued by the mocked token endpoint.
pub const TEST_TOKEN: &str = "test-access-token";

/// Installs a test subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("kc_admin_client=debug,kc_group_tools=debug")
        .with_test_writer()
        .try_init();
}

/// Builds a group member the way the admin API returns it.
pub fn member_json(index: usize) -> Value {
    json!({
        "id": format!("user-{index}"),
        "username": format!("user{index}"),
        "firstName": format!("First{index}"),
        "enabled": true
    })
}

/// Mocked Keycloak server.
pub struct MockKeycloak {
    /// Underlying mock server.
    pub server: MockServer,
}

impl MockKeycloak {
    /// Starts a mock server.
    pub async fn start() -> Self {
        init_tracing();
        Self {
            server: MockServer::start().await,
        }
    }

    /// Credentials pointing at the mock server.
    pub fn credentials(&self) -> CredentialContext {
        CredentialContext::new(
            TEST_CLIENT_ID,
            TEST_CLIENT_SECRET,
            &self.server.uri(),
            TEST_REALM,
        )
        .expect("mock server URI is a valid base URL")
    }

    fn admin_path(suffix: &str) -> String {
        format!("/admin/realms/{TEST_REALM}{suffix}")
    }

    fn authorized(builder: MockBuilder) -> MockBuilder {
        builder
            .and(header("authorization", format!("Bearer {TEST_TOKEN}").as_str()))
            .and(header("user-agent", USER_AGENT))
    }

    /// Token endpoint issuing [`TEST_TOKEN`] for the fixture credentials.
    pub async fn mount_token(&self) {
        Mock::given(method("POST"))
            .and(path(format!(
                "/realms/{TEST_REALM}/protocol/openid-connect/token"
            )))
            .and(header("user-agent", USER_AGENT))
            .and(body_string_contains("grant_type=client_credentials"))
            .and(body_string_contains(format!("client_id={TEST_CLIENT_ID}")))
            .and(body_string_contains(format!(
                "client_secret={TEST_CLIENT_SECRET}"
            )))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": TEST_TOKEN,
                "expires_in": 300,
                "token_type": "Bearer",
                "scope": "profile email"
            })))
            .mount(&self.server)
            .await;
    }

    /// Token endpoint answering `status` with `body`.
    pub async fn mount_token_error(&self, status: u16, body: Value) {
        Mock::given(method("POST"))
            .and(path(format!(
                "/realms/{TEST_REALM}/protocol/openid-connect/token"
            )))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Group search for `search` returning the given `(id, name)` groups.
    pub async fn mount_group_search(&self, search: &str, groups: &[(&str, &str)]) {
        let body: Vec<Value> = groups
            .iter()
            .map(|(id, name)| json!({ "id": id, "name": name, "path": format!("/{name}") }))
            .collect();

        Self::authorized(Mock::given(method("GET")).and(path(Self::admin_path("/groups"))))
            .and(query_param("search", search))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// User lookup for `username`; `None` yields an empty result list.
    pub async fn mount_user(&self, username: &str, id: Option<&str>) {
        let body = match id {
            Some(id) => json!([{ "id": id, "username": username, "enabled": true }]),
            None => json!([]),
        };

        Self::authorized(Mock::given(method("GET")).and(path(Self::admin_path("/users"))))
            .and(query_param("username", username))
            .and(query_param("exact", "true"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&self.server)
            .await;
    }

    /// Membership endpoint for one user/group pair answering `status`.
    ///
    /// When `expected_calls` is set the mock server verifies the call count
    /// on drop.
    pub async fn mount_add_to_group(
        &self,
        user_id: &str,
        group_id: &str,
        status: u16,
        expected_calls: Option<u64>,
    ) {
        let template = if status == 204 {
            ResponseTemplate::new(204)
        } else {
            ResponseTemplate::new(status).set_body_json(json!({ "error": "unknown_error" }))
        };

        let mock = Self::authorized(
            Mock::given(method("PUT"))
                .and(path(Self::admin_path(&format!("/users/{user_id}/groups/{group_id}")))),
        )
        .respond_with(template);

        match expected_calls {
            Some(n) => mock.expect(n).mount(&self.server).await,
            None => mock.mount(&self.server).await,
        }
    }

    /// Member listing for a group, one mock per page of the given sizes.
    ///
    /// Page `i` answers `first = i * page_size`. Member indexes run on
    /// across pages.
    pub async fn mount_member_pages(&self, group_id: &str, sizes: &[usize], page_size: usize) {
        let members_path = Self::admin_path(&format!("/groups/{group_id}/members"));
        let mut next_index = 0;

        for (page, &size) in sizes.iter().enumerate() {
            let members: Vec<Value> = (next_index..next_index + size).map(member_json).collect();
            next_index += size;

            Self::authorized(Mock::given(method("GET")).and(path(members_path.as_str())))
                .and(query_param("first", (page * page_size).to_string().as_str()))
                .and(query_param("max", page_size.to_string().as_str()))
                .respond_with(ResponseTemplate::new(200).set_body_json(members))
                .mount(&self.server)
                .await;
        }
    }

    /// Number of requests received on `path`.
    pub async fn requests_to(&self, path: &str) -> usize {
        self.server
            .received_requests()
            .await
            .unwrap_or_default()
            .iter()
            .filter(|r| r.url.path() == path)
            .count()
    }

    /// Admin path of a group's member listing.
    pub fn members_path(group_id: &str) -> String {
        Self::admin_path(&format!("/groups/{group_id}/members"))
    }
}
