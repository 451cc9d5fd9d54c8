//! Group membership changes.

use reqwest::StatusCode;

use crate::client::{response_text, AdminClient};
use crate::error::{AdminError, AdminResult};
use crate::resolver::EntityId;
use crate::token::AccessToken;

impl AdminClient<'_> {
    /// Adds a user to a group.
    ///
    /// The provider answers `204 No Content` whether or not the user was
    /// already a member, so the call is idempotent. Any other status is
    /// reported as [`AdminError::Mutation`].
    pub async fn add_user_to_group(
        &self,
        token: &AccessToken,
        user_id: &EntityId,
        group_id: &EntityId,
    ) -> AdminResult<()> {
        let path = format!("/users/{}/groups/{}", user_id, group_id);
        let response = self.put_empty(token, &path).await?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            tracing::info!("Success: User {} added to group {}", user_id, group_id);
            return Ok(());
        }

        Err(AdminError::Mutation {
            user_id: user_id.to_string(),
            group_id: group_id.to_string(),
            status: status.as_u16(),
            body: response_text(response).await,
        })
    }
}
