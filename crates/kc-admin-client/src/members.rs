//! Paginated group member listing.

use serde::Deserialize;

use crate::client::AdminClient;
use crate::error::{AdminError, AdminResult};
use crate::resolver::EntityId;
use crate::token::AccessToken;

/// Page size used when listing group members.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// A group member as reported by the admin API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MemberRecord {
    /// Username.
    pub username: String,
    /// First name; empty when the user never set one.
    #[serde(rename = "firstName", default)]
    pub first_name: String,
}

/// Rule deciding when the member listing has no more pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageTermination {
    /// Stop at the first page with no records.
    EmptyPage,
    /// Stop at the first page holding fewer records than requested.
    #[default]
    ShortPage,
}

impl PageTermination {
    fn is_last(self, received: usize, page_size: u32) -> bool {
        match self {
            Self::EmptyPage => received == 0,
            Self::ShortPage => received < page_size as usize,
        }
    }
}

/// Paging options for [`AdminClient::list_group_members_with`].
#[derive(Debug, Clone, Copy)]
pub struct PageOptions {
    /// Records requested per page.
    pub page_size: u32,
    /// Termination rule.
    pub termination: PageTermination,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            termination: PageTermination::default(),
        }
    }
}

/// Offset of the page after the one starting at `first`.
fn next_offset(first: u32, page_size: u32) -> AdminResult<u32> {
    first
        .checked_add(page_size)
        .ok_or(AdminError::PageOffsetOverflow { offset: first })
}

impl AdminClient<'_> {
    /// Lists every member of a group with the default paging options.
    pub async fn list_group_members(
        &self,
        token: &AccessToken,
        group_id: &EntityId,
    ) -> AdminResult<Vec<MemberRecord>> {
        self.list_group_members_with(token, group_id, PageOptions::default())
            .await
    }

    /// Lists every member of a group, fetching pages until the termination
    /// rule is met. Members are returned in server order.
    pub async fn list_group_members_with(
        &self,
        token: &AccessToken,
        group_id: &EntityId,
        options: PageOptions,
    ) -> AdminResult<Vec<MemberRecord>> {
        let page_size = options.page_size.max(1);
        let path = format!("/groups/{}/members", group_id);
        let mut members = Vec::new();
        let mut first: u32 = 0;

        loop {
            let query = [("first", first), ("max", page_size)];
            let page: Vec<MemberRecord> = self.get_json(token, &path, &query).await?;
            let received = page.len();

            tracing::debug!(group_id = %group_id, first, received, "Fetched member page");
            members.extend(page);

            if options.termination.is_last(received, page_size) {
                break;
            }
            first = next_offset(first, page_size)?;
        }

        tracing::info!(group_id = %group_id, count = members.len(), "Listed group members");
        Ok(members)
    }
}
