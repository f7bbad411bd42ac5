use serde::{Deserialize, Serialize};

use crate::client::CannyClient;
use crate::error::Result;
use crate::http::Transport;
use crate::types::ChangelogEntry;

/// The kind of change an entry describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangelogEntryType {
    Fixed,
    New,
    Improved,
}

/// Sort order for listing changelog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ChangelogSort {
    Created,
    LastSaved,
    NonPublishedFirst,
    PublishedAt,
}

/// Options for [`CannyClient::create_changelog_entry`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateChangelogEntryOptions {
    pub title: String,
    pub details: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<ChangelogEntryType>,
    /// Whether to publish the entry immediately. Default is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published: Option<bool>,
    /// Publication date in ISO 8601 format, for scheduled entries.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_for: Option<String>,
    /// Labels to assign, each between 1 and 30 characters long.
    #[serde(rename = "labelIDs", skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
    /// Posts to link to the entry.
    #[serde(rename = "postIDs", skip_serializing_if = "Option::is_none")]
    pub post_ids: Option<Vec<String>>,
}

/// Response of [`CannyClient::create_changelog_entry`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateChangelogEntryResponse {
    pub id: String,
}

/// Options for [`CannyClient::list_changelog_entries`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListChangelogEntriesOptions {
    /// Fetch only entries carrying at least one of these labels.
    #[serde(rename = "labelIDs", skip_serializing_if = "Option::is_none")]
    pub label_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    /// Defaults to `NonPublishedFirst` if not specified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<ChangelogSort>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub entry_type: Option<ChangelogEntryType>,
}

/// Response of [`CannyClient::list_changelog_entries`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListChangelogEntriesResponse {
    pub entries: Vec<ChangelogEntry>,
    pub has_more: bool,
}

impl<T: Transport> CannyClient<T> {
    /// Creates and (optionally) publishes a new changelog entry.
    ///
    /// Reference: <https://developers.canny.io/api-reference#create_entry>
    pub async fn create_changelog_entry(
        &self,
        options: &CreateChangelogEntryOptions,
    ) -> Result<CreateChangelogEntryResponse> {
        self.request("/entries/create", options).await
    }

    /// Returns a list of changelog entries, sorted by newest.
    ///
    /// Reference: <https://developers.canny.io/api-reference#list_entries>
    pub async fn list_changelog_entries(
        &self,
        options: &ListChangelogEntriesOptions,
    ) -> Result<ListChangelogEntriesResponse> {
        self.request("/entries/list", options).await
    }
}
