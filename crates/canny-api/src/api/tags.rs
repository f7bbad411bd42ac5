use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::CannyClient;
use crate::error::Result;
use crate::http::Transport;
use crate::types::Tag;

/// Options for [`CannyClient::list_tags`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListTagsOptions {
    /// The id of the board you'd like to fetch tags for.
    #[serde(rename = "boardID", skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

/// Response of [`CannyClient::list_tags`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListTagsResponse {
    pub tags: Vec<Tag>,
    pub has_more: bool,
}

/// Options for [`CannyClient::create_tag`].
#[derive(Debug, Clone, Serialize)]
pub struct CreateTagOptions {
    /// The board the tag should be created for.
    #[serde(rename = "boardID")]
    pub board_id: String,
    /// Tag name, between 1 and 30 characters long.
    pub name: String,
}

impl<T: Transport> CannyClient<T> {
    /// Retrieves the details of an existing tag, specified by its id.
    ///
    /// Reference: <https://developers.canny.io/api-reference#retrieve_tag>
    pub async fn retrieve_tag(&self, id: &str) -> Result<Tag> {
        self.request("/tags/retrieve", &json!({ "id": id })).await
    }

    /// Returns a list of tags, sorted by newest.
    ///
    /// Reference: <https://developers.canny.io/api-reference#list_tags>
    pub async fn list_tags(&self, options: &ListTagsOptions) -> Result<ListTagsResponse> {
        self.request("/tags/list", options).await
    }

    /// Creates a new tag, returning it (or the existing tag with the same
    /// name).
    ///
    /// Reference: <https://developers.canny.io/api-reference#create_tag>
    pub async fn create_tag(&self, options: &CreateTagOptions) -> Result<Tag> {
        self.request("/tags/create", options).await
    }
}
