use serde::{Deserialize, Serialize};

use crate::client::CannyClient;
use crate::error::Result;
use crate::http::Transport;
use crate::types::StatusChange;

/// Options for [`CannyClient::list_status_changes`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListStatusChangesOptions {
    /// The id of the board you'd like to fetch status changes for.
    #[serde(rename = "boardID", skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

/// Response of [`CannyClient::list_status_changes`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListStatusChangesResponse {
    pub status_changes: Vec<StatusChange>,
    pub has_more: bool,
}

impl<T: Transport> CannyClient<T> {
    /// Returns a list of status changes, sorted by newest.
    ///
    /// Reference: <https://developers.canny.io/api-reference#list_status_changes>
    pub async fn list_status_changes(
        &self,
        options: &ListStatusChangesOptions,
    ) -> Result<ListStatusChangesResponse> {
        self.request("/status_changes/list", options).await
    }
}
