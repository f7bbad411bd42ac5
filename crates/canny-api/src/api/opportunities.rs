use serde::{Deserialize, Serialize};

use crate::client::CannyClient;
use crate::error::Result;
use crate::http::Transport;
use crate::types::Opportunity;

/// Options for [`CannyClient::list_opportunities`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListOpportunitiesOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

/// Response of [`CannyClient::list_opportunities`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListOpportunitiesResponse {
    pub opportunities: Vec<Opportunity>,
    pub has_more: bool,
}

impl<T: Transport> CannyClient<T> {
    /// Returns a list of opportunities linked to posts.
    ///
    /// Reference: <https://developers.canny.io/api-reference#list_opportunities>
    pub async fn list_opportunities(
        &self,
        options: &ListOpportunitiesOptions,
    ) -> Result<ListOpportunitiesResponse> {
        self.request("/opportunities/list", options).await
    }
}
