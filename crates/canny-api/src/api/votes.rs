use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::CannyClient;
use crate::error::Result;
use crate::http::Transport;
use crate::types::Vote;

/// Options for [`CannyClient::list_votes`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListVotesOptions {
    /// The id of the board you'd like to fetch votes for.
    #[serde(rename = "boardID", skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
    /// Only fetch votes by users linked to the company with this custom
    /// identifier.
    #[serde(rename = "companyID", skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Only fetch votes for a specific post.
    #[serde(rename = "postID", skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    /// Only fetch votes cast by a specific user.
    #[serde(rename = "userID", skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

/// Response of [`CannyClient::list_votes`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListVotesResponse {
    pub votes: Vec<Vote>,
    pub has_more: bool,
}

/// Options for [`CannyClient::create_vote`].
#[derive(Debug, Clone, Serialize)]
pub struct CreateVoteOptions {
    /// The admin casting the vote on behalf of the voter.
    #[serde(rename = "byID", skip_serializing_if = "Option::is_none")]
    pub by_id: Option<String>,
    #[serde(rename = "postID")]
    pub post_id: String,
    #[serde(rename = "voterID")]
    pub voter_id: String,
}

/// Options for [`CannyClient::delete_vote`].
#[derive(Debug, Clone, Serialize)]
pub struct DeleteVoteOptions {
    #[serde(rename = "postID")]
    pub post_id: String,
    #[serde(rename = "voterID")]
    pub voter_id: String,
}

impl<T: Transport> CannyClient<T> {
    /// Retrieves the details of an existing vote, specified by its id.
    ///
    /// Reference: <https://developers.canny.io/api-reference#retrieve_vote>
    pub async fn retrieve_vote(&self, id: &str) -> Result<Vote> {
        self.request("/votes/retrieve", &json!({ "id": id })).await
    }

    /// Returns a list of votes, sorted by newest.
    ///
    /// Reference: <https://developers.canny.io/api-reference#list_votes>
    pub async fn list_votes(&self, options: &ListVotesOptions) -> Result<ListVotesResponse> {
        self.request("/votes/list", options).await
    }

    /// Casts a vote. Succeeds whether the vote was created or already
    /// existed.
    ///
    /// Reference: <https://developers.canny.io/api-reference#create_vote>
    pub async fn create_vote(&self, options: &CreateVoteOptions) -> Result<()> {
        self.request_unit("/votes/create", options).await
    }

    /// Removes a vote. Succeeds whether the vote was deleted or already
    /// absent.
    ///
    /// Reference: <https://developers.canny.io/api-reference#delete_vote>
    pub async fn delete_vote(&self, options: &DeleteVoteOptions) -> Result<()> {
        self.request_unit("/votes/delete", options).await
    }
}
