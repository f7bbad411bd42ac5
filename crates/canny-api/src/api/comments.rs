use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::CannyClient;
use crate::error::Result;
use crate::http::Transport;
use crate::types::Comment;

/// Options for [`CannyClient::list_comments`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsOptions {
    /// The id of the author you'd like to fetch comments for.
    #[serde(rename = "authorID", skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    /// The id of the board you'd like to fetch comments for.
    #[serde(rename = "boardID", skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
    /// Only fetch comments by users linked to the company with this custom
    /// identifier.
    #[serde(rename = "companyID", skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// The id of the post you'd like to fetch comments for.
    #[serde(rename = "postID", skip_serializing_if = "Option::is_none")]
    pub post_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

/// Response of [`CannyClient::list_comments`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCommentsResponse {
    pub comments: Vec<Comment>,
    pub has_more: bool,
}

/// Options for [`CannyClient::create_comment`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCommentOptions {
    /// The unique identifier of the comment's author.
    #[serde(rename = "authorID")]
    pub author_id: String,
    /// The unique identifier of the comment's post.
    #[serde(rename = "postID")]
    pub post_id: String,
    /// The comment text.
    pub value: String,
    #[serde(rename = "imageURLs", skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
    /// Whether the comment is only available internally. Default is false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal: Option<bool>,
    /// The id of the parent comment, when replying.
    #[serde(rename = "parentID", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Whether the comment may trigger email notifications. Default is
    /// false.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub should_notify_voters: Option<bool>,
}

/// Response of [`CannyClient::create_comment`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCommentResponse {
    pub id: String,
}

impl<T: Transport> CannyClient<T> {
    /// Retrieves the details of an existing comment, specified by its id.
    ///
    /// Reference: <https://developers.canny.io/api-reference#retrieve_comment>
    pub async fn retrieve_comment(&self, id: &str) -> Result<Comment> {
        self.request("/comments/retrieve", &json!({ "id": id }))
            .await
    }

    /// Returns a list of comments, sorted by newest.
    ///
    /// Reference: <https://developers.canny.io/api-reference#list_comments>
    pub async fn list_comments(&self, options: &ListCommentsOptions) -> Result<ListCommentsResponse> {
        self.request("/comments/list", options).await
    }

    /// Creates a new comment.
    ///
    /// Reference: <https://developers.canny.io/api-reference#create_comment>
    pub async fn create_comment(
        &self,
        options: &CreateCommentOptions,
    ) -> Result<CreateCommentResponse> {
        self.request("/comments/create", options).await
    }

    /// Deletes a comment.
    ///
    /// Reference: <https://developers.canny.io/api-reference#delete_comment>
    pub async fn delete_comment(&self, comment_id: &str) -> Result<()> {
        self.request_unit("/comments/delete", &json!({ "commentID": comment_id }))
            .await
    }
}
