use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::client::CannyClient;
use crate::error::Result;
use crate::http::Transport;
use crate::types::Post;

/// Identifier for [`CannyClient::retrieve_post`]: either the post's id, or
/// its board plus URL name. The server disambiguates by field presence.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum RetrievePostOptions {
    ById {
        id: String,
    },
    ByUrlName {
        #[serde(rename = "boardID")]
        board_id: String,
        #[serde(rename = "urlName")]
        url_name: String,
    },
}

/// Sort order for listing posts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PostSort {
    Newest,
    Oldest,
    Relevance,
    Score,
    StatusChanged,
    Trending,
}

/// Options for [`CannyClient::list_posts`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsOptions {
    #[serde(rename = "boardID", skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
    #[serde(rename = "authorID", skip_serializing_if = "Option::is_none")]
    pub author_id: Option<String>,
    /// Only fetch posts created by users linked to the company with this
    /// custom identifier.
    #[serde(rename = "companyID", skip_serializing_if = "Option::is_none")]
    pub company_id: Option<String>,
    #[serde(rename = "tagIDs", skip_serializing_if = "Option::is_none")]
    pub tag_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<PostSort>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Response of [`CannyClient::list_posts`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPostsResponse {
    pub posts: Vec<Post>,
    pub has_more: bool,
}

/// Options for [`CannyClient::create_post`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePostOptions {
    #[serde(rename = "authorID")]
    pub author_id: String,
    #[serde(rename = "boardID")]
    pub board_id: String,
    /// The admin creating the post on behalf of the author.
    #[serde(rename = "byID", skip_serializing_if = "Option::is_none")]
    pub by_id: Option<String>,
    #[serde(rename = "categoryID", skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    pub details: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_public: Option<String>,
    pub title: String,
    #[serde(rename = "ownerID", skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<String>,
    #[serde(rename = "imageURLs", skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
}

/// Response of [`CannyClient::create_post`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostResponse {
    pub id: String,
}

/// Options for [`CannyClient::change_post_category`].
#[derive(Debug, Clone, Serialize)]
pub struct ChangePostCategoryOptions {
    #[serde(rename = "postID")]
    pub post_id: String,
    /// The category to assign; `None` clears the post's category.
    #[serde(rename = "categoryID")]
    pub category_id: Option<String>,
}

/// Options for [`CannyClient::change_post_status`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePostStatusOptions {
    /// The admin changing the status.
    #[serde(rename = "changerID")]
    pub changer_id: String,
    #[serde(rename = "postID")]
    pub post_id: String,
    pub should_notify_voters: bool,
    /// The status to change the post to.
    pub status: String,
    /// Text of the comment attached to the status change.
    pub comment_value: String,
    #[serde(rename = "commentImageURLs")]
    pub comment_image_urls: Vec<String>,
}

/// Options for [`CannyClient::update_post`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePostOptions {
    #[serde(rename = "postID")]
    pub post_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eta_public: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "imageURLs", skip_serializing_if = "Option::is_none")]
    pub image_urls: Option<Vec<String>>,
}

impl<T: Transport> CannyClient<T> {
    /// Retrieves the details of an existing post, specified either by its
    /// id or by its board and URL name.
    ///
    /// Reference: <https://developers.canny.io/api-reference#retrieve_post>
    pub async fn retrieve_post(&self, options: &RetrievePostOptions) -> Result<Post> {
        self.request("/posts/retrieve", options).await
    }

    /// Returns a list of posts. Include parameters to specify board,
    /// pagination, search, and filtering.
    ///
    /// Reference: <https://developers.canny.io/api-reference#list_posts>
    pub async fn list_posts(&self, options: &ListPostsOptions) -> Result<ListPostsResponse> {
        self.request("/posts/list", options).await
    }

    /// Creates a new post.
    ///
    /// Reference: <https://developers.canny.io/api-reference#create_post>
    pub async fn create_post(&self, options: &CreatePostOptions) -> Result<CreatePostResponse> {
        self.request("/posts/create", options).await
    }

    /// Assigns a post to a category, or clears it.
    pub async fn change_post_category(
        &self,
        options: &ChangePostCategoryOptions,
    ) -> Result<Post> {
        self.request("/posts/change_category", options).await
    }

    /// Changes a post's status, optionally notifying voters.
    pub async fn change_post_status(&self, options: &ChangePostStatusOptions) -> Result<Post> {
        self.request("/posts/change_status", options).await
    }

    /// Attaches an existing tag to a post.
    pub async fn add_post_tag(&self, post_id: &str, tag_id: &str) -> Result<Post> {
        self.request(
            "/posts/add_tag",
            &serde_json::json!({ "postID": post_id, "tagID": tag_id }),
        )
        .await
    }

    /// Removes a tag from a post.
    pub async fn remove_post_tag(&self, post_id: &str, tag_id: &str) -> Result<Post> {
        self.request(
            "/posts/remove_tag",
            &serde_json::json!({ "postID": post_id, "tagID": tag_id }),
        )
        .await
    }

    /// Updates any of a post's details, eta, title, images, or custom
    /// fields.
    pub async fn update_post(&self, options: &UpdatePostOptions) -> Result<()> {
        self.request_unit("/posts/update", options).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrieve_options_serialize_as_flat_objects() {
        let by_id = RetrievePostOptions::ById {
            id: "p1".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&by_id).unwrap(),
            serde_json::json!({"id": "p1"})
        );

        let by_url = RetrievePostOptions::ByUrlName {
            board_id: "b1".to_string(),
            url_name: "dark-mode".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&by_url).unwrap(),
            serde_json::json!({"boardID": "b1", "urlName": "dark-mode"})
        );
    }

    #[test]
    fn list_options_omit_unset_fields() {
        let value = serde_json::to_value(ListPostsOptions::default()).unwrap();
        assert_eq!(value, serde_json::json!({}));

        let value = serde_json::to_value(ListPostsOptions {
            board_id: Some("b1".to_string()),
            sort: Some(PostSort::StatusChanged),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({"boardID": "b1", "sort": "statusChanged"}));
    }

    #[test]
    fn clearing_a_category_serializes_null() {
        let value = serde_json::to_value(ChangePostCategoryOptions {
            post_id: "p1".to_string(),
            category_id: None,
        })
        .unwrap();
        assert_eq!(value, serde_json::json!({"postID": "p1", "categoryID": null}));
    }

    #[test]
    fn create_options_use_wire_field_names() {
        let value = serde_json::to_value(CreatePostOptions {
            author_id: "u1".to_string(),
            board_id: "b1".to_string(),
            by_id: None,
            category_id: None,
            custom_fields: None,
            details: "More detail".to_string(),
            eta: None,
            eta_public: None,
            title: "Title".to_string(),
            owner_id: Some("u2".to_string()),
            image_urls: None,
        })
        .unwrap();

        assert_eq!(value["authorID"], "u1");
        assert_eq!(value["boardID"], "b1");
        assert_eq!(value["ownerID"], "u2");
        assert!(value.get("byID").is_none());
    }
}
