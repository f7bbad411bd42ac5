//! Domain objects returned by the Canny API.
//!
//! Field names follow the wire format (camelCase with upper-case `ID`/`URL`
//! suffixes); timestamps stay ISO-8601 strings as the API delivers them.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A board: the high-level object users post and vote on ideas under.
///
/// Reference: <https://developers.canny.io/api-reference#board_object>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: String,
    pub created: String,
    pub is_private: bool,
    pub name: String,
    /// Non-deleted posts on the board, including closed and complete ones.
    pub post_count: i64,
    pub private_comments: bool,
    pub url: String,
}

/// A category posts can be assigned to. Each category belongs to a specific
/// board, not the whole company.
///
/// Reference: <https://developers.canny.io/api-reference#category_object>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub board: Board,
    pub created: String,
    pub name: String,
    /// Null when the category is not a sub category.
    #[serde(rename = "parentID", default)]
    pub parent_id: Option<String>,
    pub post_count: i64,
    pub url: String,
}

/// A single entry in the changelog.
///
/// Reference: <https://developers.canny.io/api-reference#entry_object>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangelogEntry {
    pub id: String,
    pub created: String,
    pub labels: Vec<String>,
    pub last_saved: String,
    pub markdown_details: String,
    /// Plaintext contents with images, videos, and links stripped.
    pub plaintext_details: String,
    pub posts: Vec<Post>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub scheduled_for: Option<String>,
    pub reactions: Reactions,
    /// One of "draft", "scheduled", or "published".
    pub status: String,
    pub title: String,
    /// Can include "new", "improved", or "fixed".
    pub types: Vec<String>,
    pub url: String,
}

/// A comment left by a user or admin. Always associated with a post.
///
/// Reference: <https://developers.canny.io/api-reference#comment_object>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub author: User,
    pub board: Board,
    pub created: String,
    #[serde(rename = "imageURLs", default)]
    pub image_urls: Vec<String>,
    pub internal: bool,
    pub like_count: i64,
    pub mentions: Vec<User>,
    /// Null when the comment is not a reply.
    #[serde(rename = "parentID", default)]
    pub parent_id: Option<String>,
    pub post: Post,
    pub private: bool,
    pub reactions: Reactions,
    pub value: String,
}

/// A company, associated to users via the SDK, SSO tokens, or the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub created: String,
    #[serde(default)]
    pub custom_fields: Map<String, Value>,
    pub domain: String,
    pub member_count: i64,
    pub monthly_spend: f64,
    pub name: String,
}

/// A potential customer synced in from Salesforce or Hubspot.
///
/// Reference: <https://developers.canny.io/api-reference#opportunity_object>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opportunity {
    pub id: String,
    pub closed: bool,
    pub name: String,
    #[serde(rename = "postIDs")]
    pub post_ids: Vec<String>,
    #[serde(rename = "salesforceOpportunityID")]
    pub salesforce_opportunity_id: String,
    pub value: f64,
    pub won: bool,
}

/// A Clickup task linked with a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostLinkedClickupTask {
    pub id: String,
    pub link_id: String,
    pub name: String,
    #[serde(rename = "postID")]
    pub post_id: String,
    pub status: String,
    pub url: String,
}

/// A Jira issue linked with a post.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostLinkedJiraIssue {
    pub id: String,
    pub key: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostClickupLinks {
    #[serde(default)]
    pub linked_tasks: Vec<PostLinkedClickupTask>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostJiraLinks {
    #[serde(default)]
    pub linked_issues: Vec<PostLinkedJiraIssue>,
}

/// An idea posted to a board. Always associated with a board; users can vote
/// on it.
///
/// Reference: <https://developers.canny.io/api-reference#post_object>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    /// Null when the author's account has been deleted.
    #[serde(default)]
    pub author: Option<User>,
    pub board: Board,
    /// The admin who created the post on behalf of the author, if any.
    #[serde(default)]
    pub by: Option<User>,
    #[serde(default)]
    pub category: Option<Category>,
    pub comment_count: i64,
    pub created: String,
    #[serde(default)]
    pub clickup: PostClickupLinks,
    /// The longer free-text field (the shorter one is `title`).
    pub details: String,
    /// Month and year the post is estimated to be delivered.
    #[serde(default)]
    pub eta: Option<String>,
    #[serde(rename = "imageURLs", default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub jira: PostJiraLinks,
    #[serde(default)]
    pub owner: Option<User>,
    /// Number of votes cast on this post.
    pub score: i64,
    /// "open", "under review", "planned", "in progress", "complete",
    /// "closed", or any custom status configured on the settings page.
    pub status: String,
    #[serde(default)]
    pub status_changed_at: Option<String>,
    pub tags: Vec<String>,
    pub title: String,
    pub url: String,
}

/// Reaction counts on an entry or comment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Reactions {
    #[serde(default)]
    pub like: i64,
}

/// The comment attached to a status change. Only the image URLs and the
/// text value are included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangeComment {
    #[serde(rename = "imageURLs", default)]
    pub image_urls: Vec<String>,
    pub value: String,
}

/// A record of a post's status being changed.
///
/// Reference: <https://developers.canny.io/api-reference#status_change_object>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChange {
    pub id: String,
    #[serde(default)]
    pub change_comment: Option<ChangeComment>,
    pub changer: User,
    pub created: String,
    pub post: Post,
    pub status: String,
}

/// A tag posts can be assigned. Each tag belongs to a specific board.
///
/// Reference: <https://developers.canny.io/api-reference#tag_object>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub id: String,
    pub board: Board,
    pub created: String,
    pub name: String,
    pub post_count: i64,
    pub url: String,
}

/// A user. Users create posts, votes, and comments; admins have user
/// accounts too.
///
/// Reference: <https://developers.canny.io/api-reference#user_object>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    #[serde(rename = "avatarURL", default)]
    pub avatar_url: Option<String>,
    pub created: String,
    #[serde(default)]
    pub custom_fields: Map<String, Value>,
    /// Null when the account was created by voting on behalf of the user.
    #[serde(default)]
    pub email: Option<String>,
    pub is_admin: bool,
    #[serde(default)]
    pub last_activity: Option<String>,
    pub name: String,
    pub url: String,
    /// The user's identifier in your application. Only present for accounts
    /// authenticated via single sign-on or created via the API.
    #[serde(rename = "userID", default)]
    pub user_id: Option<String>,
}

/// A vote cast on a post, by a user or by an admin on their behalf.
///
/// Reference: <https://developers.canny.io/api-reference#vote_object>
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vote {
    pub id: String,
    pub board: Board,
    /// The admin who cast this vote on behalf of a user; null when the user
    /// voted themselves.
    #[serde(default)]
    pub by: Option<User>,
    pub created: String,
    pub post: Post,
    pub voter: User,
}
