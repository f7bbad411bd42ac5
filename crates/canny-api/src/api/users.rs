use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::client::CannyClient;
use crate::error::Result;
use crate::http::Transport;
use crate::types::{Company, User};

/// Options for [`CannyClient::list_users`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct ListUsersOptions {
    /// Number of users to fetch. Defaults to 10, max 100.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

/// Identifier for [`CannyClient::retrieve_user`]: exactly one of the user's
/// Canny id, their id in your application, or their email. All three are
/// unique per user; the server disambiguates by field presence.
#[derive(Debug, Clone, Serialize)]
pub enum RetrieveUserOptions {
    #[serde(rename = "email")]
    ByEmail(String),
    #[serde(rename = "id")]
    ById(String),
    /// Only works for users authenticated via single sign-on or created
    /// via the API.
    #[serde(rename = "userID")]
    ByUserId(String),
}

/// Options for [`CannyClient::create_or_update_user`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrUpdateUserOptions {
    /// URL pointing to the user's avatar image.
    #[serde(rename = "avatarURL", skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    /// Companies the user is associated with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub companies: Option<Vec<Company>>,
    /// The date the user was created in your system, ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Field names must be at most 30 characters; string values at most
    /// 200.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// The user's name, between 1 and 50 characters.
    pub name: String,
    /// The user's unique identifier in your application.
    #[serde(rename = "userID")]
    pub user_id: String,
}

/// Response of [`CannyClient::create_or_update_user`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateOrUpdateUserResponse {
    pub id: String,
}

impl<T: Transport> CannyClient<T> {
    /// Lists your company's users.
    pub async fn list_users(&self, options: &ListUsersOptions) -> Result<Vec<User>> {
        self.request("/users/list", options).await
    }

    /// Retrieves the details of an existing user by one of their unique
    /// identifiers.
    ///
    /// Reference: <https://developers.canny.io/api-reference#retrieve_user>
    pub async fn retrieve_user(&self, options: &RetrieveUserOptions) -> Result<User> {
        self.request("/users/retrieve", options).await
    }

    /// Finds the id for a user: creates the user if they don't exist, or
    /// updates them with the supplied data if they do. Useful before
    /// calling creation endpoints that need an author account.
    ///
    /// Reference: <https://developers.canny.io/api-reference#create_or_update_user>
    pub async fn create_or_update_user(
        &self,
        options: &CreateOrUpdateUserOptions,
    ) -> Result<CreateOrUpdateUserResponse> {
        self.request("/users/create_or_update", options).await
    }

    /// Deletes a user along with all of their comments and votes. Posts
    /// left without any other comments or votes are removed too.
    ///
    /// Reference: <https://developers.canny.io/api-reference#delete_user>
    pub async fn delete_user(&self, id: &str) -> Result<()> {
        self.request_unit("/users/delete", &json!({ "id": id })).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn retrieve_options_serialize_to_a_single_field() {
        let by_email = RetrieveUserOptions::ByEmail("ada@example.test".to_string());
        assert_eq!(
            serde_json::to_value(&by_email).unwrap(),
            json!({"email": "ada@example.test"})
        );

        let by_user_id = RetrieveUserOptions::ByUserId("external-7".to_string());
        assert_eq!(
            serde_json::to_value(&by_user_id).unwrap(),
            json!({"userID": "external-7"})
        );
    }
}
