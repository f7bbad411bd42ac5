use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::client::CannyClient;
use crate::error::Result;
use crate::http::Transport;
use crate::types::Category;

/// Options for [`CannyClient::list_categories`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCategoriesOptions {
    /// The id of the board you'd like to fetch categories for.
    #[serde(rename = "boardID", skip_serializing_if = "Option::is_none")]
    pub board_id: Option<String>,
    /// Number of categories to fetch. Defaults to 10, max 10000.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Number of categories to skip before starting to fetch. Defaults to 0.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

/// Response of [`CannyClient::list_categories`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCategoriesResponse {
    pub categories: Vec<Category>,
    /// Whether the query matched more categories than the limit.
    pub has_more: bool,
}

/// Options for [`CannyClient::create_category`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCategoryOptions {
    /// The id of the board to create the category under.
    #[serde(rename = "boardID")]
    pub board_id: String,
    /// Category name, between 1 and 30 characters long.
    pub name: String,
    /// The id of the parent category, for sub categories.
    #[serde(rename = "parentID", skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    /// Whether admins will be subscribed to the category.
    pub subscribe_admins: bool,
}

/// Response of [`CannyClient::create_category`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateCategoryResponse {
    pub id: String,
}

impl<T: Transport> CannyClient<T> {
    /// Retrieves the details of an existing category, specified by its id.
    ///
    /// Reference: <https://developers.canny.io/api-reference#retrieve_category>
    pub async fn retrieve_category(&self, id: &str) -> Result<Category> {
        self.request("/categories/retrieve", &json!({ "id": id }))
            .await
    }

    /// Returns a list of categories, sorted by newest.
    ///
    /// Reference: <https://developers.canny.io/api-reference#list_categories>
    pub async fn list_categories(
        &self,
        options: &ListCategoriesOptions,
    ) -> Result<ListCategoriesResponse> {
        self.request("/categories/list", options).await
    }

    /// Creates a new category.
    ///
    /// Reference: <https://developers.canny.io/api-reference#create_category>
    pub async fn create_category(
        &self,
        options: &CreateCategoryOptions,
    ) -> Result<CreateCategoryResponse> {
        self.request("/categories/create", options).await
    }

    /// Deletes a category, provided it has no sub categories.
    ///
    /// Reference: <https://developers.canny.io/api-reference#delete_category>
    pub async fn delete_category(&self, id: &str) -> Result<()> {
        self.request_unit("/categories/delete", &json!({ "id": id }))
            .await
    }
}
