use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::client::CannyClient;
use crate::error::Result;
use crate::http::Transport;
use crate::types::Company;

/// Options for [`CannyClient::list_companies`].
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCompaniesOptions {
    /// A string to search by company name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    /// URL name of the segment to filter companies by.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip: Option<u32>,
}

/// Response of [`CannyClient::list_companies`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListCompaniesResponse {
    pub companies: Vec<Company>,
    pub has_more: bool,
}

/// Options for [`CannyClient::update_company`].
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCompanyOptions {
    /// The identifier you use for the company.
    pub id: String,
    /// Creation date of the company in your system, ISO 8601.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    /// Field names must be at most 30 characters; string values at most
    /// 200.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_fields: Option<Map<String, Value>>,
    /// MRR in dollars, rounded to two decimal places.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monthly_spend: Option<f64>,
    /// Company name, at most 100 characters long.
    pub name: String,
}

/// Response of [`CannyClient::update_company`].
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateCompanyResponse {
    pub id: String,
}

impl<T: Transport> CannyClient<T> {
    /// Returns all companies associated with your company, ordered by
    /// created date.
    ///
    /// Reference: <https://developers.canny.io/api-reference#list_companies>
    pub async fn list_companies(
        &self,
        options: &ListCompaniesOptions,
    ) -> Result<ListCompaniesResponse> {
        self.request("/companies/list", options).await
    }

    /// Updates a company with the data supplied. Fields set here can be
    /// overwritten by company syncing integrations (Hubspot, Salesforce,
    /// SSO tokens, ...).
    ///
    /// Reference: <https://developers.canny.io/api-reference#update_company>
    pub async fn update_company(
        &self,
        options: &UpdateCompanyOptions,
    ) -> Result<UpdateCompanyResponse> {
        self.request("/companies/update", options).await
    }

    /// Deletes a company.
    pub async fn delete_company(&self, company_id: &str) -> Result<()> {
        self.request_unit("/companies/delete", &json!({ "companyID": company_id }))
            .await
    }
}
