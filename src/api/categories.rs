//! Catalog endpoints. Browsing is public, so these work with or without a
//! stored credential.

use crate::models::Category;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// All storefront categories, without their product lists.
    pub async fn fetch_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get("/categories").await
    }

    /// One category with its products embedded.
    pub async fn fetch_category(&self, category_id: i64) -> Result<Category, ApiError> {
        self.get(&format!("/categories/{category_id}")).await
    }
}
