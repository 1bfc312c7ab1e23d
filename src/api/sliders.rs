//! Homepage slider endpoint. Public, used for the storefront banner strip.

use crate::models::Slider;

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Banner slides for the storefront home page, in display order.
    pub async fn fetch_sliders(&self) -> Result<Vec<Slider>, ApiError> {
        self.get("/sliders").await
    }
}
