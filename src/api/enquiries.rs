//! Contact form endpoint. Open to anyone, signed in or not.

use crate::models::{EnquiryRequest, MessageResponse};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Submit a contact enquiry to the store.
    pub async fn submit_enquiry(&self, request: &EnquiryRequest) -> Result<MessageResponse, ApiError> {
        self.post("/enquiries", request).await
    }
}
