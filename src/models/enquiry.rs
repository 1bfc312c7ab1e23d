//! Contact enquiry payload.

use serde::Serialize;

/// A message submitted through the storefront contact form.
#[derive(Debug, Clone, Serialize)]
pub struct EnquiryRequest {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub message: String,
}
