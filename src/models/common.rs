//! Shared response shapes.

use serde::Deserialize;

/// Acknowledgement body the backend returns for writes that produce no
/// entity (deletes, enquiry submissions).
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub message: Option<String>,
}
