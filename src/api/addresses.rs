//! Saved delivery address endpoints. All of these require a signed-in
//! session; the backend rejects unauthenticated calls with a 401.

use crate::models::{Address, AddressRequest, MessageResponse};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// All addresses saved on the account.
    pub async fn fetch_addresses(&self) -> Result<Vec<Address>, ApiError> {
        self.get("/addresses").await
    }

    /// Save a new address, returning it with its assigned id.
    pub async fn create_address(&self, request: &AddressRequest) -> Result<Address, ApiError> {
        self.post("/addresses", request).await
    }

    /// Replace an existing address.
    pub async fn update_address(
        &self,
        address_id: i64,
        request: &AddressRequest,
    ) -> Result<Address, ApiError> {
        self.put(&format!("/addresses/{address_id}"), request).await
    }

    /// Remove an address. The backend acknowledges with a message body
    /// rather than an empty response.
    pub async fn delete_address(&self, address_id: i64) -> Result<MessageResponse, ApiError> {
        self.delete(&format!("/addresses/{address_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MemoryCredentialStore, Session};
    use crate::config::Config;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_delete_address_parses_the_acknowledgement() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/addresses/3"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"message": "Address removed"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        std::env::remove_var("SHOPWIRE_API_URL");
        let config = Config {
            api_base_url: Some(server.uri()),
            storage_dir: None,
        };
        let client = ApiClient::new(&config, Session::new(MemoryCredentialStore::new()))
            .expect("client should build");

        let response = client.delete_address(3).await.expect("delete succeeds");
        assert_eq!(response.message.as_deref(), Some("Address removed"));
    }
}
