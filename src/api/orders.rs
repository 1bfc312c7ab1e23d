//! Order endpoints: checkout and order history.

use crate::models::{Order, OrderRequest};

use super::{ApiClient, ApiError};

impl ApiClient {
    /// Place an order for the signed-in account. The backend prices the
    /// items itself and returns the created order.
    pub async fn place_order(&self, request: &OrderRequest) -> Result<Order, ApiError> {
        self.post("/orders", request).await
    }

    /// Order history for the signed-in account, newest first.
    pub async fn fetch_orders(&self) -> Result<Vec<Order>, ApiError> {
        self.get("/orders").await
    }

    /// One order with its line items.
    pub async fn fetch_order(&self, order_id: i64) -> Result<Order, ApiError> {
        self.get(&format!("/orders/{order_id}")).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{MemoryCredentialStore, Session};
    use crate::config::Config;
    use crate::models::{OrderItemRequest, OrderStatus};
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_place_order_sends_items_and_returns_the_created_order() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/orders"))
            .and(body_json(json!({
                "items": [{"productId": 9, "quantity": 2}],
                "addressId": 3
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({
                "id": 41,
                "items": [{"productId": 9, "name": "Assam Gold", "quantity": 2, "price": 39900}],
                "totalAmount": 79800,
                "status": "pending",
                "addressId": 3,
                "createdAt": "2025-06-01T09:30:00.000Z"
            })))
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

        let order = client
            .place_order(&OrderRequest {
                items: vec![OrderItemRequest {
                    product_id: 9,
                    quantity: 2,
                }],
                address_id: 3,
            })
            .await
            .expect("order placed");
        assert_eq!(order.id, 41);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.total_amount, 79800);
    }
}
