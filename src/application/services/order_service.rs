/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::application::interfaces::customer::OrderService;
use crate::application::services::common::{
    create_one, fetch_one, fetch_page, nested_path, resource_path, update_one,
};
use crate::error::AppError;
use crate::model::http::HttpClient;
use crate::model::pagination::{ListParams, Page};
use crate::model::responses::OrderResponse;
use crate::presentation::order::Order;
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Implementation of the order service
pub struct OrderServiceImpl {
    http_client: Arc<HttpClient>,
}

impl OrderServiceImpl {
    /// Creates a new instance of the order service
    pub fn new(http_client: Arc<HttpClient>) -> Self {
        Self { http_client }
    }
}

#[async_trait]
impl OrderService for OrderServiceImpl {
    async fn create(&self, customer_id: &str, order: &Order) -> Result<Order, AppError> {
        info!("Creating order for merchant: {}", customer_id);
        let path = nested_path("customers", customer_id, "orders")?;
        create_one::<OrderResponse, _>(&self.http_client, &path, Some(order)).await
    }

    async fn fetch(&self, order_id: &str) -> Result<Order, AppError> {
        debug!("Fetching order: {}", order_id);
        fetch_one::<OrderResponse>(&self.http_client, &resource_path("orders", order_id)?).await
    }

    async fn list(&self, params: &ListParams) -> Result<Page<Order>, AppError> {
        fetch_page::<OrderResponse>(&self.http_client, "/orders", params).await
    }

    async fn update(&self, order_id: &str, params: &Value) -> Result<Order, AppError> {
        info!("Updating order: {}", order_id);
        update_one::<OrderResponse, _>(&self.http_client, &resource_path("orders", order_id)?, params).await
    }
}
