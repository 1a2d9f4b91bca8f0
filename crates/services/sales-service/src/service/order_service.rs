//! Order service - Handles order queries and lifecycle.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{Order, OrderData, TopLimit};

use crate::repository::{ClientRepository, OrderRepository};

/// Order service trait for dependency injection.
#[async_trait]
pub trait OrderService: Send + Sync {
    /// Get order by ID
    async fn get_order(&self, id: i64) -> AppResult<Order>;

    /// List all orders
    async fn list_orders(&self) -> AppResult<Vec<Order>>;

    /// Orders with a quantity strictly above `quantity`
    async fn get_orders_with_quantity_above(&self, quantity: i32) -> AppResult<Vec<Order>>;

    /// Orders with a quantity of at least `quantity`
    async fn get_orders_with_quantity_at_least(&self, quantity: i32) -> AppResult<Vec<Order>>;

    /// Orders priced strictly below `price`
    async fn get_orders_with_price_below(&self, price: f64) -> AppResult<Vec<Order>>;

    /// Orders priced at most `price`
    async fn get_orders_with_price_at_most(&self, price: f64) -> AppResult<Vec<Order>>;

    /// Orders whose tax-inclusive total lies within `[low, high]`
    async fn get_orders_with_total_between(&self, low: f64, high: f64) -> AppResult<Vec<Order>>;

    /// Orders with quantity above `quantity` and price below `price`
    async fn get_orders_with_quantity_above_and_price_below(
        &self,
        quantity: i32,
        price: f64,
    ) -> AppResult<Vec<Order>>;

    /// Highest tax-inclusive totals first, at most `limit` orders
    async fn top_orders(&self, limit: TopLimit) -> AppResult<Vec<Order>>;

    /// Create a new order
    async fn create_order(&self, data: OrderData) -> AppResult<Order>;

    /// Replace an order's fields
    async fn update_order(&self, id: i64, data: OrderData) -> AppResult<Order>;

    /// Delete an order
    async fn delete_order(&self, id: i64) -> AppResult<()>;
}

/// Concrete implementation of OrderService using repositories.
pub struct OrderManager {
    orders: Arc<dyn OrderRepository>,
    clients: Arc<dyn ClientRepository>,
}

impl OrderManager {
    /// Create new order service instance with repositories
    pub fn new(orders: Arc<dyn OrderRepository>, clients: Arc<dyn ClientRepository>) -> Self {
        Self { orders, clients }
    }

    /// An order may only reference a client that exists.
    async fn ensure_client(&self, data: &OrderData) -> AppResult<()> {
        let Some(client_id) = data.client_id else {
            return Ok(());
        };

        match self.clients.find_by_id(client_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::bad_request(format!(
                "Client {} does not exist",
                client_id
            ))),
        }
    }
}

#[async_trait]
impl OrderService for OrderManager {
    async fn get_order(&self, id: i64) -> AppResult<Order> {
        self.orders.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_orders(&self) -> AppResult<Vec<Order>> {
        self.orders.list().await
    }

    async fn get_orders_with_quantity_above(&self, quantity: i32) -> AppResult<Vec<Order>> {
        self.orders.find_by_quantity_greater_than(quantity).await
    }

    async fn get_orders_with_quantity_at_least(&self, quantity: i32) -> AppResult<Vec<Order>> {
        self.orders.find_by_quantity_greater_than_equal(quantity).await
    }

    async fn get_orders_with_price_below(&self, price: f64) -> AppResult<Vec<Order>> {
        self.orders.find_by_price_less_than(price).await
    }

    async fn get_orders_with_price_at_most(&self, price: f64) -> AppResult<Vec<Order>> {
        self.orders.find_by_price_less_than_equal(price).await
    }

    async fn get_orders_with_total_between(&self, low: f64, high: f64) -> AppResult<Vec<Order>> {
        self.orders.find_by_total_between(low, high).await
    }

    async fn get_orders_with_quantity_above_and_price_below(
        &self,
        quantity: i32,
        price: f64,
    ) -> AppResult<Vec<Order>> {
        self.orders
            .find_by_quantity_greater_than_and_price_less_than(quantity, price)
            .await
    }

    async fn top_orders(&self, limit: TopLimit) -> AppResult<Vec<Order>> {
        self.orders.find_top_by_total_desc(limit).await
    }

    async fn create_order(&self, data: OrderData) -> AppResult<Order> {
        self.ensure_client(&data).await?;
        let order = self.orders.create(data).await?;
        tracing::info!(order_id = order.id, "Order created");
        Ok(order)
    }

    async fn update_order(&self, id: i64, data: OrderData) -> AppResult<Order> {
        self.orders.find_by_id(id).await?.ok_or_not_found()?;
        self.ensure_client(&data).await?;
        self.orders.update(id, data).await
    }

    async fn delete_order(&self, id: i64) -> AppResult<()> {
        self.orders.delete(id).await?;
        tracing::info!(order_id = id, "Order deleted");
        Ok(())
    }
}
