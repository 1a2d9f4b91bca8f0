//! Application state for dependency injection.

use std::sync::Arc;

use crate::config::SalesServiceConfig;
use crate::infra::Database;
use crate::repository::{ClientStore, OrderStore};
use crate::service::{ClientManager, ClientService, OrderManager, OrderService};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub client_service: Arc<dyn ClientService>,
    pub order_service: Arc<dyn OrderService>,
    pub database: Arc<Database>,
    pub config: SalesServiceConfig,
}

impl AppState {
    /// Wire the stores and services on top of an open database.
    pub fn from_database(database: Arc<Database>, config: SalesServiceConfig) -> Self {
        let clients = Arc::new(ClientStore::new(database.get_connection()));
        let orders = Arc::new(OrderStore::new(database.get_connection()));

        Self {
            client_service: Arc::new(ClientManager::new(clients.clone())),
            order_service: Arc::new(OrderManager::new(orders, clients)),
            database,
            config,
        }
    }
}
