//! Service layer - Business logic.

mod client_service;
mod order_service;

pub use client_service::{ClientManager, ClientService};
pub use order_service::{OrderManager, OrderService};
