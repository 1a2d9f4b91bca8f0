//! Repository layer for data access.

pub mod entities;
mod client_repository;
pub mod filters;
mod order_repository;

pub use client_repository::{ClientRepository, ClientStore};
pub use order_repository::{OrderRepository, OrderStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use client_repository::MockClientRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use order_repository::MockOrderRepository;
