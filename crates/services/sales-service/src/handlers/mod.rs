//! HTTP request handlers.

pub mod client_handler;
pub mod health_handler;
pub mod order_handler;

pub use client_handler::client_routes;
pub use health_handler::health_routes;
pub use order_handler::order_routes;
