//! Domain layer - Core sales entities and value objects.
//!
//! This crate contains pure domain types with no infrastructure dependencies.
//! Field names follow the storage schema on the wire (`nom`, `prenom`,
//! `commandes`, ...) while the Rust API uses English names.

pub mod client;
pub mod constants;
pub mod error;
pub mod order;

pub use client::{Client, ClientData};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use order::{Order, OrderData, TopLimit};
