//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.
//! Column names follow the existing `client` / `commande` schema.

pub mod client;
pub mod commande;

#[allow(unused_imports)]
pub use client::{ActiveModel as ClientActiveModel, Entity as ClientEntity, Model as ClientModel};
#[allow(unused_imports)]
pub use commande::{
    ActiveModel as CommandeActiveModel, Entity as CommandeEntity, Model as CommandeModel,
};
