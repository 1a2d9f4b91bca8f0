//! Commande (order) database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Order, OrderData};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "commande")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub produit_nom: Option<String>,
    pub quantite: i32,
    pub prix: f64,
    pub total_ht: f64,
    pub tva: i32,
    pub total_ttc: f64,
    pub client_id: Option<i64>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::client::Entity",
        from = "Column::ClientId",
        to = "super::client::Column::Id"
    )]
    Client,
}

impl Related<super::client::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Client.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl From<Model> for Order {
    fn from(model: Model) -> Self {
        Order::new(
            model.id,
            OrderData {
                product_name: model.produit_nom,
                quantity: model.quantite,
                unit_price: model.prix,
                total_ht: model.total_ht,
                tva: model.tva,
                total_ttc: model.total_ttc,
                client_id: model.client_id,
            },
        )
    }
}
