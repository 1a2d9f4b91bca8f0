//! Client database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Client, ClientData};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "client")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub adresse: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::commande::Entity")]
    Commande,
}

impl Related<super::commande::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Commande.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity (orders attached separately)
impl From<Model> for Client {
    fn from(model: Model) -> Self {
        Client::new(
            model.id,
            ClientData {
                name: model.nom,
                surname: model.prenom,
                address: model.adresse,
            },
        )
    }
}
