//! Migration: Create commande table with its client foreign key.

use domain::MAX_TEXT_LENGTH;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Commande::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Commande::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Commande::ProduitNom).string_len(MAX_TEXT_LENGTH).null())
                    .col(ColumnDef::new(Commande::Quantite).integer().not_null())
                    .col(ColumnDef::new(Commande::Prix).double().not_null())
                    .col(ColumnDef::new(Commande::TotalHt).double().not_null())
                    .col(ColumnDef::new(Commande::Tva).integer().not_null())
                    .col(ColumnDef::new(Commande::TotalTtc).double().not_null())
                    .col(ColumnDef::new(Commande::ClientId).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_commande_client")
                            .from(Commande::Table, Commande::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::NoAction)
                            .on_update(ForeignKeyAction::NoAction),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_commande_client_id")
                    .table(Commande::Table)
                    .col(Commande::ClientId)
                    .to_owned(),
            )
            .await?;

        // Backs the top-orders ranking
        manager
            .create_index(
                Index::create()
                    .name("idx_commande_total_ttc")
                    .table(Commande::Table)
                    .col(Commande::TotalTtc)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Commande::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Commande {
    Table,
    Id,
    ProduitNom,
    Quantite,
    Prix,
    TotalHt,
    Tva,
    TotalTtc,
    ClientId,
}

#[derive(Iden)]
enum Client {
    Table,
    Id,
}
