//! Migration: Create client table.

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
                    .table(Client::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Client::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Client::Nom).string_len(MAX_TEXT_LENGTH).null())
                    .col(ColumnDef::new(Client::Prenom).string_len(MAX_TEXT_LENGTH).null())
                    .col(ColumnDef::new(Client::Adresse).string_len(MAX_TEXT_LENGTH).null())
                    .to_owned(),
            )
            .await?;

        // Most client lookups filter on the family name
        manager
            .create_index(
                Index::create()
                    .name("idx_client_nom")
                    .table(Client::Table)
                    .col(Client::Nom)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Client::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Client {
    Table,
    Id,
    Nom,
    Prenom,
    Adresse,
}
