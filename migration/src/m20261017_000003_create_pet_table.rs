use sea_orm_migration::{prelude::*, schema::*};

use super::m20261017_000002_create_client_table::Client;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Pet::Table)
                    .if_not_exists()
                    .col(pk_auto(Pet::Id))
                    .col(integer(Pet::ClientId))
                    .col(string(Pet::Name))
                    .col(string_null(Pet::Breed))
                    .col(date_null(Pet::BirthDate))
                    .col(string_len_null(Pet::Gender, 6))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_pet_client_id")
                            .from(Pet::Table, Pet::ClientId)
                            .to(Client::Table, Client::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Pet::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Pet {
    Table,
    Id,
    ClientId,
    Name,
    Breed,
    BirthDate,
    Gender,
}
