use sea_orm_migration::{prelude::*, schema::*};

use super::m20261017_000001_create_hotel_table::Hotel;

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
                    .col(pk_auto(Client::Id))
                    .col(string_len(Client::Name, 25))
                    .col(string_null(Client::Surname))
                    .col(date_null(Client::RegistrationDate))
                    .col(string(Client::Image))
                    .col(integer_null(Client::HotelId).unique_key())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_client_hotel_id")
                            .from(Client::Table, Client::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_client_name")
                    .table(Client::Table)
                    .col(Client::Name)
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

#[derive(DeriveIden)]
pub enum Client {
    Table,
    Id,
    Name,
    Surname,
    RegistrationDate,
    Image,
    HotelId,
}
