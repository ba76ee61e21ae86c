//! Create `company` table.
//!
//! The address is flattened into city/state columns; cnpj carries a unique
//! index (added in the index migration) and is never updated after insert.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Company::Table)
                    .if_not_exists()
                    .col(uuid(Company::Id).primary_key())
                    .col(string_len(Company::Name, 100).not_null())
                    .col(string_len(Company::Cnpj, 20).not_null())
                    .col(string_len(Company::Sector, 100).not_null())
                    .col(string_len(Company::AddressCity, 100).not_null())
                    .col(string_len(Company::AddressState, 100).not_null())
                    .col(timestamp_with_time_zone(Company::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Company::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Company::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Company { Table, Id, Name, Cnpj, Sector, AddressCity, AddressState, CreatedAt, UpdatedAt }
