//! Create `employee` table referencing `company`.
//!
//! No FK constraint: deleting a company neither cascades to nor blocks on
//! its employees, so rows may carry a dangling company_id.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Employee::Table)
                    .if_not_exists()
                    .col(uuid(Employee::Id).primary_key())
                    .col(uuid(Employee::CompanyId).not_null())
                    .col(string_len(Employee::Email, 100).not_null())
                    .col(string_len(Employee::Name, 100).not_null())
                    .col(string_len(Employee::PasswordHash, 255).not_null())
                    .col(string_len(Employee::Role, 100).not_null())
                    .col(string_len(Employee::Status, 32).not_null())
                    // Nullable: only set for DISMISSED employees
                    .col(
                        ColumnDef::new(Employee::TerminationDate)
                            .timestamp_with_time_zone()
                            .null(),
                    )
                    .col(timestamp_with_time_zone(Employee::CreatedAt).not_null())
                    .col(timestamp_with_time_zone(Employee::UpdatedAt).not_null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Employee::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Employee {
    Table,
    Id,
    CompanyId,
    Email,
    Name,
    PasswordHash,
    Role,
    Status,
    TerminationDate,
    CreatedAt,
    UpdatedAt,
}
