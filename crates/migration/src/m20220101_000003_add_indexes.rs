use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Company: unique cnpj. The service pre-checks for a friendlier 409;
        // this index is the backstop under concurrent creates.
        manager
            .create_index(
                Index::create()
                    .name("uniq_company_cnpj")
                    .table(Company::Table)
                    .col(Company::Cnpj)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Employee: unique email, same pre-check/backstop split.
        manager
            .create_index(
                Index::create()
                    .name("uniq_employee_email")
                    .table(Employee::Table)
                    .col(Employee::Email)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Employee: index on company_id for the per-company listing.
        manager
            .create_index(
                Index::create()
                    .name("idx_employee_company")
                    .table(Employee::Table)
                    .col(Employee::CompanyId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(Index::drop().name("uniq_company_cnpj").table(Company::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("uniq_employee_email").table(Employee::Table).to_owned())
            .await?;
        manager
            .drop_index(Index::drop().name("idx_employee_company").table(Employee::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Company { Table, Cnpj }

#[derive(DeriveIden)]
enum Employee { Table, CompanyId, Email }
