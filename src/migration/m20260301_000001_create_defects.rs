//! Create defect table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Defect::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Defect::Id).uuid().not_null().primary_key())
                    .col(
                        ColumnDef::new(Defect::Date)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Defect::Time).string().not_null())
                    .col(ColumnDef::new(Defect::TesterName).string().not_null())
                    .col(ColumnDef::new(Defect::TestCaseNumber).string().not_null())
                    .col(ColumnDef::new(Defect::KindOfTest).string().not_null())
                    .col(ColumnDef::new(Defect::Classification).string().not_null())
                    .col(ColumnDef::new(Defect::Severity).integer().not_null())
                    .col(ColumnDef::new(Defect::StepsToReproduce).text())
                    .col(ColumnDef::new(Defect::RealResults).text().not_null())
                    .col(ColumnDef::new(Defect::ExpectedResults).text())
                    .col(ColumnDef::new(Defect::Version).string().not_null())
                    .col(ColumnDef::new(Defect::AdditionalInformation).text())
                    .col(
                        ColumnDef::new(Defect::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Defect::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Defect {
    Table,
    Id,
    Date,
    Time,
    TesterName,
    TestCaseNumber,
    KindOfTest,
    Classification,
    Severity,
    StepsToReproduce,
    RealResults,
    ExpectedResults,
    Version,
    AdditionalInformation,
    CreatedAt,
}
