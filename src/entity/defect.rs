//! Defect entity: one reported issue.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "defect")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub date: DateTimeUtc,
    pub time: String,
    pub tester_name: String,
    pub test_case_number: String,
    pub kind_of_test: String,
    pub classification: String,
    pub severity: i32,
    #[sea_orm(column_type = "Text", nullable)]
    pub steps_to_reproduce: Option<String>,
    #[sea_orm(column_type = "Text")]
    pub real_results: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub expected_results: Option<String>,
    pub version: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub additional_information: Option<String>,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
