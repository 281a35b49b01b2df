//! Database operations for defects.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, DbErr, Set};
use uuid::Uuid;

use crate::entity::defect::{self, ActiveModel};
use crate::error::{AppError, AppResult};
use crate::models::NewDefect;

use super::DbPool;

impl DbPool {
    /// Insert a defect and return the stored row.
    ///
    /// The identifier is generated here (UUIDv7) and never changes afterwards.
    pub async fn insert_defect(&self, defect: NewDefect) -> AppResult<defect::Model> {
        let db = self.ensure_connected().await?;

        let model = ActiveModel {
            id: Set(Uuid::now_v7()),
            date: Set(defect.date),
            time: Set(defect.time),
            tester_name: Set(defect.tester_name),
            test_case_number: Set(defect.test_case_number),
            kind_of_test: Set(defect.kind_of_test.as_str().to_string()),
            classification: Set(defect.classification.as_str().to_string()),
            severity: Set(defect.severity),
            steps_to_reproduce: Set(defect.steps_to_reproduce),
            real_results: Set(defect.real_results),
            expected_results: Set(defect.expected_results),
            version: Set(defect.version),
            additional_information: Set(defect.additional_information),
            created_at: Set(Utc::now()),
        };

        model.insert(db).await.map_err(|e| match e {
            DbErr::Conn(_) => AppError::from(e),
            other => AppError::Database(format!("Failed to insert defect: {}", other)),
        })
    }
}
