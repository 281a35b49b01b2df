//! Create-defect use case.

use tracing::{error, info};

use crate::db::DbPool;
use crate::entity::defect;
use crate::error::{AppError, AppResult};
use crate::models::{Classification, Defect, KindOfTest, NewDefect};

/// Store a new defect and return a detached copy of what was stored.
///
/// Connection and insert failures are logged here before being returned, so
/// callers that only care about success can drop the error.
pub async fn create_defect(pool: &DbPool, new_defect: NewDefect) -> AppResult<Defect> {
    let result = match new_defect.validate() {
        Ok(()) => pool.insert_defect(new_defect).await.and_then(into_defect),
        Err(e) => Err(e),
    };

    match result {
        Ok(defect) => {
            info!(
                defect_id = %defect.id,
                test_case = %defect.test_case_number,
                severity = defect.severity,
                "Defect created"
            );
            Ok(defect)
        }
        Err(e) => {
            error!("Failed to create defect: {}", e);
            Err(e)
        }
    }
}

/// Copy a stored row into an owned domain value.
fn into_defect(m: defect::Model) -> AppResult<Defect> {
    let kind_of_test = KindOfTest::parse(&m.kind_of_test).ok_or_else(|| {
        AppError::Database(format!("Stored defect has unknown kind_of_test '{}'", m.kind_of_test))
    })?;
    let classification = Classification::parse(&m.classification).ok_or_else(|| {
        AppError::Database(format!(
            "Stored defect has unknown classification '{}'",
            m.classification
        ))
    })?;

    Ok(Defect {
        id: m.id,
        date: m.date,
        time: m.time,
        tester_name: m.tester_name,
        test_case_number: m.test_case_number,
        kind_of_test,
        classification,
        severity: m.severity,
        steps_to_reproduce: m.steps_to_reproduce,
        real_results: m.real_results,
        expected_results: m.expected_results,
        version: m.version,
        additional_information: m.additional_information,
        created_at: m.created_at,
    })
}
