//! Defect domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::error::{AppError, AppResult};

/// Accepted severity values, 1 (lowest) to 5 (most critical).
pub const SEVERITY_RANGE: RangeInclusive<i32> = 1..=5;

/// Severity preselected on a fresh form.
pub const DEFAULT_SEVERITY: i32 = 3;

/// Kind of test during which the defect was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum KindOfTest {
    Unit,
    Integration,
    System,
    Acceptance,
    Regression,
    Performance,
    Usability,
    Functional,
    Stress,
}

impl KindOfTest {
    pub const ALL: [KindOfTest; 9] = [
        Self::Unit,
        Self::Integration,
        Self::System,
        Self::Acceptance,
        Self::Regression,
        Self::Performance,
        Self::Usability,
        Self::Functional,
        Self::Stress,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unit => "unit",
            Self::Integration => "integration",
            Self::System => "system",
            Self::Acceptance => "acceptance",
            Self::Regression => "regression",
            Self::Performance => "performance",
            Self::Usability => "usability",
            Self::Functional => "functional",
            Self::Stress => "stress",
        }
    }

    /// Human-readable option label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Unit => "Unit Test",
            Self::Integration => "Integration Test",
            Self::System => "System Test",
            Self::Acceptance => "Acceptance Test",
            Self::Regression => "Regression Test",
            Self::Performance => "Performance Test",
            Self::Usability => "Usability Test",
            Self::Functional => "Functional Test",
            Self::Stress => "Stress Test",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl std::fmt::Display for KindOfTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Defect taxonomy used by the team.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Functionality,
    Usability,
    Performance,
    Compatibility,
    Security,
    Localization,
    Other,
}

impl Classification {
    pub const ALL: [Classification; 7] = [
        Self::Functionality,
        Self::Usability,
        Self::Performance,
        Self::Compatibility,
        Self::Security,
        Self::Localization,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Functionality => "functionality",
            Self::Usability => "usability",
            Self::Performance => "performance",
            Self::Compatibility => "compatibility",
            Self::Security => "security",
            Self::Localization => "localization",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Functionality => "Functionality",
            Self::Usability => "Usability",
            Self::Performance => "Performance",
            Self::Compatibility => "Compatibility",
            Self::Security => "Security",
            Self::Localization => "Localization",
            Self::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == s)
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A fully-populated defect waiting to be stored.
///
/// Also the request body of `POST /api/v1/defects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewDefect {
    /// Discovery date
    pub date: DateTime<Utc>,
    /// Free-form time of day, e.g. "04:18 PM"
    pub time: String,
    pub tester_name: String,
    /// Free-form test case identifier, e.g. "TC_CHECKOUT_001"
    pub test_case_number: String,
    pub kind_of_test: KindOfTest,
    pub classification: Classification,
    /// Criticality, 1 to 5
    pub severity: i32,
    #[serde(default)]
    pub steps_to_reproduce: Option<String>,
    pub real_results: String,
    #[serde(default)]
    pub expected_results: Option<String>,
    /// Free-form version of the software under test
    pub version: String,
    #[serde(default)]
    pub additional_information: Option<String>,
}

impl NewDefect {
    /// Check the constraints the storage layer relies on.
    pub fn validate(&self) -> AppResult<()> {
        if !SEVERITY_RANGE.contains(&self.severity) {
            return Err(AppError::InvalidInput(format!(
                "severity must be between {} and {}, got {}",
                SEVERITY_RANGE.start(),
                SEVERITY_RANGE.end(),
                self.severity
            )));
        }

        let required = [
            ("time", &self.time),
            ("testerName", &self.tester_name),
            ("testCaseNumber", &self.test_case_number),
            ("realResults", &self.real_results),
            ("version", &self.version),
        ];
        if let Some((field, _)) = required.iter().find(|(_, v)| v.trim().is_empty()) {
            return Err(AppError::InvalidInput(format!("{} is required", field)));
        }

        Ok(())
    }
}

/// A stored defect, detached from the database layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Defect {
    /// Identifier assigned at creation
    pub id: Uuid,
    pub date: DateTime<Utc>,
    pub time: String,
    pub tester_name: String,
    pub test_case_number: String,
    pub kind_of_test: KindOfTest,
    pub classification: Classification,
    pub severity: i32,
    pub steps_to_reproduce: Option<String>,
    pub real_results: String,
    pub expected_results: Option<String>,
    pub version: String,
    pub additional_information: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Defect {
    /// Path of the confirmation page for this defect.
    pub fn confirmation_path(&self) -> String {
        format!("/defect/{}", self.id)
    }
}
