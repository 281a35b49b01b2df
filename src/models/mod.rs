//! Domain models for the defect record server.

pub mod defect;

pub use defect::{
    Classification, DEFAULT_SEVERITY, Defect, KindOfTest, NewDefect, SEVERITY_RANGE,
};
