//! Business logic services.

pub mod defects;

pub use defects::create_defect;
