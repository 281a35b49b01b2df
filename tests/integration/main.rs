//! HTTP integration tests.
//!
//! Storage is backed by SeaORM's mock database, so no PostgreSQL is needed.
//!
//! Run with: cargo test --test integration


mod api_tests;
mod form_tests;
