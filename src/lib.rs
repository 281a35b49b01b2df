//! Defect record server library.
//!
//! Provides the defect form pages, the JSON API, and the storage layer
//! behind them.

pub mod api;
pub mod config;
pub mod db;
pub mod entity;
pub mod error;
pub mod middleware;
pub mod migration;
pub mod models;
pub mod pages;
pub mod services;
