//! Data access layer repositories.
//!
//! This module contains all database repository implementations for the crate.
//! Repositories provide an abstraction layer over database operations, organizing
//! data access by domain (the city catalog, weather snapshots, and operational
//! configuration).

pub mod app_config;
pub mod catalog;
pub mod weather;
