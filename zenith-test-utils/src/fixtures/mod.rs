//! Test fixture modules for database record creation.
//!
//! Each submodule covers one slice of the schema:
//!
//! - `catalog` - countries, cities, and city aliases
//! - `weather` - weather snapshots attached to catalog cities

pub mod catalog;
pub mod weather;
