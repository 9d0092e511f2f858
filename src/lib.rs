//! Weather and UV snapshot query core.
//!
//! This crate answers "what is the weather right now" for a curated catalog
//! of cities, on behalf of third-party banner embeds. It owns the catalog
//! (countries, cities, aliases), the single-snapshot-per-city weather store,
//! free-text city resolution, and field projection of JSON replies. Data
//! acquisition, HTTP transport, and access control live in the embedding
//! processes; they reach this core through [`startup::connect_to_database`]
//! and the [`service`] layer.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod config;
pub mod data;
pub mod error;
pub mod model;
pub mod service;
pub mod startup;
