//! Weather snapshot repository.
//!
//! This module contains the store for the single current weather observation
//! each city carries. Rows are replaced wholesale by the external ingestion
//! process through [`snapshot::SnapshotRepository::upsert`]; the query side
//! only ever reads them.

pub mod snapshot;
