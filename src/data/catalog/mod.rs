//! Catalog repositories.
//!
//! This module contains repositories for the read model city resolution runs
//! against: countries, cities, and the third-party aliases that map onto
//! canonical cities. Catalog rows are seeded administratively and deactivated
//! rather than deleted, so every lookup here filters on the `active` flags.

pub mod alias;
pub mod city;
pub mod country;
