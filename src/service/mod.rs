//! Query service layer.
//!
//! This module contains the decision logic of the crate: turning free-text
//! city identifiers into canonical catalog records, reducing snapshot rows
//! to caller-chosen field subsets, and orchestrating the two into the
//! single-city, batch, and by-country weather queries.

pub mod projection;
pub mod resolver;
pub mod weather;
