//! Domain types shared by the ingestion seam and the query services.

pub mod observation;
pub mod uv;
pub mod wmo;
