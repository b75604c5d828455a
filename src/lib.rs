pub mod app;
pub mod error;
pub mod ingest;
pub mod model;
