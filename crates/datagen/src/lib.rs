//! Synthetic demo-data generation for the Influencer Pulse pipeline.

pub mod generator;
pub mod names;
pub mod writer;

pub use generator::{DataGenerator, GeneratedTables};
pub use writer::{write_tables, TableCounts};
