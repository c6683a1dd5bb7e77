//! Load-and-join pipeline: CSV tables in, session `Dataset` out.

pub mod cache;
pub mod join;
pub mod loader;

#[cfg(test)]
mod testdata;

pub use cache::DatasetCache;
pub use loader::{load_dataset, load_raw_tables, RawTables};
