//! Shared domain types, catalog, configuration, and errors for the
//! Influencer Pulse reporting pipeline.

pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{PulseError, PulseResult};
