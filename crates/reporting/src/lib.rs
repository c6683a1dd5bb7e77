//! Filtering, aggregation, and dashboard assembly for influencer
//! campaign reporting.

pub mod dashboard;
pub mod filter;
pub mod metrics;

#[cfg(test)]
mod testview;

pub use dashboard::{build_report, DashboardReport};
pub use filter::{apply, FilterParameters, FilteredView};
pub use metrics::{compute_kpis, CampaignKpis};
