//! Assembles the full report consumed by the presentation layer.

use chrono::{DateTime, Utc};
use pulse_core::types::{Category, PayoutBasis};
use serde::{Deserialize, Serialize};

use crate::filter::FilteredView;
use crate::metrics::{
    self, BrandRevenue, CampaignKpis, CategoryRevenue, DailyRevenue, InfluencerPerformance,
};

/// Payout terms for one matched influencer, for the payout-tracking table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutTrackingRow {
    pub name: String,
    pub category: Category,
    pub basis: Option<PayoutBasis>,
    pub rate: Option<f64>,
    pub total_orders_by_influencer: Option<u32>,
    pub total_payout: Option<f64>,
}

/// One complete dashboard snapshot for a filter selection.
///
/// `has_data` is the explicit empty state: when the filtered fact set is
/// empty the KPIs are all zero (ROAS included) and the detail sections are
/// empty, and the renderer shows a "no data" notice instead of charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardReport {
    pub kpis: CampaignKpis,
    pub has_data: bool,
    pub top_influencers_by_revenue: Vec<InfluencerPerformance>,
    pub top_influencers_by_roas: Vec<InfluencerPerformance>,
    pub influencer_performance: Vec<InfluencerPerformance>,
    pub daily_revenue: Vec<DailyRevenue>,
    pub revenue_by_brand: Vec<BrandRevenue>,
    pub revenue_by_category: Vec<CategoryRevenue>,
    pub payout_tracking: Vec<PayoutTrackingRow>,
    pub generated_at: DateTime<Utc>,
}

pub fn build_report(view: &FilteredView) -> DashboardReport {
    let kpis = metrics::compute_kpis(view);
    let performance = metrics::influencer_performance(view);

    let payout_tracking = view
        .summaries
        .iter()
        .map(|s| PayoutTrackingRow {
            name: s.name.clone(),
            category: s.category,
            basis: s.basis,
            rate: s.rate,
            total_orders_by_influencer: s.total_orders_by_influencer,
            total_payout: s.total_payout,
        })
        .collect();

    DashboardReport {
        has_data: !view.facts.is_empty(),
        top_influencers_by_revenue: metrics::top_by_revenue(&performance),
        top_influencers_by_roas: metrics::top_by_roas(&performance),
        influencer_performance: performance,
        daily_revenue: metrics::daily_revenue(view),
        revenue_by_brand: metrics::revenue_by_brand(view),
        revenue_by_category: metrics::revenue_by_category(view),
        payout_tracking,
        kpis,
        generated_at: Utc::now(),
    }
}
