//! Aggregation and metrics over a filtered view. Every function here is
//! a pure function of its input; source tables are never mutated.

use chrono::NaiveDate;
use pulse_core::types::{Brand, Category};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::filter::FilteredView;

/// How many influencers the revenue/ROAS leaderboards carry.
pub const TOP_N: usize = 10;

/// Headline KPIs for the filtered window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignKpis {
    pub total_revenue: f64,
    /// Summed over matched influencer summaries, not over fact rows, so a
    /// payout is never double-counted per conversion.
    pub total_payout: f64,
    pub total_orders: u64,
    /// `total_revenue / total_payout`; defined as 0 when payout is 0.
    pub overall_roas: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluencerPerformance {
    pub influencer_id: String,
    pub name: Option<String>,
    pub category: Option<Category>,
    pub follower_count: Option<u64>,
    pub revenue: f64,
    pub total_payout: Option<f64>,
    pub roas: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenue {
    pub day: NaiveDate,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrandRevenue {
    pub brand: Brand,
    pub revenue: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryRevenue {
    pub category: Category,
    pub revenue: f64,
}

pub fn compute_kpis(view: &FilteredView) -> CampaignKpis {
    let total_revenue: f64 = view.facts.iter().map(|f| f.revenue).sum();
    let total_orders: u64 = view.facts.iter().map(|f| u64::from(f.orders)).sum();
    let total_payout: f64 = view.summaries.iter().filter_map(|s| s.total_payout).sum();
    let overall_roas = guarded_roas(total_revenue, total_payout);

    CampaignKpis {
        total_revenue,
        total_payout,
        total_orders,
        overall_roas,
    }
}

/// Revenue grouped by influencer, joined with profile and payout
/// attributes, sorted by revenue descending (influencer id breaks ties
/// for deterministic output).
pub fn influencer_performance(view: &FilteredView) -> Vec<InfluencerPerformance> {
    let mut revenue_by_influencer: BTreeMap<&str, f64> = BTreeMap::new();
    for fact in &view.facts {
        *revenue_by_influencer
            .entry(fact.influencer_id.as_str())
            .or_insert(0.0) += fact.revenue;
    }

    let mut rows: Vec<InfluencerPerformance> = revenue_by_influencer
        .into_iter()
        .map(|(influencer_id, revenue)| {
            let summary = view
                .summaries
                .iter()
                .find(|s| s.influencer_id == influencer_id);
            let total_payout = summary.and_then(|s| s.total_payout);
            InfluencerPerformance {
                influencer_id: influencer_id.to_string(),
                name: summary.map(|s| s.name.clone()),
                category: summary.map(|s| s.category),
                follower_count: summary.map(|s| s.follower_count),
                revenue,
                total_payout,
                roas: guarded_roas(revenue, total_payout.unwrap_or(0.0)),
            }
        })
        .collect();

    rows.sort_by(|a, b| {
        b.revenue
            .total_cmp(&a.revenue)
            .then_with(|| a.influencer_id.cmp(&b.influencer_id))
    });
    rows
}

pub fn top_by_revenue(performance: &[InfluencerPerformance]) -> Vec<InfluencerPerformance> {
    performance.iter().take(TOP_N).cloned().collect()
}

pub fn top_by_roas(performance: &[InfluencerPerformance]) -> Vec<InfluencerPerformance> {
    let mut ranked = performance.to_vec();
    ranked.sort_by(|a, b| {
        b.roas
            .total_cmp(&a.roas)
            .then_with(|| a.influencer_id.cmp(&b.influencer_id))
    });
    ranked.truncate(TOP_N);
    ranked
}

/// Revenue summed per calendar day across the whole filtered range.
/// Days with no activity appear with 0 rather than being omitted.
pub fn daily_revenue(view: &FilteredView) -> Vec<DailyRevenue> {
    let mut by_day: BTreeMap<NaiveDate, f64> = view
        .params
        .start_day
        .iter_days()
        .take_while(|day| *day <= view.params.end_day)
        .map(|day| (day, 0.0))
        .collect();

    for fact in &view.facts {
        *by_day.entry(fact.date.date()).or_insert(0.0) += fact.revenue;
    }

    by_day
        .into_iter()
        .map(|(day, revenue)| DailyRevenue { day, revenue })
        .collect()
}

/// Revenue totals grouped by brand, sorted descending.
pub fn revenue_by_brand(view: &FilteredView) -> Vec<BrandRevenue> {
    let mut by_brand: BTreeMap<Brand, f64> = BTreeMap::new();
    for fact in &view.facts {
        if let Some(brand) = fact.brand {
            *by_brand.entry(brand).or_insert(0.0) += fact.revenue;
        }
    }
    let mut rows: Vec<BrandRevenue> = by_brand
        .into_iter()
        .map(|(brand, revenue)| BrandRevenue { brand, revenue })
        .collect();
    rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    rows
}

/// Revenue totals grouped by influencer category, sorted descending.
pub fn revenue_by_category(view: &FilteredView) -> Vec<CategoryRevenue> {
    let mut by_category: BTreeMap<Category, f64> = BTreeMap::new();
    for fact in &view.facts {
        if let Some(category) = fact.category {
            *by_category.entry(category).or_insert(0.0) += fact.revenue;
        }
    }
    let mut rows: Vec<CategoryRevenue> = by_category
        .into_iter()
        .map(|(category, revenue)| CategoryRevenue { category, revenue })
        .collect();
    rows.sort_by(|a, b| b.revenue.total_cmp(&a.revenue));
    rows
}

fn guarded_roas(revenue: f64, payout: f64) -> f64 {
    if payout > 0.0 {
        revenue / payout
    } else {
        0.0
    }
}
