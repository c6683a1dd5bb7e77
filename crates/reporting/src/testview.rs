//! Hand-built dataset helpers for filter/metrics/dashboard tests.

use chrono::NaiveDateTime;
use pulse_core::types::{
    Brand, Category, Dataset, FactRow, Gender, InfluencerSummary, PayoutBasis, Platform,
};
use std::collections::BTreeSet;

/// A MuscleBlaze/Fitness fact row with the given identifiers, date, and
/// revenue; remaining attributes carry fixed plausible values.
pub fn fact(tracking_id: &str, influencer_id: &str, date: NaiveDateTime, revenue: f64) -> FactRow {
    FactRow {
        tracking_id: tracking_id.to_string(),
        source: "influencer_marketing".to_string(),
        campaign: "MB_SummerFit".to_string(),
        influencer_id: influencer_id.to_string(),
        user_id: format!("user-{tracking_id}"),
        product: "Whey Protein".to_string(),
        brand: Some(Brand::MuscleBlaze),
        date,
        orders: 1,
        revenue,
        influencer_name: Some(format!("Creator {influencer_id}")),
        category: Some(Category::Fitness),
        gender: Some(Gender::Female),
        follower_count: Some(100_000),
        platform: Some(Platform::Instagram),
        payout_basis: Some(PayoutBasis::PerPost),
        payout_rate: Some(10_000.0),
        total_payout: Some(50_000.0),
    }
}

pub fn summary(influencer_id: &str, total_payout: Option<f64>) -> InfluencerSummary {
    InfluencerSummary {
        influencer_id: influencer_id.to_string(),
        name: format!("Creator {influencer_id}"),
        category: Category::Fitness,
        gender: Gender::Female,
        follower_count: 100_000,
        platform: Platform::Instagram,
        basis: Some(PayoutBasis::PerPost),
        rate: Some(10_000.0),
        total_orders_by_influencer: Some(5),
        total_payout,
    }
}

/// Dataset from fact rows, with one default summary (payout 50000) per
/// distinct influencer id.
pub fn dataset(facts: Vec<FactRow>) -> Dataset {
    let ids: BTreeSet<String> = facts.iter().map(|f| f.influencer_id.clone()).collect();
    let summaries = ids.into_iter().map(|id| summary(&id, Some(50_000.0))).collect();
    dataset_with(facts, summaries)
}

pub fn dataset_with(facts: Vec<FactRow>, summaries: Vec<InfluencerSummary>) -> Dataset {
    Dataset {
        facts,
        posts: Vec::new(),
        summaries,
    }
}
