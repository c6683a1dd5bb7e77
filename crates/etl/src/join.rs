//! Joins the raw tables into the fact table and the influencer summary.

use pulse_core::catalog;
use pulse_core::types::{Dataset, FactRow, InfluencerSummary};
use std::collections::HashMap;
use tracing::warn;

/// Build the session dataset:
/// facts    = tracking ⋈ influencer ⋈ payout (left joins) + derived brand,
/// summaries = influencer ⋈ payout (left join), one row per influencer.
pub fn build_dataset(raw: crate::loader::RawTables) -> Dataset {
    let influencer_index: HashMap<&str, usize> = raw
        .influencers
        .iter()
        .enumerate()
        .map(|(i, r)| (r.influencer_id.as_str(), i))
        .collect();
    let payout_index: HashMap<&str, usize> = raw
        .payouts
        .iter()
        .enumerate()
        .map(|(i, r)| (r.influencer_id.as_str(), i))
        .collect();

    let mut facts = Vec::with_capacity(raw.tracking.len());
    for record in &raw.tracking {
        let brand = catalog::brand_for_product(&record.product);
        if brand.is_none() {
            warn!(
                tracking_id = %record.tracking_id,
                product = %record.product,
                "Product not in brand catalog; brand left missing"
            );
        }
        let influencer = influencer_index
            .get(record.influencer_id.as_str())
            .map(|&i| &raw.influencers[i]);
        if influencer.is_none() {
            warn!(
                tracking_id = %record.tracking_id,
                influencer_id = %record.influencer_id,
                "Tracking record references unknown influencer"
            );
        }
        let payout = payout_index
            .get(record.influencer_id.as_str())
            .map(|&i| &raw.payouts[i]);

        facts.push(FactRow {
            tracking_id: record.tracking_id.clone(),
            source: record.source.clone(),
            campaign: record.campaign.clone(),
            influencer_id: record.influencer_id.clone(),
            user_id: record.user_id.clone(),
            product: record.product.clone(),
            brand,
            date: record.date,
            orders: record.orders,
            revenue: record.revenue,
            influencer_name: influencer.map(|i| i.name.clone()),
            category: influencer.map(|i| i.category),
            gender: influencer.map(|i| i.gender),
            follower_count: influencer.map(|i| i.follower_count),
            platform: influencer.map(|i| i.platform),
            payout_basis: payout.map(|p| p.basis),
            payout_rate: payout.map(|p| p.rate),
            total_payout: payout.map(|p| p.total_payout),
        });
    }

    let summaries = raw
        .influencers
        .iter()
        .map(|influencer| {
            let payout = payout_index
                .get(influencer.influencer_id.as_str())
                .map(|&i| &raw.payouts[i]);
            InfluencerSummary {
                influencer_id: influencer.influencer_id.clone(),
                name: influencer.name.clone(),
                category: influencer.category,
                gender: influencer.gender,
                follower_count: influencer.follower_count,
                platform: influencer.platform,
                basis: payout.map(|p| p.basis),
                rate: payout.map(|p| p.rate),
                total_orders_by_influencer: payout.map(|p| p.total_orders_by_influencer),
                total_payout: payout.map(|p| p.total_payout),
            }
        })
        .collect();

    Dataset {
        facts,
        posts: raw.posts,
        summaries,
    }
}
