//! Synthetic dataset generator: fabricates internally consistent
//! influencer, post, tracking, and payout tables for demo runs.

use chrono::{Duration, NaiveDateTime, Utc};
use pulse_core::catalog::{self, CAMPAIGNS, PRODUCTS, TRACKING_SOURCE};
use pulse_core::config::GeneratorConfig;
use pulse_core::types::{
    round2, Category, Gender, InfluencerRecord, PayoutBasis, PayoutRecord, Platform, PostRecord,
    TrackingRecord,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::names;

const FOLLOWER_RANGE: (u64, u64) = (5_000, 500_000);
const PER_POST_RATES: [f64; 4] = [5_000.0, 10_000.0, 25_000.0, 50_000.0];
const COMMISSION_RANGE: (f64, f64) = (0.10, 0.25);
const CONVERSION_LAG_DAYS: i64 = 5;

/// The four generated tables, ready to persist.
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedTables {
    pub influencers: Vec<InfluencerRecord>,
    pub posts: Vec<PostRecord>,
    pub tracking: Vec<TrackingRecord>,
    pub payouts: Vec<PayoutRecord>,
}

pub struct DataGenerator {
    config: GeneratorConfig,
    rng: StdRng,
}

impl DataGenerator {
    pub fn new(config: GeneratorConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    /// Generate all four tables with the configured window ending now.
    pub fn generate(&mut self) -> GeneratedTables {
        self.generate_within(Utc::now().naive_utc())
    }

    /// Generate all four tables with post timestamps uniformly sampled
    /// in `[window_end - window_days, window_end)`.
    ///
    /// Each influencer's payout record is accumulated and appended inside
    /// the per-influencer loop, so the payouts table always carries exactly
    /// one row per influencer.
    pub fn generate_within(&mut self, window_end: NaiveDateTime) -> GeneratedTables {
        let window_start = window_end - Duration::days(self.config.window_days);
        let window_secs = (window_end - window_start).num_seconds().max(1);

        let mut influencers = Vec::with_capacity(self.config.num_influencers);
        let mut posts = Vec::new();
        let mut tracking = Vec::new();
        let mut payouts = Vec::with_capacity(self.config.num_influencers);

        for i in 1..=self.config.num_influencers {
            let gender = Gender::ALL[self.rng.gen_range(0..Gender::ALL.len())];
            influencers.push(InfluencerRecord {
                influencer_id: format!("INF{i:03}"),
                name: names::full_name(&mut self.rng, gender),
                category: Category::ALL[self.rng.gen_range(0..Category::ALL.len())],
                gender,
                follower_count: self.rng.gen_range(FOLLOWER_RANGE.0..=FOLLOWER_RANGE.1),
                platform: Platform::ALL[self.rng.gen_range(0..Platform::ALL.len())],
            });
        }

        let mut post_counter = 1u32;
        let mut tracking_counter = 1u32;

        for influencer in &influencers {
            let mut post_count = 0usize;
            let mut revenue_sum = 0.0f64;
            let mut orders_sum = 0u32;

            let num_posts = self
                .rng
                .gen_range(self.config.min_posts_per_influencer..=self.config.max_posts_per_influencer);

            for _ in 0..num_posts {
                let offset = self.rng.gen_range(0..window_secs);
                let post_date = window_start + Duration::seconds(offset);
                let reach =
                    (influencer.follower_count as f64 * self.rng.gen_range(0.10..=0.60)) as u64;
                let likes = (reach as f64 * self.rng.gen_range(0.02..=0.15)) as u64;
                let comments = (likes as f64 * self.rng.gen_range(0.01..=0.10)) as u64;

                posts.push(PostRecord {
                    post_id: format!("POST{post_counter:04}"),
                    influencer_id: influencer.influencer_id.clone(),
                    platform: influencer.platform,
                    date: post_date,
                    url: format!(
                        "https://{}.com/{}/post/{post_counter}",
                        influencer.platform.to_string().to_lowercase(),
                        influencer.name.replace(' ', "").to_lowercase(),
                    ),
                    caption: names::caption(&mut self.rng),
                    reach,
                    likes,
                    comments,
                });
                post_counter += 1;
                post_count += 1;

                // Conversions are proportional to reach, truncated.
                let conversions = (reach as f64 * self.rng.gen_range(0.0001..=0.002)) as u64;
                for _ in 0..conversions {
                    let (product, brand) = PRODUCTS[self.rng.gen_range(0..PRODUCTS.len())];
                    let (lo, hi) = catalog::revenue_range(brand);
                    let revenue = round2(self.rng.gen_range(lo..=hi));
                    let lag = self.rng.gen_range(0..=CONVERSION_LAG_DAYS);

                    tracking.push(TrackingRecord {
                        tracking_id: format!("TRK{tracking_counter:05}"),
                        source: TRACKING_SOURCE.to_string(),
                        campaign: CAMPAIGNS[self.rng.gen_range(0..CAMPAIGNS.len())].to_string(),
                        influencer_id: influencer.influencer_id.clone(),
                        user_id: Uuid::from_u128(self.rng.gen()).to_string(),
                        product: product.to_string(),
                        date: post_date + Duration::days(lag),
                        orders: 1,
                        revenue,
                    });
                    tracking_counter += 1;
                    revenue_sum += revenue;
                    orders_sum += 1;
                }
            }

            let basis = if self.rng.gen_bool(0.5) {
                PayoutBasis::PerPost
            } else {
                PayoutBasis::PerOrder
            };
            let (rate, total_payout) = match basis {
                PayoutBasis::PerPost => {
                    let rate = PER_POST_RATES[self.rng.gen_range(0..PER_POST_RATES.len())];
                    (rate, rate * post_count as f64)
                }
                PayoutBasis::PerOrder => {
                    let rate = round2(self.rng.gen_range(COMMISSION_RANGE.0..=COMMISSION_RANGE.1));
                    (rate, round2(rate * revenue_sum))
                }
            };

            payouts.push(PayoutRecord {
                influencer_id: influencer.influencer_id.clone(),
                basis,
                rate,
                total_orders_by_influencer: orders_sum,
                total_payout,
            });
        }

        info!(
            influencers = influencers.len(),
            posts = posts.len(),
            tracking = tracking.len(),
            payouts = payouts.len(),
            "Synthetic tables generated"
        );

        GeneratedTables {
            influencers,
            posts,
            tracking,
            payouts,
        }
    }
}
