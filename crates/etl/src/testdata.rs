//! Shared fixtures for loader/join/cache tests: a two-influencer dataset
//! with one uncataloged product.

use crate::loader::RawTables;
use chrono::NaiveDate;
use pulse_core::types::{
    Category, Gender, InfluencerRecord, PayoutBasis, PayoutRecord, Platform, PostRecord,
    TrackingRecord,
};
use std::path::Path;

pub fn write_fixture(dir: &Path) {
    std::fs::write(
        dir.join("influencers.csv"),
        "influencer_id,name,category,gender,follower_count,platform\n\
         INF001,Asha Verma,Fitness,Female,100000,Instagram\n\
         INF002,Rohan Mehta,Beauty,Male,50000,YouTube\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("posts.csv"),
        "post_id,influencer_id,platform,date,url,caption,reach,likes,comments\n\
         POST0001,INF001,Instagram,2026-01-05 10:00:00,https://instagram.com/ashaverma/post/1,Morning routine.,40000,3000,120\n\
         POST0002,INF002,YouTube,2026-01-10 09:30:00,https://youtube.com/rohanmehta/post/2,Honest review.,20000,900,40\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("tracking_data.csv"),
        "tracking_id,source,campaign,influencer_id,user_id,product,date,orders,revenue\n\
         TRK00001,influencer_marketing,MB_SummerFit,INF001,u-001,Whey Protein,2026-01-06 11:00:00,1,3000.0\n\
         TRK00002,influencer_marketing,HKV_GlowUp,INF002,u-002,Biotin,2026-01-11 14:00:00,1,800.0\n\
         TRK00003,influencer_marketing,MB_SummerFit,INF001,u-003,Mystery Box,2026-01-07 16:30:00,1,500.0\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("payouts.csv"),
        "influencer_id,basis,rate,total_orders_by_influencer,total_payout\n\
         INF001,per_post,10000.0,2,50000.0\n\
         INF002,per_order,0.2,1,160.0\n",
    )
    .unwrap();
}

pub fn raw_fixture() -> RawTables {
    let day = |d: u32, h: u32| {
        NaiveDate::from_ymd_opt(2026, 1, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    };
    RawTables {
        influencers: vec![
            InfluencerRecord {
                influencer_id: "INF001".into(),
                name: "Asha Verma".into(),
                category: Category::Fitness,
                gender: Gender::Female,
                follower_count: 100_000,
                platform: Platform::Instagram,
            },
            InfluencerRecord {
                influencer_id: "INF002".into(),
                name: "Rohan Mehta".into(),
                category: Category::Beauty,
                gender: Gender::Male,
                follower_count: 50_000,
                platform: Platform::YouTube,
            },
        ],
        posts: vec![
            PostRecord {
                post_id: "POST0001".into(),
                influencer_id: "INF001".into(),
                platform: Platform::Instagram,
                date: day(5, 10),
                url: "https://instagram.com/ashaverma/post/1".into(),
                caption: "Morning routine.".into(),
                reach: 40_000,
                likes: 3_000,
                comments: 120,
            },
            PostRecord {
                post_id: "POST0002".into(),
                influencer_id: "INF002".into(),
                platform: Platform::YouTube,
                date: day(10, 9),
                url: "https://youtube.com/rohanmehta/post/2".into(),
                caption: "Honest review.".into(),
                reach: 20_000,
                likes: 900,
                comments: 40,
            },
        ],
        tracking: vec![
            TrackingRecord {
                tracking_id: "TRK00001".into(),
                source: "influencer_marketing".into(),
                campaign: "MB_SummerFit".into(),
                influencer_id: "INF001".into(),
                user_id: "u-001".into(),
                product: "Whey Protein".into(),
                date: day(6, 11),
                orders: 1,
                revenue: 3000.0,
            },
            TrackingRecord {
                tracking_id: "TRK00002".into(),
                source: "influencer_marketing".into(),
                campaign: "HKV_GlowUp".into(),
                influencer_id: "INF002".into(),
                user_id: "u-002".into(),
                product: "Biotin".into(),
                date: day(11, 14),
                orders: 1,
                revenue: 800.0,
            },
            TrackingRecord {
                tracking_id: "TRK00003".into(),
                source: "influencer_marketing".into(),
                campaign: "MB_SummerFit".into(),
                influencer_id: "INF001".into(),
                user_id: "u-003".into(),
                product: "Mystery Box".into(),
                date: day(7, 16),
                orders: 1,
                revenue: 500.0,
            },
        ],
        payouts: vec![
            PayoutRecord {
                influencer_id: "INF001".into(),
                basis: PayoutBasis::PerPost,
                rate: 10_000.0,
                total_orders_by_influencer: 2,
                total_payout: 50_000.0,
            },
            PayoutRecord {
                influencer_id: "INF002".into(),
                basis: PayoutBasis::PerOrder,
                rate: 0.2,
                total_orders_by_influencer: 1,
                total_payout: 160.0,
            },
        ],
    }
}
