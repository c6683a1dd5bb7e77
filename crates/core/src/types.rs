use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serde adapter for the `YYYY-MM-DD HH:MM:SS` timestamp format used by
/// the CSV tables.
pub mod table_datetime {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    Fitness,
    Wellness,
    Beauty,
    Lifestyle,
    Parenting,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Fitness,
        Category::Wellness,
        Category::Beauty,
        Category::Lifestyle,
        Category::Parenting,
    ];
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Fitness => "Fitness",
            Category::Wellness => "Wellness",
            Category::Beauty => "Beauty",
            Category::Lifestyle => "Lifestyle",
            Category::Parenting => "Parenting",
        };
        f.write_str(name)
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Fitness" => Ok(Category::Fitness),
            "Wellness" => Ok(Category::Wellness),
            "Beauty" => Ok(Category::Beauty),
            "Lifestyle" => Ok(Category::Lifestyle),
            "Parenting" => Ok(Category::Parenting),
            other => Err(format!("unknown category '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Platform {
    Instagram,
    YouTube,
    Twitter,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Instagram => "Instagram",
            Platform::YouTube => "YouTube",
            Platform::Twitter => "Twitter",
        };
        f.write_str(name)
    }
}

impl Platform {
    pub const ALL: [Platform; 3] = [Platform::Instagram, Platform::YouTube, Platform::Twitter];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Gender {
    Male,
    Female,
    #[serde(rename = "Non-Binary")]
    NonBinary,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::NonBinary];
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "Non-Binary",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Brand {
    MuscleBlaze,
    #[serde(rename = "HKVitals")]
    HkVitals,
    Gritzo,
}

impl Brand {
    pub const ALL: [Brand; 3] = [Brand::MuscleBlaze, Brand::HkVitals, Brand::Gritzo];
}

impl fmt::Display for Brand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Brand::MuscleBlaze => "MuscleBlaze",
            Brand::HkVitals => "HKVitals",
            Brand::Gritzo => "Gritzo",
        };
        f.write_str(name)
    }
}

impl FromStr for Brand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MuscleBlaze" => Ok(Brand::MuscleBlaze),
            "HKVitals" => Ok(Brand::HkVitals),
            "Gritzo" => Ok(Brand::Gritzo),
            other => Err(format!("unknown brand '{other}'")),
        }
    }
}

/// Payout calculation method: a fixed fee per published post, or a
/// commission on tracked order revenue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PayoutBasis {
    PerPost,
    PerOrder,
}

impl fmt::Display for PayoutBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PayoutBasis::PerPost => "per_post",
            PayoutBasis::PerOrder => "per_order",
        };
        f.write_str(name)
    }
}

// ─── Persisted rows (one struct per CSV table) ──────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluencerRecord {
    pub influencer_id: String,
    pub name: String,
    pub category: Category,
    pub gender: Gender,
    pub follower_count: u64,
    pub platform: Platform,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostRecord {
    pub post_id: String,
    pub influencer_id: String,
    pub platform: Platform,
    #[serde(with = "table_datetime")]
    pub date: NaiveDateTime,
    pub url: String,
    pub caption: String,
    pub reach: u64,
    pub likes: u64,
    pub comments: u64,
}

/// One conversion event attributed to an influencer. Each row is a
/// single order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingRecord {
    pub tracking_id: String,
    pub source: String,
    pub campaign: String,
    pub influencer_id: String,
    pub user_id: String,
    pub product: String,
    #[serde(with = "table_datetime")]
    pub date: NaiveDateTime,
    pub orders: u32,
    pub revenue: f64,
}

/// Agreed compensation for one influencer, computed once over the entire
/// dataset at generation time. Never re-derived from filtered views.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutRecord {
    pub influencer_id: String,
    pub basis: PayoutBasis,
    pub rate: f64,
    pub total_orders_by_influencer: u32,
    pub total_payout: f64,
}

// ─── Derived rows (computed by the ETL join, never persisted) ───────────

/// Unified row-per-conversion view: tracking joined with influencer and
/// payout attributes plus the catalog-derived brand. Joined-in fields are
/// optional to preserve left-join semantics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FactRow {
    pub tracking_id: String,
    pub source: String,
    pub campaign: String,
    pub influencer_id: String,
    pub user_id: String,
    pub product: String,
    pub brand: Option<Brand>,
    #[serde(with = "table_datetime")]
    pub date: NaiveDateTime,
    pub orders: u32,
    pub revenue: f64,
    pub influencer_name: Option<String>,
    pub category: Option<Category>,
    pub gender: Option<Gender>,
    pub follower_count: Option<u64>,
    pub platform: Option<Platform>,
    pub payout_basis: Option<PayoutBasis>,
    pub payout_rate: Option<f64>,
    pub total_payout: Option<f64>,
}

/// Influencer joined with payout: one row per influencer, used for
/// payout tracking and ROAS denominators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfluencerSummary {
    pub influencer_id: String,
    pub name: String,
    pub category: Category,
    pub gender: Gender,
    pub follower_count: u64,
    pub platform: Platform,
    pub basis: Option<PayoutBasis>,
    pub rate: Option<f64>,
    pub total_orders_by_influencer: Option<u32>,
    pub total_payout: Option<f64>,
}

/// Everything the loader produces for one input snapshot. Read-only for
/// the rest of the session; filters only derive new views from it.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub facts: Vec<FactRow>,
    pub posts: Vec<PostRecord>,
    pub summaries: Vec<InfluencerSummary>,
}

/// Table names shared by the CSV writer, the loader, and error messages.
pub mod tables {
    pub const INFLUENCERS: &str = "influencers";
    pub const POSTS: &str = "posts";
    pub const TRACKING: &str = "tracking_data";
    pub const PAYOUTS: &str = "payouts";

    pub fn csv_file(table: &str) -> String {
        format!("{table}.csv")
    }
}

/// Round to two decimal places, matching the precision of stored
/// monetary values.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
