//! Static brand/product catalog and campaign labels.

use crate::types::Brand;

/// Attribution source label stamped on every tracking record.
pub const TRACKING_SOURCE: &str = "influencer_marketing";

pub const CAMPAIGNS: [&str; 5] = [
    "MB_SummerFit",
    "HKV_GlowUp",
    "Gritzo_KidsHealth",
    "MB_NewYearBulk",
    "HKV_DailyWellness",
];

/// Total product catalog: every sellable product and the brand that owns it.
pub const PRODUCTS: [(&str, Brand); 11] = [
    ("Whey Protein", Brand::MuscleBlaze),
    ("BCAA", Brand::MuscleBlaze),
    ("Creatine", Brand::MuscleBlaze),
    ("Mass Gainer", Brand::MuscleBlaze),
    ("Biotin", Brand::HkVitals),
    ("Multivitamin", Brand::HkVitals),
    ("Omega 3", Brand::HkVitals),
    ("Collagen", Brand::HkVitals),
    ("SuperMilk for Kids", Brand::Gritzo),
    ("Protein Oats for Teens", Brand::Gritzo),
    ("Gummy Stars", Brand::Gritzo),
];

/// Look up the owning brand for a product. `None` for products outside
/// the catalog; callers must surface the gap, never substitute a default.
pub fn brand_for_product(product: &str) -> Option<Brand> {
    PRODUCTS
        .iter()
        .find(|(name, _)| *name == product)
        .map(|(_, brand)| *brand)
}

/// Typical order value range (inclusive, in rupees) for a brand's products.
pub fn revenue_range(brand: Brand) -> (f64, f64) {
    match brand {
        Brand::MuscleBlaze => (1500.0, 5000.0),
        Brand::HkVitals => (400.0, 2000.0),
        Brand::Gritzo => (300.0, 1000.0),
    }
}
