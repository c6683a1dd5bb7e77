//! Filter engine: applies a date-range plus brand/category selection to
//! the fact table and derives the matching influencer subset.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use pulse_core::types::{Brand, Category, Dataset, FactRow, InfluencerSummary};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// One immutable filter selection. Threaded explicitly through the
/// filter and aggregation functions; there is no ambient filter state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParameters {
    pub start_day: NaiveDate,
    pub end_day: NaiveDate,
    pub brands: BTreeSet<Brand>,
    pub categories: BTreeSet<Category>,
}

impl FilterParameters {
    /// A window with every brand and category selected.
    pub fn all_selections(start_day: NaiveDate, end_day: NaiveDate) -> Self {
        Self {
            start_day,
            end_day,
            brands: Brand::ALL.into_iter().collect(),
            categories: Category::ALL.into_iter().collect(),
        }
    }

    /// Half-open datetime window spanning whole calendar days:
    /// `[start_day 00:00:00, day-after-end_day 00:00:00)`. A single-day
    /// range therefore matches that entire day.
    fn window(&self) -> (NaiveDateTime, NaiveDateTime) {
        let start = self.start_day.and_time(NaiveTime::MIN);
        let end = self
            .end_day
            .checked_add_days(Days::new(1))
            .unwrap_or(NaiveDate::MAX)
            .and_time(NaiveTime::MIN);
        (start, end)
    }

    /// Whether a fact row passes the date, brand, and category predicate.
    /// Rows with a missing brand or category never match a selection, and
    /// an empty selection matches nothing.
    pub fn matches(&self, fact: &FactRow) -> bool {
        let (start, end) = self.window();
        fact.date >= start
            && fact.date < end
            && fact.brand.is_some_and(|b| self.brands.contains(&b))
            && fact.category.is_some_and(|c| self.categories.contains(&c))
    }
}

/// The filtered fact subset plus the summaries of exactly the
/// influencers present in it.
#[derive(Debug, Clone)]
pub struct FilteredView {
    pub params: FilterParameters,
    pub facts: Vec<FactRow>,
    pub summaries: Vec<InfluencerSummary>,
}

pub fn apply(dataset: &Dataset, params: &FilterParameters) -> FilteredView {
    let facts: Vec<FactRow> = dataset
        .facts
        .iter()
        .filter(|fact| params.matches(fact))
        .cloned()
        .collect();

    let matched_ids: HashSet<&str> = facts.iter().map(|f| f.influencer_id.as_str()).collect();
    let summaries: Vec<InfluencerSummary> = dataset
        .summaries
        .iter()
        .filter(|s| matched_ids.contains(s.influencer_id.as_str()))
        .cloned()
        .collect();

    debug!(
        facts = facts.len(),
        influencers = summaries.len(),
        start = %params.start_day,
        end = %params.end_day,
        "Filter applied"
    );
    FilteredView {
        params: params.clone(),
        facts,
        summaries,
    }
}
