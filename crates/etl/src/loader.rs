//! CSV table loading. Any missing file, unreadable row, or unparseable
//! timestamp aborts the load with an error naming the offending table.

use pulse_core::types::{
    tables, Dataset, InfluencerRecord, PayoutRecord, PostRecord, TrackingRecord,
};
use pulse_core::{PulseError, PulseResult};
use serde::de::DeserializeOwned;
use std::path::Path;
use tracing::debug;

use crate::join;

/// The four tables exactly as read from disk, before joining.
#[derive(Debug, Clone)]
pub struct RawTables {
    pub influencers: Vec<InfluencerRecord>,
    pub posts: Vec<PostRecord>,
    pub tracking: Vec<TrackingRecord>,
    pub payouts: Vec<PayoutRecord>,
}

pub fn load_raw_tables(dir: &Path) -> PulseResult<RawTables> {
    let raw = RawTables {
        influencers: load_table(dir, tables::INFLUENCERS)?,
        posts: load_table(dir, tables::POSTS)?,
        tracking: load_table(dir, tables::TRACKING)?,
        payouts: load_table(dir, tables::PAYOUTS)?,
    };
    debug!(
        influencers = raw.influencers.len(),
        posts = raw.posts.len(),
        tracking = raw.tracking.len(),
        payouts = raw.payouts.len(),
        "Raw tables loaded"
    );
    Ok(raw)
}

/// Load and join the four tables into the session dataset. Deterministic
/// for identical input files: row order is preserved from the input.
pub fn load_dataset(dir: &Path) -> PulseResult<Dataset> {
    Ok(join::build_dataset(load_raw_tables(dir)?))
}

fn load_table<T: DeserializeOwned>(dir: &Path, table: &str) -> PulseResult<Vec<T>> {
    let path = dir.join(tables::csv_file(table));
    let mut reader =
        csv::Reader::from_path(&path).map_err(|e| PulseError::table_load(table, e))?;
    let mut rows = Vec::new();
    for row in reader.deserialize() {
        rows.push(row.map_err(|e| PulseError::table_load(table, e))?);
    }
    Ok(rows)
}
