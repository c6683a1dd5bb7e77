//! CSV persistence for generated tables.

use pulse_core::types::tables;
use pulse_core::{PulseError, PulseResult};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

use crate::generator::GeneratedTables;

/// Row counts written per table, returned as generation confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableCounts {
    pub influencers: usize,
    pub posts: usize,
    pub tracking: usize,
    pub payouts: usize,
}

/// Write the four tables as headered CSV files under `dir`, creating the
/// directory if it does not exist.
pub fn write_tables(dir: &Path, generated: &GeneratedTables) -> PulseResult<TableCounts> {
    fs::create_dir_all(dir).map_err(|e| {
        PulseError::DataDir(format!("cannot create '{}': {e}", dir.display()))
    })?;

    write_table(dir, tables::INFLUENCERS, &generated.influencers)?;
    write_table(dir, tables::POSTS, &generated.posts)?;
    write_table(dir, tables::TRACKING, &generated.tracking)?;
    write_table(dir, tables::PAYOUTS, &generated.payouts)?;

    let counts = TableCounts {
        influencers: generated.influencers.len(),
        posts: generated.posts.len(),
        tracking: generated.tracking.len(),
        payouts: generated.payouts.len(),
    };
    info!(
        dir = %dir.display(),
        influencers = counts.influencers,
        posts = counts.posts,
        tracking = counts.tracking,
        payouts = counts.payouts,
        "Tables written"
    );
    Ok(counts)
}

fn write_table<T: Serialize>(dir: &Path, table: &str, rows: &[T]) -> PulseResult<()> {
    let path = dir.join(tables::csv_file(table));
    let mut writer =
        csv::Writer::from_path(&path).map_err(|e| PulseError::table_write(table, e))?;
    for row in rows {
        writer
            .serialize(row)
            .map_err(|e| PulseError::table_write(table, e))?;
    }
    writer.flush()?;
    Ok(())
}
