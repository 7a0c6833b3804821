//! Stats command

use crate::stats::{StatsStore, StatsSummary};
use anyhow::{Context, Result};

/// Summarize everything in `store`
///
/// # Errors
///
/// Returns an error if the store cannot be read.
pub fn summarize(store: &impl StatsStore) -> Result<StatsSummary> {
    let records = store.load().context("failed to load statistics")?;
    Ok(StatsSummary::from_records(&records))
}
