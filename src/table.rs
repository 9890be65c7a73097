//! The flat profile table handed to filtering and presentation

use crate::errors::{ExplorerError, Result};
use crate::profile::ProfileRecord;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;

/// Ordered, read-only collection of decoded profiles.
///
/// Row order is file order, then entry order within each file.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ProfileTable {
    records: Vec<ProfileRecord>,
}

impl ProfileTable {
    pub fn new(records: Vec<ProfileRecord>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[ProfileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Fails with [`ExplorerError::EmptyResultSet`] when the table has no rows.
    ///
    /// Callers use this to stop before filtering or rendering.
    pub fn ensure_not_empty(&self) -> Result<&Self> {
        if self.is_empty() {
            Err(ExplorerError::EmptyResultSet)
        } else {
            Ok(self)
        }
    }

    /// Unique platform ids in order of first appearance
    pub fn platforms(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .map(|r| r.platform_id.as_str())
            .filter(|p| seen.insert(*p))
            .collect()
    }

    /// Earliest and latest observation dates, if any record has a time
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let mut dates = self.records.iter().filter_map(ProfileRecord::observed_date);
        let first = dates.next()?;
        Some(dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d))))
    }

    /// Writes the table as a JSON array, one object per row.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

impl FromIterator<ProfileRecord> for ProfileTable {
    fn from_iter<I: IntoIterator<Item = ProfileRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
