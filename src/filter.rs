//! Filtering the profile table by platform and date range

use crate::errors::{ExplorerError, Result};
use crate::profile::ProfileRecord;
use crate::table::ProfileTable;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// # Errors
    ///
    /// Returns [`ExplorerError::InvalidDate`] if `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ExplorerError::InvalidDate(format!(
                "range start {start} is after end {end}"
            )));
        }
        Ok(Self { start, end })
    }

    pub fn single_day(day: NaiveDate) -> Self {
        Self { start: day, end: day }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Platform and date criteria chosen by the operator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub platforms: HashSet<String>,
    pub dates: DateRange,
}

impl FilterCriteria {
    pub fn new<I, S>(platforms: I, dates: DateRange) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            platforms: platforms.into_iter().map(Into::into).collect(),
            dates,
        }
    }

    /// All platforms and the full observed date span.
    ///
    /// Falls back to `today` as a single-day range when no record has a time.
    pub fn defaults_for(table: &ProfileTable, today: NaiveDate) -> Self {
        let dates = table
            .date_span()
            .map_or_else(|| DateRange::single_day(today), |(start, end)| DateRange { start, end });
        Self::new(table.platforms(), dates)
    }

    /// Records without a time never match.
    pub fn matches(&self, record: &ProfileRecord) -> bool {
        self.platforms.contains(&record.platform_id)
            && record.observed_date().is_some_and(|d| self.dates.contains(d))
    }
}

/// Records of a table that passed a filter.
///
/// Keeps the size of the source table so an empty selection from a
/// non-empty table ("no match") is distinguishable from an empty table.
#[derive(Debug, Clone)]
pub struct Selection<'a> {
    records: Vec<&'a ProfileRecord>,
    table_len: usize,
}

impl<'a> Selection<'a> {
    pub fn records(&self) -> &[&'a ProfileRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows in the table the selection was taken from
    pub fn table_len(&self) -> usize {
        self.table_len
    }

    /// The table had rows but none matched
    pub fn is_no_match(&self) -> bool {
        self.records.is_empty() && self.table_len > 0
    }

    /// Unique platform ids in the selection, in order of first appearance
    pub fn platforms(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .copied()
            .map(|r| r.platform_id.as_str())
            .filter(|p| seen.insert(*p))
            .collect()
    }
}

/// Applies `criteria` to `table`, preserving row order.
pub fn select<'a>(table: &'a ProfileTable, criteria: &FilterCriteria) -> Selection<'a> {
    Selection {
        records: table.records().iter().filter(|r| criteria.matches(r)).collect(),
        table_len: table.len(),
    }
}
