//! Per-profile summary statistics

use super::operations::{SampleReduction, StatOperation};
use crate::filter::Selection;
use crate::profile::{ProfileRecord, Quantity};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Mean temperature, salinity and pressure of one profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileSummary {
    pub platform_id: String,
    pub cycle_number: i32,
    pub observed_at: Option<DateTime<Utc>>,
    pub temp_mean: Option<f64>,
    pub psal_mean: Option<f64>,
    pub pres_mean: Option<f64>,
}

impl ProfileSummary {
    pub fn of(record: &ProfileRecord) -> Self {
        Self {
            platform_id: record.platform_id.clone(),
            cycle_number: record.cycle_number,
            observed_at: record.observed_at,
            temp_mean: record.temperature.mean(),
            psal_mean: record.salinity.mean(),
            pres_mean: record.pressure.mean(),
        }
    }

    pub fn mean(&self, quantity: Quantity) -> Option<f64> {
        match quantity {
            Quantity::Pressure => self.pres_mean,
            Quantity::Temperature => self.temp_mean,
            Quantity::Salinity => self.psal_mean,
        }
    }
}

/// Summaries for every record of a selection, in selection order
pub fn summarize(selection: &Selection<'_>) -> Vec<ProfileSummary> {
    selection.records().iter().map(|r| ProfileSummary::of(r)).collect()
}

/// Shallowest and deepest valid pressure of a profile
pub fn pressure_range(record: &ProfileRecord) -> Option<(f64, f64)> {
    let samples = record.samples(Quantity::Pressure);
    samples
        .reduce(StatOperation::Min)
        .zip(samples.reduce(StatOperation::Max))
}
