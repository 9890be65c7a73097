//! Normalized profile records
//!
//! A [`ProfileRecord`] is one observation cycle from one float. Every field
//! that the source encodes with a fill value is an `Option` here; the
//! sentinel comparison happens once, when the record is built.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::path::PathBuf;

/// Fill value of `LATITUDE`, `LONGITUDE`, `PRES`, `TEMP` and `PSAL`.
pub const MEASUREMENT_FILL_VALUE: f64 = 99_999.0;

/// The three depth-indexed quantities measured by a float.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Quantity {
    Pressure,
    Temperature,
    Salinity,
}

impl Quantity {
    pub const ALL: [Quantity; 3] = [Quantity::Pressure, Quantity::Temperature, Quantity::Salinity];

    /// Name of the NetCDF variable holding this quantity
    #[must_use]
    pub const fn variable_name(self) -> &'static str {
        match self {
            Self::Pressure => "PRES",
            Self::Temperature => "TEMP",
            Self::Salinity => "PSAL",
        }
    }

    /// Display label including units
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pressure => "Pressure (dbar)",
            Self::Temperature => "Temperature (°C)",
            Self::Salinity => "Salinity (psu)",
        }
    }
}

/// Maps a raw coordinate to `None` when it carries the fill value.
pub fn coordinate(raw: f64) -> Option<f64> {
    if raw == MEASUREMENT_FILL_VALUE || !raw.is_finite() {
        None
    } else {
        Some(raw)
    }
}

/// One measurement per depth level, `None` where the source holds a fill value.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Samples(Vec<Option<f32>>);

impl Samples {
    /// Build from raw values, marking fill values and non-finite values as missing.
    pub fn from_raw<I>(raw: I) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        Self(
            raw.into_iter()
                .map(|v| {
                    if f64::from(v) == MEASUREMENT_FILL_VALUE || !v.is_finite() {
                        None
                    } else {
                        Some(v)
                    }
                })
                .collect(),
        )
    }

    /// Number of depth levels, including missing ones
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, level: usize) -> Option<f32> {
        self.0.get(level).copied().flatten()
    }

    /// Iterate valid samples only
    pub fn valid(&self) -> impl Iterator<Item = f32> + '_ {
        self.0.iter().filter_map(|v| *v)
    }

    pub fn valid_count(&self) -> usize {
        self.valid().count()
    }

    pub fn as_slice(&self) -> &[Option<f32>] {
        &self.0
    }
}

impl From<Vec<Option<f32>>> for Samples {
    fn from(values: Vec<Option<f32>>) -> Self {
        Self(values)
    }
}

/// One decoded profile.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRecord {
    pub platform_id: String,
    pub cycle_number: i32,
    pub observed_at: Option<DateTime<Utc>>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub pressure: Samples,
    pub temperature: Samples,
    pub salinity: Samples,
    /// File (or fixture label) the record was decoded from
    pub source: PathBuf,
    /// Entry index within the source
    pub profile_index: usize,
}

impl ProfileRecord {
    pub fn samples(&self, quantity: Quantity) -> &Samples {
        match quantity {
            Quantity::Pressure => &self.pressure,
            Quantity::Temperature => &self.temperature,
            Quantity::Salinity => &self.salinity,
        }
    }

    /// Calendar date of the observation
    pub fn observed_date(&self) -> Option<NaiveDate> {
        self.observed_at.map(|t| t.date_naive())
    }

    /// Latitude and longitude, only when both are present
    pub fn location(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    /// Depth-level count shared by the three sequences
    pub fn level_count(&self) -> usize {
        self.pressure.len()
    }
}
