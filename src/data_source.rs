//! Profile source abstraction
//!
//! The decoder reads raw, undecoded fields through [`ProfileSource`], so the
//! same decoding path runs over NetCDF files and over in-memory fixtures.

use crate::decode::CharArray;
use crate::profile::Quantity;
use ndarray::ArrayView1;

/// Raw access to the profile entries of one source.
///
/// Implementations guarantee that every index below
/// [`profile_count`](ProfileSource::profile_count) is readable. Values are
/// returned exactly as stored, fill values included.
pub trait ProfileSource {
    /// Name used for provenance and in error messages
    fn name(&self) -> &str;

    /// Number of profile entries (`N_PROF`)
    fn profile_count(&self) -> usize;

    /// Raw `JULD` value
    fn julian_day(&self, index: usize) -> f64;

    /// Raw `PLATFORM_NUMBER` characters
    fn platform(&self, index: usize) -> &CharArray;

    /// Raw `CYCLE_NUMBER`
    fn cycle_number(&self, index: usize) -> i32;

    /// Raw `LATITUDE`
    fn latitude(&self, index: usize) -> f64;

    /// Raw `LONGITUDE`
    fn longitude(&self, index: usize) -> f64;

    /// Raw depth-level samples of one quantity
    fn levels(&self, index: usize, quantity: Quantity) -> ArrayView1<'_, f32>;
}

/// One raw profile entry held in memory
#[derive(Debug, Clone)]
pub struct RawProfile {
    pub julian_day: f64,
    pub platform: CharArray,
    pub cycle_number: i32,
    pub latitude: f64,
    pub longitude: f64,
    pub pressure: Vec<f32>,
    pub temperature: Vec<f32>,
    pub salinity: Vec<f32>,
}

impl RawProfile {
    /// A profile with the given time and platform and no depth levels
    pub fn new(julian_day: f64, platform: impl Into<CharArray>, cycle_number: i32) -> Self {
        Self {
            julian_day,
            platform: platform.into(),
            cycle_number,
            latitude: 0.0,
            longitude: 0.0,
            pressure: Vec::new(),
            temperature: Vec::new(),
            salinity: Vec::new(),
        }
    }

    pub fn at(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    pub fn with_levels(mut self, pressure: Vec<f32>, temperature: Vec<f32>, salinity: Vec<f32>) -> Self {
        self.pressure = pressure;
        self.temperature = temperature;
        self.salinity = salinity;
        self
    }
}

/// In-memory profile source for synthetic inputs
#[derive(Debug, Clone, Default)]
pub struct InMemoryProfiles {
    name: String,
    profiles: Vec<RawProfile>,
}

impl InMemoryProfiles {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            profiles: Vec::new(),
        }
    }

    pub fn push(mut self, profile: RawProfile) -> Self {
        self.profiles.push(profile);
        self
    }

    pub fn profiles(&self) -> &[RawProfile] {
        &self.profiles
    }
}

impl ProfileSource for InMemoryProfiles {
    fn name(&self) -> &str {
        &self.name
    }

    fn profile_count(&self) -> usize {
        self.profiles.len()
    }

    fn julian_day(&self, index: usize) -> f64 {
        self.profiles[index].julian_day
    }

    fn platform(&self, index: usize) -> &CharArray {
        &self.profiles[index].platform
    }

    fn cycle_number(&self, index: usize) -> i32 {
        self.profiles[index].cycle_number
    }

    fn latitude(&self, index: usize) -> f64 {
        self.profiles[index].latitude
    }

    fn longitude(&self, index: usize) -> f64 {
        self.profiles[index].longitude
    }

    fn levels(&self, index: usize, quantity: Quantity) -> ArrayView1<'_, f32> {
        let profile = &self.profiles[index];
        let values = match quantity {
            Quantity::Pressure => &profile.pressure,
            Quantity::Temperature => &profile.temperature,
            Quantity::Salinity => &profile.salinity,
        };
        ArrayView1::from(values.as_slice())
    }
}
