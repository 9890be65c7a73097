//! Profile decoding and loading
//!
//! [`decode_profiles`] turns the raw entries of one [`ProfileSource`] into
//! [`ProfileRecord`]s. [`ProfileLoader`] runs it over a list of files, and
//! [`LoadCache`] memoizes whole loads keyed by the sorted file list.

use crate::config::FailurePolicy;
use crate::data_source::ProfileSource;
use crate::decode::{decode_char_array, decode_julian_day};
use crate::errors::{ExplorerError, Result};
use crate::netcdf_io::NetcdfProfileFile;
use crate::profile::{coordinate, ProfileRecord, Quantity, Samples};
use crate::table::ProfileTable;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::{debug, info, warn};

/// Counters collected during a load
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadReport {
    pub files_read: usize,
    pub files_skipped: usize,
    pub entries_seen: usize,
    /// Entries dropped because their time was a fill value
    pub entries_missing_time: usize,
}

impl LoadReport {
    pub fn records_kept(&self) -> usize {
        self.entries_seen - self.entries_missing_time
    }
}

/// Result of one load pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadOutcome {
    pub table: ProfileTable,
    pub report: LoadReport,
}

/// Decodes every entry of `source` that has a valid time.
///
/// Entries with a fill-valued time are skipped and counted in `report`.
/// Coordinates and samples carrying fill values become `None`.
///
/// # Errors
///
/// Returns [`ExplorerError::MalformedSource`] if an entry's three
/// measurement sequences differ in length, and
/// [`ExplorerError::InvalidCharacter`] if a platform id cannot be decoded.
pub fn decode_profiles<S>(source: &S, report: &mut LoadReport) -> Result<Vec<ProfileRecord>>
where
    S: ProfileSource + ?Sized,
{
    let count = source.profile_count();
    let mut records = Vec::with_capacity(count);

    for index in 0..count {
        report.entries_seen += 1;

        let Some(observed_at) = decode_julian_day(source.julian_day(index)) else {
            report.entries_missing_time += 1;
            debug!(source = source.name(), index, "skipping profile with fill-valued time");
            continue;
        };

        let [pressure, temperature, salinity] =
            Quantity::ALL.map(|q| Samples::from_raw(source.levels(index, q).iter().copied()));
        if temperature.len() != pressure.len() || salinity.len() != pressure.len() {
            return Err(ExplorerError::malformed(
                source.name(),
                format!(
                    "profile {index} has {} pressure, {} temperature and {} salinity levels",
                    pressure.len(),
                    temperature.len(),
                    salinity.len()
                ),
            ));
        }

        records.push(ProfileRecord {
            platform_id: decode_char_array(source.platform(index))?,
            cycle_number: source.cycle_number(index),
            observed_at: Some(observed_at),
            latitude: coordinate(source.latitude(index)),
            longitude: coordinate(source.longitude(index)),
            pressure,
            temperature,
            salinity,
            source: PathBuf::from(source.name()),
            profile_index: index,
        });
    }

    Ok(records)
}

/// Loads profile files into a [`ProfileTable`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ProfileLoader {
    policy: FailurePolicy,
}

impl ProfileLoader {
    pub fn new(policy: FailurePolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Loads NetCDF profile files in the given order.
    ///
    /// # Errors
    ///
    /// Under [`FailurePolicy::Abort`], the first file that fails to open or
    /// decode aborts the load with its error.
    pub fn load(&self, files: &[PathBuf]) -> Result<LoadOutcome> {
        self.load_with(files, NetcdfProfileFile::open)
    }

    /// Loads files through a custom opener.
    ///
    /// Each source is dropped before the next one is opened. A file that
    /// fails contributes no records, even if some of its entries decoded.
    ///
    /// # Errors
    ///
    /// See [`ProfileLoader::load`].
    pub fn load_with<S, F>(&self, files: &[PathBuf], mut open: F) -> Result<LoadOutcome>
    where
        S: ProfileSource,
        F: FnMut(&Path) -> Result<S>,
    {
        let mut report = LoadReport::default();
        let mut records = Vec::new();

        for path in files {
            let mut file_report = LoadReport::default();
            let decoded = open(path).and_then(|source| decode_profiles(&source, &mut file_report));

            match decoded {
                Ok(file_records) => {
                    debug!(
                        file = %path.display(),
                        kept = file_records.len(),
                        missing_time = file_report.entries_missing_time,
                        "decoded profile file"
                    );
                    report.files_read += 1;
                    report.entries_seen += file_report.entries_seen;
                    report.entries_missing_time += file_report.entries_missing_time;
                    records.extend(file_records);
                }
                Err(e) if self.policy == FailurePolicy::SkipAndLog => {
                    warn!("Skipping {}: {}", path.display(), e);
                    report.files_skipped += 1;
                }
                Err(e) => return Err(e),
            }
        }

        info!(
            files = report.files_read,
            skipped_files = report.files_skipped,
            profiles = records.len(),
            missing_time = report.entries_missing_time,
            "loaded profiles"
        );

        Ok(LoadOutcome {
            table: ProfileTable::new(records),
            report,
        })
    }
}

/// Memoizes loads keyed by the sorted input file list.
///
/// The loader passed to [`LoadCache::get_or_load`] receives the sorted
/// list, so the cached table does not depend on the caller's ordering.
/// Failed loads are not cached.
#[derive(Debug, Default)]
pub struct LoadCache {
    entries: HashMap<Vec<PathBuf>, Rc<LoadOutcome>>,
    hits: usize,
    misses: usize,
}

impl LoadCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached outcome for `files`, loading it on a miss.
    ///
    /// # Errors
    ///
    /// Propagates the error of `load` on a miss.
    pub fn get_or_load<F>(&mut self, files: &[PathBuf], load: F) -> Result<Rc<LoadOutcome>>
    where
        F: FnOnce(&[PathBuf]) -> Result<LoadOutcome>,
    {
        let mut key = files.to_vec();
        key.sort();

        if let Some(outcome) = self.entries.get(&key) {
            self.hits += 1;
            debug!(files = key.len(), "load cache hit");
            return Ok(Rc::clone(outcome));
        }

        self.misses += 1;
        debug!(files = key.len(), "load cache miss");
        let outcome = Rc::new(load(&key)?);
        self.entries.insert(key, Rc::clone(&outcome));
        Ok(outcome)
    }

    pub fn hits(&self) -> usize {
        self.hits
    }

    pub fn misses(&self) -> usize {
        self.misses
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
