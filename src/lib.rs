//! argo_explorer: decoding and exploration of Argo float profile files
//!
//! Reads Argo `*_prof.nc` NetCDF files, decodes every profile into a
//! normalized [`ProfileRecord`], and assembles them into a flat
//! [`ProfileTable`]. Filtering and projections turn the table into map
//! points, depth charts and summary statistics.
//!
//! ## Key Features
//!
//! - **Fill-value handling**: `JULD`, coordinate and sample fill values
//!   become `None` at decode time
//! - **Julian day decoding**: days since 1950-01-01 to UTC timestamps
//! - **Memoized loading**: whole loads cached by their sorted file list
//! - **Pluggable sources**: the decoder runs over NetCDF files or in-memory
//!   fixtures through [`ProfileSource`]
//!
//! ## Module Organization
//!
//! - [`decode`]: character-array and Julian day decoders
//! - [`profile`]: the normalized record model
//! - [`data_source`]: raw profile source trait and in-memory source
//! - [`metadata`]: structural checks of profile files
//! - [`netcdf_io`]: NetCDF profile file reading
//! - [`discovery`]: profile file discovery
//! - [`loader`]: decoding, loading and the load cache
//! - [`table`]: the profile table
//! - [`filter`]: platform and date filtering
//! - [`statistics`]: per-profile summary statistics
//! - [`presentation`]: map, chart and summary projections
//! - [`config`]: explorer configuration
//! - [`errors`]: centralized error handling
//!
//! ## Usage
//!
//! ```rust,no_run
//! use argo_explorer::prelude::*;
//! use std::path::Path;
//!
//! let files = discover_profile_files(Path::new("./Data/2020/11/"), "*_prof.nc").unwrap();
//! let outcome = ProfileLoader::default().load(&files).unwrap();
//! let table = outcome.table.ensure_not_empty().unwrap();
//!
//! let today = chrono::Utc::now().date_naive();
//! let criteria = FilterCriteria::defaults_for(table, today);
//! let selection = select(table, &criteria);
//! let view = ExplorerView::build(&selection);
//! println!("{} profiles, {} on the map", view.profile_count, view.map.len());
//! ```

pub mod config;
pub mod data_source;
pub mod decode;
pub mod discovery;
pub mod errors;
pub mod filter;
pub mod loader;
pub mod metadata;
pub mod netcdf_io;
pub mod presentation;
pub mod profile;
pub mod statistics;
pub mod table;

pub use data_source::{InMemoryProfiles, ProfileSource, RawProfile};
pub use errors::{ExplorerError, Result};
pub use profile::{ProfileRecord, Quantity, Samples};
pub use table::ProfileTable;

pub mod prelude {
    //! Commonly used imports for convenience
    pub use crate::config::{ExplorerConfig, FailurePolicy};
    pub use crate::data_source::{InMemoryProfiles, ProfileSource, RawProfile};
    pub use crate::decode::{decode_char_array, decode_julian_day, decode_julian_days, CharArray};
    pub use crate::discovery::discover_profile_files;
    pub use crate::errors::{ExplorerError, Result};
    pub use crate::filter::{select, DateRange, FilterCriteria, Selection};
    pub use crate::loader::{decode_profiles, LoadCache, LoadOutcome, LoadReport, ProfileLoader};
    pub use crate::netcdf_io::NetcdfProfileFile;
    pub use crate::presentation::ExplorerView;
    pub use crate::profile::{ProfileRecord, Quantity, Samples};
    pub use crate::statistics::{ProfileSummary, SampleReduction, StatOperation};
    pub use crate::table::ProfileTable;
}
