//! NetCDF reading of Argo `*_prof.nc` files
//!
//! A file is opened, validated against the required layout, read in full
//! and closed again before [`NetcdfProfileFile::open`] returns; the
//! returned value holds only the raw columns.

use crate::data_source::ProfileSource;
use crate::decode::CharArray;
use crate::errors::{ExplorerError, Result};
use crate::metadata::ProfileFileLayout;
use crate::profile::Quantity;
use ndarray::{Array2, ArrayView1};
use netcdf::File;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw contents of one profile file
#[derive(Debug, Clone)]
pub struct NetcdfProfileFile {
    path: PathBuf,
    name: String,
    julian_days: Vec<f64>,
    latitudes: Vec<f64>,
    longitudes: Vec<f64>,
    cycle_numbers: Vec<i32>,
    platforms: Vec<CharArray>,
    pressure: Array2<f32>,
    temperature: Array2<f32>,
    salinity: Array2<f32>,
}

impl NetcdfProfileFile {
    /// Open, validate and fully read a profile file.
    ///
    /// # Errors
    ///
    /// Returns [`ExplorerError::MalformedSource`] if a required dimension or
    /// variable is missing or mis-shaped, and [`ExplorerError::NetCDFError`]
    /// if the file cannot be opened or read.
    pub fn open(path: &Path) -> Result<Self> {
        let name = path.display().to_string();
        let file = netcdf::open(path)?;

        let layout = ProfileFileLayout::inspect(&file);
        let (profile_count, level_count) = layout.validate(&name)?;
        debug!(file = %name, profile_count, level_count, "reading profile file");

        let platform_width = layout
            .variable("PLATFORM_NUMBER")
            .and_then(|check| check.found.as_ref())
            .and_then(|found| found.dimensions.get(1))
            .map_or(1, |d| d.length);

        if profile_count == 0 {
            return Ok(Self::empty(path, name, level_count));
        }

        Ok(Self {
            julian_days: read_f64(&file, "JULD", profile_count, &name)?,
            latitudes: read_f64(&file, "LATITUDE", profile_count, &name)?,
            longitudes: read_f64(&file, "LONGITUDE", profile_count, &name)?,
            cycle_numbers: read_i32(&file, "CYCLE_NUMBER", profile_count, &name)?,
            platforms: read_platforms(&file, profile_count, platform_width, &name)?,
            pressure: read_levels(&file, Quantity::Pressure, profile_count, level_count, &name)?,
            temperature: read_levels(&file, Quantity::Temperature, profile_count, level_count, &name)?,
            salinity: read_levels(&file, Quantity::Salinity, profile_count, level_count, &name)?,
            path: path.to_path_buf(),
            name,
        })
    }

    fn empty(path: &Path, name: String, level_count: usize) -> Self {
        Self {
            path: path.to_path_buf(),
            name,
            julian_days: Vec::new(),
            latitudes: Vec::new(),
            longitudes: Vec::new(),
            cycle_numbers: Vec::new(),
            platforms: Vec::new(),
            pressure: Array2::zeros((0, level_count)),
            temperature: Array2::zeros((0, level_count)),
            salinity: Array2::zeros((0, level_count)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Depth-level count (`N_LEVELS`)
    pub fn level_count(&self) -> usize {
        self.pressure.ncols()
    }
}

impl ProfileSource for NetcdfProfileFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn profile_count(&self) -> usize {
        self.julian_days.len()
    }

    fn julian_day(&self, index: usize) -> f64 {
        self.julian_days[index]
    }

    fn platform(&self, index: usize) -> &CharArray {
        &self.platforms[index]
    }

    fn cycle_number(&self, index: usize) -> i32 {
        self.cycle_numbers[index]
    }

    fn latitude(&self, index: usize) -> f64 {
        self.latitudes[index]
    }

    fn longitude(&self, index: usize) -> f64 {
        self.longitudes[index]
    }

    fn levels(&self, index: usize, quantity: Quantity) -> ArrayView1<'_, f32> {
        match quantity {
            Quantity::Pressure => self.pressure.row(index),
            Quantity::Temperature => self.temperature.row(index),
            Quantity::Salinity => self.salinity.row(index),
        }
    }
}

fn variable<'f>(file: &'f File, var_name: &str, source_name: &str) -> Result<netcdf::Variable<'f>> {
    file.variable(var_name)
        .ok_or_else(|| ExplorerError::malformed(source_name, format!("variable '{var_name}' is missing")))
}

fn check_len(values_len: usize, expected: usize, var_name: &str, source_name: &str) -> Result<()> {
    if values_len != expected {
        return Err(ExplorerError::malformed(
            source_name,
            format!("variable '{var_name}' holds {values_len} values, expected {expected}"),
        ));
    }
    Ok(())
}

fn read_f64(file: &File, var_name: &str, profile_count: usize, source_name: &str) -> Result<Vec<f64>> {
    let values = variable(file, var_name, source_name)?.get_values::<f64, _>(..)?;
    check_len(values.len(), profile_count, var_name, source_name)?;
    Ok(values)
}

fn read_i32(file: &File, var_name: &str, profile_count: usize, source_name: &str) -> Result<Vec<i32>> {
    let values = variable(file, var_name, source_name)?.get_values::<i32, _>(..)?;
    check_len(values.len(), profile_count, var_name, source_name)?;
    Ok(values)
}

/// Reads a `[N_PROF, N_LEVELS]` block into a row-per-profile array.
fn read_levels(
    file: &File,
    quantity: Quantity,
    profile_count: usize,
    level_count: usize,
    source_name: &str,
) -> Result<Array2<f32>> {
    let var_name = quantity.variable_name();
    let values = variable(file, var_name, source_name)?.get_values::<f32, _>(..)?;
    check_len(values.len(), profile_count * level_count, var_name, source_name)?;
    Ok(Array2::from_shape_vec((profile_count, level_count), values)?)
}

/// Reads `PLATFORM_NUMBER` one row per profile.
///
/// Single-byte variables (NetCDF `char`, `byte`, `ubyte`) are read as raw
/// bytes; anything else falls back to numeric values.
fn read_platforms(
    file: &File,
    profile_count: usize,
    width: usize,
    source_name: &str,
) -> Result<Vec<CharArray>> {
    let var = variable(file, "PLATFORM_NUMBER", source_name)?;
    let data_type = format!("{:?}", var.vartype()).to_lowercase();
    let width = width.max(1);

    if is_single_byte_type(&data_type) {
        let bytes = var.get_raw_values(..)?;
        check_len(bytes.len(), profile_count * width, "PLATFORM_NUMBER", source_name)?;
        Ok(bytes.chunks(width).map(CharArray::from).collect())
    } else {
        let values = var.get_values::<f64, _>(..)?;
        check_len(values.len(), profile_count * width, "PLATFORM_NUMBER", source_name)?;
        Ok(values
            .chunks(width)
            .map(|row| CharArray::Numeric(row.to_vec()))
            .collect())
    }
}

fn is_single_byte_type(data_type: &str) -> bool {
    data_type.contains("char") || data_type.contains("u8") || data_type.contains("i8")
}
