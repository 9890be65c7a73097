//! Shared fixtures: writes small Argo-style profile files.

#![allow(dead_code)]

use std::path::Path;

pub const FILL: f32 = 99_999.0;
pub const PLATFORM_WIDTH: usize = 8;

/// One profile to be written into a fixture file
#[derive(Debug, Clone)]
pub struct FixtureProfile {
    pub platform: &'static str,
    pub cycle: i32,
    pub juld: f64,
    pub lat: f64,
    pub lon: f64,
    pub pres: Vec<f32>,
    pub temp: Vec<f32>,
    pub psal: Vec<f32>,
}

impl FixtureProfile {
    pub fn new(platform: &'static str, cycle: i32, juld: f64) -> Self {
        Self {
            platform,
            cycle,
            juld,
            lat: 10.0,
            lon: -30.0,
            pres: vec![5.0, 10.0, 20.0],
            temp: vec![20.0, 18.0, 16.0],
            psal: vec![35.0, 35.1, 35.2],
        }
    }
}

/// Writes a profile file with every required variable.
pub fn write_profile_file(
    path: &Path,
    profiles: &[FixtureProfile],
    n_levels: usize,
) -> Result<(), netcdf::Error> {
    write_profile_file_without(path, profiles, n_levels, None)
}

/// Writes a profile file, optionally leaving one variable out.
pub fn write_profile_file_without(
    path: &Path,
    profiles: &[FixtureProfile],
    n_levels: usize,
    omit: Option<&str>,
) -> Result<(), netcdf::Error> {
    let mut file = netcdf::create(path)?;
    file.add_dimension("N_PROF", profiles.len())?;
    file.add_dimension("N_LEVELS", n_levels)?;
    file.add_dimension("STRING8", PLATFORM_WIDTH)?;

    let keep = |name: &str| omit != Some(name);

    if keep("JULD") {
        let values: Vec<f64> = profiles.iter().map(|p| p.juld).collect();
        let mut var = file.add_variable::<f64>("JULD", &["N_PROF"])?;
        if !values.is_empty() {
            var.put_values(values.as_slice(), ..)?;
        }
    }
    if keep("LATITUDE") {
        let values: Vec<f64> = profiles.iter().map(|p| p.lat).collect();
        let mut var = file.add_variable::<f64>("LATITUDE", &["N_PROF"])?;
        if !values.is_empty() {
            var.put_values(values.as_slice(), ..)?;
        }
    }
    if keep("LONGITUDE") {
        let values: Vec<f64> = profiles.iter().map(|p| p.lon).collect();
        let mut var = file.add_variable::<f64>("LONGITUDE", &["N_PROF"])?;
        if !values.is_empty() {
            var.put_values(values.as_slice(), ..)?;
        }
    }
    if keep("CYCLE_NUMBER") {
        let values: Vec<i32> = profiles.iter().map(|p| p.cycle).collect();
        let mut var = file.add_variable::<i32>("CYCLE_NUMBER", &["N_PROF"])?;
        if !values.is_empty() {
            var.put_values(values.as_slice(), ..)?;
        }
    }
    if keep("PLATFORM_NUMBER") {
        let bytes: Vec<u8> = profiles
            .iter()
            .flat_map(|p| format!("{:<width$}", p.platform, width = PLATFORM_WIDTH).into_bytes())
            .collect();
        let mut var = file.add_variable::<u8>("PLATFORM_NUMBER", &["N_PROF", "STRING8"])?;
        if !bytes.is_empty() {
            var.put_values(bytes.as_slice(), ..)?;
        }
    }

    let padded = |levels: &[f32]| {
        let mut row = levels.to_vec();
        row.resize(n_levels, FILL);
        row
    };
    for name in ["PRES", "TEMP", "PSAL"] {
        if !keep(name) {
            continue;
        }
        let values: Vec<f32> = profiles
            .iter()
            .flat_map(|p| match name {
                "PRES" => padded(&p.pres),
                "TEMP" => padded(&p.temp),
                _ => padded(&p.psal),
            })
            .collect();
        let mut var = file.add_variable::<f32>(name, &["N_PROF", "N_LEVELS"])?;
        if !values.is_empty() {
            var.put_values(values.as_slice(), ..)?;
        }
    }

    Ok(())
}
