//! Creates a sample Argo profile file for trying out the explorer.
//!
//! Writes `sample_data/20201122_prof.nc` with three floats, including one
//! profile with a fill-valued time and one without a position.

use argo_explorer::decode::{encode_julian_day, JULIAN_FILL_THRESHOLD};
use chrono::{TimeZone, Utc};
use netcdf::create;
use std::path::Path;

const FILL: f32 = 99_999.0;
const N_PROF: usize = 4;
const N_LEVELS: usize = 5;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let dir = Path::new("sample_data");
    std::fs::create_dir_all(dir)?;
    let output_path = dir.join("20201122_prof.nc");

    println!("🔨 Creating sample profile file: {}", output_path.display());

    if output_path.exists() {
        std::fs::remove_file(&output_path)?
    }

    let mut file = create(&output_path)?;

    file.add_attribute("title", "Argo float vertical profile")?;
    file.add_attribute("data_type", "Argo profile")?;
    file.add_attribute("created_by", "create_sample_profiles.rs")?;

    file.add_dimension("N_PROF", N_PROF)?;
    file.add_dimension("N_LEVELS", N_LEVELS)?;
    file.add_dimension("STRING8", 8)?;

    let juld: Vec<f64> = vec![
        encode_julian_day(Utc.with_ymd_and_hms(2020, 11, 22, 3, 14, 0).unwrap()),
        encode_julian_day(Utc.with_ymd_and_hms(2020, 11, 22, 18, 40, 30).unwrap()),
        JULIAN_FILL_THRESHOLD,
        encode_julian_day(Utc.with_ymd_and_hms(2020, 11, 23, 9, 5, 0).unwrap()),
    ];
    {
        let mut var = file.add_variable::<f64>("JULD", &["N_PROF"])?;
        var.put_attribute("units", "days since 1950-01-01 00:00:00 UTC")?;
        var.put_attribute("_FillValue", JULIAN_FILL_THRESHOLD)?;
        var.put_values(&juld, ..)?;
    }

    {
        let mut lat = file.add_variable::<f64>("LATITUDE", &["N_PROF"])?;
        lat.put_attribute("units", "degree_north")?;
        lat.put_attribute("_FillValue", 99_999.0f64)?;
        lat.put_values(&[-12.5f64, 35.25, 0.0, 99_999.0], ..)?;
    }

    {
        let mut lon = file.add_variable::<f64>("LONGITUDE", &["N_PROF"])?;
        lon.put_attribute("units", "degree_east")?;
        lon.put_attribute("_FillValue", 99_999.0f64)?;
        lon.put_values(&[72.0f64, -20.75, 0.0, 99_999.0], ..)?;
    }

    {
        let platforms = ["2902746 ", "6901234 ", "6901234 ", "5906001 "];
        let bytes: Vec<u8> = platforms.iter().flat_map(|p| p.bytes()).collect();
        let mut var = file.add_variable::<u8>("PLATFORM_NUMBER", &["N_PROF", "STRING8"])?;
        var.put_attribute("long_name", "Float unique identifier")?;
        var.put_values(&bytes, ..)?;
    }

    {
        let mut cycle = file.add_variable::<i32>("CYCLE_NUMBER", &["N_PROF"])?;
        cycle.put_values(&[101i32, 57, 58, 12], ..)?;
    }

    // Levels are written row by row: profile 0 first
    let pres: Vec<f32> = vec![
        5.0, 50.0, 100.0, 500.0, 1000.0, //
        4.0, 40.0, 200.0, FILL, FILL, //
        FILL, FILL, FILL, FILL, FILL, //
        10.0, 20.0, 30.0, 40.0, 50.0,
    ];
    let temp: Vec<f32> = vec![
        28.1, 26.4, 18.2, 8.9, 4.3, //
        18.0, FILL, 13.5, FILL, FILL, //
        FILL, FILL, FILL, FILL, FILL, //
        FILL, FILL, FILL, FILL, FILL,
    ];
    let psal: Vec<f32> = vec![
        35.1, 35.2, 35.0, 34.6, 34.7, //
        36.2, 36.1, 35.8, FILL, FILL, //
        FILL, FILL, FILL, FILL, FILL, //
        34.0, 34.1, 34.1, 34.2, 34.3,
    ];
    for (name, units, data) in [
        ("PRES", "decibar", &pres),
        ("TEMP", "degree_Celsius", &temp),
        ("PSAL", "psu", &psal),
    ] {
        let mut var = file.add_variable::<f32>(name, &["N_PROF", "N_LEVELS"])?;
        var.put_attribute("units", units)?;
        var.put_attribute("_FillValue", FILL)?;
        var.put_values(data, ..)?;
    }

    println!("✅ Successfully created sample profile file with:");
    println!("   📏 Dimensions: N_PROF({N_PROF}), N_LEVELS({N_LEVELS}), STRING8(8)");
    println!("   📈 Variables: JULD, LATITUDE, LONGITUDE, PLATFORM_NUMBER, CYCLE_NUMBER, PRES, TEMP, PSAL");
    println!("\n🧪 Explore it with:");
    println!("   cargo run -- --data-dir sample_data");

    Ok(())
}
