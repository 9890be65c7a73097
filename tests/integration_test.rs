//! End-to-end tests over real NetCDF profile files written to a temp dir.

mod common;

use argo_explorer::{
    config::{ExplorerConfig, FailurePolicy},
    decode::encode_julian_day,
    discovery::{discover_profile_files, PROFILE_FILE_PATTERN},
    errors::{ExplorerError, Result},
    filter::{select, FilterCriteria},
    loader::{LoadCache, ProfileLoader},
    metadata::ProfileFileLayout,
    netcdf_io::NetcdfProfileFile,
    presentation::ExplorerView,
    ProfileSource, Quantity,
};
use chrono::{NaiveDate, TimeZone, Utc};
use common::{write_profile_file, write_profile_file_without, FixtureProfile, FILL};
use std::path::PathBuf;
use tempfile::tempdir;

fn juld(d: u32, h: u32) -> f64 {
    encode_julian_day(Utc.with_ymd_and_hms(2020, 11, d, h, 0, 0).unwrap())
}

fn november(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2020, 11, d).unwrap()
}

#[test]
fn test_netcdf_profile_file_reading() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("20201122_prof.nc");

    let mut second = FixtureProfile::new("6901234", 58, juld(22, 18));
    second.pres = vec![4.0, 40.0];
    second.temp = vec![18.0, FILL];
    second.psal = vec![36.2, 36.1];
    write_profile_file(
        &path,
        &[FixtureProfile::new("2902746", 101, juld(22, 3)), second],
        4,
    )
    .expect("Failed to write fixture");

    let source = NetcdfProfileFile::open(&path)?;
    assert_eq!(source.profile_count(), 2);
    assert_eq!(source.level_count(), 4);
    assert_eq!(source.cycle_number(1), 58);
    assert_eq!(source.julian_day(0), juld(22, 3));

    // Padding levels are fill values in the raw view
    let temp = source.levels(1, Quantity::Temperature);
    assert_eq!(temp.to_vec(), vec![18.0, FILL, FILL, FILL]);

    Ok(())
}

#[test]
fn test_discover_and_load_directory() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let dir = temp_dir.path();

    let mut located = FixtureProfile::new("2902746", 1, juld(21, 0));
    located.temp = vec![5.0, FILL, 7.0];
    let mut unlocated = FixtureProfile::new("5906001", 12, juld(23, 9));
    unlocated.lat = 99_999.0;
    unlocated.lon = 99_999.0;

    write_profile_file(&dir.join("20201121_prof.nc"), &[located], 3).expect("write 21");
    write_profile_file(
        &dir.join("20201123_prof.nc"),
        &[FixtureProfile::new("2902746", 2, 999_999.0), unlocated],
        3,
    )
    .expect("write 23");
    // Not matching the naming convention
    write_profile_file(&dir.join("20201122_traj.nc"), &[FixtureProfile::new("1", 1, juld(22, 0))], 3)
        .expect("write traj");

    let config = ExplorerConfig::new(dir);
    let files = discover_profile_files(&config.data_dir, &config.file_pattern)?;
    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("20201121_prof.nc"));
    assert!(files[1].ends_with("20201123_prof.nc"));

    let outcome = ProfileLoader::new(config.failure_policy).load(&files)?;
    let table = outcome.table.ensure_not_empty()?;
    assert_eq!(table.len(), 2);
    assert_eq!(outcome.report.files_read, 2);
    assert_eq!(outcome.report.entries_seen, 3);
    assert_eq!(outcome.report.entries_missing_time, 1);

    let first = &table.records()[0];
    assert_eq!(first.platform_id, "2902746");
    assert_eq!(first.latitude, Some(10.0));
    assert_eq!(first.observed_date(), Some(november(21)));

    let second = &table.records()[1];
    assert_eq!(second.platform_id, "5906001");
    assert_eq!(second.cycle_number, 12);
    assert_eq!(second.latitude, None);
    assert_eq!(second.longitude, None);
    assert_eq!(second.profile_index, 1);

    let criteria = FilterCriteria::defaults_for(table, november(1));
    assert_eq!(criteria.dates.start, november(21));
    assert_eq!(criteria.dates.end, november(23));

    let selection = select(table, &criteria);
    let view = ExplorerView::build(&selection);
    assert_eq!(view.profile_count, 2);
    assert_eq!(view.map.len(), 1);
    assert_eq!(view.summary[0].temp_mean, Some(6.0));
    assert_eq!(view.charts.len(), 2);

    Ok(())
}

#[test]
fn test_missing_variable_is_malformed_source() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("broken_prof.nc");
    write_profile_file_without(&path, &[FixtureProfile::new("1", 1, juld(22, 0))], 3, Some("PSAL"))
        .expect("Failed to write fixture");

    let file = netcdf::open(&path)?;
    let layout = ProfileFileLayout::inspect(&file);
    assert_eq!(layout.profile_count, Some(1));
    assert_eq!(layout.level_count, Some(3));
    assert_eq!(layout.problems(), vec!["variable 'PSAL' is missing".to_string()]);
    assert!(layout.variable("PSAL").map_or(false, |v| v.found.is_none()));
    layout.print("broken_prof.nc");
    drop(file);

    let result = ProfileLoader::default().load(&[path.clone()]);
    match result {
        Err(ExplorerError::MalformedSource { reason, .. }) => {
            assert!(reason.contains("PSAL"));
        }
        other => panic!("Expected MalformedSource error, got {:?}", other.map(|o| o.table.len())),
    }

    Ok(())
}

#[test]
fn test_skip_policy_keeps_good_files() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let dir = temp_dir.path();
    write_profile_file_without(&dir.join("a_prof.nc"), &[FixtureProfile::new("1", 1, juld(22, 0))], 3, Some("JULD"))
        .expect("write a");
    write_profile_file(&dir.join("b_prof.nc"), &[FixtureProfile::new("2", 1, juld(22, 0))], 3)
        .expect("write b");
    std::fs::write(dir.join("c_prof.nc"), b"not a netcdf file")?;

    let files = discover_profile_files(dir, PROFILE_FILE_PATTERN)?;
    assert_eq!(files.len(), 3);

    assert!(ProfileLoader::new(FailurePolicy::Abort).load(&files).is_err());

    let outcome = ProfileLoader::new(FailurePolicy::SkipAndLog).load(&files)?;
    assert_eq!(outcome.table.len(), 1);
    assert_eq!(outcome.table.records()[0].platform_id, "2");
    assert_eq!(outcome.report.files_skipped, 2);

    Ok(())
}

#[test]
fn test_empty_directory_and_missing_directory() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");

    let files = discover_profile_files(temp_dir.path(), PROFILE_FILE_PATTERN)?;
    assert!(files.is_empty());
    let outcome = ProfileLoader::default().load(&files)?;
    assert!(outcome.table.is_empty());
    assert!(matches!(outcome.table.ensure_not_empty(), Err(ExplorerError::EmptyResultSet)));

    let missing = temp_dir.path().join("nope");
    match discover_profile_files(&missing, PROFILE_FILE_PATTERN) {
        Err(ExplorerError::DataDirNotFound { path }) => assert_eq!(path, missing),
        other => panic!("Expected DataDirNotFound, got {:?}", other),
    }

    Ok(())
}

#[test]
fn test_file_with_zero_profiles_loads_empty() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("empty_prof.nc");
    write_profile_file(&path, &[], 3).expect("Failed to write fixture");

    let outcome = ProfileLoader::default().load(&[path])?;
    assert!(outcome.table.is_empty());
    assert_eq!(outcome.report.files_read, 1);
    assert_eq!(outcome.report.entries_seen, 0);

    Ok(())
}

#[test]
fn test_cached_directory_load() -> Result<()> {
    let temp_dir = tempdir().expect("Failed to create temp dir");
    let path = temp_dir.path().join("20201122_prof.nc");
    write_profile_file(&path, &[FixtureProfile::new("2902746", 1, juld(22, 0))], 3)
        .expect("Failed to write fixture");

    let files: Vec<PathBuf> = discover_profile_files(temp_dir.path(), PROFILE_FILE_PATTERN)?;
    let loader = ProfileLoader::default();
    let mut cache = LoadCache::new();

    let first = cache.get_or_load(&files, |f| loader.load(f))?;
    let second = cache.get_or_load(&files, |f| loader.load(f))?;
    assert_eq!(cache.misses(), 1);
    assert_eq!(cache.hits(), 1);
    assert!(std::rc::Rc::ptr_eq(&first, &second));

    // A fresh load of the same files gives the same table
    let fresh = loader.load(&files)?;
    assert_eq!(fresh.table, first.table);

    Ok(())
}
