//! Render-ready projections of a filtered selection
//!
//! Produces the data behind the map, the per-profile depth charts and the
//! summary table. Drawing is left to whatever consumes these values: the
//! terminal report below, or an external renderer reading the JSON export.

use crate::errors::Result;
use crate::filter::Selection;
use crate::profile::{ProfileRecord, Quantity};
use crate::statistics::{pressure_range, summarize, ProfileSummary};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

/// One float position on the map
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub platform_id: String,
    pub cycle_number: i32,
    pub observed_at: Option<DateTime<Utc>>,
    pub latitude: f64,
    pub longitude: f64,
}

/// Records without both coordinates are left off the map.
pub fn map_points(selection: &Selection<'_>) -> Vec<MapPoint> {
    selection
        .records()
        .iter()
        .filter_map(|r| {
            let (latitude, longitude) = r.location()?;
            Some(MapPoint {
                platform_id: r.platform_id.clone(),
                cycle_number: r.cycle_number,
                observed_at: r.observed_at,
                latitude,
                longitude,
            })
        })
        .collect()
}

/// A value-versus-pressure line for one quantity
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    pub quantity: Quantity,
    pub name: &'static str,
    pub color: &'static str,
    /// `(value, pressure)` pairs in depth-level order
    pub points: Vec<(f32, f32)>,
}

impl Trace {
    /// Pairs valid values with their pressure. `None` if no pair is valid.
    pub fn of(record: &ProfileRecord, quantity: Quantity) -> Option<Self> {
        let values = record.samples(quantity);
        let points: Vec<(f32, f32)> = (0..values.len())
            .filter_map(|level| values.get(level).zip(record.pressure.get(level)))
            .collect();
        if points.is_empty() {
            return None;
        }
        let color = match quantity {
            Quantity::Temperature => "red",
            Quantity::Salinity => "blue",
            Quantity::Pressure => "gray",
        };
        Some(Self {
            quantity,
            name: quantity.label(),
            color,
            points,
        })
    }
}

/// Depth chart for one profile; the pressure axis points downward.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepthChart {
    pub cycle_number: i32,
    pub observed_at: Option<DateTime<Utc>>,
    pub y_axis: &'static str,
    pub y_reversed: bool,
    pub traces: Vec<Trace>,
}

impl DepthChart {
    pub fn of(record: &ProfileRecord) -> Self {
        Self {
            cycle_number: record.cycle_number,
            observed_at: record.observed_at,
            y_axis: Quantity::Pressure.label(),
            y_reversed: true,
            traces: [Quantity::Temperature, Quantity::Salinity]
                .into_iter()
                .filter_map(|q| Trace::of(record, q))
                .collect(),
        }
    }
}

/// Depth charts of one float
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlatformCharts {
    pub platform_id: String,
    pub charts: Vec<DepthChart>,
}

/// Charts grouped by platform, platforms in order of first appearance.
pub fn depth_charts(selection: &Selection<'_>) -> Vec<PlatformCharts> {
    selection
        .platforms()
        .into_iter()
        .map(|platform| PlatformCharts {
            platform_id: platform.to_string(),
            charts: selection
                .records()
                .iter()
                .filter(|r| r.platform_id == platform)
                .map(|r| DepthChart::of(r))
                .collect(),
        })
        .collect()
}

/// Everything a front end needs to draw one filtered view
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplorerView {
    pub profile_count: usize,
    pub map: Vec<MapPoint>,
    pub charts: Vec<PlatformCharts>,
    pub summary: Vec<ProfileSummary>,
}

impl ExplorerView {
    pub fn build(selection: &Selection<'_>) -> Self {
        Self {
            profile_count: selection.len(),
            map: map_points(selection),
            charts: depth_charts(selection),
            summary: summarize(selection),
        }
    }

    /// Writes the view as JSON.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }
}

fn fmt_opt(value: Option<f64>) -> String {
    value.map_or_else(|| "—".to_string(), |v| format!("{v:.3}"))
}

fn fmt_time(time: Option<DateTime<Utc>>) -> String {
    time.map_or_else(|| "—".to_string(), |t| t.format("%Y-%m-%d %H:%M:%S").to_string())
}

/// Prints the view to the terminal.
pub fn print_report(selection: &Selection<'_>, view: &ExplorerView) {
    println!("\n🌊 Argo Float Explorer");
    println!("Showing {} profiles", view.profile_count);

    if selection.is_no_match() {
        println!(
            "\n⚠ None of the {} loaded profiles match the current filters",
            selection.table_len()
        );
        return;
    }

    println!("\n Float Locations");
    println!("=================");
    if view.map.is_empty() {
        println!("   (No profiles with a valid position)");
    }
    for point in &view.map {
        println!(
            "    {} cycle {:>4}  ({:>9.4}, {:>9.4})  {}",
            point.platform_id,
            point.cycle_number,
            point.latitude,
            point.longitude,
            fmt_time(point.observed_at)
        );
    }
    let unlocated = view.profile_count - view.map.len();
    if unlocated > 0 {
        println!("   ({} profiles without a valid position)", unlocated);
    }

    println!("\n Profiles Analysis");
    println!("===================");
    for group in &view.charts {
        println!("\n### Float: {}", group.platform_id);
        let records = selection
            .records()
            .iter()
            .filter(|r| r.platform_id == group.platform_id);
        for (chart, record) in group.charts.iter().zip(records) {
            let depth = pressure_range(record)
                .map_or_else(|| "no valid pressure".to_string(), |(lo, hi)| format!("{lo:.1}–{hi:.1} dbar"));
            println!(
                "    cycle {:>4} @ {}  [{}]",
                chart.cycle_number,
                fmt_time(chart.observed_at),
                depth
            );
            if chart.traces.is_empty() {
                println!("       (no valid samples)");
            }
            for trace in &chart.traces {
                println!("       {}: {} points", trace.name, trace.points.len());
            }
        }
    }

    println!("\n Summary Statistics");
    println!("====================");
    println!(
        "    {:<10} {:>6} {:>12} {:>12} {:>12}",
        "platform", "cycle", "temp_mean", "psal_mean", "pres_mean"
    );
    for row in &view.summary {
        println!(
            "    {:<10} {:>6} {:>12} {:>12} {:>12}",
            row.platform_id,
            row.cycle_number,
            fmt_opt(row.temp_mean),
            fmt_opt(row.psal_mean),
            fmt_opt(row.pres_mean)
        );
    }
}
