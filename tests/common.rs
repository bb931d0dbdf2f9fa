// Shared fixture helpers for integration tests. Each test builds its own
// data directory, so tests can run in parallel without interfering.

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::Path;

use ecad_weather_api::utils::constants::{
    STATIONS_FILE, STATIONS_HEADER_LINES, STATION_FILE_HEADER_LINES,
};
use ecad_weather_api::utils::filename::station_file_name;

/// Write a per-station data file: fixed 20-line header, then `rows`.
pub fn write_station_file(dir: &Path, staid: u32, rows: &[&str]) {
    let mut file = File::create(dir.join(station_file_name(staid))).unwrap();
    for i in 1..=STATION_FILE_HEADER_LINES {
        writeln!(file, "Header line {i}").unwrap();
    }
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
}

/// Write the stations.txt metadata table: fixed 17-line header, then `rows`.
pub fn write_stations_table(dir: &Path, rows: &[&str]) {
    let mut file = File::create(dir.join(STATIONS_FILE)).unwrap();
    for i in 1..=STATIONS_HEADER_LINES {
        writeln!(file, "Header line {i}").unwrap();
    }
    for row in rows {
        writeln!(file, "{row}").unwrap();
    }
}
