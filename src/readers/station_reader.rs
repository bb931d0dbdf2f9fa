use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::debug;

use crate::error::{Result, WeatherError};
use crate::models::StationMetadata;
use crate::utils::constants::{MISSING_ELEVATION, STATIONS_HEADER_LINES};
use crate::utils::coordinates::parse_coordinate;

/// Reads the stations.txt metadata table: a fixed 17-line textual header,
/// then comma-delimited rows `STAID, STANAME, CN, LAT, LON, HGHT`.
pub struct StationReader;

impl StationReader {
    pub fn new() -> Self {
        Self
    }

    /// Read all station metadata rows, in table order.
    pub fn read_stations(&self, path: &Path) -> Result<Vec<StationMetadata>> {
        let file = File::open(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => {
                WeatherError::Config(format!("stations file not found: {}", path.display()))
            }
            _ => WeatherError::Io(e),
        })?;
        let reader = BufReader::new(file);

        let mut stations = Vec::new();
        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let line_number = index + 1;

            if line_number <= STATIONS_HEADER_LINES {
                continue;
            }

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            stations.push(parse_station_line(&line, path, line_number)?);
        }

        debug!(stations = stations.len(), "read stations table");
        Ok(stations)
    }

    /// Read station metadata keyed by station id.
    pub fn read_stations_map(&self, path: &Path) -> Result<HashMap<u32, StationMetadata>> {
        let stations = self.read_stations(path)?;
        let mut map = HashMap::with_capacity(stations.len());

        for station in stations {
            map.insert(station.staid, station);
        }

        Ok(map)
    }
}

impl Default for StationReader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_station_line(line: &str, path: &Path, line_number: usize) -> Result<StationMetadata> {
    let malformed = |message: String| WeatherError::RecordParse {
        path: path.display().to_string(),
        line: line_number,
        message,
    };

    let parts: Vec<&str> = line.split(',').map(str::trim).collect();

    if parts.len() < 6 {
        return Err(malformed(format!(
            "expected 6 fields, found {}",
            parts.len()
        )));
    }

    let staid = parts[0]
        .parse::<u32>()
        .map_err(|_| malformed(format!("invalid station id: '{}'", parts[0])))?;

    let name = parts[1].to_string();
    let country = parts[2].to_string();

    let latitude =
        parse_coordinate(parts[3]).map_err(|e| malformed(format!("invalid latitude: {e}")))?;
    let longitude =
        parse_coordinate(parts[4]).map_err(|e| malformed(format!("invalid longitude: {e}")))?;

    // Elevation can be missing
    let elevation = match parts[5] {
        "" => None,
        s => {
            let value = s
                .parse::<i32>()
                .map_err(|_| malformed(format!("invalid elevation: '{s}'")))?;
            (value != MISSING_ELEVATION).then_some(value)
        }
    };

    Ok(StationMetadata::new(
        staid, name, country, latitude, longitude, elevation,
    ))
}
