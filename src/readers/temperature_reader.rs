use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Result, WeatherError};
use crate::models::TemperatureRecord;
use crate::utils::constants::{DEFAULT_BUFFER_SIZE, STATION_FILE_HEADER_LINES};
use crate::utils::filename::station_file_name;

/// Reads one station's daily-temperature file.
///
/// Files follow the ECA&D per-station export: a fixed 20-line textual header,
/// then comma-delimited rows `STAID, SOUID, DATE, TG, Q_TG` with
/// whitespace-padded fields. Rows carrying the -9999 sentinel are kept here;
/// filtering them is the cleaner's job. A row that cannot be parsed fails the
/// whole read, so a request never sees a partial series.
#[derive(Debug, Clone)]
pub struct TemperatureReader {
    data_dir: PathBuf,
}

impl TemperatureReader {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Path of the data file for a station id.
    pub fn station_path(&self, staid: u32) -> PathBuf {
        self.data_dir.join(station_file_name(staid))
    }

    /// Read every record for a station, in file order.
    pub fn read_station(&self, staid: u32) -> Result<Vec<TemperatureRecord>> {
        let path = self.station_path(staid);
        let file = File::open(&path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => WeatherError::StationNotFound { staid },
            _ => WeatherError::Io(e),
        })?;
        let reader = BufReader::with_capacity(DEFAULT_BUFFER_SIZE, file);

        let mut records = Vec::new();
        for (index, line_result) in reader.lines().enumerate() {
            let line = line_result?;
            let line_number = index + 1;

            if line_number <= STATION_FILE_HEADER_LINES {
                continue;
            }

            // Skip empty lines
            if line.trim().is_empty() {
                continue;
            }

            records.push(parse_record_line(&line, &path, line_number)?);
        }

        debug!(staid, records = records.len(), "read station file");
        Ok(records)
    }
}

/// Parse a single data row. `line_number` is 1-based and reported on failure.
fn parse_record_line(line: &str, path: &Path, line_number: usize) -> Result<TemperatureRecord> {
    let malformed = |message: String| WeatherError::RecordParse {
        path: path.display().to_string(),
        line: line_number,
        message,
    };

    // Expected format: STAID, SOUID, DATE, TG, Q_TG
    let parts: Vec<&str> = line.split(',').map(str::trim).collect();

    if parts.len() < 5 {
        return Err(malformed(format!(
            "expected 5 fields, found {}",
            parts.len()
        )));
    }

    let staid = parts[0]
        .parse::<u32>()
        .map_err(|_| malformed(format!("invalid station id: '{}'", parts[0])))?;

    let souid = parts[1]
        .parse::<u32>()
        .map_err(|_| malformed(format!("invalid source id: '{}'", parts[1])))?;

    // Keep the raw text next to the parsed date: exact-date queries compare
    // parsed dates, annual queries prefix-match the text.
    let date_text = parts[2].to_string();
    let date = NaiveDate::parse_from_str(&date_text, "%Y%m%d")
        .map_err(|_| malformed(format!("invalid date: '{date_text}'")))?;

    let temperature_tenths = parts[3]
        .parse::<i32>()
        .map_err(|_| malformed(format!("invalid temperature: '{}'", parts[3])))?;

    let quality_flag = parts[4]
        .parse::<u8>()
        .map_err(|_| malformed(format!("invalid quality flag: '{}'", parts[4])))?;

    Ok(TemperatureRecord {
        staid,
        souid,
        date,
        date_text,
        temperature_tenths,
        quality_flag,
    })
}
