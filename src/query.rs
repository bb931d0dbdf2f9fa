use std::path::PathBuf;

use chrono::NaiveDate;
use tracing::debug;

use crate::error::{Result, WeatherError};
use crate::models::CleanedReading;
use crate::processors::RecordCleaner;
use crate::readers::TemperatureReader;

/// Answers point, full-series and annual queries against per-station files.
///
/// Every operation is a pure function of the file contents: the station file
/// is re-read and re-cleaned on each call, and nothing is cached between
/// requests. Station ids arrive as the raw external strings and are parsed
/// here, so a non-numeric id is rejected as malformed input before any file
/// lookup happens.
#[derive(Debug, Clone)]
pub struct QueryEngine {
    reader: TemperatureReader,
    cleaner: RecordCleaner,
}

impl QueryEngine {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            reader: TemperatureReader::new(data_dir),
            cleaner: RecordCleaner::new(),
        }
    }

    /// Parse an externally-supplied station id. Leading zeros are accepted;
    /// anything non-numeric is malformed input, never "not found".
    pub fn parse_station_id(station: &str) -> Result<u32> {
        station
            .trim()
            .parse::<u32>()
            .map_err(|_| WeatherError::InvalidStationId(station.to_string()))
    }

    fn cleaned_records(&self, staid: u32) -> Result<Vec<CleanedReading>> {
        let raw = self.reader.read_station(staid)?;
        Ok(self.cleaner.clean(raw))
    }

    /// The reading for one station on one date, or `None` when the date is
    /// absent from the file or its only row carried the missing sentinel.
    /// The two cases are indistinguishable to the caller.
    pub fn temperature_on(&self, station: &str, date: &str) -> Result<Option<CleanedReading>> {
        let staid = Self::parse_station_id(station)?;
        let wanted = NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .map_err(|_| WeatherError::InvalidDate(date.to_string()))?;

        let records = self.cleaned_records(staid)?;
        let reading = records.into_iter().find(|r| r.date == wanted);

        debug!(staid, %wanted, found = reading.is_some(), "point query");
        Ok(reading)
    }

    /// Every cleaned record for a station, in file order.
    pub fn all_records(&self, station: &str) -> Result<Vec<CleanedReading>> {
        let staid = Self::parse_station_id(station)?;
        self.cleaned_records(staid)
    }

    /// Cleaned records whose raw DATE field starts with `year`.
    ///
    /// Matching is textual on the stored date representation, not on the
    /// parsed date's year component. The exact-date lookup above compares
    /// parsed dates instead; the two strategies are intentionally different
    /// and must not be unified. The year string is used as given.
    pub fn annual_records(&self, station: &str, year: &str) -> Result<Vec<CleanedReading>> {
        let staid = Self::parse_station_id(station)?;
        let records = self.cleaned_records(staid)?;

        Ok(records
            .into_iter()
            .filter(|r| r.date_text.starts_with(year))
            .collect())
    }
}
