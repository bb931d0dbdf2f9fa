use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::utils::constants::MISSING_SENTINEL;

/// One row of a per-station data file, as written on disk.
///
/// The temperature is kept in raw tenths of a degree Celsius, including the
/// -9999 sentinel for missing readings; filtering and unit conversion happen
/// in a separate cleaning step. `date_text` holds the trimmed DATE field
/// exactly as it appears in the file (compact YYYYMMDD), alongside the parsed
/// calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRecord {
    pub staid: u32,
    pub souid: u32,
    pub date: NaiveDate,
    pub date_text: String,
    pub temperature_tenths: i32,
    pub quality_flag: u8,
}

impl TemperatureRecord {
    pub fn is_missing(&self) -> bool {
        self.temperature_tenths == MISSING_SENTINEL
    }
}

/// A record that passed cleaning: temperature guaranteed present, in degrees
/// Celsius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CleanedReading {
    pub staid: u32,
    pub souid: u32,
    pub date: NaiveDate,
    pub date_text: String,
    pub temperature: f64,
    pub quality_flag: u8,
}

impl CleanedReading {
    /// Convert a raw record, dropping it when it carries the missing
    /// sentinel. Tenths are divided by 10.0, not integer-truncated.
    pub fn from_record(record: TemperatureRecord) -> Option<Self> {
        if record.is_missing() {
            return None;
        }

        Some(Self {
            staid: record.staid,
            souid: record.souid,
            date: record.date,
            date_text: record.date_text,
            temperature: f64::from(record.temperature_tenths) / 10.0,
            quality_flag: record.quality_flag,
        })
    }
}
