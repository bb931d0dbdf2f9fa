use crate::models::{CleanedReading, TemperatureRecord};

/// Drops sentinel-valued records and converts the rest from tenths of a
/// degree to degrees Celsius. Pure and order-preserving.
#[derive(Debug, Clone)]
pub struct RecordCleaner;

impl RecordCleaner {
    pub fn new() -> Self {
        Self
    }

    pub fn clean(&self, records: Vec<TemperatureRecord>) -> Vec<CleanedReading> {
        records
            .into_iter()
            .filter_map(CleanedReading::from_record)
            .collect()
    }
}

impl Default for RecordCleaner {
    fn default() -> Self {
        Self::new()
    }
}
