use serde::{Deserialize, Serialize};

/// Display metadata for one station, taken from the stations.txt table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationMetadata {
    pub staid: u32,
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: Option<i32>,
}

impl StationMetadata {
    pub fn new(
        staid: u32,
        name: String,
        country: String,
        latitude: f64,
        longitude: f64,
        elevation: Option<i32>,
    ) -> Self {
        Self {
            staid,
            name,
            country,
            latitude,
            longitude,
            elevation,
        }
    }
}
