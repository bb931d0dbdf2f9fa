pub mod station;
pub mod temperature;

pub use station::StationMetadata;
pub use temperature::{CleanedReading, TemperatureRecord};
