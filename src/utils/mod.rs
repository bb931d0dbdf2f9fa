pub mod constants;
pub mod coordinates;
pub mod filename;

pub use constants::*;
pub use coordinates::{dms_to_decimal, parse_coordinate};
pub use filename::{staid_from_file_name, station_file_name};
