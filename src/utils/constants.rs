/// File names
pub const STATIONS_FILE: &str = "stations.txt";

/// Station data files are named TG_STAID<6-digit zero-padded id>.txt
pub const STATION_FILE_PREFIX: &str = "TG_STAID";
pub const STATION_FILE_SUFFIX: &str = ".txt";
pub const STATION_ID_WIDTH: usize = 6;

/// Header sizes fixed by the ECA&D export layout
pub const STATIONS_HEADER_LINES: usize = 17;
pub const STATION_FILE_HEADER_LINES: usize = 20;

/// Sentinel marking a missing daily reading, in tenths of a degree
pub const MISSING_SENTINEL: i32 = -9999;

/// Elevation value marking an unknown station height
pub const MISSING_ELEVATION: i32 = -999;

/// Read buffering
pub const DEFAULT_BUFFER_SIZE: usize = 8192 * 16; // 128KB
