use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{Result, WeatherError};
use crate::models::StationMetadata;
use crate::readers::StationReader;
use crate::utils::constants::STATIONS_FILE;
use crate::utils::filename::staid_from_file_name;

/// A station discovered in the data directory, joined best-effort against
/// the stations.txt metadata table. A data file with no metadata row still
/// yields an entry, with `metadata` left empty; a metadata row with no data
/// file is omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub staid: u32,
    pub metadata: Option<StationMetadata>,
}

/// Discovers available stations by scanning the data directory at request
/// time. Stateless: nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct StationCatalog {
    data_dir: PathBuf,
}

impl StationCatalog {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// List every station that has a data file, sorted by station id.
    pub fn list_stations(&self) -> Result<Vec<CatalogEntry>> {
        let dir = fs::read_dir(&self.data_dir).map_err(|e| match e.kind() {
            ErrorKind::NotFound => WeatherError::Config(format!(
                "data directory not found: {}",
                self.data_dir.display()
            )),
            _ => WeatherError::Io(e),
        })?;

        let mut ids = Vec::new();
        for entry in dir {
            let entry = entry?;
            let name = entry.file_name();
            let Some(name) = name.to_str() else {
                continue;
            };

            if let Some(staid) = staid_from_file_name(name) {
                ids.push(staid);
            }
        }
        ids.sort_unstable();

        let stations_path = self.data_dir.join(STATIONS_FILE);
        let mut metadata = StationReader::new().read_stations_map(&stations_path)?;

        let entries: Vec<CatalogEntry> = ids
            .into_iter()
            .map(|staid| {
                let metadata = metadata.remove(&staid);
                if metadata.is_none() {
                    warn!(staid, "station file has no metadata row");
                }
                CatalogEntry { staid, metadata }
            })
            .collect();

        debug!(stations = entries.len(), "listed station catalog");
        Ok(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::constants::{STATIONS_HEADER_LINES, STATION_FILE_HEADER_LINES};
    use crate::utils::filename::station_file_name;
    use std::fs::File;
    use std::io::Write;
    use std::path::Path;
    use tempfile::TempDir;

    fn write_station_file(dir: &Path, staid: u32) {
        let mut file = File::create(dir.join(station_file_name(staid))).unwrap();
        for i in 1..=STATION_FILE_HEADER_LINES {
            writeln!(file, "Header line {i}").unwrap();
        }
        writeln!(file, "{staid:5},  101, 20200101,  100, 0").unwrap();
    }

    fn write_stations_table(dir: &Path, rows: &[&str]) {
        let mut file = File::create(dir.join(STATIONS_FILE)).unwrap();
        for i in 1..=STATIONS_HEADER_LINES {
            writeln!(file, "Header line {i}").unwrap();
        }
        for row in rows {
            writeln!(file, "{row}").unwrap();
        }
    }

    #[test]
    fn test_list_stations_joins_metadata() {
        let dir = TempDir::new().unwrap();
        write_station_file(dir.path(), 1);
        write_station_file(dir.path(), 10);
        write_stations_table(
            dir.path(),
            &[
                "    1, VAEXJOE                                 , SE, 56:52:00, 14:48:00,  166",
                "   10, TRONDHEIM                               , NO, 63:25:00, 10:27:00,  127",
            ],
        );

        let entries = StationCatalog::new(dir.path()).list_stations().unwrap();

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].staid, 1);
        assert_eq!(entries[0].metadata.as_ref().unwrap().name, "VAEXJOE");
        assert_eq!(entries[1].staid, 10);
        assert_eq!(entries[1].metadata.as_ref().unwrap().country, "NO");
    }

    #[test]
    fn test_file_without_metadata_yields_partial_entry() {
        let dir = TempDir::new().unwrap();
        write_station_file(dir.path(), 7);
        write_stations_table(dir.path(), &[]);

        let entries = StationCatalog::new(dir.path()).list_stations().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].staid, 7);
        assert!(entries[0].metadata.is_none());
    }

    #[test]
    fn test_metadata_without_file_is_omitted() {
        let dir = TempDir::new().unwrap();
        write_station_file(dir.path(), 1);
        write_stations_table(
            dir.path(),
            &[
                "    1, VAEXJOE                                 , SE, 56:52:00, 14:48:00,  166",
                "   99, GHOST STATION                           , SE, 56:52:00, 14:48:00,  166",
            ],
        );

        let entries = StationCatalog::new(dir.path()).list_stations().unwrap();

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].staid, 1);
    }

    #[test]
    fn test_non_station_files_ignored() {
        let dir = TempDir::new().unwrap();
        write_station_file(dir.path(), 1);
        write_stations_table(dir.path(), &[]);
        File::create(dir.path().join("elements.txt")).unwrap();
        File::create(dir.path().join("TN_STAID000001.txt")).unwrap();

        let entries = StationCatalog::new(dir.path()).list_stations().unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_missing_data_dir_is_config_error() {
        let catalog = StationCatalog::new("/nonexistent/data");
        assert!(matches!(
            catalog.list_stations(),
            Err(WeatherError::Config(_))
        ));
    }

    #[test]
    fn test_missing_stations_table_is_config_error() {
        let dir = TempDir::new().unwrap();
        write_station_file(dir.path(), 1);

        let catalog = StationCatalog::new(dir.path());
        assert!(matches!(
            catalog.list_stations(),
            Err(WeatherError::Config(_))
        ));
    }
}
