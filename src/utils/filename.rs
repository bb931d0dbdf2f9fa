use crate::utils::constants::{STATION_FILE_PREFIX, STATION_FILE_SUFFIX, STATION_ID_WIDTH};

/// Build the data file name for a station id, e.g. 23 -> "TG_STAID000023.txt"
pub fn station_file_name(staid: u32) -> String {
    format!("{STATION_FILE_PREFIX}{staid:0width$}{STATION_FILE_SUFFIX}", width = STATION_ID_WIDTH)
}

/// Extract the station id from a file name like "TG_STAID000257.txt".
///
/// Returns `None` for anything that does not match the naming pattern
/// exactly (wrong prefix or suffix, or an id part that is not 6 digits).
pub fn staid_from_file_name(name: &str) -> Option<u32> {
    let digits = name
        .strip_prefix(STATION_FILE_PREFIX)?
        .strip_suffix(STATION_FILE_SUFFIX)?;

    if digits.len() != STATION_ID_WIDTH || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    digits.parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_station_file_name() {
        assert_eq!(station_file_name(23), "TG_STAID000023.txt");
        assert_eq!(station_file_name(257), "TG_STAID000257.txt");
        assert_eq!(station_file_name(123456), "TG_STAID123456.txt");
    }

    #[test]
    fn test_staid_from_file_name() {
        assert_eq!(staid_from_file_name("TG_STAID000257.txt"), Some(257));
        assert_eq!(staid_from_file_name("TG_STAID000001.txt"), Some(1));
    }

    #[test]
    fn test_staid_from_file_name_rejects_non_matching() {
        // Other ECA&D element files share the directory
        assert_eq!(staid_from_file_name("TN_STAID000257.txt"), None);
        assert_eq!(staid_from_file_name("stations.txt"), None);
        assert_eq!(staid_from_file_name("TG_STAID257.txt"), None);
        assert_eq!(staid_from_file_name("TG_STAID00025x.txt"), None);
        assert_eq!(staid_from_file_name("TG_STAID000257.csv"), None);
    }

    #[test]
    fn test_round_trip() {
        for staid in [1, 42, 257, 999999] {
            assert_eq!(staid_from_file_name(&station_file_name(staid)), Some(staid));
        }
    }
}
