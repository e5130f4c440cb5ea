//! Per-station crux file resolution.
use std::path::PathBuf;

use crate::config::Config;
use crate::Error;

/// Returns the crux file to hand to the splicer for this station.
/// The station's own folder under `<base>/RINEX/` has priority over the
/// shared crux repository; a station without a crux file aborts the run.
pub fn find_crux_file(cfg: &Config, station: &str) -> Result<PathBuf, Error> {
    let crux_fn = format!("{}_crux.txt", station.to_ascii_lowercase());

    let path = cfg
        .base_dir
        .join("RINEX")
        .join(station.to_ascii_uppercase())
        .join(&crux_fn);
    if path.exists() {
        return Ok(path);
    }

    let path = cfg.crux_dir.join(&crux_fn);
    if path.exists() {
        return Ok(path);
    }

    error!("crux file for station {} not found. Aborting...", station);
    Err(Error::CruxFileMissing(station.to_string()))
}

#[cfg(test)]
mod test {
    use super::find_crux_file;
    use crate::config::Config;
    use crate::Error;
    use std::fs::{create_dir_all, write};
    use std::path::PathBuf;

    fn fixture() -> (tempfile::TempDir, Config) {
        let dir = tempfile::tempdir().unwrap();
        let cfg = Config {
            base_dir: dir.path().join("GNSS"),
            crux_dir: dir.path().join("Crux"),
            gfzrnx: PathBuf::from("gfzrnx"),
        };
        create_dir_all(cfg.base_dir.join("RINEX").join("ABCD")).unwrap();
        create_dir_all(&cfg.crux_dir).unwrap();
        (dir, cfg)
    }

    #[test]
    fn station_folder_has_priority() {
        let (_dir, cfg) = fixture();
        let candidate_1 = cfg.base_dir.join("RINEX").join("ABCD").join("abcd_crux.txt");
        let candidate_2 = cfg.crux_dir.join("abcd_crux.txt");
        write(&candidate_1, b"-").unwrap();
        write(&candidate_2, b"-").unwrap();
        assert_eq!(find_crux_file(&cfg, "ABCD").unwrap(), candidate_1);
    }
    #[test]
    fn repository_fallback() {
        let (_dir, cfg) = fixture();
        let candidate_2 = cfg.crux_dir.join("abcd_crux.txt");
        write(&candidate_2, b"-").unwrap();
        assert_eq!(find_crux_file(&cfg, "ABCD").unwrap(), candidate_2);
    }
    #[test]
    fn lowercase_station_id() {
        // station folders are upper case, crux files lower case,
        // whatever the case of the station directory itself
        let (_dir, cfg) = fixture();
        let candidate_1 = cfg.base_dir.join("RINEX").join("ABCD").join("abcd_crux.txt");
        write(&candidate_1, b"-").unwrap();
        assert_eq!(find_crux_file(&cfg, "abcd").unwrap(), candidate_1);
    }
    #[test]
    fn missing_everywhere_is_fatal() {
        let (_dir, cfg) = fixture();
        match find_crux_file(&cfg, "ABCD") {
            Err(Error::CruxFileMissing(station)) => assert_eq!(station, "ABCD"),
            other => panic!("expected CruxFileMissing, got {:?}", other),
        }
    }
}
