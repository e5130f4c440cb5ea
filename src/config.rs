//! Runtime configuration
use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::Error;

/// Configurable locations, one instance per run.
/// Defaults describe the historical deployment layout,
/// where everything lives next to the program.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Station tree: one sub-directory per station,
    /// each holding an ISMR/ and a RINEX/ folder.
    pub base_dir: PathBuf,
    /// Fallback location for `<station>_crux.txt` files.
    pub crux_dir: PathBuf,
    /// gfzrnx binary invoked to splice daily observations.
    pub gfzrnx: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("./GNSS"),
            crux_dir: PathBuf::from("./Crux"),
            gfzrnx: PathBuf::from("./gfzrnx/gfzrnx_lx64"),
        }
    }
}

impl Config {
    /// Loads configuration from a JSON file.
    /// Missing fields keep their default value.
    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let fd = File::open(path)?;
        let cfg = serde_json::from_reader(fd)?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod test {
    use super::Config;
    use std::io::Write;
    use std::path::PathBuf;
    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.base_dir, PathBuf::from("./GNSS"));
        assert_eq!(cfg.crux_dir, PathBuf::from("./Crux"));
        assert_eq!(cfg.gfzrnx, PathBuf::from("./gfzrnx/gfzrnx_lx64"));
    }
    #[test]
    fn partial_file() {
        let mut fd = tempfile::NamedTempFile::new().unwrap();
        write!(fd, "{{\"base_dir\": \"/data/GNSS\"}}").unwrap();
        let cfg = Config::from_file(fd.path()).unwrap();
        assert_eq!(cfg.base_dir, PathBuf::from("/data/GNSS"));
        // untouched fields fall back to defaults
        assert_eq!(cfg.crux_dir, PathBuf::from("./Crux"));
        assert_eq!(cfg.gfzrnx, PathBuf::from("./gfzrnx/gfzrnx_lx64"));
    }
    #[test]
    fn bad_file() {
        let mut fd = tempfile::NamedTempFile::new().unwrap();
        write!(fd, "not json").unwrap();
        assert!(Config::from_file(fd.path()).is_err());
    }
}
