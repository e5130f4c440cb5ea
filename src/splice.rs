//! Daily RINEX production: per-date session splicing through gfzrnx.
use std::fs::{remove_dir_all, remove_file};
use std::path::{Path, PathBuf};
use std::process::Command;

use itertools::Itertools;

use crate::config::Config;
use crate::crux;
use crate::fops;
use crate::Error;

/// Session letters of a complete observation day (one hourly file each).
const SESSION_LETTERS: std::ops::RangeInclusive<char> = 'A'..='X';

/// Splices every date folder found under this station's RINEX tree.
/// The folder itself is mandatory: a station without it aborts the run.
pub fn splice_station(cfg: &Config, dir: &Path, station: &str) -> Result<(), Error> {
    if !dir.exists() {
        error!("RINEX path \"{}\" not found. Aborting...", dir.display());
        return Err(Error::RinexDirMissing(dir.to_path_buf()));
    }
    let crux_file = crux::find_crux_file(cfg, station)?;
    for date_dir in fops::subdirectories(dir) {
        splice_date(cfg, &date_dir, station, &crux_file)?;
    }
    Ok(())
}

/// Session observation files expected for one day, one per letter A..X.
/// All candidates are handed to the splicer, whether each exists or not.
fn session_files(date_dir: &Path, station: &str, year: &str, doy: &str) -> Vec<PathBuf> {
    SESSION_LETTERS
        .map(|letter| {
            date_dir.join(format!(
                "{}{}{}.{}O",
                station.to_ascii_uppercase(),
                doy,
                letter,
                year
            ))
        })
        .collect()
}

/// Daily output file name, lower case station code.
fn daily_filename(station: &str, year: &str, doy: &str) -> String {
    format!("{}{}0.{}o", station.to_ascii_lowercase(), doy, year)
}

/// Processes one date folder: drops navigation archives, inflates the
/// observation sessions, splices them into a single daily file generated
/// next to the folder, compresses it, and tears the folder down.
pub fn splice_date(
    cfg: &Config,
    date_dir: &Path,
    station: &str,
    crux_file: &Path,
) -> Result<(), Error> {
    let name = match date_dir.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_string(),
        None => return Ok(()),
    };
    if name.len() < 2 || !name.is_char_boundary(2) {
        warn!("\"{}\" does not look like a date folder, skipped", name);
        return Ok(());
    }
    info!("date: {}", date_dir.display());

    // navigation data is not retained
    for nav in fops::matching_files(date_dir, "N.gz") {
        if let Err(e) = remove_file(&nav) {
            error!("removal error for \"{}\": {}", nav.display(), e);
        }
    }

    for obs in fops::matching_files(date_dir, "O.gz") {
        if let Err(e) = fops::gunzip_file(&obs) {
            error!("inflate error for \"{}\": {}", obs.display(), e);
        }
    }

    // 2 digit year, then day of year
    let (year, doy) = name.split_at(2);

    let finp = session_files(date_dir, station, year, doy);
    let fout = match date_dir.parent() {
        Some(parent) => parent.join(daily_filename(station, year, doy)),
        None => PathBuf::from(daily_filename(station, year, doy)),
    };

    let mut cmd = Command::new(&cfg.gfzrnx);
    cmd.arg("-finp")
        .args(&finp)
        .arg("-fout")
        .arg(&fout)
        .arg("-crux")
        .arg(crux_file)
        .arg("-kv");
    info!(
        "{} {}",
        cfg.gfzrnx.display(),
        cmd.get_args().map(|arg| arg.to_string_lossy()).join(" ")
    );

    // blocking call. The splicer reports problems in its own output,
    // its exit status is not acted upon.
    let status = cmd.status()?;
    debug!("gfzrnx exited with {}", status);

    if let Err(e) = fops::gzip_file(&fout) {
        error!("compress error for \"{}\": {}", fout.display(), e);
    }

    if let Err(e) = remove_dir_all(date_dir) {
        error!("removal error for \"{}\": {}", date_dir.display(), e);
    }
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{daily_filename, session_files};
    use std::path::Path;
    #[test]
    fn session_file_set() {
        let date_dir = Path::new("GNSS/ABCD/RINEX/21045");
        let finp = session_files(date_dir, "ABCD", "21", "045");
        assert_eq!(finp.len(), 24);
        assert_eq!(finp[0], date_dir.join("ABCD045A.21O"));
        assert_eq!(finp[1], date_dir.join("ABCD045B.21O"));
        assert_eq!(finp[23], date_dir.join("ABCD045X.21O"));
    }
    #[test]
    fn session_files_upper_case_station() {
        let date_dir = Path::new("21045");
        let finp = session_files(date_dir, "abcd", "21", "045");
        assert_eq!(finp[0], date_dir.join("ABCD045A.21O"));
    }
    #[test]
    fn daily_file_name() {
        for (station, year, doy, expected) in [
            ("ABCD", "21", "045", "abcd0450.21o"),
            ("abcd", "21", "045", "abcd0450.21o"),
            ("CASE", "22", "001", "case0010.22o"),
        ] {
            assert_eq!(daily_filename(station, year, doy), expected);
        }
    }
}
