//! ISMR record compression.
use std::path::Path;

use crate::fops;
use crate::Error;

/// Compresses every `.ismr` record found one level below the station's
/// ISMR folder. The folder itself is mandatory: a station without it
/// aborts the run. A record that fails to compress is reported and
/// skipped, the sweep continues.
pub fn compress_station(dir: &Path) -> Result<(), Error> {
    if !dir.exists() {
        error!("ISMR path \"{}\" not found. Aborting...", dir.display());
        return Err(Error::IsmrDirMissing(dir.to_path_buf()));
    }
    for date_dir in fops::subdirectories(dir) {
        for ismr in fops::matching_files(&date_dir, ".ismr") {
            debug!("compressing \"{}\"", ismr.display());
            if let Err(e) = fops::gzip_file(&ismr) {
                error!("compress error for \"{}\": {}", ismr.display(), e);
            }
        }
    }
    Ok(())
}
