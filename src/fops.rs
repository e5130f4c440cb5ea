//! Filesystem primitives shared by the ISMR and RINEX passes.
use std::fs::{remove_file, File};
use std::io::{copy, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use flate2::{read::GzDecoder, write::GzEncoder, Compression};
use walkdir::WalkDir;

/// Lists immediate sub-directories of `dir`, in filesystem order.
pub fn subdirectories(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .map(|e| e.path().to_path_buf())
        .collect()
}

/// Lists files directly inside `dir` whose name ends with `suffix`
/// (case sensitive). An empty match is an empty list, never an error.
pub fn matching_files(dir: &Path, suffix: &str) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| e.file_name().to_string_lossy().ends_with(suffix))
        .map(|e| e.path().to_path_buf())
        .collect()
}

/// Compresses `path` in place: produces `<path>.gz` then removes the
/// original. An existing `<path>.gz` is overwritten.
pub fn gzip_file(path: &Path) -> std::io::Result<PathBuf> {
    let mut target = path.as_os_str().to_owned();
    target.push(".gz");
    let target = PathBuf::from(target);

    let mut reader = BufReader::new(File::open(path)?);
    let mut encoder = GzEncoder::new(
        BufWriter::new(File::create(&target)?),
        Compression::default(),
    );
    copy(&mut reader, &mut encoder)?;
    encoder.finish()?.flush()?;

    remove_file(path)?;
    Ok(target)
}

/// Decompresses `path` (a `.gz` archive) in place: produces the file with
/// the `.gz` suffix stripped, then removes the archive.
pub fn gunzip_file(path: &Path) -> std::io::Result<PathBuf> {
    let target = path.with_extension("");

    let mut decoder = GzDecoder::new(BufReader::new(File::open(path)?));
    let mut writer = BufWriter::new(File::create(&target)?);
    copy(&mut decoder, &mut writer)?;
    writer.flush()?;

    remove_file(path)?;
    Ok(target)
}
