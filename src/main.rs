//! Command line tool to run daily housekeeping on GNSS station archives.
//! Refer to README for command line arguments.

mod cli; // command line interface
mod config;
mod crux;
mod fops;
mod ismr;
mod splice;

use std::path::PathBuf;

use cli::Cli;
use config::Config;

use env_logger::{Builder, Env, Target};

#[macro_use]
extern crate log;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error")]
    StdioError(#[from] std::io::Error),
    #[error("configuration file error")]
    ConfigError(#[from] serde_json::Error),
    #[error("base path {0:?} not found")]
    BaseDirMissing(PathBuf),
    #[error("ISMR path {0:?} not found")]
    IsmrDirMissing(PathBuf),
    #[error("RINEX path {0:?} not found")]
    RinexDirMissing(PathBuf),
    #[error("no crux file for station \"{0}\"")]
    CruxFileMissing(String),
}

/*
 * Runs both housekeeping passes for every station found
 * under the base directory, in filesystem order.
 * The first fatal condition aborts the remainder of the run.
 */
fn run(cfg: &Config) -> Result<(), Error> {
    if !cfg.base_dir.exists() {
        error!("base path \"{}\" not found. Aborting...", cfg.base_dir.display());
        return Err(Error::BaseDirMissing(cfg.base_dir.clone()));
    }
    for station_dir in fops::subdirectories(&cfg.base_dir) {
        let station = match station_dir.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.to_string(),
            None => continue,
        };

        info!("{} - ISMR", station);
        ismr::compress_station(&station_dir.join("ISMR"))?;

        info!("{} - RINEX", station);
        splice::splice_station(cfg, &station_dir.join("RINEX"), &station)?;
    }
    Ok(())
}

pub fn main() -> Result<(), Error> {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    builder
        .target(Target::Stdout)
        .format_timestamp_secs()
        .format_module_path(false)
        .init();

    let cli = Cli::new();
    let cfg = cli.config()?;
    debug!("{:?}", cfg);

    run(&cfg)
} // main
