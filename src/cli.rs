//! Command line interface
use std::path::PathBuf;

use clap::{value_parser, Arg, ArgMatches, ColorChoice, Command};

use crate::config::Config;
use crate::Error;

pub struct Cli {
    /// Arguments passed by user
    pub matches: ArgMatches,
}

impl Default for Cli {
    fn default() -> Self {
        Self::new()
    }
}

impl Cli {
    /// Build new command line interface
    pub fn new() -> Self {
        Self {
            matches: Command::new("rnx-daily")
                .author("Guillaume W. Bres <guillaume.bressaix@gmail.com>")
                .version(env!("CARGO_PKG_VERSION"))
                .about("GNSS station daily housekeeping: ISMR compression and RINEX splicing")
                .long_about("rnx-daily walks a tree of GNSS station archives.
For every station it gzip compresses raw ISMR records,
then splices each day's Observation RINEX sessions into
a single daily file with the external gfzrnx binary.")
                .color(ColorChoice::Always)
                .next_help_heading("Station tree")
                .arg(
                    Arg::new("base")
                        .short('b')
                        .long("base")
                        .value_name("DIRECTORY")
                        .value_parser(value_parser!(PathBuf))
                        .help("Base directory holding one folder per station. See --help for more information.")
                        .long_help(
                            "Each station folder is expected to contain an ISMR/ and a RINEX/
sub-directory, themselves holding one folder per day (2 digit year
followed by day of year, for example 21045).",
                        ),
                )
                .arg(
                    Arg::new("crux-dir")
                        .long("crux-dir")
                        .value_name("DIRECTORY")
                        .value_parser(value_parser!(PathBuf))
                        .help("Fallback directory for station crux files (<station>_crux.txt)."),
                )
                .next_help_heading("Splicer")
                .arg(
                    Arg::new("gfzrnx")
                        .long("gfzrnx")
                        .value_name("FILE")
                        .value_parser(value_parser!(PathBuf))
                        .help("Path to the gfzrnx binary used to splice daily observations."),
                )
                .next_help_heading("Session")
                .arg(
                    Arg::new("cfg")
                        .short('c')
                        .long("cfg")
                        .value_name("FILE")
                        .value_parser(value_parser!(PathBuf))
                        .help("Pass a configuration file (JSON). Command line flags have priority."),
                )
                .get_matches(),
        }
    }
    /// Configuration file passed by user, if any
    fn config_path(&self) -> Option<&PathBuf> {
        self.matches.get_one::<PathBuf>("cfg")
    }
    /// Complete runtime configuration: file (or defaults), then flag overrides
    pub fn config(&self) -> Result<Config, Error> {
        let mut cfg = match self.config_path() {
            Some(path) => Config::from_file(path)?,
            None => Config::default(),
        };
        if let Some(base) = self.matches.get_one::<PathBuf>("base") {
            cfg.base_dir = base.clone();
        }
        if let Some(crux_dir) = self.matches.get_one::<PathBuf>("crux-dir") {
            cfg.crux_dir = crux_dir.clone();
        }
        if let Some(gfzrnx) = self.matches.get_one::<PathBuf>("gfzrnx") {
            cfg.gfzrnx = gfzrnx.clone();
        }
        Ok(cfg)
    }
}
