//! Command-line arguments. Nothing is required; the defaults check the
//! `default` alias using whatever configuration the environment provides.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use clap::Parser;
use dbwait_common::config::DEFAULT_ALIAS;

#[derive(Debug, Parser)]
#[command(
    name = "wait_for_db",
    version,
    about = "Pause until the database accepts connections"
)]
pub struct Cli {
    /// Alias of the database to wait for.
    #[arg(long, env = "DBWAIT_DATABASE", default_value = DEFAULT_ALIAS)]
    pub database: String,

    /// Config file to read instead of `dbwait.toml`.
    #[arg(long, env = "DBWAIT_CONFIG")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load `.env` (or `env_file`) into the environment, then parse `args`.
    ///
    /// The env file has to be applied first so `DBWAIT_DATABASE` and
    /// `DBWAIT_CONFIG` set there act as flag defaults. Variables already in
    /// the environment win over the file.
    pub fn from_env_and_args<I, T>(env_file: Option<&Path>, args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let _ = match env_file {
            Some(path) => dotenvy::from_path(path),
            None => dotenvy::dotenv().map(|_| ()),
        };
        Self::try_parse_from(args)
    }
}
