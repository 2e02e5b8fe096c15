//! Command-line arguments

use clap::Parser;
use showbook_common::config::Overrides;
use std::path::PathBuf;

/// Command-line arguments for showbook-web
#[derive(Parser, Debug)]
#[command(name = "showbook-web")]
#[command(about = "Venue, artist and show booking directory")]
#[command(version)]
pub struct Args {
    /// TOML config file (default: <config_dir>/showbook/config.toml)
    #[arg(short, long, env = "SHOWBOOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// SQLite database file
    #[arg(short, long, env = "SHOWBOOK_DATABASE")]
    pub database: Option<PathBuf>,

    /// Address to listen on
    #[arg(short, long, env = "SHOWBOOK_BIND")]
    pub bind: Option<String>,

    /// Debug mode: no log file is written
    #[arg(long, env = "SHOWBOOK_DEBUG")]
    pub debug: bool,

    /// Log file used outside debug mode
    #[arg(long, env = "SHOWBOOK_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            database: self.database.clone(),
            bind: self.bind.clone(),
            debug: self.debug,
            log_file: self.log_file.clone(),
        }
    }
}
