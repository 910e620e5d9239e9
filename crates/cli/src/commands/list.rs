use std::{
    io::{self, BufWriter},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::Result;
use clap::Parser;
use log::{debug, error};
use sls_engine::{ListingConfig, SortMode, run_listing};
use sls_fs::SystemIdentity;
use sls_runtime::DEFAULT_DIR;

/// List directory contents.
///
/// Of `-S`, `-t` and `-X` only the last one given takes effect.
#[derive(Debug, Parser)]
#[command(
    name = "sls",
    about = "Simple directory listing",
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
pub struct ListArgs {
    /// Include entries whose names begin with '.'
    #[arg(short = 'a')]
    pub all: bool,

    /// Append a classification symbol: / @ = | *
    #[arg(short = 'F')]
    pub classify: bool,

    /// Print the inode number of each entry
    #[arg(short = 'i')]
    pub inode: bool,

    /// Detailed listing, one entry per line
    #[arg(short = 'l')]
    pub long: bool,

    /// Sort by size, largest first
    #[arg(short = 'S', overrides_with_all = ["time", "extension"])]
    pub size: bool,

    /// Sort by modification time, most recent first
    #[arg(short = 't', overrides_with_all = ["size", "extension"])]
    pub time: bool,

    /// Sort by extension
    #[arg(short = 'X', overrides_with_all = ["size", "time"])]
    pub extension: bool,

    /// Directory to list
    #[arg(value_name = "DIR")]
    pub dir: Option<PathBuf>,
}

impl ListArgs {
    pub fn sort_mode(&self) -> SortMode {
        if self.size {
            SortMode::Size
        } else if self.time {
            SortMode::Time
        } else if self.extension {
            SortMode::Extension
        } else {
            SortMode::Name
        }
    }

    pub fn into_config(self) -> ListingConfig {
        let sort = self.sort_mode();
        ListingConfig {
            dir: self.dir.unwrap_or_else(|| PathBuf::from(DEFAULT_DIR)),
            show_hidden: self.all,
            classify: self.classify,
            show_inode: self.inode,
            detailed: self.long,
            sort,
        }
    }
}

pub fn run(args: ListArgs) -> ExitCode {
    match execute(args) {
        Ok(code) => code,
        Err(e) => {
            error!("[list] {e:#}");
            eprintln!("{e}");
            ExitCode::from(1)
        }
    }
}

fn execute(args: ListArgs) -> Result<ExitCode> {
    let cfg = args.into_config();
    let out = BufWriter::new(io::stdout().lock());
    let mut ids = SystemIdentity::new();

    let summary = run_listing(&cfg, &mut ids, out)?;
    debug!(
        "[list] {} of {} entries printed",
        summary.printed, summary.scanned
    );

    Ok(ExitCode::SUCCESS)
}
