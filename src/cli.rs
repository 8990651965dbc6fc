use std::{path::PathBuf, sync::OnceLock};

use clap::{Parser, Subcommand};

use crate::filter::QuickFilter;

/// Summarize `docker ps` output: health, exposed ports and applications.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the config file.
    #[arg(short, long, default_value = "dockscope.toml")]
    pub config: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Analyze a `docker ps` listing read from a file or stdin.
    Analyze {
        /// File with the listing, `-` for stdin.
        #[arg(default_value = "-")]
        input: PathBuf,
        #[command(flatten)]
        view: ViewArgs,
    },
    /// Write a plain-text report for a `docker ps` listing.
    Report {
        /// File with the listing, `-` for stdin.
        #[arg(default_value = "-")]
        input: PathBuf,
        /// Where to write the report. Defaults to `docker-analysis-<millis>.txt`.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print an example listing.
    Sample,
    /// Analyze the containers of the local Docker daemon.
    Live {
        /// Include stopped containers, like `docker ps --all`.
        #[arg(short, long)]
        all: bool,
        #[command(flatten)]
        view: ViewArgs,
    },
}

#[derive(clap::Args, Debug)]
pub struct ViewArgs {
    /// Only show containers matching this quick filter.
    #[arg(short, long, value_enum)]
    pub filter: Option<QuickFilter>,
    /// Only show containers whose columns contain this text (case-insensitive).
    #[arg(short, long)]
    pub search: Option<String>,
    /// Also show containers grouped by application.
    #[arg(short, long)]
    pub groups: bool,
    /// Print the analysis as JSON.
    #[arg(long)]
    pub json: bool,
}

static ARGS: OnceLock<Args> = OnceLock::new();

pub fn get_cli_args() -> &'static Args {
    ARGS.get_or_init(Args::parse)
}
