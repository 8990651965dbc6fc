use std::{
    io::{self, Read, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use analysis::Analysis;
use cli::{Command, ViewArgs};
use config::DockscopeConfig;
use config_file::{ConfigError, DockscopeConfigFile};
use filter::Session;
use live::LiveError;
use parser::ParseError;
use record::ContainerRecord;
use report::ReportError;

mod alerts;
mod analysis;
mod cli;
mod config;
mod config_file;
mod filter;
mod groups;
mod live;
mod parser;
mod ports;
mod record;
mod render;
mod report;
mod sample;
mod stats;

#[derive(Debug, thiserror::Error)]
enum AppError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Parse(#[from] ParseError),
    #[error("Report error: {0}")]
    Report(#[from] ReportError),
    #[error("{0}")]
    Live(#[from] LiveError),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize the logger
    env_logger::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::debug!("{err:?}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let args = cli::get_cli_args();
    let config = DockscopeConfigFile::try_init(&args.config)?.into_config(&args.config);

    match &args.command {
        Command::Analyze { input, view } => {
            let records = parser::parse_checked(&read_input(input)?)?;
            show(records, view, &config)
        }
        Command::Report { input, output } => {
            let records = parser::parse_checked(&read_input(input)?)?;
            let report = report::export_report(&records, &config.report)?;
            let path = output
                .clone()
                .unwrap_or_else(|| PathBuf::from(report::default_file_name(chrono::Local::now())));
            report::write_report(&path, &report)?;
            println!("{}", path.display());
            Ok(())
        }
        Command::Sample => {
            println!("{}", sample::SAMPLE_PS);
            Ok(())
        }
        Command::Live { all, view } => {
            let records = live::fetch_records(*all).await?;
            show(records, view, &config)
        }
    }
}

/// Reads the listing from `path`, or from stdin when the path is `-`.
fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }
    std::fs::read_to_string(path)
}

fn show(
    records: Vec<ContainerRecord>,
    view: &ViewArgs,
    config: &DockscopeConfig,
) -> Result<(), AppError> {
    let session = Session::load(records)
        .with_filter(view.filter.unwrap_or(config.filter))
        .with_search(view.search.clone().unwrap_or_default());
    let analysis = Analysis::of_session(&session);
    log::info!(
        "Showing {} of {} container(s) (filter: {:?}, search: {:?})",
        analysis.containers.len(),
        session.records().len(),
        session.filter,
        session.search
    );
    log::debug!(
        "{} alert(s), {} application group(s)",
        analysis.alerts.len(),
        analysis.groups.len()
    );
    let mut out = io::stdout().lock();
    if view.json {
        serde_json::to_writer_pretty(&mut out, &analysis)?;
        writeln!(out)?;
    } else {
        render::render_analysis(&analysis, view.groups || config.groups, &mut out)?;
    }
    Ok(())
}
