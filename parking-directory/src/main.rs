use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use parking_directory::{
    config::DirectoryConfig,
    filter::FilterState,
    links::LinkBuilder,
    search::{Gazetteer, LocationSearch},
    table::EntityTable,
    Directory, DirectoryApp, DirectoryError,
};

const DEFAULT_CONFIG: &str = "directory.toml";

#[derive(Parser)]
#[command(author, version, about = "Campus parking lot directory", long_about = None)]
struct Cli {
    /// TOML configuration file. Defaults to ./directory.toml when present
    #[arg(short, long, value_name = "*.toml")]
    config: Option<PathBuf>,

    /// CSV table of lots, overrides the configured one
    #[arg(long, value_name = "*.csv")]
    lots: Option<PathBuf>,

    /// CSV gazetteer for the location search, overrides the configured one
    #[arg(long, value_name = "*.csv")]
    places: Option<PathBuf>,

    /// write the log to this file instead of the console
    #[arg(long)]
    log_file: Option<String>,

    /// one of error, warn, info, debug, trace, off
    #[arg(long)]
    log_level: Option<String>,
}

fn load_config(cli: &Cli) -> Result<DirectoryConfig, DirectoryError> {
    let path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => Some(PathBuf::from(DEFAULT_CONFIG)).filter(|path| path.exists()),
    };
    let mut config = match path {
        Some(path) => {
            let base = path.parent().unwrap_or(Path::new(".")).to_path_buf();
            DirectoryConfig::from_path(&path)?.relative_to(&base)
        }
        None => DirectoryConfig::default(),
    };

    if let Some(lots) = &cli.lots {
        config.data.lots = lots.clone();
    }
    if let Some(places) = &cli.places {
        config.data.places = places.clone();
    }
    if let Some(file) = &cli.log_file {
        config.log.to_file = true;
        config.log.file = Some(file.clone());
    }
    if let Some(level) = &cli.log_level {
        config.log.level = level.clone();
    }
    Ok(config)
}

fn run(config: DirectoryConfig) -> Result<(), DirectoryError> {
    let table = EntityTable::from_path(&config.data.lots)?;
    let directory = Directory::new(
        table,
        FilterState::new(config.filters.max_distance),
        LinkBuilder::new(&config.links.base_url),
        config.map.home,
    )?;

    let gazetteer = Gazetteer::from_path(&config.data.places).unwrap_or_else(|e| {
        log::warn!(
            "location search disabled, could not read {}: {}",
            config.data.places.display(),
            e
        );
        Gazetteer::default()
    });
    let search = LocationSearch::new(
        Box::new(gazetteer),
        config.search.bounds,
        config.search.max_suggestions,
    );

    let map = config.map.clone();
    eframe::run_native(
        "Campus Parking Directory",
        Default::default(),
        Box::new(move |cc| {
            Ok(Box::new(DirectoryApp::new(
                cc.egui_ctx.clone(),
                directory,
                search,
                &map,
            )))
        }),
    )
    .map_err(|e| DirectoryError::Window(e.to_string()))
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let level = match config.log.level_filter() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Err(e) = logger::init(config.log.to_file, config.log.file.as_deref(), level) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
