//! bibv - Entry Point

use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tracing::info;

use bibv::config::{self, ConfigError};
use bibv::model::{AppError, SearchField};
use bibv::search::{Client, SearchWorker};
use bibv::source::{self, DataSource};
use bibv::state::{AppState, Mode, QueryState, RemoteResults};
use bibv::view::styles::ColorConfig;

/// bibv - browse and search bibliographic article datasets
#[derive(Parser, Debug)]
#[command(name = "bibv")]
#[command(version)]
#[command(about = "TUI application for browsing and searching bibliographic article datasets")]
pub struct Args {
    /// Path to the zip-bundled dataset (static flow)
    pub archive: Option<PathBuf>,

    /// Remote search index base URL (remote flow)
    #[arg(long)]
    pub remote: Option<String>,

    /// Remote index name
    #[arg(long)]
    pub index: Option<String>,

    /// Start with a search term active
    #[arg(short, long)]
    pub search: Option<String>,

    /// Initial search field
    #[arg(long, value_parser = ["title", "author", "affiliation", "journal"])]
    pub field: Option<String>,

    /// Start at a specific page (must be positive)
    #[arg(short, long, default_value = "1", value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    run(args).map_err(Into::into)
}

fn run(args: Args) -> Result<(), AppError> {
    let colors = ColorConfig::from_env_and_args(args.no_color);

    // Pre-validated by clap's value list; kept fallible for env-less runs.
    let cli_field = args
        .field
        .as_deref()
        .map(|raw| {
            raw.parse::<SearchField>()
                .map_err(|err| ConfigError::InvalidValue {
                    setting: "--field",
                    reason: err.to_string(),
                })
        })
        .transpose()?;

    // Load configuration with full precedence chain:
    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file)?;
        let with_env = config::apply_env_overrides(merged)?;
        config::apply_cli_overrides(with_env, args.remote.clone(), args.index.clone(), cli_field)
    };

    bibv::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    // An archive path on the CLI beats a remote_url from config/env; only
    // an explicit --remote flag conflicts with it.
    let remote_url = if args.archive.is_some() {
        args.remote.clone()
    } else {
        config.remote_url.clone()
    };
    let data_source =
        source::detect_data_source(args.archive.clone(), remote_url, config.index.clone())?;

    let initial_query = QueryState::with_initial(
        args.search.clone().unwrap_or_default(),
        config.search_field,
        args.page as usize,
    );

    let (state, worker) = match data_source {
        DataSource::Archive { path } => {
            let dataset = bibv::archive::open_dataset(&path)?;
            (AppState::new(Mode::Static(dataset), initial_query), None)
        }
        DataSource::Remote { url, index } => {
            info!(url = %url, index = %index, "Using remote search index");
            let client = Client::new(&url, index)?;
            let worker = SearchWorker::spawn(client)?;
            (
                AppState::new(Mode::Remote(RemoteResults::new()), initial_query),
                Some(worker),
            )
        }
    };

    bibv::view::run(state, worker, Duration::from_millis(config.debounce_ms), colors)?;

    Ok(())
}
