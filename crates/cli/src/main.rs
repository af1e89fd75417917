use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use remedy_core::constants::DEFAULT_SUGGESTION_LIMIT;
use remedy_core::{Direction, LookupConfig, MatchMode};
use remedy_search::RemedyIndex;
use remedy_storage::FileStore;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "remedy")]
#[command(about = "Remedy name lookup across common and Latin names", long_about = None)]
struct Cli {
    /// Remedy table (.csv, .xlsx or .xlsm). Defaults to $REMEDY_TABLE_PATH,
    /// then ./remedies.xlsx if present, then ./remedies.csv
    #[arg(long, global = true)]
    table: Option<PathBuf>,
    /// Preferred Latin-name header
    #[arg(long, global = true)]
    latin_column: Option<String>,
    /// Preferred common-name header
    #[arg(long, global = true)]
    common_column: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search both name columns
    Search {
        query: String,
        #[arg(short, long, default_value_t = MatchMode::Contains)]
        mode: MatchMode,
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Register a remedy unless either name already exists
    Add { common: String, latin: String },
    /// Translate an exact name to its counterpart
    Lookup {
        name: String,
        #[arg(short, long, default_value_t = Direction::Auto)]
        direction: Direction,
    },
    /// Closest names to a possibly misspelled query
    Suggest {
        query: String,
        #[arg(short, long, default_value_t = DEFAULT_SUGGESTION_LIMIT)]
        limit: usize,
    },
    /// Create the table with the starter remedies if it is missing
    Init,
    /// Record count and resolved columns
    Stats,
    /// Materia Medica reference URL for a Latin name
    Materia { latin: String },
}

impl Cli {
    fn config(&self) -> LookupConfig {
        let mut config = LookupConfig::from_env();
        if let Some(table) = &self.table {
            config.table_path.clone_from(table);
        }
        if let Some(latin) = &self.latin_column {
            config.columns.latin.clone_from(latin);
        }
        if let Some(common) = &self.common_column {
            config.columns.common.clone_from(common);
        }
        config
    }
}

pub(crate) fn open_index(config: &LookupConfig) -> Result<RemedyIndex<FileStore>> {
    let store = FileStore::for_path(&config.table_path);
    if !store.exists() {
        anyhow::bail!(
            "remedy table {} does not exist (run `remedy init` to create it)",
            config.table_path.display()
        );
    }
    RemedyIndex::open(store, config)
        .with_context(|| format!("cannot open {}", config.table_path.display()))
}

pub(crate) fn print_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = cli.config();

    match cli.command {
        Commands::Search { query, mode, limit } => {
            commands::search::run_search(&config, &query, mode, limit)?;
        },
        Commands::Add { common, latin } => {
            commands::table::run_add(&config, &common, &latin)?;
        },
        Commands::Lookup { name, direction } => {
            commands::search::run_lookup(&config, &name, direction)?;
        },
        Commands::Suggest { query, limit } => {
            commands::search::run_suggest(&config, &query, limit)?;
        },
        Commands::Init => commands::table::run_init(&config)?,
        Commands::Stats => commands::table::run_stats(&config)?,
        Commands::Materia { latin } => commands::materia::run_materia(&latin)?,
    }

    Ok(())
}
