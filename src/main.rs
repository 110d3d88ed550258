//! Facts Keeper - Local file-backed knowledge store with relevance-ranked search.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use facts_keeper::clock::SystemClock;
use facts_keeper::config::ConfigLoader;
use facts_keeper::display;
use facts_keeper::storage::{FsStorage, StoreLayout};
use facts_keeper::store::{Category, Confidence, FactStore, InsightRecord, SearchOptions};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CategoryArg {
    Technical,
    Process,
    Decision,
    Pattern,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Technical => Category::Technical,
            CategoryArg::Process => Category::Process,
            CategoryArg::Decision => Category::Decision,
            CategoryArg::Pattern => Category::Pattern,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ConfidenceArg {
    High,
    Medium,
    Low,
}

impl From<ConfidenceArg> for Confidence {
    fn from(arg: ConfidenceArg) -> Self {
        match arg {
            ConfidenceArg::High => Confidence::High,
            ConfidenceArg::Medium => Confidence::Medium,
            ConfidenceArg::Low => Confidence::Low,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "facts-keeper",
    about = "Local file-backed knowledge store with relevance-ranked search",
    version
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Config file path (overrides the default search locations).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Store root directory (overrides the configured root).
    #[arg(short, long)]
    root: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the store directories.
    Init,
    /// Search the store for relevant documents and commands.
    Search {
        /// The query text.
        query: String,
        /// Minimum relevance score to include.
        #[arg(long)]
        min_relevance: Option<f32>,
        /// Maximum number of scored results.
        #[arg(long)]
        max_results: Option<usize>,
        /// Emit JSON instead of colored output.
        #[arg(long)]
        json: bool,
    },
    /// Record a solved problem as an insight.
    Record {
        /// What was being attempted.
        #[arg(long)]
        task: String,
        /// What solved it.
        #[arg(long)]
        solution: String,
        /// Why the solution works.
        #[arg(long)]
        reasoning: String,
        /// Supporting evidence (repeatable).
        #[arg(long)]
        evidence: Vec<String>,
        /// Insight category.
        #[arg(long, value_enum)]
        category: CategoryArg,
        /// Confidence level.
        #[arg(long, value_enum, default_value_t = ConfidenceArg::Medium)]
        confidence: ConfidenceArg,
        /// Searchable tags (repeatable).
        #[arg(long)]
        tags: Vec<String>,
        /// Related files (repeatable).
        #[arg(long)]
        related_files: Vec<String>,
    },
    /// Show an aggregate snapshot of the store.
    Context {
        /// Emit JSON instead of colored output.
        #[arg(long)]
        json: bool,
    },
    /// Regenerate the KNOWLEDGE.md index.
    Reindex,
}

fn init_tracing(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let loader = cli
        .config
        .clone()
        .map_or_else(ConfigLoader::new, ConfigLoader::with_path);
    let config = match loader.load() {
        Ok(config) => config,
        Err(e) => {
            display::print_error(&e.to_string());
            std::process::exit(1);
        }
    };

    let root = cli.root.clone().unwrap_or_else(|| config.root.clone());
    let store = FactStore::new(
        StoreLayout::new(root),
        Arc::new(FsStorage::new()),
        Arc::new(SystemClock),
    );

    if let Err(message) = run(cli.command, &store, &config).await {
        display::print_error(&message);
        std::process::exit(1);
    }
}

async fn run(
    command: Commands,
    store: &FactStore,
    config: &facts_keeper::config::FactsConfig,
) -> Result<(), String> {
    match command {
        Commands::Init => {
            store.initialize().await.map_err(|e| e.to_string())?;
            println!("Initialized store at {}", store.layout().root().display());
        }
        Commands::Search {
            query,
            min_relevance,
            max_results,
            json,
        } => {
            let defaults: SearchOptions = config.search.clone().into();
            let options = SearchOptions {
                min_relevance: min_relevance.unwrap_or(defaults.min_relevance),
                max_results: max_results.unwrap_or(defaults.max_results),
            };
            let results = store.search(&query, options).await.map_err(|e| e.to_string())?;
            if json {
                let rendered =
                    serde_json::to_string_pretty(&results).map_err(|e| e.to_string())?;
                println!("{rendered}");
            } else {
                display::print_results(&results);
            }
        }
        Commands::Record {
            task,
            solution,
            reasoning,
            evidence,
            category,
            confidence,
            tags,
            related_files,
        } => {
            let record = InsightRecord {
                task,
                solution,
                reasoning,
                evidence,
                category: category.into(),
                confidence: confidence.into(),
                tags,
                related_files,
            };
            let path = store.record(&record).await.map_err(|e| e.to_string())?;
            display::print_recorded(&path.to_string_lossy());
        }
        Commands::Context { json } => {
            let context = store.context().await.map_err(|e| e.to_string())?;
            if json {
                let rendered =
                    serde_json::to_string_pretty(&context).map_err(|e| e.to_string())?;
                println!("{rendered}");
            } else {
                display::print_context(&context);
            }
        }
        Commands::Reindex => {
            store.rebuild_index().await.map_err(|e| e.to_string())?;
            println!(
                "Index rebuilt at {}",
                store.layout().index_file().display()
            );
        }
    }
    Ok(())
}
