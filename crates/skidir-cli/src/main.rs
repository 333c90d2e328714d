mod render;
mod resorts;

use clap::{Args, Parser, Subcommand, ValueEnum};
use skidir_core::SearchFilters;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "skidir")]
#[command(about = "Search ski resorts by name, location, and mountain stats")]
struct Cli {
    /// Use the embedded resort list and never contact the API
    #[arg(long, global = true)]
    offline: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search resorts by name, city, or state
    Search {
        /// Case-insensitive text matched against name, city, and state
        #[arg(default_value = "")]
        term: String,
        #[command(flatten)]
        filters: FilterArgs,
        /// Ask the API to pre-filter server-side before applying local filters
        #[arg(long)]
        remote_search: bool,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Show the full card for one resort
    Show {
        /// Resort id (e.g. killington-vt)
        id: String,
        #[arg(long, value_enum, default_value_t = OutputFormat::Cards)]
        format: OutputFormat,
    },
    /// List states with the number of resorts in each
    States,
}

#[derive(Debug, Args)]
struct FilterArgs {
    /// Exact state name, case-insensitive (e.g. Vermont)
    #[arg(long)]
    state: Option<String>,
    /// Minimum summit elevation in feet
    #[arg(long)]
    min_elevation: Option<i64>,
    /// Maximum summit elevation in feet
    #[arg(long)]
    max_elevation: Option<i64>,
    #[arg(long)]
    min_lifts: Option<i64>,
    #[arg(long)]
    min_trails: Option<i64>,
    /// Minimum skiable acres
    #[arg(long)]
    min_acres: Option<i64>,
}

impl FilterArgs {
    fn into_filters(self) -> SearchFilters {
        SearchFilters {
            state: self.state,
            min_elevation: self.min_elevation,
            max_elevation: self.max_elevation,
            min_lifts: self.min_lifts,
            min_trails: self.min_trails,
            min_skiable_acres: self.min_acres,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Cards,
    Json,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = if cli.offline {
        skidir_core::load_offline_app_config()?
    } else {
        skidir_core::load_app_config()?
    };

    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(env = %config.env, use_fallback = config.api.use_fallback, "config loaded");

    let provider = resorts::build_provider(&config)?;

    match cli.command {
        Commands::Search {
            term,
            filters,
            remote_search,
            format,
        } => {
            resorts::run_search(
                &provider,
                &term,
                &filters.into_filters(),
                remote_search,
                format,
            )
            .await
        }
        Commands::Show { id, format } => resorts::run_show(&provider, &id, format).await,
        Commands::States => {
            resorts::run_states(&provider).await;
            Ok(())
        }
    }
}
