use anyhow::Context;
use clap::{Parser, ValueEnum};
use indicatif::ProgressBar;
use ipl_insights::analysis::filter::team_options;
use ipl_insights::analysis::report::DashboardReport;
use ipl_insights::cache::{load_table_cached, TableSource};
use ipl_insights::config::Config;
use ipl_insights::data::table::MatchTable;
use ipl_insights::display::output::{display_error, display_info, display_report, display_success};
use log::{debug, warn};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "IPL Insights")]
#[command(about = "Match statistics and rankings from an IPL results table", long_about = None)]
struct Args {
    /// Match CSV file (default: $IPL_DATA_PATH or IPL.csv)
    #[arg(short, long)]
    data: Option<PathBuf>,

    /// Teams to include in the wins chart (default: all teams).
    /// Pass --teams with no names to select none.
    #[arg(short, long, num_args = 0.., value_delimiter = ',')]
    teams: Option<Vec<String>>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    format: OutputFormat,

    /// Re-read the CSV file (ignore cache)
    #[arg(long)]
    refresh: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .format_timestamp(None)
        .init();

    if let Err(e) = run(args) {
        display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

/// No `--teams` flag selects every team; `--teams` with no names selects none.
fn resolve_teams(selection: Option<Vec<String>>, table: &MatchTable) -> Vec<String> {
    selection.unwrap_or_else(|| team_options(table))
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = Config::from_env()?.with_data_path(args.data);
    debug!("Using {:?}", config);

    let interactive = args.format == OutputFormat::Table;

    let spinner = if interactive {
        display_info(&format!("Loading match data from {}", config.data_path.display()));
        let pb = ProgressBar::new_spinner();
        pb.set_message("Reading match table");
        pb.enable_steady_tick(Duration::from_millis(100));
        Some(pb)
    } else {
        None
    };

    let loaded = load_table_cached(&config.data_path, &config.cache_dir, args.refresh);
    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }
    let (table, origin) = loaded
        .with_context(|| format!("Failed to load {}", config.data_path.display()))?;

    if interactive {
        let origin = match origin {
            TableSource::Cache => "cache",
            TableSource::File => "file",
        };
        display_success(&format!("Loaded {} matches (from {})", table.len(), origin));
    }

    if table.is_empty() {
        warn!("{} has no match rows", config.data_path.display());
    }

    let teams = resolve_teams(args.teams, &table);
    let report = DashboardReport::build(&table, &teams);

    match args.format {
        OutputFormat::Table => display_report(&report),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&report)
                .context("Failed to serialize report")?;
            println!("{}", json);
        }
    }

    Ok(())
}
