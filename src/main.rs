//! Partitioned trace-search query runner.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                QUERY ENGINE                   │
//!                    │                                               │
//!   QueryTarget      │  ┌─────────┐   ┌──────────┐   ┌───────────┐  │
//!   ─────────────────┼─▶│ query   │──▶│ engine   │──▶│ backend   │──┼──▶ /api/traces
//!                    │  │ split + │   │ fan-out  │   │ client    │  │    (N concurrent
//!                    │  │ params  │   │ + retry  │   │ (reqwest) │  │     partitions)
//!                    │  └─────────┘   └────┬─────┘   └───────────┘  │
//!                    │                     │                        │
//!                    │                     ▼                        │
//!   Table            │  ┌─────────┐   ┌──────────┐                  │
//!   ◀────────────────┼──│ flatten │◀──│ span     │                  │
//!                    │  │ table   │   │ filter   │                  │
//!                    │  └─────────┘   └──────────┘                  │
//!                    │                                               │
//!                    │  config · observability · lifecycle/shutdown  │
//!                    └──────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use trace_fanout::backend::client::SearchClient;
use trace_fanout::config::{load_config, EngineConfig};
use trace_fanout::engine::QueryEngine;
use trace_fanout::lifecycle::Shutdown;
use trace_fanout::observability::logging;
use trace_fanout::query::{QueryFilter, QueryTarget, TimeRange};

#[derive(Parser)]
#[command(name = "trace-fanout")]
#[command(about = "Partitioned trace-search query runner", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Backend base URL (overrides configuration).
    #[arg(short, long)]
    base_url: Option<String>,

    /// Partition count / concurrency cap (overrides configuration).
    #[arg(short, long)]
    max_parallel: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Execute a trace search and print the table as JSON
    Query {
        /// Service whose spans are requested
        #[arg(long)]
        service: String,

        /// Operation name; "ALL" matches every operation
        #[arg(long, default_value = "ALL")]
        operation: String,

        /// Tag filter as key=value (repeatable)
        #[arg(long = "tag")]
        tags: Vec<String>,

        /// Tag key surfaced as an output column (repeatable)
        #[arg(long = "extract")]
        extract_tags: Vec<String>,

        /// Minimum span duration passed to the backend (e.g. "100ms")
        #[arg(long)]
        min_duration: Option<String>,

        /// Maximum span duration passed to the backend
        #[arg(long)]
        max_duration: Option<String>,

        /// Trace cap per partition; 0 leaves it to the backend
        #[arg(long, default_value_t = 100)]
        limit: u32,

        /// Window start, epoch milliseconds
        #[arg(long)]
        from_ms: i64,

        /// Window end, epoch milliseconds
        #[arg(long)]
        to_ms: i64,

        /// Identifier echoed on the output table
        #[arg(long, default_value = "A")]
        ref_id: String,
    },

    /// Check backend reachability
    Probe,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    if let Some(base_url) = cli.base_url {
        config.backend.base_url = base_url;
    }
    if let Some(max_parallel) = cli.max_parallel {
        config.query.max_parallel = max_parallel;
    }

    logging::init(&config.observability.log_level);

    tracing::info!(
        base_url = %config.backend.base_url,
        max_parallel = config.query.max_parallel,
        "trace-fanout v0.1.0 starting"
    );

    let client = SearchClient::new(&config.backend)?;

    match cli.command {
        Commands::Probe => {
            client.probe().await?;
            println!("Success: backend is reachable");
        }
        Commands::Query {
            service,
            operation,
            tags,
            extract_tags,
            min_duration,
            max_duration,
            limit,
            from_ms,
            to_ms,
            ref_id,
        } => {
            let target = QueryTarget {
                ref_id,
                filter: QueryFilter {
                    service,
                    operation,
                    tags,
                    extract_tags,
                    min_duration,
                    max_duration,
                    limit,
                },
            };

            let engine = QueryEngine::new(client, config.query);
            let shutdown = Arc::new(Shutdown::new());

            // ctrl-c cancels all in-flight partition fetches.
            let cancel = shutdown.clone();
            tokio::spawn(async move {
                if tokio::signal::ctrl_c().await.is_ok() {
                    tracing::info!("Interrupt received, cancelling query");
                    cancel.trigger();
                }
            });

            let table = engine
                .run_target(&target, TimeRange::new(from_ms, to_ms), &shutdown)
                .await?;

            println!("{}", serde_json::to_string_pretty(&table)?);
        }
    }

    Ok(())
}
