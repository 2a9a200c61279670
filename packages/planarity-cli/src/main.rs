//! planarity-filter: edge-list front end for the parallel planar
//! subgraph heuristic.
//!
//! Reads a whitespace-delimited edge list, runs the partition-based
//! pipeline, and writes the surviving edges back under their original
//! labels. Exit codes: 0 success, 1 argument error, 2 unexpected error.

mod io;

use clap::{Parser, ValueEnum};
use io::{load_edge_list, write_graph, CliResult};
use planarity_core::{run, MotifPolicy, PipelineConfig, SeedPolicy};
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "planarity-filter")]
#[command(about = "Compute a large planar subgraph of an undirected graph", long_about = None)]
struct Cli {
    /// Input edge-list file path
    #[arg(short, long)]
    input: PathBuf,

    /// Output edge-list file path
    #[arg(short, long)]
    output: PathBuf,

    /// Number of worker threads (and partitions)
    #[arg(short = 't', long, default_value_t = 1)]
    threads: usize,

    /// Seed for the partition PRNG; fixed seed, reproducible partitions
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Motif growth policy
    #[arg(long, value_enum, default_value_t = MotifArg::Triangle)]
    motif: MotifArg,

    /// Partition seed selection policy
    #[arg(long, value_enum, default_value_t = SeedingArg::Random)]
    seeding: SeedingArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum MotifArg {
    Triangle,
    Diamond,
    House,
}

impl From<MotifArg> for MotifPolicy {
    fn from(arg: MotifArg) -> Self {
        match arg {
            MotifArg::Triangle => MotifPolicy::Triangle,
            MotifArg::Diamond => MotifPolicy::Diamond,
            MotifArg::House => MotifPolicy::House,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum SeedingArg {
    Random,
    Spread,
}

impl From<SeedingArg> for SeedPolicy {
    fn from(arg: SeedingArg) -> Self {
        match arg {
            SeedingArg::Random => SeedPolicy::RandomSample,
            SeedingArg::Spread => SeedPolicy::DegreeSpread,
        }
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap's own rendering, but the exit-code contract is ours
            let _ = e.print();
            return match e.kind() {
                clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                    ExitCode::SUCCESS
                }
                _ => ExitCode::from(1),
            };
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    if cli.threads == 0 {
        error!("--threads must be at least 1");
        return ExitCode::from(1);
    }

    match run_app(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::from(2)
        }
    }
}

fn run_app(cli: &Cli) -> CliResult<()> {
    info!(input = %cli.input.display(), threads = cli.threads, "loading input");

    let loaded = load_edge_list(&cli.input)?;
    let input = loaded.graph;
    let input_nodes = input.num_nodes();
    let input_edges = input.num_edges();

    if cli.threads > num_cpus::get() {
        warn!(
            threads = cli.threads,
            cores = num_cpus::get(),
            "more worker threads than detected cores; workers will contend"
        );
    }

    let config = PipelineConfig::default()
        .with_workers(cli.threads)
        .with_seed(cli.seed)
        .with_motif(cli.motif.into())
        .with_seeding(cli.seeding.into());

    let start = Instant::now();
    let result = run(&input, &config)?;
    let elapsed = start.elapsed();

    let result_edges = result.num_edges();
    info!(elapsed_s = elapsed.as_secs_f64(), "pipeline done");
    info!(nodes = input_nodes, edges = input_edges, "initial graph");
    info!(nodes = result.num_nodes(), edges = result_edges, "result graph");
    info!(
        percent_retained = result_edges as f64 / input_edges as f64 * 100.0,
        "edges retained"
    );

    write_graph(&result, &loaded.labels, &cli.output)?;
    info!(output = %cli.output.display(), "result written");

    Ok(())
}
