use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use cpu_sched::config::{
    SimulationConfig, DEFAULT_MAX_BURST_TIME, DEFAULT_MAX_RECORDS, DEFAULT_MEMORY_CEILING_MB,
    DEFAULT_ROUND_ROBIN_QUANTA,
};
use cpu_sched::models::Ticks;
use cpu_sched::scheduler::{AlgorithmResult, Policy};
use cpu_sched::simulation::{JobSource, Simulation, SimulationReport};
use cpu_sched::workload::{self, WorkloadSpec};

#[derive(Parser, Debug)]
#[command(name = "cpu-sched")]
#[command(version)]
#[command(about = "Simulate and compare FCFS, SJF and Round-Robin CPU scheduling")]
#[command(propagate_version = true)]
struct Args {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run every policy against a job file and rank them
    Run(RunArgs),

    /// Print a reproducible synthetic job file to stdout
    Generate(GenerateArgs),
}

// =============================================================================
// Arguments
// =============================================================================

#[derive(Parser, Debug)]
struct RunArgs {
    /// Job file, one "id, burst, memory" line per job
    jobs: PathBuf,

    /// System memory ceiling in MB
    #[arg(long, default_value_t = DEFAULT_MEMORY_CEILING_MB)]
    memory_ceiling: u32,

    /// Round-Robin quantum; repeat for several runs (default: 3 and 5)
    #[arg(long = "quantum", short = 'q')]
    quanta: Vec<Ticks>,

    /// Maximum number of records admitted
    #[arg(long, default_value_t = DEFAULT_MAX_RECORDS)]
    max_records: usize,

    /// Longest accepted burst time; longer records are rejected
    #[arg(long, default_value_t = DEFAULT_MAX_BURST_TIME)]
    max_burst_time: Ticks,

    /// Output format
    #[arg(long, short = 'o', default_value = "table")]
    output: OutputFormat,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Number of jobs
    #[arg(long, short = 'n', default_value_t = 30)]
    count: usize,

    /// RNG seed
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Largest burst time
    #[arg(long, default_value_t = 30)]
    max_burst: Ticks,

    /// Largest memory requirement in MB
    #[arg(long, default_value_t = DEFAULT_MEMORY_CEILING_MB)]
    max_memory: u32,
}

#[derive(Debug, Clone, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

// =============================================================================
// Commands
// =============================================================================

async fn run_simulation(args: RunArgs) -> Result<(), Box<dyn std::error::Error>> {
    let quanta = if args.quanta.is_empty() {
        DEFAULT_ROUND_ROBIN_QUANTA.to_vec()
    } else {
        args.quanta
    };
    let config = SimulationConfig::new()
        .with_memory_ceiling(args.memory_ceiling)
        .with_quanta(quanta)
        .with_max_records(args.max_records)
        .with_max_burst_time(args.max_burst_time);

    let report = Simulation::new(config)?
        .run(JobSource::File(args.jobs))
        .await?;

    match args.output {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Table => print_report(&report),
    }
    Ok(())
}

fn generate_jobs(args: GenerateArgs) {
    let spec = WorkloadSpec {
        count: args.count,
        max_burst: args.max_burst,
        max_memory_mb: args.max_memory,
        seed: args.seed,
    };
    print!("{}", workload::to_lines(&workload::generate(&spec)));
}

// =============================================================================
// Table Output
// =============================================================================

fn print_report(report: &SimulationReport) {
    for result in &report.results {
        print_result(result);
    }

    println!("The best Average TT : {}", policy_name(report.ranking.best_turnaround));
    println!("The best Average WT : {}", policy_name(report.ranking.best_waiting));

    if !report.feed.rejected.is_empty() {
        println!();
        println!("Rejected records:");
        for err in &report.feed.rejected {
            println!("  {err}");
        }
    }
    if report.feed.limit_reached {
        println!();
        println!(
            "Record limit of {} reached; remaining input ignored",
            report.config.max_records
        );
    }
}

fn policy_name(policy: Option<Policy>) -> String {
    policy.map_or_else(|| "-".to_string(), |p| p.to_string())
}

fn print_result(result: &AlgorithmResult) {
    println!("{}", result.policy_name());
    let slices: Vec<String> = result
        .timeline
        .iter()
        .map(|e| format!("P{} [{}, {}]", e.job_id, e.start, e.end))
        .collect();
    println!("{}", slices.join(" , "));
    println!(
        "Average Turnaround Time= {:.2}    Average Waiting Time= {:.2}",
        result.average_turnaround, result.average_waiting
    );
    println!();
}

// =============================================================================
// Main Entry Point
// =============================================================================

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Commands::Run(run_args) => run_simulation(run_args).await?,
        Commands::Generate(gen_args) => generate_jobs(gen_args),
    }

    Ok(())
}
