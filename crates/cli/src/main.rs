//! Pulsar hardware verification CLI.
//!
//! This binary drives compiled kernels through their go/done protocol and checks their
//! results. It performs:
//! 1. **List:** Print the scenario catalog with each kernel's declared clock convention.
//! 2. **Run:** Execute scenarios, print one pass/fail report each, and exit 0 only if all
//!    of them passed.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use pulsar_harness::HarnessConfig;
use pulsar_harness::config::SettlePolicy;
use pulsar_harness::device::ClockConvention;
use pulsar_harness::scenario::report::{EXIT_FAIL, batch_exit_code};
use pulsar_harness::scenario::{CATALOG, Report, Runner};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "plsr-test",
    author,
    version,
    about = "Cycle-level verification harness for compiled Pulsar kernels",
    long_about = "Reset a simulated kernel, run its go/done handshake and compare the returned value.\n\nExamples:\n  plsr-test list\n  plsr-test run map math\n  plsr-test run --all --seed 42 --max-cycles 100000\n  plsr-test run square --convention full-cycle --settle single-cycle"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error); `RUST_LOG` takes precedence.
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the built-in scenarios.
    List,

    /// Run scenarios by name, or the whole catalog with `--all`.
    Run {
        /// Scenario names (see `list`).
        #[arg(required_unless_present = "all")]
        names: Vec<String>,

        /// Run every scenario in the catalog.
        #[arg(long, conflicts_with = "names")]
        all: bool,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for randomized arguments.
        #[arg(long)]
        seed: Option<u64>,

        /// Go sequences per randomized scenario.
        #[arg(long)]
        trials: Option<u64>,

        /// Give up waiting for done after this many cycles.
        #[arg(long)]
        max_cycles: Option<u64>,

        /// What to do after releasing go (pump or single-cycle).
        #[arg(long)]
        settle: Option<SettlePolicy>,

        /// Override the kernels' declared clock convention (single-edge or full-cycle).
        #[arg(long)]
        convention: Option<ClockConvention>,

        /// Print one JSON report per scenario instead of text.
        #[arg(long)]
        json: bool,
    },
}

/// Flags of the `run` subcommand that override the configuration file.
#[derive(Debug, Default)]
struct Overrides {
    seed: Option<u64>,
    trials: Option<u64>,
    max_cycles: Option<u64>,
    settle: Option<SettlePolicy>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match cli.command {
        Commands::List => {
            cmd_list();
            ExitCode::SUCCESS
        }
        Commands::Run {
            names,
            all,
            config,
            seed,
            trials,
            max_cycles,
            settle,
            convention,
            json,
        } => {
            let overrides = Overrides {
                seed,
                trials,
                max_cycles,
                settle,
            };
            ExitCode::from(cmd_run(&names, all, config, &overrides, convention, json))
        }
    }
}

/// Prints the catalog as a table.
fn cmd_list() {
    println!("{:<14} {:<12} {:<12} {}", "SCENARIO", "KERNEL", "CONVENTION", "CHECK");
    for scenario in CATALOG {
        println!(
            "{:<14} {:<12} {:<12} {}",
            scenario.name,
            scenario.model.name(),
            scenario.model.default_convention(),
            scenario.check.kind()
        );
    }
}

/// Loads the configuration, runs the selected scenarios and prints their reports.
///
/// Returns the batch exit code. Configuration errors and unknown scenario names are
/// reported on stderr and fail the run.
fn cmd_run(
    names: &[String],
    all: bool,
    config_path: Option<PathBuf>,
    overrides: &Overrides,
    convention: Option<ClockConvention>,
    json: bool,
) -> u8 {
    let runner = match load_config(config_path, overrides).and_then(Runner::new) {
        Ok(runner) => runner.with_convention(convention),
        Err(e) => {
            eprintln!("Error: {e}");
            return EXIT_FAIL;
        }
    };
    tracing::info!(seed = runner.seed(), "sampler seeded");

    let reports = if all {
        runner.run_all()
    } else {
        match runner.run_named(names) {
            Ok(reports) => reports,
            Err(e) => {
                eprintln!("Error: {e}");
                eprintln!("  plsr-test list   shows the available scenarios");
                return EXIT_FAIL;
            }
        }
    };

    for report in &reports {
        print_report(report, json);
    }
    batch_exit_code(&reports)
}

/// Reads the configuration file (if any) and applies flag overrides.
///
/// Validation happens when the runner is built.
fn load_config(
    path: Option<PathBuf>,
    overrides: &Overrides,
) -> pulsar_harness::Result<HarnessConfig> {
    let mut config = match path {
        Some(path) => HarnessConfig::from_file(path)?,
        None => HarnessConfig::default(),
    };
    if let Some(seed) = overrides.seed {
        config.scenario.seed = Some(seed);
    }
    if let Some(trials) = overrides.trials {
        config.scenario.trials = trials;
    }
    if let Some(max_cycles) = overrides.max_cycles {
        config.driver.max_cycles = Some(max_cycles);
    }
    if let Some(settle) = overrides.settle {
        config.driver.settle = settle;
    }
    Ok(config)
}

fn print_report(report: &Report, json: bool) {
    if json {
        match serde_json::to_string(report) {
            Ok(line) => println!("{line}"),
            Err(e) => eprintln!("Error: could not serialize report for {}: {e}", report.scenario),
        }
        return;
    }

    println!("[*] {} ({}, {} clock)", report.scenario, report.model, report.convention);
    if let Some(seed) = report.seed {
        println!("    seed={seed} trials={}", report.trials);
    }
    println!("{report}");
}
