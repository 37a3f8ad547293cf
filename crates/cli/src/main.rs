//! Handheld device simulator CLI.
//!
//! This binary provides a single entry point for the puzzle runs. It performs:
//! 1. **CPU run:** Execute a `noop`/`addx` listing and print the signal strength (part 1)
//!    or the CRT image (part 2).
//! 2. **Droplet run:** Count the exposed faces (part 1) or exterior faces (part 2) of a scan.
//! 3. **Scatter export:** Write a scan's coordinate series as JSON for a 3-D plotter.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::{fs, process};
use tracing::debug;
use tracing_subscriber::EnvFilter;

use clocksim_core::config::Config;
use clocksim_core::droplets::{self, Scatter};
use clocksim_core::sim::{self, loader};
use clocksim_core::stats::SimStats;

#[derive(Parser, Debug)]
#[command(
    name = "clocksim",
    author,
    version,
    about = "Cycle-accurate noop/addx simulator",
    long_about = "Run a noop/addx program against the signal sampler or the CRT, or analyse a droplet scan.\n\nExamples:\n  clocksim cpu -i input.txt -p 1\n  clocksim cpu -i input.txt -p 2 --stats\n  clocksim droplets -i scan.txt -p 2\n  clocksim scatter -i scan.txt -o points.json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program on the CPU.
    Cpu {
        /// Program listing, one instruction per line.
        #[arg(short, long, default_value = "input.txt")]
        input: PathBuf,

        /// Puzzle part: 1 sums signal strength, 2 draws the CRT.
        #[arg(short, long)]
        part: Part,

        /// JSON configuration file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print run statistics after the answer.
        #[arg(long)]
        stats: bool,

        /// Log every cycle (same as `RUST_LOG=trace`).
        #[arg(long)]
        trace: bool,
    },

    /// Measure the surface of a droplet scan.
    Droplets {
        /// Scan file, one `x,y,z` triple per line.
        #[arg(short, long, default_value = "input.txt")]
        input: PathBuf,

        /// Puzzle part: 1 counts all exposed faces, 2 only exterior ones.
        #[arg(short, long)]
        part: Part,
    },

    /// Export a droplet scan as scatter-plot JSON.
    Scatter {
        /// Scan file, one `x,y,z` triple per line.
        #[arg(short, long, default_value = "input.txt")]
        input: PathBuf,

        /// Output file; standard output when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum Part {
    #[value(name = "1")]
    One,
    #[value(name = "2")]
    Two,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Cpu {
            input,
            part,
            config,
            stats,
            trace,
        } => cmd_cpu(&input, part, config.as_deref(), stats, trace),
        Commands::Droplets { input, part } => {
            init_logging(false);
            cmd_droplets(&input, part)
        }
        Commands::Scatter { input, output } => {
            init_logging(false);
            cmd_scatter(&input, output.as_deref())
        }
    };

    if let Err(e) = result {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Installs the stderr subscriber; `RUST_LOG` wins unless `trace` forces the level.
fn init_logging(trace: bool) {
    let filter = if trace {
        EnvFilter::new("trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Runs a program and prints the requested part's answer.
fn cmd_cpu(
    input: &Path,
    part: Part,
    config: Option<&Path>,
    show_stats: bool,
    trace: bool,
) -> clocksim_core::Result<()> {
    let config = match config {
        Some(path) => Config::from_json_file(path)?,
        None => Config::default(),
    };
    init_logging(trace || config.general.trace);
    debug!(?config, "configuration");

    let program = loader::load_program(input)?;
    let stats = match part {
        Part::One => {
            let outcome = sim::signal_strength(program, &config)?;
            println!("{}", outcome.value);
            outcome.stats
        }
        Part::Two => {
            let outcome = sim::render(program, &config)?;
            println!("{}", outcome.value);
            outcome.stats
        }
    };

    if show_stats {
        print_stats(&stats);
    }
    Ok(())
}

fn print_stats(stats: &SimStats) {
    println!();
    stats.print();
}

/// Loads a scan and prints the requested surface count.
fn cmd_droplets(input: &Path, part: Part) -> clocksim_core::Result<()> {
    let scan = droplets::load_scan(input)?;
    debug!(droplets = scan.len(), "scan loaded");
    let area = match part {
        Part::One => droplets::surface_area(&scan),
        Part::Two => droplets::exterior_surface_area(&scan),
    };
    println!("{area}");
    Ok(())
}

/// Loads a scan and writes its scatter series.
fn cmd_scatter(input: &Path, output: Option<&Path>) -> clocksim_core::Result<()> {
    let scan = droplets::load_scan(input)?;
    let scatter = Scatter::from_droplets(&scan);
    let json = scatter.to_json_pretty()?;
    debug!(points = scatter.len(), "scatter series built");
    match output {
        Some(path) => fs::write(path, json).map_err(|source| clocksim_core::Error::Io {
            path: path.to_path_buf(),
            source,
        })?,
        None => println!("{json}"),
    }
    Ok(())
}
