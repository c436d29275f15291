use clap::Parser;
use log::info;
use std::path::PathBuf;
use std::process;

use gridsim::config::Config;
use gridsim::error::Result;
use gridsim::scenario;
use gridsim::simulation::{SimState, SimulationLoop};

/// Grid navigation simulator with per-tick re-planning.
///
/// A scenario named `cup` reads `mapcup.txt` and `barbercup.txt` from the
/// input directory.
#[derive(Parser, Debug)]
#[command(name = "gridsim")]
struct Args {
    /// Scenario name, e.g. cup, goaround, goaroundfake
    scenario: String,

    /// Override the scenario input directory from config.toml
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Suppress per-step console rendering
    #[arg(long)]
    quiet: bool,
}

fn run(args: &Args, config: &Config) -> Result<SimState> {
    let dir = args
        .input_dir
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.files.input_dir));
    let (map_path, schedule_path) = scenario::resolve_scenario_paths(
        &dir,
        &args.scenario,
        &config.files.map_prefix,
        &config.files.schedule_prefix,
    );
    info!(
        "scenario {:?}: map {}, schedule {}",
        args.scenario,
        map_path.display(),
        schedule_path.display()
    );

    let grid = scenario::load_map(&map_path)?;
    let schedule = scenario::load_schedule(&schedule_path)?;

    let mut sim = SimulationLoop::new(grid, schedule, config.render.enabled && !args.quiet);
    if config.logging.enable_trace_log {
        sim.enable_trace();
    }

    let outcome = sim.run();

    if let Some(trace) = sim.take_trace() {
        match trace.save_to_file(&config.logging.trace_log_path) {
            Ok(()) => info!("trace log saved to {}", config.logging.trace_log_path),
            Err(e) => eprintln!("Warning: {}", e),
        }
    }

    Ok(outcome)
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    let config = Config::load();

    match run(&args, &config) {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}
