use circlesim::{ScenarioConfig, Scenario};
use circlesim::{run_2d, run_headless};
use circlesim::{bench_step, bench_collision_iterations};

use clap::Parser;
use anyhow::{Context, Result};

use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "2D rigid-circle physics sandbox")]
struct Args {
    /// Scenario file, looked up in `scenarios/` unless it is an existing path
    #[arg(short, default_value = "falling_balls.yaml")]
    file_name: String,

    /// Run without a window until the scenario's `t_end`
    #[arg(long)]
    headless: bool,

    /// Run the step and collision benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

fn scenario_path(file_name: &str) -> PathBuf {
    let direct = PathBuf::from(file_name);
    if direct.is_file() {
        return direct;
    }
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name)
}

// load here to keep main clean
fn load_scenario(file_name: &str) -> Result<Scenario> {
    let config_path = scenario_path(file_name);
    let scenario_cfg = ScenarioConfig::from_path(&config_path)?;
    let scenario = Scenario::build_scenario(scenario_cfg)
        .with_context(|| format!("invalid scenario {}", config_path.display()))?;

    Ok(scenario)
}

fn main() -> Result<()> {
    let args = Args::parse();

    if args.bench {
        bench_step()?;
        bench_collision_iterations()?;
        return Ok(());
    }

    let scenario = load_scenario(&args.file_name)?;

    if args.headless {
        let exit = run_headless(scenario);
        if exit.is_error() {
            anyhow::bail!("headless run exited with {exit:?}");
        }
    }
    else {
        run_2d(scenario);
    }

    Ok(())
}
