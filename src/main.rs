use tidesim::{Scenario, ScenarioConfig};
use tidesim::{bench_forces, bench_step};

use anyhow::{Context, Result};
use clap::Parser;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file inside the scenarios/ directory
    #[arg(short, default_value = "synchronization.yaml")]
    file_name: String,

    /// Run the built-in benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("scenarios")
        .join(file_name);
    let file = File::open(&config_path)
        .with_context(|| format!("opening scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)?;

    Ok(scenario_cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_forces();
        bench_step();
        return Ok(());
    }

    let scenario_cfg = load_scenario_from_yaml(&args.file_name)?;
    let mut scenario = Scenario::build(scenario_cfg)?;
    scenario.run()?;

    Ok(())
}
