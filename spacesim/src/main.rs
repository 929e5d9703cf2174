use spacesim::{bench_step, snapshot, CsvRenderer, Renderer, Scenario};

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Headless gravity and bounce simulation")]
struct Args {
    /// Scenario file under scenarios/; the built-in seed is used when omitted
    #[arg(short, long)]
    file: Option<String>,

    /// Ticks to run; defaults to the scenario's `ticks`
    #[arg(short = 'n', long)]
    ticks: Option<u64>,

    /// Frame delta per tick; defaults to the scenario's `delta`
    #[arg(short, long)]
    delta: Option<f64>,

    /// Write a CSV frame every this many ticks (0 disables output)
    #[arg(short, long, default_value_t = 1)]
    every: u64,

    /// Time the pairwise pass for growing body counts instead of simulating
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(file: Option<&str>) -> Result<Scenario> {
    match file {
        Some(file_name) => {
            let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
                .join("scenarios")
                .join(file_name);
            Scenario::from_path(&config_path)
                .with_context(|| format!("failed to load scenario {}", config_path.display()))
        }
        None => Ok(Scenario::default_line()?),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    if args.bench {
        bench_step(&[10, 50, 100, 200, 400, 800], 5)?;
        return Ok(());
    }

    let mut scenario = load_scenario(args.file.as_deref())?;
    let ticks = args.ticks.unwrap_or(scenario.parameters.ticks);
    let delta = args.delta.unwrap_or(scenario.parameters.delta);

    let stdout = io::stdout();
    let mut csv = CsvRenderer::new(BufWriter::new(stdout.lock()));
    let mut bounces = 0usize;
    let mut degenerate = 0usize;

    if args.every > 0 {
        csv.render(0, &snapshot(&scenario.system, &scenario.parameters))?;
    }
    for _ in 0..ticks {
        let report = scenario.step(delta)?;
        bounces += report.collisions.len();
        degenerate += report.degenerate.len();

        if args.every > 0 && report.tick % args.every == 0 {
            csv.render(report.tick, &snapshot(&scenario.system, &scenario.parameters))?;
        }
    }

    info!(
        "ran {} ticks (t = {}): {} bounces, {} coincident pairs, state finite: {}",
        scenario.system.tick,
        scenario.system.t,
        bounces,
        degenerate,
        scenario.system.is_finite()
    );

    Ok(())
}
