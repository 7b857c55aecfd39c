// stormsnap - Run the storm headless and dump the water surface
//
// Pipeline:
//   1. Load config (defaults, or a JSON file)
//   2. Step the simulation N frames at a fixed dt
//   3. Log the overlay stats
//   4. Write the height field as a grayscale PNG, one pixel per vertex
//
// Usage: cargo run --bin stormsnap -- [--frames N] [--dt S] [--seed N] [--config file.json] [--out file.png]

mod heightmap;

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use storm_engine::{HudStats, Storm, StormConfig};

struct Args {
    frames: u32,
    dt: f32,
    seed: u64,
    config: Option<PathBuf>,
    out: PathBuf,
}

fn parse_args() -> Result<Args> {
    let args: Vec<String> = env::args().collect();
    let mut parsed = Args {
        frames: 300,
        dt: 1.0 / 60.0,
        seed: storm_engine::SimRng::DEFAULT_SEED,
        config: None,
        out: PathBuf::from("water.png"),
    };

    let mut i = 1;
    while i < args.len() {
        let value = args.get(i + 1).map(String::as_str);
        match (args[i].as_str(), value) {
            ("--frames", Some(v)) => parsed.frames = v.parse().context("--frames expects an integer")?,
            ("--dt", Some(v)) => parsed.dt = v.parse().context("--dt expects seconds")?,
            ("--seed", Some(v)) => parsed.seed = v.parse().context("--seed expects an integer")?,
            ("--config", Some(v)) => parsed.config = Some(PathBuf::from(v)),
            ("--out", Some(v)) => parsed.out = PathBuf::from(v),
            (flag, _) => bail!(
                "unexpected argument `{}`\nUsage: {} [--frames N] [--dt S] [--seed N] [--config file.json] [--out file.png]",
                flag,
                args[0]
            ),
        }
        i += 2;
    }

    if !(parsed.dt > 0.0) {
        bail!("--dt must be greater than zero");
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            StormConfig::from_json(&json)?
        }
        None => StormConfig::default(),
    };

    let mut storm = Storm::new(config, args.seed)?;

    let mut now = 0.0;
    let mut impacts = 0;
    for _ in 0..args.frames {
        now += args.dt;
        impacts += storm.tick(args.dt, now);
    }

    let stats = HudStats::of(&storm);
    log::info!("{} frames, {:.2}s simulated, {} impacts", args.frames, now, impacts);
    for line in stats.lines() {
        log::info!("{}", line);
    }
    log::debug!("{} impacts found the ripple pool full", storm.dropped_ripples());

    heightmap::write_png(storm.water(), &args.out)
        .with_context(|| format!("writing {}", args.out.display()))?;
    log::info!("wrote {}", args.out.display());
    Ok(())
}
