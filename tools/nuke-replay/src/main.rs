//! nuke-replay: fire one nuke into the demo world and print the aftermath.
//!
//! Usage:
//!   nuke-replay --nuke atom-bomb --x 180 --y 60
//!   nuke-replay --nuke hydrogen-bomb --sender 2 --x 50 --y 90 --pretty
//!   nuke-replay --nuke mirv-warhead --src-x 140 --src-y 10 --x 115 --y 20
//!
//! Set `RUST_LOG=debug` to follow the flight tick by tick.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::info;

use atomfront_core::commands::Intent;
use atomfront_core::config::GameConfig;
use atomfront_core::constants::MAX_REPLAY_TICKS;
use atomfront_core::enums::NukeType;
use atomfront_core::state::WorldSnapshot;
use atomfront_core::types::PlayerId;
use atomfront_sim::world_setup;
use atomfront_sim::SimulationEngine;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum NukeArg {
    AtomBomb,
    HydrogenBomb,
    MirvWarhead,
}

impl From<NukeArg> for NukeType {
    fn from(arg: NukeArg) -> Self {
        match arg {
            NukeArg::AtomBomb => NukeType::AtomBomb,
            NukeArg::HydrogenBomb => NukeType::HydrogenBomb,
            NukeArg::MirvWarhead => NukeType::MirvWarhead,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Weapon to launch
    #[clap(short, long, value_enum, default_value = "atom-bomb")]
    nuke: NukeArg,
    /// Target column
    #[clap(short, long)]
    x: i32,
    /// Target row
    #[clap(short, long)]
    y: i32,
    /// Launch column (defaults to the sender's nearest ready silo)
    #[clap(long, requires = "src_y")]
    src_x: Option<i32>,
    /// Launch row
    #[clap(long, requires = "src_x")]
    src_y: Option<i32>,
    /// Sending player id (1 Aurelia, 2 Boreas, 3 Corvin)
    #[clap(short, long, default_value = "1")]
    sender: u32,
    /// Steps per tick (defaults to the configured nuke speed)
    #[clap(long)]
    speed: Option<u32>,
    /// Ticks to hold after launch
    #[clap(short, long, default_value = "0")]
    wait_ticks: u32,
    /// JSON game config; missing fields keep their defaults
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Pretty-print the final snapshot
    #[clap(short, long)]
    pretty: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => GameConfig::from_json(&fs::read_to_string(path)?)?,
        None => GameConfig::default(),
    };

    let world = world_setup::demo_world(config)?;
    let map = world.map();
    let dst = map.checked_ref(args.x, args.y)?;
    let src = match (args.src_x, args.src_y) {
        (Some(x), Some(y)) => Some(map.checked_ref(x, y)?),
        _ => None,
    };

    let mut engine = SimulationEngine::new(world);
    engine.queue_intent(Intent::LaunchNuke {
        sender: PlayerId(args.sender),
        nuke_type: args.nuke.into(),
        dst,
        src,
        speed: args.speed,
        wait_ticks: args.wait_ticks,
    });

    let snapshot = run(&mut engine);
    info!(
        "finished at tick {} with {} fallout tiles",
        snapshot.time.tick, snapshot.fallout_tiles
    );

    let json = if args.pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };
    println!("{json}");
    Ok(())
}

/// Tick until every execution has finished, keeping the messages and
/// events of every tick in the returned snapshot.
fn run(engine: &mut SimulationEngine) -> WorldSnapshot {
    let mut messages = Vec::new();
    let mut events = Vec::new();
    let mut snapshot = WorldSnapshot::default();
    for _ in 0..MAX_REPLAY_TICKS {
        snapshot = engine.tick();
        messages.append(&mut snapshot.messages);
        events.append(&mut snapshot.events);
        if snapshot.active_executions == 0 {
            break;
        }
    }
    snapshot.messages = messages;
    snapshot.events = events;
    snapshot
}
