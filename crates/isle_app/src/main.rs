//! # isle_app: headless client
//!
//! Generates the island, spawns both players and runs the frame loop with a
//! scripted input device and a tracing draw sink. A heartbeat is sent to the
//! liveness server for as long as the process lives.
//!
//! ## Startup Sequence
//!
//! 1. Parse the spritesheet manifest and resolve every sprite name.
//! 2. Generate the tilemap and spawn the players.
//! 3. Connect to the liveness server (`--server`, `ISLE_SERVER_ADDR`, or
//!    `127.0.0.1:8000`) and start the heartbeat on a background runtime.
//! 4. Run frames until Escape or `--max-frames`.

mod frame;

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use isle_component::Engine;
use isle_game::{SpriteNames, Spritesheet, TracingDrawSink, load_world};
use isle_math::Transform;
use isle_net::{HeartbeatConfig, connect, connect_to, run_heartbeat};
use isle_system::{GameLoop, LoopConfig, ShutdownSignal};
use isle_terrain::WorldParams;

const DEFAULT_MANIFEST: &str = include_str!("../assets/spritesheet.json");

#[derive(Parser, Debug)]
#[command(name = "isle_app", about = "Headless island client")]
struct Args {
    /// Terrain seed
    #[arg(long, default_value_t = 12345)]
    seed: u32,

    /// Tiles per side
    #[arg(long, default_value_t = 1000)]
    map_size: i32,

    /// Tile edge length in world units
    #[arg(long, default_value_t = 16)]
    tile_size: u32,

    /// Target frames per second (0 = uncapped)
    #[arg(long, default_value_t = 60.0)]
    frame_rate: f64,

    /// Stop after this many frames (0 = until Escape)
    #[arg(long, default_value_t = 0)]
    max_frames: u64,

    /// Spritesheet manifest; the bundled one is used if omitted
    #[arg(long)]
    spritesheet: Option<PathBuf>,

    /// Liveness server address
    #[arg(long)]
    server: Option<String>,

    /// Do not connect to the liveness server
    #[arg(long)]
    no_heartbeat: bool,

    /// Write the world parameters here before generating
    #[arg(long)]
    save_params: Option<PathBuf>,
}

impl Args {
    fn loop_config(&self) -> LoopConfig {
        let config = LoopConfig::default().with_max_frames(self.max_frames);
        if self.frame_rate > 0.0 {
            config.with_frame_rate(self.frame_rate)
        } else {
            config
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("isle_app=info".parse()?)
                .add_directive("isle_game=info".parse()?)
                .add_directive("isle_terrain=info".parse()?)
                .add_directive("isle_system=info".parse()?)
                .add_directive("isle_net=info".parse()?),
        )
        .init();

    let args = Args::parse();
    info!(seed = args.seed, map_size = args.map_size, "isle client starting");

    let manifest = match &args.spritesheet {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading spritesheet manifest {}", path.display()))?,
        None => DEFAULT_MANIFEST.to_string(),
    };
    let sheet = Spritesheet::from_json(&manifest)?;
    info!(image = sheet.image_name(), sprites = sheet.len(), "spritesheet loaded");

    let params = WorldParams::new(args.seed, args.map_size, args.tile_size);
    if let Some(path) = &args.save_params {
        std::fs::write(path, params.to_bytes()?)
            .with_context(|| format!("writing world parameters {}", path.display()))?;
        info!(path = %path.display(), "world parameters saved");
    }

    let mut engine = Engine::new();
    let world = load_world(&mut engine, &params, &sheet, &SpriteNames::default())?;

    let runtime = tokio::runtime::Runtime::new()?;
    if args.no_heartbeat {
        info!("heartbeat disabled");
    } else {
        let conn = runtime.block_on(async {
            match &args.server {
                Some(addr) => connect_to(addr).await,
                None => connect().await,
            }
        })?;
        runtime.spawn(run_heartbeat(conn, HeartbeatConfig::default()));
    }

    let signal = ShutdownSignal::new();
    let input = Rc::new(RefCell::new(frame::demo_script()));
    let sink = Rc::new(RefCell::new(TracingDrawSink::new()));
    let groups = frame::build_groups(input, Rc::clone(&sink), world.tiles, signal.clone());

    let mut game_loop = GameLoop::new(groups, signal, args.loop_config());
    let frames = game_loop.run(&mut engine);

    for id in world.players {
        if let Some(transform) = engine.read::<Transform>(id) {
            info!(%id, x = transform.x(), y = transform.y(), "final position");
        }
    }

    runtime.shutdown_timeout(Duration::from_secs(1));
    info!(frames, presented = sink.borrow().frames(), "isle client shut down");
    Ok(())
}
