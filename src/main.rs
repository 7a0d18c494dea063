//! Zero vs Infinity headless driver
//!
//! Stands in for the browser frame loop: a simulated clock, frame pacing,
//! scripted inputs for both players, event handling and a score readout.
//!
//! Usage: `zero-infinity [settings.json] [seconds]`

use zero_infinity::consts::FPS_INTERVAL;
use zero_infinity::sim::{FrameTime, InputSnapshot, PlayerId, World, WorldEvent};
use zero_infinity::{ConfigError, MatchSettings};

/// Simulated host refresh interval (ms)
const HOST_FRAME_MS: f64 = 1000.0 / 144.0;
const DEFAULT_SECONDS: f64 = 60.0;

/// Frame loop state
struct Game {
    world: World,
    input: InputSnapshot,
    /// Time of the last simulated tick
    last_time: f64,
    frames: u64,
    // FPS tracking
    frame_times: [f64; 60],
    frame_index: usize,
    fps: u32,
}

impl Game {
    fn new(world: World) -> Self {
        Self {
            world,
            input: InputSnapshot::new(),
            last_time: 0.0,
            frames: 0,
            frame_times: [0.0; 60],
            frame_index: 0,
            fps: 0,
        }
    }

    /// Called once per host frame; ticks only when enough time has passed
    fn frame(&mut self, now: f64) {
        let delta = now - self.last_time;
        if delta <= FPS_INTERVAL {
            return;
        }

        self.script_inputs(now);
        self.world.step(&self.input, FrameTime::new(now, delta as f32));
        self.last_time = now;
        self.frames += 1;

        for event in self.world.drain_events() {
            self.handle_event(event);
        }

        // FPS over the last 60 ticks
        self.frame_times[self.frame_index] = now;
        self.frame_index = (self.frame_index + 1) % 60;
        let oldest_time = self.frame_times[self.frame_index];
        if oldest_time > 0.0 {
            let elapsed = now - oldest_time;
            if elapsed > 0.0 {
                self.fps = (59_000.0 / elapsed).round() as u32;
            }
        }
    }

    /// A crude bot for each side: chase the opponent, hop, shoot when facing it
    fn script_inputs(&mut self, now: f64) {
        let mut input = InputSnapshot::new();
        for id in PlayerId::ALL {
            let me = self.world.player(id);
            let them = self.world.player(id.opponent());
            let keys = &me.bindings;

            let dx = them.body.pos.x - me.body.pos.x;
            if dx.abs() > 40.0 {
                input.press(if dx < 0.0 { keys.left } else { keys.right });
            }
            if them.body.pos.y + 20.0 < me.body.pos.y || (now as u64 / 900) % 4 == 0 {
                input.press(keys.up);
            }
            if (them.body.pos.y - me.body.pos.y).abs() < me.size.y {
                input.press(keys.shoot);
            } else if (now as u64 / 1500) % 5 == (id.index() as u64) {
                input.press(keys.shield);
            }
        }
        self.input = input;
    }

    fn handle_event(&self, event: WorldEvent) {
        match event {
            WorldEvent::PlayerDied {
                victim, cause, at, ..
            } => {
                // Particle bursts and sound would hang off this
                log::debug!(
                    "{:?} died at ({:.0}, {:.0}) by {:?}",
                    victim,
                    at.x,
                    at.y,
                    cause
                );
            }
            WorldEvent::ProjectileFired { id, owner } => {
                log::trace!("{:?} fired projectile {}", owner, id);
            }
            WorldEvent::ProjectileExpired { id, .. } => {
                log::trace!("Projectile {} expired", id);
            }
        }
    }
}

fn run(settings: &MatchSettings, seconds: f64) -> Result<(), ConfigError> {
    let world = World::new(settings)?;
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Match settings: {}", settings.to_json()?);
    }
    let mut game = Game::new(world);

    let end = seconds * 1000.0;
    let mut now = 0.0;
    while now < end {
        now += HOST_FRAME_MS;
        game.frame(now);
    }

    let (zero, infinity) = game.world.scores();
    log::info!(
        "Simulated {:.1}s in {} ticks (~{} tps)",
        seconds,
        game.frames,
        game.fps
    );
    println!(
        "{}: {}    {}: {}",
        game.world.player(PlayerId::Zero).name,
        zero,
        game.world.player(PlayerId::Infinity).name,
        infinity
    );

    if log::log_enabled!(log::Level::Debug) {
        match serde_json::to_string(&game.world.snapshot()) {
            Ok(json) => log::debug!("Final state: {}", json),
            Err(e) => log::warn!("Could not serialize final state: {}", e),
        }
    }
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Zero vs Infinity (headless) starting...");

    let mut args = std::env::args().skip(1);
    let settings = match args.next() {
        Some(path) => match MatchSettings::load(&path) {
            Ok(settings) => settings,
            Err(e) => {
                log::error!("{}: {}", path, e);
                std::process::exit(1);
            }
        },
        None => MatchSettings::default(),
    };
    let seconds = args
        .next()
        .and_then(|s| s.parse::<f64>().ok())
        .unwrap_or(DEFAULT_SECONDS);

    if let Err(e) = run(&settings, seconds) {
        log::error!("{}", e);
        std::process::exit(1);
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {}
