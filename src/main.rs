//! Platformer Physics Demo
//!
//! Headless run of a scripted input sequence through the reference arena,
//! followed by a replay to check the run is deterministic.
//!
//! Usage: `platformer-demo [config.json] [level.json]`

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use platformer_physics::{
    FRAME_DT, TARGET_FPS, VERSION,
    FrameTime, InputFrame, Level, PhysicsConfig, PhysicsEntity, Vec2,
    game::{
        animation::AnimationState,
        events::{EventRecorder, PhysicsEvent},
        input::hash_recording,
        tick::{replay, tick},
    },
};

/// Arena size (pixels)
const WIDTH: f32 = 1600.0;
const HEIGHT: f32 = 900.0;
const WALL: f32 = 100.0;

/// Player sprite is 14x19 pixels drawn at 5x scale
const PLAYER_WIDTH: f32 = 14.0 * 5.0;
const PLAYER_HEIGHT: f32 = 19.0 * 5.0;

/// Clock value of the first frame (seconds)
const START: f64 = 1.0;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    info!("Platformer Physics v{}", VERSION);
    info!("Frame rate: {} Hz", TARGET_FPS);

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config {}", path))?;
            PhysicsConfig::from_json(&json)
                .with_context(|| format!("invalid config {}", path))?
        }
        None => PhysicsConfig::default(),
    };
    info!("Configuration:\n{}", config.to_json()?);

    let level = match std::env::args().nth(2) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read level {}", path))?;
            Level::from_json(&json)
                .with_context(|| format!("invalid level {}", path))?
        }
        None => Level::arena(WIDTH, HEIGHT, WALL),
    };
    info!("Level: {} items", level.items().len());

    demo_run(config, level)
}

/// Scripted inputs: settle, walk, jump twice, dash, run into a wall.
fn script() -> Vec<InputFrame> {
    let mut frames = Vec::new();
    frames.extend(std::iter::repeat(InputFrame::new()).take(60));
    frames.extend(std::iter::repeat(InputFrame::right()).take(30));
    frames.push(InputFrame::right().with_jump());
    frames.extend(std::iter::repeat(InputFrame::right()).take(20));
    frames.push(InputFrame::right().with_jump());
    frames.extend(std::iter::repeat(InputFrame::right()).take(10));
    frames.push(InputFrame::right().with_dash());
    frames.extend(std::iter::repeat(InputFrame::new()).take(60));
    frames.push(InputFrame::left().with_dash());
    frames.extend(std::iter::repeat(InputFrame::left()).take(180));
    frames.extend(std::iter::repeat(InputFrame::new()).take(30));
    frames
}

fn spawn(config: &PhysicsConfig) -> Result<PhysicsEntity<(AnimationState, EventRecorder)>> {
    PhysicsEntity::with_hooks(
        Vec2::new(WIDTH / 2.0, HEIGHT - 500.0),
        PLAYER_WIDTH,
        PLAYER_HEIGHT,
        config.clone(),
        (AnimationState::default(), EventRecorder::new()),
    )
    .context("failed to spawn player")
}

fn demo_run(config: PhysicsConfig, level: Level) -> Result<()> {
    info!("=== Starting Demo Run ===");

    let inputs = script();
    info!("Input recording: {} frames, hash {}", inputs.len(), hex::encode(hash_recording(&inputs)));

    let mut player = spawn(&config)?;

    for (i, input) in inputs.iter().enumerate() {
        // Same timing as `replay`, so the two runs can be compared bit for bit
        let frame = FrameTime::fixed(i as u32, FRAME_DT, START);
        let result = tick(&mut player, *input, level.items(), frame);

        if result.landed {
            info!("Frame {}: landed at {}", i, player.position());
        }
        if result.collisions.walls() {
            info!("Frame {}: wall contact at {}", i, player.position());
        }

        // Report every second
        if i % TARGET_FPS as usize == 0 {
            let (clip, sprite) = player.hooks().0.current();
            info!(
                "Frame {}: pos {} speed {} grounded {} state {} jumps {} dashes {} sprite {:?}#{}",
                i,
                player.position(),
                player.speed(),
                player.is_grounded(),
                player.state().as_str(),
                player.jump_count(),
                player.dash_count(),
                clip,
                sprite,
            );
        }
    }

    let recorder = &player.hooks().1;
    let events = recorder.events();
    let jumps = events.iter().filter(|e| matches!(e, PhysicsEvent::Jumped { .. })).count();
    let dashes = events.iter().filter(|e| matches!(e, PhysicsEvent::Dashed { .. })).count();
    info!(
        "Events: {} total over {} frames, {} jumps, {} dashes",
        events.len(),
        recorder.frame(),
        jumps,
        dashes,
    );
    if let Some(first) = events.iter().find(|e| matches!(e, PhysicsEvent::Dashed { .. })) {
        info!("First dash on frame {}", first.frame());
    }

    // Final state
    let hash = player.snapshot().hash();
    info!("Final position: {}", player.position());
    info!("Final State Hash: {}", hex::encode(hash));

    // Verify determinism by replaying
    info!("=== Verifying Determinism ===");
    let (replayed, _) = replay(spawn(&config)?, level.items(), &inputs, FRAME_DT, START);
    let replay_hash = replayed.snapshot().hash();
    info!("Replay State Hash: {}", hex::encode(replay_hash));

    if hash != replay_hash {
        bail!("determinism failure: hashes differ");
    }
    info!("DETERMINISM VERIFIED: Hashes match!");

    Ok(())
}
