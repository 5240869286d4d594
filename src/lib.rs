//! Deterministic fixed-timestep simulation core for a two-paddle arcade
//! game: paddles, ball physics, scoring, drifting power-ups and particle
//! bursts, with an optional AI opponent.
//!
//! The crate owns no clock, no rendering and no input devices. A host
//! samples its inputs into [`InputState`], calls [`step`] (or
//! [`Session::step`]) once per tick, and reads entities and [`Events`]
//! back out for presentation. Two sessions created with the same seed and
//! fed the same inputs stay identical tick for tick.

use glam::Vec2;
use hecs::{Entity, World};

pub mod components;
pub mod config;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use components::{Ball, Paddle, PaddleIntent, Particle, PowerUp, PowerUpKind};
pub use config::{Config, Difficulty, Mode};
pub use params::Params;
pub use resources::{
    ActiveEffects, EffectTimer, Events, GamePhase, GameRng, InputState, PowerUpSpawner, Score,
    Time,
};
pub use session::Session;

/// Spawn a paddle with its movement intent at the vertical centre
pub fn create_paddle(world: &mut World, player_id: u8, config: &Config) -> Entity {
    world.spawn((
        Paddle::new(
            player_id,
            config.paddle_spawn_y(),
            config.paddle_height,
            config.paddle_speed,
        ),
        PaddleIntent::default(),
    ))
}

/// Spawn the ball
pub fn create_ball(world: &mut World, pos: Vec2, vel: Vec2) -> Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Advance the simulation by one tick.
///
/// System order is fixed: the ball moves and resolves against walls and
/// paddles before this tick's inputs are applied, so a paddle defends with
/// the position it had when the tick began. Before the session starts
/// nothing moves; after game over only particles keep animating.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    config: &Config,
    mode: &Mode,
    input: &InputState,
    phase: &mut GamePhase,
    time: &mut Time,
    score: &mut Score,
    events: &mut Events,
    effects: &mut ActiveEffects,
    spawner: &mut PowerUpSpawner,
    rng: &mut GameRng,
) {
    events.clear();

    if *phase == GamePhase::NotStarted {
        return;
    }

    if *phase == GamePhase::Playing {
        systems::move_ball(world);
        systems::check_collisions(world, config, events);
        systems::check_scoring(world, config, score, phase, events, rng);
        systems::ingest_inputs(world, input, mode, config);
        systems::move_paddles(world, config);
        systems::spawn_powerups(world, config, spawner, rng);
        systems::update_powerups(world, config, effects, events);
        systems::tick_effects(world, config, effects);
    }

    // Runs in GameOver too, so the final burst finishes animating
    systems::update_particles(world);

    time.advance();
}
