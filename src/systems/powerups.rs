use glam::Vec2;
use hecs::World;
use rand::Rng;

use crate::components::{Paddle, PowerUp, PowerUpKind};
use crate::config::Config;
use crate::resources::{ActiveEffects, EffectTimer, Events, GameRng, PowerUpSpawner};

/// Roll the per-tick spawn chance and place a new power-up if the session
/// budget allows. The budget is checked before the roll so an exhausted
/// session consumes no randomness here.
pub fn spawn_powerups(
    world: &mut World,
    config: &Config,
    spawner: &mut PowerUpSpawner,
    rng: &mut GameRng,
) {
    if spawner.spawned >= config.max_powerups_per_game {
        return;
    }
    if !rng.0.gen_bool(config.powerup_spawn_chance) {
        return;
    }

    let kind = match rng.0.gen_range(0..3) {
        0 => PowerUpKind::EnlargePaddle,
        1 => PowerUpKind::SpeedBoost,
        _ => PowerUpKind::ShrinkOpponent,
    };
    let margin = config.powerup_spawn_margin;
    let pos = Vec2::new(
        rng.0.gen_range(margin..config.field_width - margin),
        rng.0.gen_range(margin..config.field_height - margin),
    );
    let vel = Vec2::new(
        rng.0.gen_range(-config.powerup_drift..config.powerup_drift),
        rng.0.gen_range(-config.powerup_drift..config.powerup_drift),
    );

    world.spawn((PowerUp { kind, pos, vel },));
    spawner.spawned += 1;
    log::debug!("power-up {:?} spawned at {:?} ({} of {})", kind, pos, spawner.spawned, config.max_powerups_per_game);
}

/// Drift power-ups, bounce them off the field edges, and hand any that
/// reach a paddle face to the effect application. A power-up touching a
/// paddle is always despawned, even when the slot guard swallows its
/// effect.
pub fn update_powerups(
    world: &mut World,
    config: &Config,
    effects: &mut ActiveEffects,
    events: &mut Events,
) {
    let paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();

    let mut collected: Vec<(hecs::Entity, u8, PowerUpKind)> = Vec::new();
    for (entity, powerup) in world.query_mut::<&mut PowerUp>() {
        powerup.pos += powerup.vel;

        if powerup.pos.x <= 0.0 || powerup.pos.x >= config.field_width {
            powerup.vel.x = -powerup.vel.x;
        }
        if powerup.pos.y <= 0.0 || powerup.pos.y >= config.field_height {
            powerup.vel.y = -powerup.vel.y;
        }

        for paddle in &paddles {
            let at_face = if paddle.player_id == 0 {
                powerup.pos.x < config.paddle_width
            } else {
                powerup.pos.x > config.field_width - config.paddle_width
            };
            if at_face && paddle.band_contains(powerup.pos.y) {
                collected.push((entity, paddle.player_id, powerup.kind));
                break;
            }
        }
    }

    for (entity, collector, kind) in collected {
        let _ = world.despawn(entity);
        events.powerups_collected.push((collector, kind));
        log::debug!("player {} collected power-up {:?}", collector + 1, kind);
        apply_effect(world, config, effects, collector, kind);
    }
}

/// Apply a collected power-up to its target paddle. One effect per paddle:
/// while a slot is occupied any further effect on that paddle is dropped
/// (its power-up is already gone).
pub fn apply_effect(
    world: &mut World,
    config: &Config,
    effects: &mut ActiveEffects,
    collector: u8,
    kind: PowerUpKind,
) {
    let affected = match kind {
        PowerUpKind::ShrinkOpponent => 1 - collector,
        _ => collector,
    };
    if !effects.is_free(affected) {
        return;
    }

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.player_id != affected {
            continue;
        }
        match kind {
            PowerUpKind::EnlargePaddle => {
                paddle.height *= config.effect_factor;
                paddle.y -= paddle.height / 6.0;
            }
            PowerUpKind::SpeedBoost => {
                paddle.speed *= config.effect_factor;
            }
            PowerUpKind::ShrinkOpponent => {
                paddle.height /= config.effect_factor;
                paddle.y += paddle.height / 6.0;
            }
        }
    }

    effects.occupy(affected, kind, config.effect_duration_ticks);
}

/// Count down active effect timers and revert the ones that expire
pub fn tick_effects(world: &mut World, config: &Config, effects: &mut ActiveEffects) {
    for timer in effects.timers.iter_mut() {
        timer.ticks_left = timer.ticks_left.saturating_sub(1);
    }

    let expired: Vec<EffectTimer> = effects
        .timers
        .iter()
        .filter(|t| t.ticks_left == 0)
        .copied()
        .collect();
    effects.timers.retain(|t| t.ticks_left > 0);

    for timer in expired {
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.player_id != timer.player_id {
                continue;
            }
            match timer.kind {
                PowerUpKind::EnlargePaddle => {
                    paddle.height /= config.effect_factor;
                    paddle.y += paddle.height / 4.0;
                }
                PowerUpKind::SpeedBoost => {
                    paddle.speed /= config.effect_factor;
                }
                PowerUpKind::ShrinkOpponent => {
                    paddle.height *= config.effect_factor;
                    paddle.y -= paddle.height / 4.0;
                }
            }
        }
        effects.release(timer.player_id);
        log::debug!("effect {:?} on player {} expired", timer.kind, timer.player_id + 1);
    }
}
