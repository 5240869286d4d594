use hecs::World;

use crate::components::Ball;
use crate::config::Config;
use crate::resources::{Events, GamePhase, GameRng, Score};
use crate::systems::particles::spawn_burst;

/// Consume score events raised by the collision pass: bump the counter,
/// check the win threshold, burst particles at the ball and put it back in
/// play. The ball resets even on the winning point, as does the burst.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    phase: &mut GamePhase,
    events: &mut Events,
    rng: &mut GameRng,
) {
    if !events.left_scored && !events.right_scored {
        return;
    }

    if events.left_scored {
        score.increment_left();
        log::debug!("left player scores: {} - {}", score.left, score.right);
    }
    if events.right_scored {
        score.increment_right();
        log::debug!("right player scores: {} - {}", score.left, score.right);
    }

    if let Some(winner) = score.has_winner(config.win_score) {
        *phase = GamePhase::GameOver;
        events.game_over = Some(winner);
        log::info!(
            "game over: player {} wins {} - {}",
            winner + 1,
            score.left,
            score.right
        );
    }

    let ball_pos = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| ball.pos)
    };
    if let Some(pos) = ball_pos {
        spawn_burst(world, pos, rng);
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            ball.reset(config.ball_spawn(), config.ball_speed);
        }
    }
}
