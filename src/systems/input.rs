use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::{Config, Mode};
use crate::resources::InputState;

/// Rebuild paddle intents from the sampled input flags, or from the AI
/// policy for the right paddle in one-player mode
pub fn ingest_inputs(world: &mut World, input: &InputState, mode: &Mode, config: &Config) {
    // The AI tracks the ball; read its position before taking paddle borrows
    let ball_y = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| ball.pos.y)
    };

    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        if paddle.player_id == 0 {
            intent.dir = input.left_dir();
            intent.speed = paddle.speed;
            continue;
        }

        match *mode {
            Mode::TwoPlayer => {
                intent.dir = input.right_dir();
                intent.speed = paddle.speed;
            }
            Mode::OnePlayer(difficulty) => {
                // Bang-bang tracking with a dead-zone; deliberately not
                // predictive. The AI ignores speed-boost effects and always
                // moves at its difficulty speed.
                intent.dir = match ball_y {
                    Some(ball_y) if paddle.center() < ball_y - config.ai_dead_zone => 1,
                    Some(ball_y) if paddle.center() > ball_y + config.ai_dead_zone => -1,
                    _ => 0,
                };
                intent.speed = difficulty.ai_speed();
            }
        }
    }
}
