use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::Config;

/// Apply paddle intents. Every movement update is clamped to the field,
/// including AI-driven movement.
pub fn move_paddles(world: &mut World, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&mut Paddle, &PaddleIntent)>() {
        if intent.dir != 0 {
            paddle.y += intent.dir as f32 * intent.speed;
            paddle.y = config.clamp_paddle_y(paddle.y, paddle.height);
        }
    }
}

/// Advance the ball by its per-tick velocity
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel;
    }
}
