use hecs::World;

use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::resources::Events;

/// Resolve ball collisions with the walls and both paddle zones.
///
/// Walls reflect the ball's centre point with no positional correction and
/// no energy change. A ball crossing a paddle's x-threshold inside the
/// paddle band bounces with an angle-based deflection; outside the band it
/// is a miss and the opposing side's score event is raised (the scoring
/// system owns the reset).
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let paddles: Vec<Paddle> = world.query::<&Paddle>().iter().map(|(_e, p)| *p).collect();

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        // Top and bottom walls
        if ball.pos.y <= 0.0 || ball.pos.y >= config.field_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }

        // Paddle zones
        for paddle in &paddles {
            let crossed = if paddle.player_id == 0 {
                ball.pos.x <= config.paddle_x(0)
            } else {
                ball.pos.x >= config.paddle_x(1)
            };
            if !crossed {
                continue;
            }

            if paddle.band_contains(ball.pos.y) {
                // Horizontal reflection; vertical speed comes entirely from
                // the hit offset. No cap: an edge hit can leave fast.
                ball.vel.x = -ball.vel.x;
                ball.vel.y = (ball.pos.y - paddle.center()) * config.deflection_factor;
                events.ball_hit_paddle = true;
            } else if paddle.player_id == 0 {
                events.right_scored = true;
            } else {
                events.left_scored = true;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup() -> (World, Config, Events) {
        (World::new(), Config::new(), Events::new())
    }

    fn set_paddle_y(world: &mut World, player_id: u8, y: f32) {
        for (_e, paddle) in world.query_mut::<&mut Paddle>() {
            if paddle.player_id == player_id {
                paddle.y = y;
            }
        }
    }

    fn ball_of(world: &World) -> Ball {
        world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .expect("ball exists")
    }

    #[test]
    fn test_ball_bounces_off_top_wall() {
        let (mut world, config, mut events) = setup();
        create_ball(&mut world, Vec2::new(400.0, -2.0), Vec2::new(5.0, -4.0));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel, Vec2::new(5.0, 4.0), "Only the vertical sign flips");
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_ball_bounces_off_bottom_wall() {
        let (mut world, config, mut events) = setup();
        create_ball(&mut world, Vec2::new(400.0, 601.0), Vec2::new(5.0, 4.0));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel, Vec2::new(5.0, -4.0));
        assert!(events.ball_hit_wall);
    }

    #[test]
    fn test_center_hit_reflects_flat() {
        let (mut world, config, mut events) = setup();
        create_paddle(&mut world, 0, &config);
        set_paddle_y(&mut world, 0, 50.0); // band 50..150, centre 100
        create_ball(&mut world, Vec2::new(8.0, 100.0), Vec2::new(-5.0, 0.0));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel.x, 5.0, "Horizontal direction flips, magnitude kept");
        assert_eq!(ball.vel.y, 0.0, "Dead-centre hit leaves flat");
        assert!(events.ball_hit_paddle);
        assert!(!events.right_scored);
    }

    #[test]
    fn test_offset_hit_deflects_by_factor() {
        let (mut world, config, mut events) = setup();
        create_paddle(&mut world, 1, &config);
        set_paddle_y(&mut world, 1, 200.0); // centre 250
        create_ball(&mut world, Vec2::new(792.0, 280.0), Vec2::new(5.0, 3.0));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel.x, -5.0);
        assert_eq!(ball.vel.y, 30.0 * 0.35, "dy = offset from centre * 0.35");
        assert!(events.ball_hit_paddle);
    }

    #[test]
    fn test_miss_raises_score_event() {
        let (mut world, config, mut events) = setup();
        create_paddle(&mut world, 0, &config); // band 250..350
        create_ball(&mut world, Vec2::new(8.0, 100.0), Vec2::new(-5.0, 0.0));

        check_collisions(&mut world, &config, &mut events);

        let ball = ball_of(&world);
        assert_eq!(ball.vel.x, -5.0, "Ball untouched on a miss");
        assert!(events.right_scored, "Opponent of the left side scores");
        assert!(!events.ball_hit_paddle);
    }

    #[test]
    fn test_right_side_miss_scores_for_left() {
        let (mut world, config, mut events) = setup();
        create_paddle(&mut world, 1, &config);
        set_paddle_y(&mut world, 1, 0.0); // band 0..100
        create_ball(&mut world, Vec2::new(795.0, 300.0), Vec2::new(5.0, 0.0));

        check_collisions(&mut world, &config, &mut events);

        assert!(events.left_scored);
        assert!(!events.right_scored);
    }

    #[test]
    fn test_no_collision_mid_field() {
        let (mut world, config, mut events) = setup();
        create_paddle(&mut world, 0, &config);
        create_paddle(&mut world, 1, &config);
        create_ball(&mut world, Vec2::new(400.0, 300.0), Vec2::new(5.0, 5.0));

        check_collisions(&mut world, &config, &mut events);

        assert!(!events.ball_hit_wall);
        assert!(!events.ball_hit_paddle);
        assert!(!events.left_scored && !events.right_scored);
    }

    #[test]
    fn test_no_collision_when_no_ball() {
        let (mut world, config, mut events) = setup();
        create_paddle(&mut world, 0, &config);

        // Should not panic
        check_collisions(&mut world, &config, &mut events);

        assert!(!events.ball_hit_paddle);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// dy after a paddle hit is exactly (hit point - centre) * 0.35
            #[test]
            fn deflection_matches_hit_offset(
                paddle_y in 0.0f32..500.0,
                offset in 0.01f32..0.99,
                dy in -20.0f32..20.0,
            ) {
                let (mut world, config, mut events) = setup();
                create_paddle(&mut world, 0, &config);
                set_paddle_y(&mut world, 0, paddle_y);

                let hit_y = paddle_y + offset * config.paddle_height;
                create_ball(&mut world, Vec2::new(5.0, hit_y), Vec2::new(-5.0, dy));

                check_collisions(&mut world, &config, &mut events);

                let ball = ball_of(&world);
                prop_assert!(events.ball_hit_paddle);
                prop_assert_eq!(ball.vel.x, 5.0);
                prop_assert_eq!(
                    ball.vel.y,
                    (hit_y - (paddle_y + config.paddle_height / 2.0)) * 0.35
                );
            }

            /// Wall reflection flips the vertical sign and nothing else
            #[test]
            fn wall_reflection_preserves_speed(
                x in 50.0f32..750.0,
                dx in -10.0f32..10.0,
                dy in 0.1f32..10.0,
            ) {
                let (mut world, config, mut events) = setup();
                create_ball(&mut world, Vec2::new(x, 600.0), Vec2::new(dx, dy));

                check_collisions(&mut world, &config, &mut events);

                let ball = ball_of(&world);
                prop_assert!(events.ball_hit_wall);
                prop_assert_eq!(ball.vel.x, dx);
                prop_assert_eq!(ball.vel.y, -dy);
            }
        }
    }
}
