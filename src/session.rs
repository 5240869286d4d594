use glam::Vec2;
use hecs::{Entity, World};

use crate::components::{Ball, Paddle, PaddleIntent, Particle, PowerUp};
use crate::config::{Config, Mode};
use crate::resources::{
    ActiveEffects, Events, GamePhase, GameRng, InputState, PowerUpSpawner, Score, Time,
};

/// One game from menu to game over: the world plus every resource the
/// simulation needs, wired together so a host drives it with three calls
/// (`start`, `step`, `restart`) and reads state back through the accessors.
pub struct Session {
    pub world: World,
    pub config: Config,
    pub mode: Mode,
    pub phase: GamePhase,
    pub time: Time,
    pub score: Score,
    pub events: Events,
    pub input: InputState,
    pub effects: ActiveEffects,
    pub spawner: PowerUpSpawner,
    pub rng: GameRng,
}

impl Session {
    /// Create a session in the menu phase. Same seed, same inputs, same
    /// game, tick for tick.
    pub fn new(mode: Mode, seed: u64) -> Self {
        let config = Config::new();
        let mut world = World::new();
        crate::create_paddle(&mut world, 0, &config);
        crate::create_paddle(&mut world, 1, &config);
        crate::create_ball(
            &mut world,
            config.ball_spawn(),
            Vec2::splat(config.ball_speed),
        );

        Self {
            world,
            config,
            mode,
            phase: GamePhase::NotStarted,
            time: Time::new(),
            score: Score::new(),
            events: Events::new(),
            input: InputState::new(),
            effects: ActiveEffects::new(),
            spawner: PowerUpSpawner::new(),
            rng: GameRng::new(seed),
        }
    }

    /// Leave the menu and begin play
    pub fn start(&mut self) {
        if self.phase == GamePhase::NotStarted {
            self.phase = GamePhase::Playing;
            log::info!("game started ({:?})", self.mode);
        }
    }

    /// Reset everything but the RNG stream and go straight to play.
    /// Valid from any phase, including mid-game.
    pub fn restart(&mut self) {
        self.score = Score::new();
        self.reset_game();
        self.phase = GamePhase::Playing;
        log::info!("game restarted");
    }

    /// Advance one tick with the currently held input flags
    pub fn step(&mut self) {
        crate::step(
            &mut self.world,
            &self.config,
            &self.mode,
            &self.input,
            &mut self.phase,
            &mut self.time,
            &mut self.score,
            &mut self.events,
            &mut self.effects,
            &mut self.spawner,
            &mut self.rng,
        );
    }

    /// Ball position and velocity, for the renderer
    pub fn ball(&self) -> Option<(Vec2, Vec2)> {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| (b.pos, b.vel))
    }

    pub fn paddle(&self, player_id: u8) -> Option<Paddle> {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.player_id == player_id)
            .map(|(_e, p)| *p)
    }

    pub fn powerups(&self) -> Vec<PowerUp> {
        self.world
            .query::<&PowerUp>()
            .iter()
            .map(|(_e, p)| *p)
            .collect()
    }

    pub fn particles(&self) -> Vec<Particle> {
        self.world
            .query::<&Particle>()
            .iter()
            .map(|(_e, p)| *p)
            .collect()
    }

    /// Despawn transient entities and put paddles and ball back to their
    /// spawn state. Active effects are cancelled, not reverted: the
    /// paddle reset already restores size and speed.
    fn reset_game(&mut self) {
        let transient: Vec<Entity> = self
            .world
            .query::<&PowerUp>()
            .iter()
            .map(|(e, _)| e)
            .chain(self.world.query::<&Particle>().iter().map(|(e, _)| e))
            .collect();
        for entity in transient {
            let _ = self.world.despawn(entity);
        }

        for (_e, (paddle, intent)) in self.world.query_mut::<(&mut Paddle, &mut PaddleIntent)>() {
            paddle.y = self.config.paddle_spawn_y();
            paddle.height = self.config.paddle_height;
            paddle.speed = self.config.paddle_speed;
            *intent = PaddleIntent::default();
        }
        for (_e, ball) in self.world.query_mut::<&mut Ball>() {
            ball.pos = self.config.ball_spawn();
            ball.vel = Vec2::splat(self.config.ball_speed);
        }

        self.effects.clear();
        self.spawner.reset();
        self.events.clear();
    }
}
