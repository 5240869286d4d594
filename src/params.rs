/// Game tuning parameters
///
/// All speeds are units per tick: the simulation is tick-rate-dependent by
/// design (nominally 60 Hz, no delta-time scaling).
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 10.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 10.0;

    // Ball
    pub const BALL_RADIUS: f32 = 10.0;
    pub const BALL_SPEED: f32 = 5.0; // both axes at launch and after reset
    pub const DEFLECTION_FACTOR: f32 = 0.35; // hit offset -> vertical speed

    // Score
    pub const WIN_SCORE: u8 = 5; // first to 5 wins

    // AI
    pub const AI_DEAD_ZONE: f32 = 35.0; // tolerance band around the ball
    pub const AI_SPEED_EASY: f32 = 4.0;
    pub const AI_SPEED_MEDIUM: f32 = 6.0;
    pub const AI_SPEED_HARD: f32 = 8.0;

    // Power-ups
    pub const POWERUP_SPAWN_CHANCE: f64 = 0.01; // Bernoulli trial per tick
    pub const MAX_POWERUPS_PER_GAME: u8 = 5;
    pub const POWERUP_SIZE: f32 = 30.0;
    pub const POWERUP_SPAWN_MARGIN: f32 = 50.0; // keep spawns away from edges
    pub const POWERUP_DRIFT: f32 = 1.0; // max drift speed per axis
    pub const EFFECT_FACTOR: f32 = 1.5; // paddle height/speed multiplier
    pub const EFFECT_DURATION_TICKS: u32 = 300; // 5 seconds at 60 Hz

    // Particles
    pub const PARTICLE_BURST: usize = 20;
    pub const PARTICLE_SPREAD: f32 = 2.0; // max burst speed per axis
    pub const PARTICLE_LIFE: i32 = 100;
    pub const PARTICLE_DECAY: i32 = 2; // life lost per tick
}
