use glam::Vec2;

use crate::params::Params;

/// AI difficulty for one-player mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// AI paddle speed in units per tick
    pub fn ai_speed(self) -> f32 {
        match self {
            Difficulty::Easy => Params::AI_SPEED_EASY,
            Difficulty::Medium => Params::AI_SPEED_MEDIUM,
            Difficulty::Hard => Params::AI_SPEED_HARD,
        }
    }
}

/// Game mode chosen by the menu collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Right paddle is driven by the AI policy
    OnePlayer(Difficulty),
    /// Both paddles are driven by input flags
    TwoPlayer,
}

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub deflection_factor: f32,
    pub win_score: u8,
    pub ai_dead_zone: f32,
    pub powerup_spawn_chance: f64,
    pub max_powerups_per_game: u8,
    pub powerup_size: f32,
    pub powerup_spawn_margin: f32,
    pub powerup_drift: f32,
    pub effect_factor: f32,
    pub effect_duration_ticks: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            deflection_factor: Params::DEFLECTION_FACTOR,
            win_score: Params::WIN_SCORE,
            ai_dead_zone: Params::AI_DEAD_ZONE,
            powerup_spawn_chance: Params::POWERUP_SPAWN_CHANCE,
            max_powerups_per_game: Params::MAX_POWERUPS_PER_GAME,
            powerup_size: Params::POWERUP_SIZE,
            powerup_spawn_margin: Params::POWERUP_SPAWN_MARGIN,
            powerup_drift: Params::POWERUP_DRIFT,
            effect_factor: Params::EFFECT_FACTOR,
            effect_duration_ticks: Params::EFFECT_DURATION_TICKS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// X threshold where the ball meets a paddle face
    pub fn paddle_x(&self, player_id: u8) -> f32 {
        if player_id == 0 {
            self.paddle_width // Left paddle
        } else {
            self.field_width - self.paddle_width // Right paddle
        }
    }

    /// Clamp a paddle's top edge to the field
    pub fn clamp_paddle_y(&self, y: f32, height: f32) -> f32 {
        y.clamp(0.0, self.field_height - height)
    }

    /// Field centre, where the ball spawns and resets
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Top edge of a default-height paddle centred vertically
    pub fn paddle_spawn_y(&self) -> f32 {
        (self.field_height - self.paddle_height) / 2.0
    }
}
