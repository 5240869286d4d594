use glam::Vec2;

/// Paddle component - one per side
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = left, 1 = right
    pub y: f32,        // top edge
    pub height: f32,   // mutable via power-up effects
    pub speed: f32,    // units per tick, mutable via power-up effects
}

impl Paddle {
    pub fn new(player_id: u8, y: f32, height: f32, speed: f32) -> Self {
        Self {
            player_id,
            y,
            height,
            speed,
        }
    }

    /// Vertical centre of the paddle face
    pub fn center(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Strict band test, shared by ball bounces and power-up collection
    pub fn band_contains(&self, y: f32) -> bool {
        y > self.y && y < self.y + self.height
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Put the ball back in play after a point: recentre, flip the
    /// horizontal direction, reset the vertical speed
    pub fn reset(&mut self, center: Vec2, vertical_speed: f32) {
        self.vel.x = -self.vel.x;
        self.pos = center;
        self.vel.y = vertical_speed;
    }
}

/// Movement intent for a paddle, rebuilt every tick by the input system
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: i8,    // -1 = up, 0 = hold, 1 = down
    pub speed: f32, // units per tick; the AI uses its difficulty speed
}

/// Power-up kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerUpKind {
    /// Collector's paddle grows 1.5x
    EnlargePaddle,
    /// Collector's paddle moves 1.5x faster
    SpeedBoost,
    /// Opponent's paddle shrinks to 2/3
    ShrinkOpponent,
}

/// A power-up drifting on the field; bounces off walls until collected
#[derive(Debug, Clone, Copy)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub pos: Vec2,
    pub vel: Vec2,
}

/// A burst particle spawned where a point was scored
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub life: i32,
}
