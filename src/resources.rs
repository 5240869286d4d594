use crate::components::PowerUpKind;

/// Tick counter for the fixed-rate simulation
///
/// There is no delta time: one call to `step` is one tick, and all speeds
/// are per-tick quantities.
#[derive(Debug, Clone, Copy, Default)]
pub struct Time {
    pub tick: u64,
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self) {
        self.tick += 1;
    }
}

/// Current phase of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Menu is up; nothing moves yet
    NotStarted,
    /// Active gameplay
    Playing,
    /// A player reached the winning score; terminal until restart
    GameOver,
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,  // Left player score
    pub right: u8, // Right player score
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn has_winner(&self, win_score: u8) -> Option<u8> {
        if self.left >= win_score {
            Some(0) // Left player wins
        } else if self.right >= win_score {
            Some(1) // Right player wins
        } else {
            None
        }
    }
}

/// Input flags written by the input collaborator, sampled once per tick
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Left paddle direction: -1 up, 0 hold, 1 down
    pub fn left_dir(&self) -> i8 {
        self.left_down as i8 - self.left_up as i8
    }

    /// Right paddle direction: -1 up, 0 hold, 1 down
    pub fn right_dir(&self) -> i8 {
        self.right_down as i8 - self.right_up as i8
    }
}

/// Events that occurred during this frame, for the audio and menu
/// collaborators; cleared at the start of every tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
    pub game_over: Option<u8>,
    pub powerups_collected: Vec<(u8, PowerUpKind)>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
        self.game_over = None;
        self.powerups_collected.clear();
    }
}

/// One pending power-up reversion
#[derive(Debug, Clone, Copy)]
pub struct EffectTimer {
    pub player_id: u8, // the affected player, not necessarily the collector
    pub kind: PowerUpKind,
    pub ticks_left: u32,
}

/// Per-player effect slots plus the reversion timer queue.
///
/// Invariant: at most one occupied slot (and one pending timer) per player.
/// A new effect targeting an occupied slot is ignored until the slot frees.
#[derive(Debug, Clone, Default)]
pub struct ActiveEffects {
    slots: [Option<PowerUpKind>; 2],
    pub timers: Vec<EffectTimer>,
}

impl ActiveEffects {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn slot(&self, player_id: u8) -> Option<PowerUpKind> {
        self.slots[player_id as usize]
    }

    pub fn is_free(&self, player_id: u8) -> bool {
        self.slots[player_id as usize].is_none()
    }

    pub fn occupy(&mut self, player_id: u8, kind: PowerUpKind, duration_ticks: u32) {
        self.slots[player_id as usize] = Some(kind);
        self.timers.push(EffectTimer {
            player_id,
            kind,
            ticks_left: duration_ticks,
        });
    }

    pub fn release(&mut self, player_id: u8) {
        self.slots[player_id as usize] = None;
    }

    /// Cancel every pending reversion (full game reset)
    pub fn clear(&mut self) {
        self.slots = [None, None];
        self.timers.clear();
    }
}

/// Power-up spawn budget for the session
#[derive(Debug, Clone, Copy, Default)]
pub struct PowerUpSpawner {
    pub spawned: u8,
}

impl PowerUpSpawner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.spawned = 0;
    }
}

/// Random number generator
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_increment() {
        let mut score = Score::new();
        score.increment_left();
        score.increment_right();
        score.increment_right();
        assert_eq!(score.left, 1);
        assert_eq!(score.right, 2);
    }

    #[test]
    fn test_score_has_winner() {
        let mut score = Score::new();
        for _ in 0..5 {
            score.increment_left();
        }
        assert_eq!(score.has_winner(5), Some(0), "Left player wins at 5");

        let mut score = Score::new();
        for _ in 0..4 {
            score.increment_right();
        }
        assert_eq!(score.has_winner(5), None, "No winner below threshold");
        score.increment_right();
        assert_eq!(score.has_winner(5), Some(1), "Right player wins at 5");
    }

    #[test]
    fn test_input_dirs() {
        let mut input = InputState::new();
        assert_eq!(input.left_dir(), 0);
        input.left_up = true;
        assert_eq!(input.left_dir(), -1);
        input.left_down = true;
        assert_eq!(input.left_dir(), 0, "Opposing keys cancel out");
        input.right_down = true;
        assert_eq!(input.right_dir(), 1);
    }

    #[test]
    fn test_events_clear() {
        let mut events = Events::new();
        events.left_scored = true;
        events.ball_hit_wall = true;
        events.game_over = Some(0);
        events.powerups_collected.push((1, PowerUpKind::SpeedBoost));

        events.clear();

        assert!(!events.left_scored);
        assert!(!events.ball_hit_wall);
        assert!(events.game_over.is_none());
        assert!(events.powerups_collected.is_empty());
    }

    #[test]
    fn test_effects_slot_guard() {
        let mut effects = ActiveEffects::new();
        assert!(effects.is_free(0));

        effects.occupy(0, PowerUpKind::EnlargePaddle, 300);
        assert!(!effects.is_free(0));
        assert!(effects.is_free(1), "Slots are per player");
        assert_eq!(effects.slot(0), Some(PowerUpKind::EnlargePaddle));
        assert_eq!(effects.timers.len(), 1);

        effects.release(0);
        assert!(effects.is_free(0));
    }

    #[test]
    fn test_effects_clear_cancels_timers() {
        let mut effects = ActiveEffects::new();
        effects.occupy(0, PowerUpKind::SpeedBoost, 300);
        effects.occupy(1, PowerUpKind::ShrinkOpponent, 300);

        effects.clear();

        assert!(effects.is_free(0));
        assert!(effects.is_free(1));
        assert!(effects.timers.is_empty());
    }
}
