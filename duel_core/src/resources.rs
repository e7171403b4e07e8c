use crate::components::{PlayerColor, Side};
use crate::keys::Action;
use crate::params::Params;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub tick: u64,
    pub now: f32, // elapsed ms
}

impl Time {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by one fixed tick
    pub fn advance(&mut self) {
        self.tick += 1;
        self.now += Params::TICK_MS;
    }
}

impl Default for Time {
    fn default() -> Self {
        Self { tick: 0, now: 0.0 }
    }
}

/// Queue of decoded key presses awaiting the next tick
#[derive(Debug, Clone, Default)]
pub struct InputQueue {
    pub presses: Vec<(Side, Action)>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, side: Side, action: Action) {
        self.presses.push((side, action));
    }

    pub fn clear(&mut self) {
        self.presses.clear();
    }
}

/// A projectile striking a fighter
#[derive(Debug, Clone, Copy)]
pub struct HitEvent {
    pub target: Side,
    pub health_after: i32,
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub shots: Vec<Side>,
    pub hits: Vec<HitEvent>,
    pub pruned: u32,
    pub death: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.shots.clear();
        self.hits.clear();
        self.pruned = 0;
        self.death = None;
    }
}

/// Terminal winner state, unset until a fighter dies
#[derive(Debug, Clone, Copy, Default)]
pub struct Winner(pub Option<Side>);

impl Winner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }

    /// Record the side that died; the opponent wins
    pub fn declare_from_death(&mut self, dead: Side) {
        if self.0.is_none() {
            self.0 = Some(dead.opponent());
        }
    }

    pub fn announcement(&self) -> Option<String> {
        self.0
            .map(|side| format!("{} Player WINS!", PlayerColor::for_side(side)))
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
