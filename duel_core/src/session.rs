//! Game session: owns the world, wires key signals to fighter actions, and
//! drives the tick loop until a fighter dies.

use std::collections::HashSet;

use hecs::World;
use serde::Serialize;

use crate::components::{Fighter, PlayerColor, Projectile, Side};
use crate::config::Config;
use crate::keys::{Action, KeyAssignError, KeyBindings};
use crate::resources::{Events, GameRng, InputQueue, Time, Winner};
use crate::{create_fighter, step};

/// Simulation loop states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum LoopState {
    Running,
    Halted,
}

/// One complete duel. Discard and recreate to restart; there is no partial
/// reset.
pub struct GameSession {
    world: World,
    time: Time,
    config: Config,
    queue: InputQueue,
    events: Events,
    winner: Winner,
    bindings: [KeyBindings; 2], // indexed left, right
    held: HashSet<char>,
    state: LoopState,
}

impl GameSession {
    /// Create a session with freshly assigned key bindings for both players.
    /// The second player's draw excludes the first player's keys, so all ten
    /// bindings are pairwise distinct.
    pub fn new(seed: u64) -> Result<Self, KeyAssignError> {
        let config = Config::new();
        let mut rng = GameRng::new(seed);

        let left_keys = KeyBindings::assign(&mut rng, &HashSet::new())?;
        let right_keys = KeyBindings::assign(&mut rng, &left_keys.key_set())?;

        let mut world = World::new();
        create_fighter(&mut world, Side::Left, &config);
        create_fighter(&mut world, Side::Right, &config);

        Ok(Self {
            world,
            time: Time::new(),
            config,
            queue: InputQueue::new(),
            events: Events::new(),
            winner: Winner::new(),
            bindings: [left_keys, right_keys],
            held: HashSet::new(),
            state: LoopState::Running,
        })
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// What happened during the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn bindings(&self, side: Side) -> &KeyBindings {
        match side {
            Side::Left => &self.bindings[0],
            Side::Right => &self.bindings[1],
        }
    }

    pub fn winner_announcement(&self) -> Option<String> {
        self.winner.announcement()
    }

    /// Key-down signal. Jump, shield and shoot fire on the press edge;
    /// left/right are recorded and re-polled every tick while held.
    /// Auto-repeated key-down signals for a held key are ignored, as is all
    /// input once the loop has halted.
    pub fn key_down(&mut self, key: char) {
        if self.state == LoopState::Halted {
            return;
        }
        let key = key.to_ascii_uppercase();
        if !self.held.insert(key) {
            return;
        }
        if let Some((side, action)) = self.decode(key) {
            match action {
                Action::Left | Action::Right => {}
                Action::Jump | Action::Shield | Action::Shoot => {
                    self.queue.push(side, action);
                }
            }
        }
    }

    /// Key-up signal: clear the held record for that key
    pub fn key_up(&mut self, key: char) {
        if self.state == LoopState::Halted {
            return;
        }
        self.held.remove(&key.to_ascii_uppercase());
    }

    /// Run one simulation tick. Held movement keys are turned into move
    /// presses first; once a fighter dies the loop halts and later calls do
    /// nothing.
    pub fn tick(&mut self) {
        if self.state == LoopState::Halted {
            return;
        }

        for side in [Side::Left, Side::Right] {
            let keys = self.bindings(side);
            let (left, right) = (keys.left, keys.right);
            if self.held.contains(&left) {
                self.queue.push(side, Action::Left);
            }
            if self.held.contains(&right) {
                self.queue.push(side, Action::Right);
            }
        }

        self.time.advance();
        step(
            &mut self.world,
            &self.time,
            &self.config,
            &mut self.queue,
            &mut self.events,
            &mut self.winner,
        );

        if self.winner.is_set() {
            self.state = LoopState::Halted;
        }
    }

    pub fn fighter(&self, side: Side) -> Fighter {
        self.world
            .query::<&Fighter>()
            .iter()
            .map(|(_, f)| *f)
            .find(|f| f.side == side)
            .unwrap_or_else(|| Fighter::new(side, &self.config))
    }

    /// Live attributes for the display collaborator
    pub fn snapshot(&self) -> SessionSnapshot {
        let mut fighters: Vec<_> = self
            .world
            .query::<&Fighter>()
            .iter()
            .map(|(_, f)| FighterState::from_fighter(f, self.time.now, &self.config))
            .collect();
        fighters.sort_by_key(|f| f.side == Side::Right);

        let mut projectiles: Vec<_> = self
            .world
            .query::<&Projectile>()
            .iter()
            .map(|(e, p)| (e.id(), ProjectileState::from_projectile(p, &self.config)))
            .collect();
        projectiles.sort_by_key(|(id, _)| *id);

        SessionSnapshot {
            fighters,
            projectiles: projectiles.into_iter().map(|(_, p)| p).collect(),
            winner: self.winner.announcement(),
            state: self.state,
        }
    }

    fn decode(&self, key: char) -> Option<(Side, Action)> {
        for side in [Side::Left, Side::Right] {
            if let Some(action) = self.bindings(side).action_for(key) {
                return Some((side, action));
            }
        }
        None
    }
}

/// Per-fighter render state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FighterState {
    pub side: Side,
    pub color: PlayerColor,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub health: i32,
    pub dead: bool,
    pub shield_active: bool,
}

impl FighterState {
    fn from_fighter(fighter: &Fighter, now: f32, config: &Config) -> Self {
        Self {
            side: fighter.side,
            color: fighter.color,
            x: fighter.pos.x,
            y: fighter.pos.y,
            width: config.fighter_width,
            height: config.fighter_height,
            health: fighter.health,
            dead: fighter.dead,
            shield_active: fighter.shield_active(now),
        }
    }
}

/// Per-projectile render state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProjectileState {
    pub color: PlayerColor,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ProjectileState {
    fn from_projectile(projectile: &Projectile, config: &Config) -> Self {
        Self {
            color: projectile.color,
            x: projectile.pos.x,
            y: projectile.pos.y,
            width: config.projectile_width,
            height: config.projectile_height,
        }
    }
}

/// Everything the display layer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub fighters: Vec<FighterState>,
    pub projectiles: Vec<ProjectileState>,
    pub winner: Option<String>,
    pub state: LoopState,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_spawns_both_fighters() {
        let session = GameSession::new(42).unwrap();
        let snapshot = session.snapshot();

        assert_eq!(session.state(), LoopState::Running);
        assert_eq!(snapshot.fighters.len(), 2);
        assert_eq!(snapshot.fighters[0].side, Side::Left);
        assert_eq!(snapshot.fighters[0].color, PlayerColor::Blue);
        assert_eq!(snapshot.fighters[0].x, 100.0);
        assert_eq!(snapshot.fighters[1].side, Side::Right);
        assert_eq!(snapshot.fighters[1].color, PlayerColor::Red);
        assert_eq!(snapshot.fighters[1].x, 600.0);
        assert!(snapshot.projectiles.is_empty());
        assert!(snapshot.winner.is_none());
    }

    #[test]
    fn test_session_bindings_are_disjoint() {
        let session = GameSession::new(42).unwrap();
        let mut all = session.bindings(Side::Left).key_set();
        all.extend(session.bindings(Side::Right).keys());
        assert_eq!(all.len(), 10);
    }

    #[test]
    fn test_unknown_key_is_ignored() {
        let mut session = GameSession::new(42).unwrap();
        let bound: HashSet<char> = {
            let mut set = session.bindings(Side::Left).key_set();
            set.extend(session.bindings(Side::Right).keys());
            set
        };
        let unbound = ('A'..='Z').find(|c| !bound.contains(c)).unwrap();

        let before = session.snapshot();
        session.key_down(unbound);
        session.tick();
        session.key_up(unbound);

        let after = session.snapshot();
        assert_eq!(before.fighters[0].x, after.fighters[0].x);
        assert_eq!(before.fighters[1].x, after.fighters[1].x);
        assert!(after.projectiles.is_empty());
    }

    #[test]
    fn test_auto_repeat_shoot_spawns_once() {
        let mut session = GameSession::new(42).unwrap();
        let shoot = session.bindings(Side::Left).shoot;

        session.key_down(shoot);
        session.key_down(shoot); // auto-repeat before any key-up
        session.tick();

        assert_eq!(session.snapshot().projectiles.len(), 1);
    }
}
