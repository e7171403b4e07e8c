use crate::params::Params;
use crate::resources::GameRng;
use rand::Rng;
use std::collections::HashSet;
use std::fmt;
use thiserror::Error;

/// The five player actions a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Jump,
    Shoot,
    Shield,
}

impl Action {
    pub const ALL: [Action; 5] = [
        Action::Left,
        Action::Right,
        Action::Jump,
        Action::Shoot,
        Action::Shield,
    ];
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum KeyAssignError {
    #[error("key alphabet exhausted after {0} draws")]
    AlphabetExhausted(u32),
}

/// One player's immutable action-to-key map
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyBindings {
    pub left: char,
    pub right: char,
    pub jump: char,
    pub shoot: char,
    pub shield: char,
}

impl KeyBindings {
    /// Draw five distinct keys, none colliding with `existing`. The second
    /// player's call passes the first player's five keys so all ten are
    /// pairwise distinct.
    pub fn assign(rng: &mut GameRng, existing: &HashSet<char>) -> Result<Self, KeyAssignError> {
        let mut used = existing.clone();
        let mut draw = |used: &mut HashSet<char>| -> Result<char, KeyAssignError> {
            for _ in 0..Params::KEY_DRAW_CAP {
                let idx = rng.0.gen_range(0..Params::KEY_ALPHABET.len());
                let key = Params::KEY_ALPHABET[idx] as char;
                if used.insert(key) {
                    return Ok(key);
                }
            }
            Err(KeyAssignError::AlphabetExhausted(Params::KEY_DRAW_CAP))
        };

        Ok(Self {
            left: draw(&mut used)?,
            right: draw(&mut used)?,
            jump: draw(&mut used)?,
            shoot: draw(&mut used)?,
            shield: draw(&mut used)?,
        })
    }

    /// Look up which action a key is bound to
    pub fn action_for(&self, key: char) -> Option<Action> {
        match key {
            k if k == self.left => Some(Action::Left),
            k if k == self.right => Some(Action::Right),
            k if k == self.jump => Some(Action::Jump),
            k if k == self.shoot => Some(Action::Shoot),
            k if k == self.shield => Some(Action::Shield),
            _ => None,
        }
    }

    pub fn keys(&self) -> [char; 5] {
        [self.left, self.right, self.jump, self.shoot, self.shield]
    }

    pub fn key_set(&self) -> HashSet<char> {
        self.keys().into_iter().collect()
    }
}

impl fmt::Display for KeyBindings {
    /// Line shown next to each player's side of the arena
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Left: {}, Right: {}, Jump: {}, Shoot: {}, Shield: {}",
            self.left, self.right, self.jump, self.shoot, self.shield
        )
    }
}
