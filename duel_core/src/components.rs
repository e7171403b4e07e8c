use crate::arena::Aabb;
use crate::config::Config;
use glam::Vec2;
use serde::Serialize;
use std::fmt;

/// Which half of the arena a player starts on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn opponent(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal fire direction: left player shoots right, right player shoots left
    pub fn fire_dir(self) -> f32 {
        match self {
            Side::Left => 1.0,
            Side::Right => -1.0,
        }
    }
}

/// Player color, fixed per side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerColor {
    Blue,
    Red,
}

impl PlayerColor {
    pub fn for_side(side: Side) -> Self {
        match side {
            Side::Left => PlayerColor::Blue,
            Side::Right => PlayerColor::Red,
        }
    }
}

impl fmt::Display for PlayerColor {
    /// Uppercase form used in the winner announcement
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerColor::Blue => write!(f, "BLUE"),
            PlayerColor::Red => write!(f, "RED"),
        }
    }
}

/// Fighter component - one per player
#[derive(Debug, Clone, Copy)]
pub struct Fighter {
    pub side: Side,
    pub color: PlayerColor,
    pub pos: Vec2, // top-left corner
    pub vel_y: f32,
    pub health: i32,
    pub jumping: bool,
    pub dead: bool,
    pub shield_until: f32, // absolute ms; shield is up while now < shield_until
}

impl Fighter {
    pub fn new(side: Side, config: &Config) -> Self {
        Self {
            side,
            color: PlayerColor::for_side(side),
            pos: config.spawn_pos(side),
            vel_y: 0.0,
            health: config.start_health,
            jumping: false,
            dead: false,
            shield_until: 0.0,
        }
    }

    pub fn move_left(&mut self, config: &Config) {
        if !self.dead {
            self.pos.x = config.clamp_fighter_x(self.pos.x - config.fighter_speed);
        }
    }

    pub fn move_right(&mut self, config: &Config) {
        if !self.dead {
            self.pos.x = config.clamp_fighter_x(self.pos.x + config.fighter_speed);
        }
    }

    /// Launch a jump; no double-jump
    pub fn jump(&mut self, config: &Config) {
        if !self.jumping && !self.dead {
            self.vel_y = config.jump_velocity;
            self.jumping = true;
        }
    }

    /// Raise the shield for the configured window starting at `now`
    pub fn raise_shield(&mut self, now: f32, config: &Config) {
        if !self.dead {
            self.shield_until = now + config.shield_duration_ms;
        }
    }

    pub fn shield_active(&self, now: f32) -> bool {
        !self.dead && now < self.shield_until
    }

    /// One tick of ballistic motion: fall under gravity, land on the ground line
    pub fn integrate(&mut self, config: &Config) {
        if self.dead {
            return;
        }
        self.pos.y += self.vel_y;
        self.vel_y += config.gravity;
        if self.pos.y >= config.ground_y {
            self.pos.y = config.ground_y;
            self.jumping = false;
        }
    }

    /// Apply one hit. Returns true if this hit was lethal.
    pub fn take_damage(&mut self, now: f32, config: &Config) -> bool {
        if self.dead || self.shield_active(now) {
            return false;
        }
        self.health = (self.health - config.hit_damage).max(0);
        if self.health == 0 {
            self.dead = true;
            return true;
        }
        false
    }

    pub fn aabb(&self, config: &Config) -> Aabb {
        Aabb::from_top_left(
            self.pos,
            Vec2::new(config.fighter_width, config.fighter_height),
        )
    }

    /// Where a projectile leaves this fighter: the leading edge in the fire
    /// direction, dropped to barrel height
    pub fn muzzle(&self, config: &Config) -> Vec2 {
        let x = match self.side {
            Side::Left => self.pos.x + config.fighter_width,
            Side::Right => self.pos.x - config.projectile_width,
        };
        Vec2::new(x, self.pos.y + crate::params::Params::MUZZLE_DROP)
    }
}

/// Projectile component
#[derive(Debug, Clone, Copy)]
pub struct Projectile {
    pub pos: Vec2, // top-left corner
    pub speed: f32, // signed: magnitude times fire direction
    pub color: PlayerColor,
    pub owner: Side,
}

impl Projectile {
    /// Spawn from a fighter's muzzle, headed at the opponent
    pub fn fired_by(fighter: &Fighter, config: &Config) -> Self {
        Self {
            pos: fighter.muzzle(config),
            speed: config.projectile_speed * fighter.side.fire_dir(),
            color: fighter.color,
            owner: fighter.side,
        }
    }

    pub fn advance(&mut self) {
        self.pos.x += self.speed;
    }

    pub fn off_screen(&self, arena_width: f32) -> bool {
        self.pos.x < 0.0 || self.pos.x > arena_width
    }

    pub fn aabb(&self, config: &Config) -> Aabb {
        Aabb::from_top_left(
            self.pos,
            Vec2::new(config.projectile_width, config.projectile_height),
        )
    }
}
