use crate::components::Side;
use crate::params::Params;
use glam::Vec2;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub ground_y: f32,
    pub fighter_width: f32,
    pub fighter_height: f32,
    pub fighter_speed: f32,
    pub start_health: i32,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub projectile_width: f32,
    pub projectile_height: f32,
    pub projectile_speed: f32,
    pub hit_damage: i32,
    pub shield_duration_ms: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            ground_y: Params::GROUND_Y,
            fighter_width: Params::FIGHTER_WIDTH,
            fighter_height: Params::FIGHTER_HEIGHT,
            fighter_speed: Params::FIGHTER_SPEED,
            start_health: Params::START_HEALTH,
            gravity: Params::GRAVITY,
            jump_velocity: Params::JUMP_VELOCITY,
            projectile_width: Params::PROJECTILE_WIDTH,
            projectile_height: Params::PROJECTILE_HEIGHT,
            projectile_speed: Params::PROJECTILE_SPEED,
            hit_damage: Params::HIT_DAMAGE,
            shield_duration_ms: Params::SHIELD_DURATION_MS,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawn position for a fighter on the given side
    pub fn spawn_pos(&self, side: Side) -> Vec2 {
        let x = match side {
            Side::Left => Params::LEFT_SPAWN_X,
            Side::Right => Params::RIGHT_SPAWN_X,
        };
        Vec2::new(x, self.ground_y)
    }

    /// Largest X a fighter's left edge may occupy
    pub fn max_fighter_x(&self) -> f32 {
        self.arena_width - self.fighter_width
    }

    /// Clamp a fighter's X to the arena bounds
    pub fn clamp_fighter_x(&self, x: f32) -> f32 {
        x.clamp(0.0, self.max_fighter_x())
    }
}
