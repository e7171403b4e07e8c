/// Game tuning parameters for the duel
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 400.0;
    pub const GROUND_Y: f32 = 300.0;

    // Fighter
    pub const FIGHTER_WIDTH: f32 = 40.0;
    pub const FIGHTER_HEIGHT: f32 = 40.0;
    pub const FIGHTER_SPEED: f32 = 5.0; // units per tick
    pub const START_HEALTH: i32 = 100;
    pub const LEFT_SPAWN_X: f32 = 100.0;
    pub const RIGHT_SPAWN_X: f32 = 600.0;

    // Physics
    pub const GRAVITY: f32 = 0.3; // units per tick^2
    pub const JUMP_VELOCITY: f32 = -12.0; // launch velocity, negative = up

    // Projectile
    pub const PROJECTILE_WIDTH: f32 = 10.0;
    pub const PROJECTILE_HEIGHT: f32 = 5.0;
    pub const PROJECTILE_SPEED: f32 = 8.0; // units per tick
    pub const MUZZLE_DROP: f32 = 15.0; // below fighter top

    // Combat
    pub const HIT_DAMAGE: i32 = 20;
    pub const SHIELD_DURATION_MS: f32 = 2000.0;

    // Keys
    pub const KEY_ALPHABET: &'static [u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
    pub const KEY_DRAW_CAP: u32 = 1000; // draws per action before giving up

    // Timing
    pub const TICK_MS: f32 = 1000.0 / 60.0;
}
