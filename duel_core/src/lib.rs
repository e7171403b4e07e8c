pub mod arena;
pub mod components;
pub mod config;
pub mod keys;
pub mod params;
pub mod resources;
pub mod session;
pub mod systems;

pub use arena::*;
pub use components::*;
pub use config::*;
pub use keys::*;
pub use params::*;
pub use resources::*;
pub use session::*;

use hecs::World;
use systems::*;

/// Run one tick of the duel simulation.
///
/// Order within a tick: queued inputs, projectile advance, hit resolution,
/// off-screen pruning, fighter integration. Projectile moves and hits always
/// precede fighter integration, and pruning follows hit-testing so a shot
/// can score on the tick it leaves the arena. Once a fighter dies the tick
/// ends immediately after pruning.
pub fn step(
    world: &mut World,
    time: &Time,
    config: &Config,
    queue: &mut InputQueue,
    events: &mut Events,
    winner: &mut Winner,
) {
    events.clear();

    ingest_inputs(world, queue, time, config, events);
    projectiles_step(world);
    resolve_hits(world, time, config, events, winner);
    prune_offscreen(world, config, events);

    if winner.is_set() {
        return;
    }

    integrate_fighters(world, config);
}

/// Helper to create a fighter entity at its spawn position
pub fn create_fighter(world: &mut World, side: Side, config: &Config) -> hecs::Entity {
    world.spawn((Fighter::new(side, config),))
}
