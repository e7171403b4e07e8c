use hecs::World;

use crate::components::*;
use crate::config::Config;
use crate::keys::Action;
use crate::resources::*;

/// Drain queued key presses into fighter actions. A shoot press spawns a
/// projectile at the shooter's muzzle; everything else calls the matching
/// fighter method, which no-ops for dead fighters.
pub fn ingest_inputs(
    world: &mut World,
    queue: &mut InputQueue,
    time: &Time,
    config: &Config,
    events: &mut Events,
) {
    // Work on copies, write back once (deterministic: sort by entity ID)
    let mut fighters: Vec<_> = world
        .query::<&Fighter>()
        .iter()
        .map(|(e, f)| (e, *f))
        .collect();
    fighters.sort_by_key(|(e, _)| e.id());

    let mut to_spawn = Vec::new();

    for (side, action) in queue.presses.drain(..) {
        for (_entity, fighter) in fighters.iter_mut() {
            if fighter.side != side {
                continue;
            }
            match action {
                Action::Left => fighter.move_left(config),
                Action::Right => fighter.move_right(config),
                Action::Jump => fighter.jump(config),
                Action::Shield => fighter.raise_shield(time.now, config),
                Action::Shoot => {
                    if !fighter.dead {
                        to_spawn.push(Projectile::fired_by(fighter, config));
                        events.shots.push(side);
                    }
                }
            }
        }
    }

    for (entity, fighter) in fighters {
        if let Ok(mut slot) = world.get::<&mut Fighter>(entity) {
            *slot = fighter;
        }
    }

    for projectile in to_spawn {
        world.spawn((projectile,));
    }
}
