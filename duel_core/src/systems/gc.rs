use hecs::World;

use crate::components::Projectile;
use crate::config::Config;
use crate::resources::Events;

/// Despawn projectiles that have left the arena. Runs after hit resolution,
/// so a shot may still score on the tick it exits.
pub fn prune_offscreen(world: &mut World, config: &Config, events: &mut Events) {
    let mut to_remove = Vec::new();

    for (entity, projectile) in world.query::<&Projectile>().iter() {
        if projectile.off_screen(config.arena_width) {
            to_remove.push(entity);
        }
    }

    for entity in to_remove {
        let _ = world.despawn(entity);
        events.pruned += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::{PlayerColor, Side};
    use glam::Vec2;

    #[test]
    fn test_prune_removes_only_offscreen_shots() {
        let mut world = World::new();
        let config = Config::new();
        let mut events = Events::new();

        world.spawn((Projectile {
            pos: Vec2::new(400.0, 315.0),
            speed: 8.0,
            color: PlayerColor::Blue,
            owner: Side::Left,
        },));
        world.spawn((Projectile {
            pos: Vec2::new(config.arena_width + 4.0, 315.0),
            speed: 8.0,
            color: PlayerColor::Blue,
            owner: Side::Left,
        },));
        world.spawn((Projectile {
            pos: Vec2::new(-4.0, 315.0),
            speed: -8.0,
            color: PlayerColor::Red,
            owner: Side::Right,
        },));

        prune_offscreen(&mut world, &config, &mut events);

        assert_eq!(events.pruned, 2);
        let remaining: Vec<_> = world
            .query::<&Projectile>()
            .iter()
            .map(|(_, p)| p.pos.x)
            .collect();
        assert_eq!(remaining, vec![400.0]);
    }
}
