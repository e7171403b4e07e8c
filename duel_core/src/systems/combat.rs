use hecs::World;

use crate::components::*;
use crate::config::Config;
use crate::resources::*;

/// Advance every projectile by its signed per-tick speed
pub fn projectiles_step(world: &mut World) {
    for (_entity, projectile) in world.query_mut::<&mut Projectile>() {
        projectile.advance();
    }
}

/// Hit-test every projectile against both fighters and apply damage.
///
/// Iterates over snapshots of both collections so despawning never skips an
/// entry; a projectile is consumed by its first scored hit. A lethal hit
/// declares the opponent winner.
pub fn resolve_hits(
    world: &mut World,
    time: &Time,
    config: &Config,
    events: &mut Events,
    winner: &mut Winner,
) {
    // Snapshots (deterministic: sort by entity ID)
    let mut projectiles: Vec<_> = world
        .query::<&Projectile>()
        .iter()
        .map(|(e, p)| (e, *p))
        .collect();
    projectiles.sort_by_key(|(e, _)| e.id());

    let mut fighters: Vec<_> = world
        .query::<&Fighter>()
        .iter()
        .map(|(e, f)| (e, *f))
        .collect();
    fighters.sort_by_key(|(e, _)| e.id());

    let mut consumed = Vec::new();

    for (projectile_entity, projectile) in &projectiles {
        for (_fighter_entity, fighter) in fighters.iter_mut() {
            // Own shots pass through the shooter
            if fighter.side == projectile.owner {
                continue;
            }
            // Dead or shielded targets register no hit
            if fighter.dead || fighter.shield_active(time.now) {
                continue;
            }
            if !projectile.aabb(config).overlaps(&fighter.aabb(config)) {
                continue;
            }

            let lethal = fighter.take_damage(time.now, config);
            events.hits.push(HitEvent {
                target: fighter.side,
                health_after: fighter.health,
            });
            if lethal {
                events.death = Some(fighter.side);
                winner.declare_from_death(fighter.side);
            }

            consumed.push(*projectile_entity);
            break;
        }
    }

    for (entity, fighter) in fighters {
        if let Ok(mut slot) = world.get::<&mut Fighter>(entity) {
            *slot = fighter;
        }
    }

    for entity in consumed {
        let _ = world.despawn(entity);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_fighter;
    use glam::Vec2;

    fn setup() -> (World, Config, Time, Events, Winner) {
        let mut world = World::new();
        let config = Config::new();
        create_fighter(&mut world, Side::Left, &config);
        create_fighter(&mut world, Side::Right, &config);
        (world, config, Time::new(), Events::new(), Winner::new())
    }

    fn fighter(world: &World, side: Side) -> Fighter {
        world
            .query::<&Fighter>()
            .iter()
            .map(|(_, f)| *f)
            .find(|f| f.side == side)
            .unwrap()
    }

    fn spawn_shot_at(world: &mut World, pos: Vec2, owner: Side, config: &Config) {
        world.spawn((Projectile {
            pos,
            speed: config.projectile_speed * owner.fire_dir(),
            color: PlayerColor::for_side(owner),
            owner,
        },));
    }

    #[test]
    fn test_hit_applies_damage_and_consumes_projectile() {
        let (mut world, config, time, mut events, mut winner) = setup();
        // Overlapping the right fighter at its spawn
        spawn_shot_at(&mut world, Vec2::new(605.0, 315.0), Side::Left, &config);

        resolve_hits(&mut world, &time, &config, &mut events, &mut winner);

        assert_eq!(fighter(&world, Side::Right).health, 80);
        assert_eq!(events.hits.len(), 1);
        assert_eq!(events.hits[0].target, Side::Right);
        assert_eq!(events.hits[0].health_after, 80);
        assert!(!winner.is_set());
        assert_eq!(
            world.query::<&Projectile>().iter().count(),
            0,
            "projectile consumed on first hit"
        );
    }

    #[test]
    fn test_no_hit_on_shielded_target() {
        let (mut world, config, mut time, mut events, mut winner) = setup();
        time.now = 100.0;
        for (_e, f) in world.query_mut::<&mut Fighter>() {
            if f.side == Side::Right {
                f.raise_shield(time.now, &config);
            }
        }
        spawn_shot_at(&mut world, Vec2::new(605.0, 315.0), Side::Left, &config);

        resolve_hits(&mut world, &time, &config, &mut events, &mut winner);

        assert_eq!(fighter(&world, Side::Right).health, 100);
        assert!(events.hits.is_empty());
        assert_eq!(
            world.query::<&Projectile>().iter().count(),
            1,
            "shot keeps travelling past a shield"
        );
    }

    #[test]
    fn test_no_hit_on_dead_target() {
        let (mut world, config, time, mut events, mut winner) = setup();
        for (_e, f) in world.query_mut::<&mut Fighter>() {
            if f.side == Side::Right {
                f.dead = true;
                f.health = 0;
            }
        }
        spawn_shot_at(&mut world, Vec2::new(605.0, 315.0), Side::Left, &config);

        resolve_hits(&mut world, &time, &config, &mut events, &mut winner);

        assert!(events.hits.is_empty());
        assert!(!winner.is_set());
    }

    #[test]
    fn test_own_shot_passes_through_shooter() {
        let (mut world, config, time, mut events, mut winner) = setup();
        // Overlapping the right fighter but fired by them
        spawn_shot_at(&mut world, Vec2::new(605.0, 315.0), Side::Right, &config);

        resolve_hits(&mut world, &time, &config, &mut events, &mut winner);

        assert_eq!(fighter(&world, Side::Right).health, 100);
        assert!(events.hits.is_empty());
    }

    #[test]
    fn test_lethal_hit_declares_opponent_winner() {
        let (mut world, config, time, mut events, mut winner) = setup();
        for (_e, f) in world.query_mut::<&mut Fighter>() {
            if f.side == Side::Right {
                f.health = 20;
            }
        }
        spawn_shot_at(&mut world, Vec2::new(605.0, 315.0), Side::Left, &config);

        resolve_hits(&mut world, &time, &config, &mut events, &mut winner);

        let right = fighter(&world, Side::Right);
        assert!(right.dead);
        assert_eq!(right.health, 0);
        assert_eq!(events.death, Some(Side::Right));
        assert_eq!(winner.0, Some(Side::Left));
        assert_eq!(winner.announcement().as_deref(), Some("BLUE Player WINS!"));
    }

    #[test]
    fn test_two_hits_same_tick_both_count() {
        let (mut world, config, time, mut events, mut winner) = setup();
        spawn_shot_at(&mut world, Vec2::new(605.0, 315.0), Side::Left, &config);
        spawn_shot_at(&mut world, Vec2::new(610.0, 320.0), Side::Left, &config);

        resolve_hits(&mut world, &time, &config, &mut events, &mut winner);

        assert_eq!(fighter(&world, Side::Right).health, 60);
        assert_eq!(events.hits.len(), 2);
    }
}
