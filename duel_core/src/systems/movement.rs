use crate::components::Fighter;
use crate::config::Config;
use hecs::World;

/// One tick of ballistic motion for every living fighter
pub fn integrate_fighters(world: &mut World, config: &Config) {
    for (_entity, fighter) in world.query_mut::<&mut Fighter>() {
        fighter.integrate(config);
    }
}
