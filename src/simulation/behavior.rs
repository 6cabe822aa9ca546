//! Per-turn actions of the built-in insect variants.
//!
//! Orchestration calls `ant_act` and `bee_act`; both skip insects that lost
//! their place earlier in the same pass.

use crate::boost::Boost;
use crate::simulation::colony::AntColony;
use crate::world::{AntKind, BeeStatus, InsectId, PlaceId, World};
use tracing::info;

/// Hops a thrower can reach
pub const THROW_RANGE: u32 = 3;
/// Hops a thrower can reach with a FlyingLeaf
pub const FLYING_LEAF_RANGE: u32 = 5;
/// Damage dealt by BugSpray to every insect it touches
pub const BUG_SPRAY_DAMAGE: u32 = 10;
/// Turns an eater spends digesting after the swallow
pub const DIGESTION_TURNS: u32 = 3;

pub fn ant_act(colony: &mut AntColony, ant: InsectId, rng: &mut fastrand::Rng) {
    let insect = colony.world().insect(ant);
    let (Some(place), Some(kind)) = (insect.place(), insect.ant_kind()) else {
        return;
    };
    match kind {
        AntKind::Grower => grow(colony, rng),
        AntKind::Thrower | AntKind::Scuba => throw_leaf(colony.world_mut(), ant, place),
        AntKind::Eater => eat(colony.world_mut(), ant, place),
        AntKind::Guard => {}
    }
}

/// Sting the ant in the way, or advance toward the queen
pub fn bee_act(world: &mut World, bee: InsectId) {
    let insect = world.insect(bee);
    let Some(place) = insect.place() else {
        return;
    };
    let status = insect.status();
    let alive = insect.armor > 0;

    if let Some(ant) = world.ant_at(place) {
        if status != Some(BeeStatus::Cold) {
            info!("{} stings {}!", world.insect(bee), world.insect(ant));
            let damage = world.insect(bee).damage;
            reduce_armor(world, ant, damage);
        }
    } else if alive && status != Some(BeeStatus::Stuck) {
        world.exit_bee(place, bee);
    }
    world.insect_mut(bee).set_status(None);
}

/// Wear down an insect's armor; at zero it is removed from its place.
/// Returns true if the insect expired.
pub fn reduce_armor(world: &mut World, target: InsectId, amount: u32) -> bool {
    let insect = world.insect_mut(target);
    insect.armor = insect.armor.saturating_sub(amount);
    let alive = insect.armor > 0;
    if insect.ant_kind() == Some(AntKind::Eater) {
        eater_hit(world, target, alive);
    }
    if alive {
        return false;
    }

    info!("{} ran out of armor and expired", world.insect(target));
    if let Some(place) = world.insect(target).place() {
        world.remove_insect(place, target);
    }
    true
}

fn grow(colony: &mut AntColony, rng: &mut fastrand::Rng) {
    let roll = rng.f64();
    if roll < 0.6 {
        colony.increase_food(1);
    } else if roll < 0.7 {
        colony.add_boost(Boost::FlyingLeaf.as_str());
    } else if roll < 0.8 {
        colony.add_boost(Boost::StickyLeaf.as_str());
    } else if roll < 0.9 {
        colony.add_boost(Boost::IcyLeaf.as_str());
    } else if roll < 0.95 {
        colony.add_boost(Boost::BugSpray.as_str());
    }
}

fn throw_leaf(world: &mut World, ant: InsectId, place: PlaceId) {
    let boost = world.insect(ant).boost().cloned();
    if boost == Some(Boost::BugSpray) {
        info!("{} sprays bug repellant everywhere!", world.insect(ant));
        for bee in world.bees_at(place).to_vec() {
            reduce_armor(world, bee, BUG_SPRAY_DAMAGE);
        }
        reduce_armor(world, ant, BUG_SPRAY_DAMAGE);
        return;
    }

    let range = if boost == Some(Boost::FlyingLeaf) { FLYING_LEAF_RANGE } else { THROW_RANGE };
    let Some(target) = world.closest_bee(place, range, 0) else {
        return;
    };
    info!("{} throws a leaf at {}", world.insect(ant), world.insect(target));

    let thrower = world.insect_mut(ant);
    let damage = thrower.damage;
    if let Some(state) = thrower.ant_state_mut() {
        state.boost = None;
    }
    reduce_armor(world, target, damage);

    let status = match boost {
        Some(Boost::StickyLeaf) => Some(BeeStatus::Stuck),
        Some(Boost::IcyLeaf) => Some(BeeStatus::Cold),
        _ => None,
    };
    if let Some(status) = status {
        info!("{} is {:?}!", world.insect(target), status);
        world.insect_mut(target).set_status(Some(status));
    }
}

fn eat(world: &mut World, ant: InsectId, place: PlaceId) {
    let turns_eating = world.insect(ant).ant_state().map_or(0, |s| s.turns_eating);

    if turns_eating == 0 {
        let Some(target) = world.closest_bee(place, 0, 0) else {
            return;
        };
        info!("{} eats {}!", world.insect(ant), world.insect(target));
        world.remove_bee(place, target);
        if let Some(state) = world.insect_mut(ant).ant_state_mut() {
            state.meal = Some(target);
            state.turns_eating = 1;
        }
        return;
    }

    if let Some(state) = world.insect_mut(ant).ant_state_mut() {
        if state.turns_eating > DIGESTION_TURNS {
            state.meal = None;
            state.turns_eating = 0;
        } else {
            state.turns_eating += 1;
        }
    }
}

/// A freshly fed eater coughs its meal back up when hit; a dying one does
/// so while the meal is still early in digestion.
fn eater_hit(world: &mut World, eater: InsectId, alive: bool) {
    let Some(turns_eating) = world.insect(eater).ant_state().map(|s| s.turns_eating) else {
        return;
    };
    let coughs = if alive { turns_eating == 1 } else { (1..=2).contains(&turns_eating) };
    if !coughs {
        return;
    }

    let Some(place) = world.insect(eater).place() else {
        return;
    };
    let Some(state) = world.insect_mut(eater).ant_state_mut() else {
        return;
    };
    let meal = state.meal.take();
    if alive {
        state.turns_eating = DIGESTION_TURNS;
    }
    if let Some(bee) = meal {
        info!("{} coughs up {}!", world.insect(eater), world.insect(bee));
        world.add_bee(place, bee);
    }
}
