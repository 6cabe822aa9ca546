use crate::simulation::colony::AntColony;
use crate::world::{InsectId, PlaceId};
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Place that builds bee waves and releases them into the colony on schedule
#[derive(Clone, Debug)]
pub struct Hive {
    place: PlaceId,
    bee_armor: u32,
    bee_damage: u32,
    waves: BTreeMap<u32, Vec<InsectId>>,
}

impl Hive {
    pub const NAME: &'static str = "Hive";

    /// Register the hive's place in the colony's world
    pub fn new(colony: &mut AntColony, bee_armor: u32, bee_damage: u32) -> Self {
        let place = colony.world_mut().add_place(Self::NAME, false, None);
        Self {
            place,
            bee_armor,
            bee_damage,
            waves: BTreeMap::new(),
        }
    }

    #[inline]
    pub fn place(&self) -> PlaceId {
        self.place
    }

    /// Bees still waiting in the hive
    pub fn bees<'a>(&self, colony: &'a AntColony) -> &'a [InsectId] {
        colony.world().bees_at(self.place)
    }

    pub fn waves(&self) -> &BTreeMap<u32, Vec<InsectId>> {
        &self.waves
    }

    /// Build `num_bees` bees to invade on `attack_turn`. A later call for the
    /// same turn replaces the earlier wave, and its waiting bees leave the hive.
    pub fn add_wave(&mut self, colony: &mut AntColony, attack_turn: u32, num_bees: usize) -> &mut Self {
        let world = colony.world_mut();
        let mut wave = Vec::with_capacity(num_bees);
        for _ in 0..num_bees {
            let bee = world.spawn_bee(self.bee_armor, self.bee_damage, self.place);
            world.add_bee(self.place, bee);
            wave.push(bee);
        }
        if let Some(replaced) = self.waves.insert(attack_turn, wave) {
            for bee in replaced {
                world.remove_bee(self.place, bee);
            }
        }
        self
    }

    /// Send this turn's wave to randomly chosen entrances. Returns the bees
    /// that left the hive, in schedule order.
    pub fn invade(&self, colony: &mut AntColony, current_turn: u32, rng: &mut fastrand::Rng) -> Vec<InsectId> {
        let Some(wave) = self.waves.get(&current_turn) else {
            return Vec::new();
        };
        let entrances = colony.entrances().to_vec();
        if entrances.is_empty() {
            warn!(turn = current_turn, "colony has no entrances; wave stays in the hive");
            return Vec::new();
        }

        let world = colony.world_mut();
        let mut invaded = Vec::with_capacity(wave.len());
        for &bee in wave {
            if world.insect(bee).place() != Some(self.place) {
                continue;
            }
            world.remove_bee(self.place, bee);
            let entrance = entrances[rng.usize(..entrances.len())];
            world.add_bee(entrance, bee);
            invaded.push(bee);
        }
        info!(turn = current_turn, bees = invaded.len(), "The bees are coming!");
        invaded
    }
}
