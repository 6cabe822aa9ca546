use crate::world::insect::{AntKind, Insect, InsectId};
use crate::world::place::{Place, PlaceId};

/// Arena of places and insects. Every occupancy change goes through here,
/// which keeps each insect's place back-reference equal to the place holding it.
#[derive(Clone, Debug, Default)]
pub struct World {
    places: Vec<Place>,
    insects: Vec<Insect>,
}

impl World {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a place; its entrance is linked later with `link_entrance`
    pub fn add_place(&mut self, name: impl Into<String>, water: bool, exit: Option<PlaceId>) -> PlaceId {
        let id = PlaceId(self.places.len() as u32);
        self.places.push(Place::new(name, water, exit));
        id
    }

    /// Set `entrance` as the hive-ward neighbor of `place`
    pub fn link_entrance(&mut self, place: PlaceId, entrance: PlaceId) {
        self.place_mut(place).set_entrance(entrance);
    }

    /// Get a place by id.
    ///
    /// Ids are only minted by this world; a foreign id panics.
    #[inline]
    pub fn place(&self, id: PlaceId) -> &Place {
        &self.places[id.0 as usize]
    }

    #[inline]
    fn place_mut(&mut self, id: PlaceId) -> &mut Place {
        &mut self.places[id.0 as usize]
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// Get an insect by id
    #[inline]
    pub fn insect(&self, id: InsectId) -> &Insect {
        &self.insects[id.0 as usize]
    }

    #[inline]
    pub fn insect_mut(&mut self, id: InsectId) -> &mut Insect {
        &mut self.insects[id.0 as usize]
    }

    /// Create an unplaced ant
    pub fn spawn_ant(&mut self, kind: AntKind) -> InsectId {
        let id = InsectId(self.insects.len() as u32);
        self.insects.push(Insect::ant(id, kind));
        id
    }

    /// Create an unplaced bee
    pub fn spawn_bee(&mut self, armor: u32, damage: u32, origin: PlaceId) -> InsectId {
        let id = InsectId(self.insects.len() as u32);
        self.insects.push(Insect::bee(id, armor, damage, origin));
        id
    }

    /// Drop the most recently spawned insect if it never got a place
    pub(crate) fn discard_unplaced(&mut self, id: InsectId) {
        let is_last = id.0 as usize + 1 == self.insects.len();
        if is_last && self.insect(id).place().is_none() {
            self.insects.pop();
        }
    }

    /// Put an ant into the guard slot (guards) or the normal slot (everyone else).
    /// Returns false and changes nothing if that slot is taken.
    pub fn add_ant(&mut self, place: PlaceId, ant: InsectId) -> bool {
        let guard = self.insect(ant).is_guard();
        let p = self.place_mut(place);
        let slot = if guard { &mut p.guard } else { &mut p.ant };
        if slot.is_some() {
            return false;
        }
        *slot = Some(ant);
        self.insect_mut(ant).place = Some(place);
        true
    }

    /// Remove the guard if there is one, otherwise the normal ant
    pub fn remove_ant(&mut self, place: PlaceId) -> Option<InsectId> {
        let p = self.place_mut(place);
        let removed = p.guard.take().or_else(|| p.ant.take());
        if let Some(id) = removed {
            self.insect_mut(id).place = None;
        }
        removed
    }

    #[inline]
    pub fn ant_at(&self, place: PlaceId) -> Option<InsectId> {
        self.place(place).ant()
    }

    #[inline]
    pub fn guarded_ant_at(&self, place: PlaceId) -> Option<InsectId> {
        self.place(place).guarded_ant()
    }

    #[inline]
    pub fn bees_at(&self, place: PlaceId) -> &[InsectId] {
        self.place(place).bees()
    }

    pub fn add_bee(&mut self, place: PlaceId, bee: InsectId) {
        self.place_mut(place).bees.push(bee);
        self.insect_mut(bee).place = Some(place);
    }

    /// Remove a bee by identity; no-op if it is not here
    pub fn remove_bee(&mut self, place: PlaceId, bee: InsectId) {
        let bees = &mut self.place_mut(place).bees;
        if let Some(index) = bees.iter().position(|&b| b == bee) {
            bees.remove(index);
            self.insect_mut(bee).place = None;
        }
    }

    pub fn remove_all_bees(&mut self, place: PlaceId) {
        let bees = std::mem::take(&mut self.place_mut(place).bees);
        for bee in bees {
            self.insect_mut(bee).place = None;
        }
    }

    /// Move a bee one step toward the queen
    pub fn exit_bee(&mut self, place: PlaceId, bee: InsectId) {
        let Some(exit) = self.place(place).exit() else {
            return;
        };
        self.remove_bee(place, bee);
        self.add_bee(exit, bee);
    }

    /// First bee found walking the entrance chain, counting hops from `place`.
    /// Only places at a hop distance in `min_distance..=max_distance` qualify.
    pub fn closest_bee(&self, place: PlaceId, max_distance: u32, min_distance: u32) -> Option<InsectId> {
        let mut current = Some(place);
        let mut distance = 0;
        while let Some(id) = current {
            if distance > max_distance {
                break;
            }
            let p = self.place(id);
            if distance >= min_distance {
                if let Some(&bee) = p.bees.first() {
                    return Some(bee);
                }
            }
            current = p.entrance();
            distance += 1;
        }
        None
    }

    /// Water hazard: evicts any guard and every non-aquatic ant
    pub fn flood(&mut self, place: PlaceId) {
        if !self.place(place).is_water() {
            return;
        }
        if self.place(place).guard.is_some() {
            self.remove_ant(place);
        }
        if let Some(ant) = self.place(place).ant {
            if !self.insect(ant).is_aquatic() {
                self.remove_ant(place);
            }
        }
    }

    /// Remove whichever kind of insect this is from `place`
    pub fn remove_insect(&mut self, place: PlaceId, insect: InsectId) {
        if self.insect(insect).is_bee() {
            self.remove_bee(place, insect);
            return;
        }
        let p = self.place(place);
        if p.guard == Some(insect) || (p.guard.is_none() && p.ant == Some(insect)) {
            self.remove_ant(place);
        } else if p.ant == Some(insect) {
            // shadowed by a guard: clear only the normal slot
            self.place_mut(place).ant = None;
            self.insect_mut(insect).place = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Queen-ward chain `cells[0] <- cells[1] <- ...`, linked both ways
    fn chain(world: &mut World, len: usize, water: &[usize]) -> Vec<PlaceId> {
        let mut cells = Vec::new();
        let mut prev = world.add_place("Ant Queen", false, None);
        for step in 0..len {
            let cell = world.add_place(format!("cell[{step}]"), water.contains(&step), Some(prev));
            world.link_entrance(prev, cell);
            cells.push(cell);
            prev = cell;
        }
        cells
    }

    #[test]
    fn test_guard_slot_is_exclusive_but_independent() {
        let mut world = World::new();
        let cells = chain(&mut world, 1, &[]);
        let guard = world.spawn_ant(AntKind::Guard);
        let guard2 = world.spawn_ant(AntKind::Guard);
        let thrower = world.spawn_ant(AntKind::Thrower);

        assert!(world.add_ant(cells[0], guard));
        assert!(!world.add_ant(cells[0], guard2));
        assert!(world.add_ant(cells[0], thrower));

        assert_eq!(world.ant_at(cells[0]), Some(guard));
        assert_eq!(world.guarded_ant_at(cells[0]), Some(thrower));
        assert_eq!(world.insect(guard2).place(), None);
        assert_eq!(world.insect(thrower).place(), Some(cells[0]));
    }

    #[test]
    fn test_normal_slot_rejects_second_ant() {
        let mut world = World::new();
        let cells = chain(&mut world, 1, &[]);
        let first = world.spawn_ant(AntKind::Grower);
        let second = world.spawn_ant(AntKind::Eater);

        assert!(world.add_ant(cells[0], first));
        assert!(!world.add_ant(cells[0], second));
        assert_eq!(world.ant_at(cells[0]), Some(first));
    }

    #[test]
    fn test_remove_ant_prefers_guard() {
        let mut world = World::new();
        let cells = chain(&mut world, 1, &[]);
        let guard = world.spawn_ant(AntKind::Guard);
        let thrower = world.spawn_ant(AntKind::Thrower);
        world.add_ant(cells[0], thrower);
        world.add_ant(cells[0], guard);

        assert_eq!(world.remove_ant(cells[0]), Some(guard));
        assert_eq!(world.ant_at(cells[0]), Some(thrower));
        assert_eq!(world.insect(guard).place(), None);

        assert_eq!(world.remove_ant(cells[0]), Some(thrower));
        assert_eq!(world.remove_ant(cells[0]), None);
    }

    #[test]
    fn test_bees_keep_arrival_order() {
        let mut world = World::new();
        let cells = chain(&mut world, 2, &[]);
        let a = world.spawn_bee(3, 1, cells[1]);
        let b = world.spawn_bee(3, 1, cells[1]);
        world.add_bee(cells[0], a);
        world.add_bee(cells[0], b);
        assert_eq!(world.bees_at(cells[0]), &[a, b]);

        world.remove_bee(cells[0], a);
        assert_eq!(world.bees_at(cells[0]), &[b]);
        assert_eq!(world.insect(a).place(), None);

        // absent bee: no-op
        world.remove_bee(cells[1], b);
        assert_eq!(world.insect(b).place(), Some(cells[0]));

        world.remove_all_bees(cells[0]);
        assert!(world.bees_at(cells[0]).is_empty());
        assert_eq!(world.insect(b).place(), None);
    }

    #[test]
    fn test_exit_bee_moves_toward_queen() {
        let mut world = World::new();
        let cells = chain(&mut world, 2, &[]);
        let queen = world.place(cells[0]).exit().unwrap();
        let bee = world.spawn_bee(3, 1, cells[1]);
        world.add_bee(cells[1], bee);

        world.exit_bee(cells[1], bee);
        assert_eq!(world.insect(bee).place(), Some(cells[0]));
        world.exit_bee(cells[0], bee);
        assert_eq!(world.insect(bee).place(), Some(queen));

        // the queen has no exit
        world.exit_bee(queen, bee);
        assert_eq!(world.insect(bee).place(), Some(queen));
    }

    #[test]
    fn test_closest_bee_respects_range() {
        let mut world = World::new();
        let cells = chain(&mut world, 6, &[]);
        let near = world.spawn_bee(3, 1, cells[5]);
        let far = world.spawn_bee(3, 1, cells[5]);
        world.add_bee(cells[1], near);
        world.add_bee(cells[4], far);

        assert_eq!(world.closest_bee(cells[0], 3, 0), Some(near));
        assert_eq!(world.closest_bee(cells[0], 0, 0), None);
        assert_eq!(world.closest_bee(cells[0], 5, 2), Some(far));
        assert_eq!(world.closest_bee(cells[0], 3, 2), None);
        // walk leaves the network before max distance
        assert_eq!(world.closest_bee(cells[5], 10, 0), None);
    }

    #[test]
    fn test_closest_bee_ties_go_to_earliest_arrival() {
        let mut world = World::new();
        let cells = chain(&mut world, 3, &[]);
        let first = world.spawn_bee(3, 1, cells[2]);
        let second = world.spawn_bee(3, 1, cells[2]);
        world.add_bee(cells[2], first);
        world.add_bee(cells[2], second);

        assert_eq!(world.closest_bee(cells[0], 2, 0), Some(first));
    }

    #[test]
    fn test_flood_evicts_non_aquatic_and_guards() {
        let mut world = World::new();
        let cells = chain(&mut world, 2, &[0]);
        let thrower = world.spawn_ant(AntKind::Thrower);
        world.add_ant(cells[0], thrower);
        world.flood(cells[0]);
        assert_eq!(world.ant_at(cells[0]), None);
        assert_eq!(world.insect(thrower).place(), None);

        let scuba = world.spawn_ant(AntKind::Scuba);
        let guard = world.spawn_ant(AntKind::Guard);
        world.add_ant(cells[0], scuba);
        world.add_ant(cells[0], guard);
        world.flood(cells[0]);
        assert_eq!(world.ant_at(cells[0]), Some(scuba));
        world.flood(cells[0]);
        assert_eq!(world.ant_at(cells[0]), Some(scuba));

        // dry land is untouched
        let grower = world.spawn_ant(AntKind::Grower);
        world.add_ant(cells[1], grower);
        world.flood(cells[1]);
        assert_eq!(world.ant_at(cells[1]), Some(grower));
    }

    #[test]
    fn test_flood_evicts_guard_and_normal_ant_together() {
        let mut world = World::new();
        let cells = chain(&mut world, 1, &[0]);
        let guard = world.spawn_ant(AntKind::Guard);
        let eater = world.spawn_ant(AntKind::Eater);
        world.add_ant(cells[0], eater);
        world.add_ant(cells[0], guard);

        world.flood(cells[0]);
        assert_eq!(world.ant_at(cells[0]), None);
        assert_eq!(world.guarded_ant_at(cells[0]), None);
    }

    #[test]
    fn test_remove_insect_dispatches_by_role() {
        let mut world = World::new();
        let cells = chain(&mut world, 1, &[]);
        let guard = world.spawn_ant(AntKind::Guard);
        let thrower = world.spawn_ant(AntKind::Thrower);
        let bee = world.spawn_bee(3, 1, cells[0]);
        world.add_ant(cells[0], thrower);
        world.add_ant(cells[0], guard);
        world.add_bee(cells[0], bee);

        world.remove_insect(cells[0], bee);
        assert!(world.bees_at(cells[0]).is_empty());

        // shadowed ant leaves, guard stays
        world.remove_insect(cells[0], thrower);
        assert_eq!(world.ant_at(cells[0]), Some(guard));
        assert_eq!(world.guarded_ant_at(cells[0]), None);
        assert_eq!(world.insect(thrower).place(), None);

        world.remove_insect(cells[0], guard);
        assert_eq!(world.ant_at(cells[0]), None);
    }

    #[test]
    fn test_discard_unplaced() {
        let mut world = World::new();
        let cells = chain(&mut world, 1, &[]);
        let placed = world.spawn_ant(AntKind::Grower);
        world.add_ant(cells[0], placed);
        world.discard_unplaced(placed);
        assert_eq!(world.insect(placed).place(), Some(cells[0]));

        let loose = world.spawn_ant(AntKind::Grower);
        world.discard_unplaced(loose);
        let next = world.spawn_ant(AntKind::Guard);
        assert_eq!(next, loose);
    }
}
