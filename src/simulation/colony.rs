use crate::boost::{Boost, BoostPolicy};
use crate::error::CommandError;
use crate::simulation::behavior;
use crate::world::{AntKind, InsectId, PlaceId, World};
use std::collections::BTreeMap;
use tracing::info;

/// Tunnel network, queen, food economy and boost inventory.
///
/// Tunnel `t` is `tunnels[t]`, ordered from the queen outward; its last cell
/// is the entrance where invading bees arrive.
#[derive(Clone, Debug)]
pub struct AntColony {
    world: World,
    food: u32,
    tunnels: Vec<Vec<PlaceId>>,
    entrances: Vec<PlaceId>,
    queen: PlaceId,
    boosts: BTreeMap<String, u32>,
    boost_policy: BoostPolicy,
}

impl AntColony {
    /// Build `num_tunnels` chains of `tunnel_length` places. With a nonzero
    /// `moat_frequency`, every cell whose 1-based step is a multiple of it is water.
    pub fn new(starting_food: u32, num_tunnels: usize, tunnel_length: usize, moat_frequency: usize) -> Self {
        let mut world = World::new();
        let queen = world.add_place("Ant Queen", false, None);
        let mut tunnels = Vec::with_capacity(num_tunnels);
        let mut entrances = Vec::with_capacity(num_tunnels);

        for tunnel in 0..num_tunnels {
            let mut prev = queen;
            let mut cells = Vec::with_capacity(tunnel_length);
            for step in 0..tunnel_length {
                let water = moat_frequency != 0 && (step + 1) % moat_frequency == 0;
                let kind = if water { "water" } else { "tunnel" };
                let cell = world.add_place(format!("{kind}[{tunnel},{step}]"), water, Some(prev));
                if prev != queen {
                    world.link_entrance(prev, cell);
                }
                cells.push(cell);
                prev = cell;
            }
            entrances.push(prev);
            tunnels.push(cells);
        }

        let boosts = Boost::STARTING
            .into_iter()
            .map(|(boost, count)| (boost.as_str().to_string(), count))
            .collect();

        Self {
            world,
            food: starting_food,
            tunnels,
            entrances,
            queen,
            boosts,
            boost_policy: BoostPolicy::default(),
        }
    }

    pub fn with_boost_policy(mut self, policy: BoostPolicy) -> Self {
        self.boost_policy = policy;
        self
    }

    #[inline]
    pub fn world(&self) -> &World {
        &self.world
    }

    #[inline]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    #[inline]
    pub fn food(&self) -> u32 {
        self.food
    }

    pub fn increase_food(&mut self, amount: u32) {
        self.food += amount;
    }

    pub fn places(&self) -> &[Vec<PlaceId>] {
        &self.tunnels
    }

    /// Place at `step` of `tunnel`, if both are in range
    pub fn place_at(&self, tunnel: usize, step: usize) -> Option<PlaceId> {
        self.tunnels.get(tunnel)?.get(step).copied()
    }

    pub fn entrances(&self) -> &[PlaceId] {
        &self.entrances
    }

    #[inline]
    pub fn queen_place(&self) -> PlaceId {
        self.queen
    }

    pub fn queen_has_bees(&self) -> bool {
        self.world.place(self.queen).has_bees()
    }

    pub fn boosts(&self) -> &BTreeMap<String, u32> {
        &self.boosts
    }

    pub fn boost_policy(&self) -> BoostPolicy {
        self.boost_policy
    }

    /// Grant one boost, adding the name to the inventory on first sight
    pub fn add_boost(&mut self, boost: &str) {
        *self.boosts.entry(boost.to_string()).or_insert(0) += 1;
        info!("Found a {boost}!");
    }

    /// Names of boosts with at least one available
    pub fn boost_names(&self) -> Vec<&str> {
        self.boosts
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Place a new ant, paying its food cost only if it fits
    pub fn deploy_ant(&mut self, kind: AntKind, place: PlaceId) -> Result<InsectId, CommandError> {
        let cost = kind.food_cost();
        if self.food < cost {
            return Err(CommandError::NotEnoughFood);
        }
        let ant = self.world.spawn_ant(kind);
        if !self.world.add_ant(place, ant) {
            self.world.discard_unplaced(ant);
            return Err(CommandError::TunnelOccupied);
        }
        self.food -= cost;
        info!("Deployed {} at {}", self.world.insect(ant), self.world.place(place).name());
        Ok(ant)
    }

    pub fn remove_ant(&mut self, place: PlaceId) -> Option<InsectId> {
        self.world.remove_ant(place)
    }

    /// Hand one boost to the ant bees would meet at `place`
    pub fn apply_boost(&mut self, boost: &str, place: PlaceId) -> Result<(), CommandError> {
        let available = self.boosts.get(boost).copied().unwrap_or(0);
        if available < 1 {
            return Err(CommandError::NoSuchBoost(boost.to_string()));
        }
        let Some(ant) = self.world.ant_at(place) else {
            return Err(CommandError::NoAntAtLocation);
        };
        self.world.insect_mut(ant).set_boost(Boost::from(boost));
        if self.boost_policy == BoostPolicy::Consume {
            if let Some(count) = self.boosts.get_mut(boost) {
                *count -= 1;
            }
        }
        info!("{} is given {boost}", self.world.insect(ant));
        Ok(())
    }

    /// Every ant bees can see, tunnel by tunnel
    pub fn all_ants(&self) -> Vec<InsectId> {
        self.cells().filter_map(|cell| self.world.ant_at(cell)).collect()
    }

    /// Every bee in the tunnels, tunnel by tunnel and in arrival order per place
    pub fn all_bees(&self) -> Vec<InsectId> {
        self.cells()
            .flat_map(|cell| self.world.bees_at(cell).iter().copied())
            .collect()
    }

    /// Guards let the ant they shield act first
    pub fn ants_act(&mut self, rng: &mut fastrand::Rng) {
        for ant in self.all_ants() {
            if self.world.insect(ant).is_guard() {
                let guarded = self
                    .world
                    .insect(ant)
                    .place()
                    .and_then(|place| self.world.guarded_ant_at(place));
                if let Some(guarded) = guarded {
                    behavior::ant_act(self, guarded, rng);
                }
            }
            behavior::ant_act(self, ant, rng);
        }
    }

    pub fn bees_act(&mut self) {
        for bee in self.all_bees() {
            behavior::bee_act(&mut self.world, bee);
        }
    }

    /// Apply water hazards to every tunnel place
    pub fn places_act(&mut self) {
        for tunnel in &self.tunnels {
            for &cell in tunnel {
                self.world.flood(cell);
            }
        }
    }

    fn cells(&self) -> impl Iterator<Item = PlaceId> + '_ {
        self.tunnels.iter().flatten().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_moat_frequency_marks_water() {
        let colony = AntColony::new(0, 2, 3, 2);
        for tunnel in colony.places() {
            let water: Vec<bool> = tunnel.iter().map(|&p| colony.world().place(p).is_water()).collect();
            assert_eq!(water, vec![false, true, false]);
        }
        let cell = colony.place_at(1, 1).unwrap();
        assert_eq!(colony.world().place(cell).name(), "water[1,1]");
    }

    #[test]
    fn test_no_moat_means_dry_tunnels() {
        let colony = AntColony::new(0, 3, 4, 0);
        assert!(colony.world().places().iter().all(|p| !p.is_water()));
    }

    #[test]
    fn test_every_tunnel_leads_to_the_queen() {
        let colony = AntColony::new(0, 3, 4, 0);
        let queen = colony.queen_place();
        for (t, tunnel) in colony.places().iter().enumerate() {
            assert_eq!(colony.world().place(tunnel[0]).exit(), Some(queen));
            assert_eq!(colony.entrances()[t], tunnel[3]);

            let mut current = tunnel[3];
            let mut hops = 0;
            while let Some(next) = colony.world().place(current).exit() {
                current = next;
                hops += 1;
            }
            assert_eq!(current, queen);
            assert_eq!(hops, 4);
        }
        assert_eq!(colony.world().place(queen).entrance(), None);
    }

    #[test]
    fn test_place_at_bounds() {
        let colony = AntColony::new(0, 2, 3, 0);
        assert!(colony.place_at(1, 2).is_some());
        assert!(colony.place_at(2, 0).is_none());
        assert!(colony.place_at(0, 3).is_none());
    }

    #[test]
    fn test_deploy_debits_food_only_on_success() {
        let mut colony = AntColony::new(5, 1, 2, 0);
        let cell = colony.place_at(0, 0).unwrap();

        let ant = colony.deploy_ant(AntKind::Thrower, cell).unwrap();
        assert_eq!(colony.food(), 1);
        assert_eq!(colony.world().ant_at(cell), Some(ant));

        assert_eq!(colony.deploy_ant(AntKind::Grower, cell), Err(CommandError::TunnelOccupied));
        assert_eq!(colony.food(), 1);

        let other = colony.place_at(0, 1).unwrap();
        assert_eq!(colony.deploy_ant(AntKind::Eater, other), Err(CommandError::NotEnoughFood));
        assert_eq!(colony.world().ant_at(other), None);
        assert_eq!(colony.food(), 1);
    }

    #[test]
    fn test_apply_boost_errors() {
        let mut colony = AntColony::new(10, 1, 2, 0);
        let cell = colony.place_at(0, 0).unwrap();

        assert_eq!(
            colony.apply_boost("FlyingLeaf", cell),
            Err(CommandError::NoAntAtLocation)
        );
        // present with count zero
        assert_eq!(
            colony.apply_boost("BugSpray", cell),
            Err(CommandError::NoSuchBoost("BugSpray".to_string()))
        );
        assert_eq!(
            colony.apply_boost("Mystery", cell),
            Err(CommandError::NoSuchBoost("Mystery".to_string()))
        );
    }

    #[test]
    fn test_boost_goes_to_guard_and_is_consumed() {
        let mut colony = AntColony::new(10, 1, 2, 0);
        let cell = colony.place_at(0, 0).unwrap();
        let thrower = colony.deploy_ant(AntKind::Thrower, cell).unwrap();
        let guard = colony.deploy_ant(AntKind::Guard, cell).unwrap();

        colony.apply_boost("IcyLeaf", cell).unwrap();
        assert_eq!(colony.world().insect(guard).boost(), Some(&Boost::IcyLeaf));
        assert_eq!(colony.world().insect(thrower).boost(), None);
        assert_eq!(colony.boosts()["IcyLeaf"], 0);
        assert_eq!(
            colony.apply_boost("IcyLeaf", cell),
            Err(CommandError::NoSuchBoost("IcyLeaf".to_string()))
        );
    }

    #[test]
    fn test_retain_policy_keeps_count() {
        let mut colony = AntColony::new(10, 1, 2, 0).with_boost_policy(BoostPolicy::Retain);
        let cell = colony.place_at(0, 0).unwrap();
        colony.deploy_ant(AntKind::Thrower, cell).unwrap();

        colony.apply_boost("StickyLeaf", cell).unwrap();
        colony.apply_boost("StickyLeaf", cell).unwrap();
        assert_eq!(colony.boosts()["StickyLeaf"], 1);
    }

    #[test]
    fn test_add_boost_and_names() {
        let mut colony = AntColony::new(0, 1, 1, 0);
        assert_eq!(colony.boost_names(), vec!["FlyingLeaf", "IcyLeaf", "StickyLeaf"]);

        colony.add_boost("BugSpray");
        colony.add_boost("GoldenLeaf");
        assert_eq!(colony.boosts()["BugSpray"], 1);
        assert_eq!(colony.boosts()["GoldenLeaf"], 1);
        assert!(colony.boost_names().contains(&"BugSpray"));
        assert!(colony.boost_names().contains(&"GoldenLeaf"));
    }

    #[test]
    fn test_all_ants_sees_guard_not_shadowed() {
        let mut colony = AntColony::new(20, 2, 2, 0);
        let a = colony.place_at(0, 1).unwrap();
        let b = colony.place_at(1, 0).unwrap();
        let grower = colony.deploy_ant(AntKind::Grower, b).unwrap();
        colony.deploy_ant(AntKind::Thrower, a).unwrap();
        let guard = colony.deploy_ant(AntKind::Guard, a).unwrap();

        assert_eq!(colony.all_ants(), vec![guard, grower]);
    }

    #[test]
    fn test_all_bees_scans_every_tunnel() {
        let mut colony = AntColony::new(0, 2, 2, 0);
        let queen = colony.queen_place();
        let world = colony.world_mut();
        let x = world.spawn_bee(3, 1, queen);
        let y = world.spawn_bee(3, 1, queen);
        let z = world.spawn_bee(3, 1, queen);
        let places = [colony.place_at(1, 1).unwrap(), colony.place_at(0, 0).unwrap()];
        let world = colony.world_mut();
        world.add_bee(places[0], x);
        world.add_bee(places[1], y);
        world.add_bee(places[0], z);

        assert_eq!(colony.all_bees(), vec![y, x, z]);
    }

    #[test]
    fn test_shadowed_ant_acts_under_guard() {
        let mut colony = AntColony::new(20, 1, 3, 0);
        let cell = colony.place_at(0, 0).unwrap();
        let far = colony.place_at(0, 2).unwrap();
        colony.deploy_ant(AntKind::Thrower, cell).unwrap();
        colony.deploy_ant(AntKind::Guard, cell).unwrap();
        let queen = colony.queen_place();
        let bee = colony.world_mut().spawn_bee(2, 1, queen);
        colony.world_mut().add_bee(far, bee);

        let mut rng = fastrand::Rng::with_seed(1);
        colony.ants_act(&mut rng);
        assert_eq!(colony.world().insect(bee).armor, 1);
    }

    #[test]
    fn test_places_act_floods_water() {
        let mut colony = AntColony::new(20, 1, 2, 2);
        let dry = colony.place_at(0, 0).unwrap();
        let wet = colony.place_at(0, 1).unwrap();
        colony.deploy_ant(AntKind::Thrower, dry).unwrap();
        colony.deploy_ant(AntKind::Eater, wet).unwrap();

        colony.places_act();
        assert!(colony.world().ant_at(dry).is_some());
        assert!(colony.world().ant_at(wet).is_none());
        assert_eq!(colony.food(), 12);
    }
}
