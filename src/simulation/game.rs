use crate::error::CommandError;
use crate::location::Location;
use crate::simulation::colony::AntColony;
use crate::simulation::hive::Hive;
use crate::world::{AntKind, InsectId, PlaceId};
use tracing::{debug, info, warn};

/// Where a game stands; `Won` and `Lost` are final
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            GameStatus::InProgress => "undecided",
            GameStatus::Won => "won",
            GameStatus::Lost => "lost",
        }
    }
}

/// Turn driver and command surface over one colony and one hive
#[derive(Clone, Debug)]
pub struct AntGame {
    turn: u32,
    status: GameStatus,
    colony: AntColony,
    hive: Hive,
    rng: fastrand::Rng,
}

impl AntGame {
    /// Start a game; `rng` drives every random choice, so a seeded one replays exactly
    pub fn new(colony: AntColony, hive: Hive, rng: fastrand::Rng) -> Self {
        Self {
            turn: 0,
            status: GameStatus::InProgress,
            colony,
            hive,
            rng,
        }
    }

    /// Ants act, bees act, water floods, then this turn's wave arrives.
    /// Returns the bees that invaded. A finished game does not advance.
    pub fn take_turn(&mut self) -> Vec<InsectId> {
        if self.status != GameStatus::InProgress {
            warn!(status = self.status.as_str(), "game is over; turn not taken");
            return Vec::new();
        }

        debug!(turn = self.turn, "ants act");
        self.colony.ants_act(&mut self.rng);
        debug!(turn = self.turn, "bees act");
        self.colony.bees_act();
        debug!(turn = self.turn, "places act");
        self.colony.places_act();
        let invaded = self.hive.invade(&mut self.colony, self.turn, &mut self.rng);
        self.turn += 1;

        self.status = match self.game_is_won() {
            Some(true) => GameStatus::Won,
            Some(false) => GameStatus::Lost,
            None => GameStatus::InProgress,
        };
        if self.status != GameStatus::InProgress {
            info!(turn = self.turn, status = self.status.as_str(), "game over");
        }
        invaded
    }

    /// `Some(false)` once a bee reaches the queen, `Some(true)` when no bee is
    /// left anywhere, `None` otherwise
    pub fn game_is_won(&self) -> Option<bool> {
        if self.colony.queen_has_bees() {
            Some(false)
        } else if self.colony.all_bees().len() + self.hive_bees_count() == 0 {
            Some(true)
        } else {
            None
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Deploy an ant by case-insensitive type name at `"tunnel,step"`
    pub fn deploy_ant(&mut self, ant_type: &str, location: &str) -> Result<(), CommandError> {
        let kind: AntKind = ant_type.parse()?;
        let place = self.locate(location)?;
        self.colony.deploy_ant(kind, place).map(|_| ())
    }

    pub fn remove_ant(&mut self, location: &str) -> Result<(), CommandError> {
        let place = self.locate(location)?;
        self.colony.remove_ant(place);
        Ok(())
    }

    pub fn boost_ant(&mut self, boost: &str, location: &str) -> Result<(), CommandError> {
        let place = self.locate(location)?;
        self.colony.apply_boost(boost, place)
    }

    fn locate(&self, location: &str) -> Result<PlaceId, CommandError> {
        let Location { tunnel, step } = location.parse()?;
        self.colony
            .place_at(tunnel, step)
            .ok_or(CommandError::IllegalLocation)
    }

    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn food(&self) -> u32 {
        self.colony.food()
    }

    pub fn hive_bees_count(&self) -> usize {
        self.hive.bees(&self.colony).len()
    }

    pub fn boost_names(&self) -> Vec<&str> {
        self.colony.boost_names()
    }

    pub fn places(&self) -> &[Vec<PlaceId>] {
        self.colony.places()
    }

    pub fn colony(&self) -> &AntColony {
        &self.colony
    }

    pub fn hive(&self) -> &Hive {
        &self.hive
    }
}
