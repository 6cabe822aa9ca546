use crate::boost::BoostPolicy;
use crate::error::ParseError;
use crate::simulation::{AntColony, AntGame, Hive};
use clap::Parser;
use std::str::FromStr;

/// CLI arguments for the colony defense
#[derive(Parser, Debug)]
#[command(name = "ant_colony_defense", about = "🐜 Ants defend their queen against waves of bees")]
pub struct Args {
    /// Starting food
    #[arg(short = 'f', long, default_value_t = 2)]
    pub food: u32,

    /// Number of tunnels
    #[arg(short = 't', long, default_value_t = 3)]
    pub tunnels: usize,

    /// Places per tunnel
    #[arg(short = 'l', long, default_value_t = 8)]
    pub length: usize,

    /// Every n-th place of a tunnel is water (0 for none)
    #[arg(long, default_value_t = 0)]
    pub moat: usize,

    /// Armor of every bee
    #[arg(long, default_value_t = 3)]
    pub bee_armor: u32,

    /// Damage of every bee sting
    #[arg(long, default_value_t = 1)]
    pub bee_damage: u32,

    /// Bee wave as TURN:COUNT (repeatable)
    #[arg(short = 'w', long = "wave")]
    pub waves: Vec<Wave>,

    /// Path to a command script
    #[arg(short = 's', long)]
    pub script: Option<String>,

    /// Stop after this many turns if the game is still undecided
    #[arg(long, default_value_t = 100)]
    pub max_turns: u32,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Boosts are not spent when applied
    #[arg(long, default_value_t = false)]
    pub keep_boosts: bool,

    /// Suppress the board and event logs (for benchmarks)
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

impl Args {
    /// Build the colony, hive and game these arguments describe
    pub fn build_game(&self, rng: fastrand::Rng) -> AntGame {
        let policy = if self.keep_boosts { BoostPolicy::Retain } else { BoostPolicy::Consume };
        let mut colony = AntColony::new(self.food, self.tunnels, self.length, self.moat).with_boost_policy(policy);
        let mut hive = Hive::new(&mut colony, self.bee_armor, self.bee_damage);

        let waves: &[Wave] = if self.waves.is_empty() { &Wave::DEFAULT_SCHEDULE } else { &self.waves };
        for wave in waves {
            hive.add_wave(&mut colony, wave.turn, wave.bees);
        }
        AntGame::new(colony, hive, rng)
    }
}

/// Bees released on a given turn
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Wave {
    pub turn: u32,
    pub bees: usize,
}

impl Wave {
    pub const DEFAULT_SCHEDULE: [Wave; 4] = [
        Wave { turn: 2, bees: 1 },
        Wave { turn: 4, bees: 1 },
        Wave { turn: 7, bees: 2 },
        Wave { turn: 10, bees: 3 },
    ];
}

impl FromStr for Wave {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidWave(s.to_string());
        let (turn, bees) = s.split_once(':').ok_or_else(invalid)?;
        Ok(Wave {
            turn: turn.trim().parse().map_err(|_| invalid())?,
            bees: bees.trim().parse().map_err(|_| invalid())?,
        })
    }
}
