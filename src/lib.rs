//! # Ant Colony Defense
//!
//! Turn-based simulation of ants defending their queen against waves of bees.
//!
//! This library provides the tunnel network, occupancy and hazard rules, wave
//! scheduling and invasion, and the turn driver with its command surface.

pub mod boost;
pub mod cli;
pub mod error;
pub mod location;
pub mod script;
pub mod simulation;
pub mod world;

pub use boost::{Boost, BoostPolicy};
pub use cli::{Args, Wave};
pub use error::{CommandError, ParseError, Result};
pub use location::Location;
pub use simulation::{AntColony, AntGame, GameStatus, Hive};
pub use world::{AntKind, InsectId, PlaceId, World};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        AntColony, AntGame, AntKind, Args, Boost, BoostPolicy, CommandError, GameStatus, Hive, Location,
        ParseError, Result, World,
    };
}
