pub mod behavior;
pub mod colony;
pub mod game;
pub mod hive;
pub mod report;

pub use colony::AntColony;
pub use game::{AntGame, GameStatus};
pub use hive::Hive;
