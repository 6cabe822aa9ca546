pub mod insect;
pub mod place;
pub mod world;

pub use insect::{AntKind, BeeStatus, Insect, InsectId, Role};
pub use place::{Place, PlaceId};
pub use world::World;
