//! Domain types shared by the battle engine and everything above it

pub mod moves;
pub mod pokemon;
pub mod pokemon_type;
pub mod side;
pub mod team;

pub use moves::{Move, POWER_MIN};
pub use pokemon::{MOVE_SLOTS, Pokemon, STAT_MAX, STAT_MIDPOINT, STAT_MIN};
pub use pokemon_type::Type;
pub use side::Side;
pub use team::Team;
