//! Rules engine for a three-player landlord card game. Keep this crate
//! free of IO and platform concerns.

pub mod cards;
pub mod compare;
pub mod deck;
pub mod events;
pub mod hand;
pub mod machine;
pub mod player;
pub mod queue;
pub mod rng;
pub mod round;

pub use cards::*;
pub use compare::*;
pub use deck::*;
pub use events::*;
pub use hand::*;
pub use machine::*;
pub use player::*;
pub use queue::*;
pub use rng::*;
pub use round::*;
