//! The game itself.
//!
//! A bird falls under gravity and must thread the gap in a scrolling obstacle
//! pair. Each activation makes it jump; every obstacle that scrolls off the
//! left edge is one point. Touching the floor or an obstacle ends the round.

pub mod logic;
pub mod session;
pub mod ticker;
pub mod types;

pub use logic::*;
pub use session::Session;
pub use ticker::{TickKind, Ticker};
pub use types::*;
