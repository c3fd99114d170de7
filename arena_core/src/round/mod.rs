//! Round resolution - Apply a player's pick to a session

mod outcome;
mod resolution;
mod result;

pub use outcome::{determine_outcome, Outcome};
pub use resolution::{choose_computer_weapon, resolve_round, resolve_round_with_rng};
pub use result::RoundResult;
