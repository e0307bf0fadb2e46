//! Stateless equity estimators and the trial machinery they share.
pub mod heads_up;
pub use heads_up::*;

pub mod matchup;
pub use matchup::*;

pub mod multiway;
pub use multiway::*;

pub mod score;
pub use score::*;

pub mod showdown;
pub use showdown::*;

pub mod trials;
pub use trials::*;

use crate::cards::Card;
use crate::cards::Hole;

/// hole cards followed by the board, ready for an oracle
pub(crate) fn seven(hole: &Hole, board: &[Card]) -> Vec<Card> {
    hole.cards().into_iter().chain(board.iter().copied()).collect()
}
