use crate::cards::Card;
use crate::cards::Rank;

/// Every way a caller can hand the engine something it refuses.
///
/// All variants are recoverable validation failures. Operations that return
/// one of these leave their receiver untouched.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("invalid card {0:?}: {1}")]
    CardFormat(String, &'static str),
    #[error("invalid hand class {0:?}: {1}")]
    ClassFormat(String, &'static str),
    #[error("{what} must be exactly {expected} cards, got {actual}")]
    Cardinality {
        what: &'static str,
        expected: usize,
        actual: usize,
    },
    #[error("duplicate card: {0}")]
    Duplicate(Card),
    #[error("invalid: {count} cards of rank {rank} (max 4 allowed)")]
    RankCount { rank: Rank, count: usize },
    #[error("{0}")]
    Sequencing(&'static str),
    #[error("number of players must be between 2 and 6, got {0}")]
    PlayerCount(usize),
    #[error("invalid player index {index} for {players} players")]
    PlayerIndex { index: usize, players: usize },
    #[error("player {} already folded", .0 + 1)]
    AlreadyFolded(usize),
    #[error("cannot fold: only 1 player remaining")]
    LastPlayer,
    #[error("expected {expected} player hands, got {actual}")]
    Incomplete { expected: usize, actual: usize },
    #[error("already have {0} players")]
    TableFull(usize),
    #[error("cannot deal from an empty deck")]
    EmptyDeck,
    #[error("no valid combinations available for {0} with given exclusions")]
    Exhausted(String),
    #[error("number of opponents must be between 1 and 5, got {0}")]
    Opponents(usize),
    #[error("at least one simulation is required")]
    Simulations,
}

pub type Result<T> = std::result::Result<T, Error>;
