//! Live and batch equity calculation for No-Limit Texas Hold-Em.
//!
//! The crate is organised leaves first:
//!
//! - [`cards`]: the card model, the bitwise evaluator and the [`cards::Oracle`] seam
//! - [`classes`]: the 169 starting-hand classes and their concrete combos
//! - [`equity`]: seeded, chunked Monte Carlo estimators
//! - [`live`]: the street-by-street session a dealer drives by hand
//! - [`preflop`]: the 169-row equity table with percentiles
pub mod cards;
pub mod classes;
pub mod equity;
pub mod error;
pub mod live;
pub mod preflop;

pub use error::Error;
pub use error::Result;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Equities, outright-win and split frequencies, all in [0, 1].
pub type Probability = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and Monte Carlo sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// ============================================================================
/// Fewest players a live session will track.
pub const MIN_PLAYERS: usize = 2;
/// Most players a live session will track.
pub const MAX_PLAYERS: usize = 6;

// ============================================================================
// SAMPLING PARAMETERS
// ============================================================================
/// Pot shares are tallied in integer units of 1/SHARE_UNITS.
/// 60 is divisible by every possible tie size 1..=6, so sums are exact.
pub const SHARE_UNITS: u64 = 60;
/// Trials per independently seeded chunk.
pub const TRIAL_CHUNK: usize = 1024;
/// Default trials for a live session before the flop.
pub const LIVE_SIMS_PREFLOP: usize = 50_000;
/// Default trials for a live session on the flop.
pub const LIVE_SIMS_FLOP: usize = 50_000;
/// Default trials for a live session on the turn.
pub const LIVE_SIMS_TURN: usize = 10_000;
/// Default trials per hand class when building the preflop table.
pub const PREFLOP_SIMS: usize = 50_000;
/// Default table size when building the preflop table.
pub const PREFLOP_PLAYERS: usize = 6;
/// Default seed when building the preflop table.
pub const PREFLOP_SEED: u64 = 42;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at INFO level.
#[cfg(feature = "cli")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        log::LevelFilter::Info,
        config,
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
