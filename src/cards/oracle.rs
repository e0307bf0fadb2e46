use super::card::Card;
use super::hand::Hand;
use super::strength::Strength;
use crate::Error;
use crate::Result;

/// Anything that can rank 7-card holdem hands.
///
/// Equity code only ever compares the returned strengths, so any correct
/// evaluator can stand in for [`Holdem`].
pub trait Oracle {
    type Strength: Ord + Copy;
    /// Strength of exactly 7 distinct cards. Higher wins, equal ties.
    fn evaluate(&self, cards: &[Card]) -> Result<Self::Strength>;
    /// Human-readable category of the best 5 of the 7 cards.
    fn category(&self, cards: &[Card]) -> Result<String>;
}

/// Validates the 7 distinct cards an oracle expects.
pub fn seven_distinct(cards: &[Card]) -> Result<Hand> {
    if cards.len() != 7 {
        return Err(Error::Cardinality {
            what: "evaluated hand",
            expected: 7,
            actual: cards.len(),
        });
    }
    let mut hand = Hand::empty();
    for card in cards {
        if hand.contains(card) {
            return Err(Error::Duplicate(*card));
        }
        hand.insert(*card);
    }
    Ok(hand)
}

/// The bitwise evaluator over rank and suit masks.
#[derive(Debug, Default, Clone, Copy)]
pub struct Holdem;

impl Oracle for Holdem {
    type Strength = Strength;
    fn evaluate(&self, cards: &[Card]) -> Result<Strength> {
        seven_distinct(cards).map(Strength::from)
    }
    fn category(&self, cards: &[Card]) -> Result<String> {
        self.evaluate(cards).map(|s| s.category().to_string())
    }
}
