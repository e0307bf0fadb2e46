use super::card::Card;
use super::hand::Hand;
use crate::Error;

/// A player's two private cards.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, PartialOrd, Ord)]
pub struct Hole(Hand);

impl Hole {
    pub fn cards(&self) -> [Card; 2] {
        let mut cards = self.0;
        let lo = cards.next().unwrap_or_default();
        let hi = cards.next().unwrap_or_default();
        [hi, lo]
    }
}

impl std::fmt::Display for Hole {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let [hi, lo] = self.cards();
        write!(f, "{} {}", hi, lo)
    }
}

impl From<Hole> for Hand {
    fn from(hole: Hole) -> Self {
        hole.0
    }
}

/// callers guarantee distinct cards, e.g. the sampler and the deck
impl From<(Card, Card)> for Hole {
    fn from((a, b): (Card, Card)) -> Self {
        debug_assert!(a != b);
        Self(Hand::add(Hand::from(a), Hand::from(b)))
    }
}

/// user-supplied cards get checked
impl TryFrom<&[Card]> for Hole {
    type Error = Error;
    fn try_from(cards: &[Card]) -> Result<Self, Self::Error> {
        match cards {
            [a, b] if a == b => Err(Error::Duplicate(*a)),
            [a, b] => Ok(Self::from((*a, *b))),
            _ => Err(Error::Cardinality {
                what: "hole cards",
                expected: 2,
                actual: cards.len(),
            }),
        }
    }
}

impl TryFrom<&str> for Hole {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::try_from(Card::parse(s)?.as_slice())
    }
}
