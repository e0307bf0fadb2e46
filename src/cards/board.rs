use super::card::Card;
use super::hand::Hand;
use super::street::Street;

/// The community cards, in the order they were dealt.
///
/// Only ever holds 0, 3, 4 or 5 cards; the street is derived from its length.
/// Growth is checked by whoever owns it, so a Board on its own never rejects.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board(Vec<Card>);

impl Board {
    pub fn new() -> Self {
        Self(Vec::with_capacity(5))
    }
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn street(&self) -> Street {
        Street::try_from(self.0.len()).unwrap_or(Street::Pref)
    }
    pub(crate) fn extend(&mut self, cards: &[Card]) {
        self.0.extend_from_slice(cards);
        debug_assert!(Street::try_from(self.0.len()).is_ok());
    }
}

impl From<&Board> for Hand {
    fn from(board: &Board) -> Self {
        Hand::from(board.cards())
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let cards = self.0.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        write!(f, "{}", cards.join(" "))
    }
}
