use super::card::Card;
use super::hand::Hand;
use super::hole::Hole;
use crate::Error;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

/// An ordered, mutable deck of cards.
///
/// Starts as the 52 distinct cards in canonical (ascending) order. Shuffling
/// permutes in place and dealing pops from the end, so a deck is consumed
/// exactly once per trial and then dropped. Never shared across trials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck(Vec<Card>);

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

impl Deck {
    /// Creates a fresh 52-card deck in canonical order.
    pub fn new() -> Self {
        Self((0..52u8).map(Card::from).collect())
    }
    /// Restores all 52 cards in canonical order.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
    /// Uniform in-place permutation driven by the given generator.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.0.shuffle(rng);
    }
    /// Uniform in-place permutation. Reproducible with a seed,
    /// otherwise drawn from the thread-local entropy source.
    pub fn shuffle_seeded(&mut self, seed: Option<u64>) {
        match seed {
            Some(seed) => self.shuffle(&mut SmallRng::seed_from_u64(seed)),
            None => self.shuffle(&mut rand::rng()),
        }
    }
    /// Removes and returns the top (last) card.
    pub fn deal_one(&mut self) -> Result<Card, Error> {
        self.0.pop().ok_or(Error::EmptyDeck)
    }
    /// Removes and returns the top `n` cards, in dealing order.
    pub fn deal(&mut self, n: usize) -> Result<Vec<Card>, Error> {
        if n > self.0.len() {
            return Err(Error::EmptyDeck);
        }
        Ok((0..n).filter_map(|_| self.0.pop()).collect())
    }
    /// Deals two cards as a player's hole cards.
    pub fn hole(&mut self) -> Result<Hole, Error> {
        let a = self.deal_one()?;
        let b = self.deal_one()?;
        Ok(Hole::from((a, b)))
    }
    /// Takes a specific card out of the deck, wherever it is.
    pub fn remove(&mut self, card: Card) {
        self.0.retain(|c| *c != card);
    }
    /// Takes every card of the set out of the deck, preserving order.
    pub fn exclude(&mut self, hand: Hand) {
        self.0.retain(|c| !hand.contains(c));
    }
    /// The cards still in the deck, bottom to top.
    pub fn cards(&self) -> &[Card] {
        &self.0
    }
    pub fn cards_remaining(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Deck> for Hand {
    fn from(deck: Deck) -> Self {
        deck.0.into_iter().collect()
    }
}

impl Iterator for Deck {
    type Item = Card;
    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop()
    }
}

impl std::fmt::Display for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Deck({} cards remaining)", self.0.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::rank::Rank;
    use crate::cards::suit::Suit;
    use std::collections::HashMap;
    use std::collections::HashSet;

    #[test]
    fn fresh_deck_has_52() {
        let deck = Deck::new();
        assert_eq!(deck.cards_remaining(), 52);
        assert!(!deck.is_empty());
        assert_eq!(deck.to_string(), "Deck(52 cards remaining)");
    }

    #[test]
    fn deal_all_multiplicities() {
        let mut deck = Deck::new();
        deck.shuffle_seeded(Some(7));
        let cards = (0..52).map(|_| deck.deal_one().unwrap()).collect::<Vec<_>>();
        assert_eq!(cards.iter().collect::<HashSet<_>>().len(), 52);
        let mut ranks = HashMap::<Rank, usize>::new();
        let mut suits = HashMap::<Suit, usize>::new();
        for card in cards.iter() {
            *ranks.entry(card.rank()).or_default() += 1;
            *suits.entry(card.suit()).or_default() += 1;
        }
        assert_eq!(ranks.len(), 13);
        assert!(ranks.values().all(|&n| n == 4));
        assert_eq!(suits.len(), 4);
        assert!(suits.values().all(|&n| n == 13));
        assert!(deck.is_empty());
        assert_eq!(deck.deal_one(), Err(Error::EmptyDeck));
    }

    #[test]
    fn seeded_shuffle_is_deterministic() {
        let mut a = Deck::new();
        let mut b = Deck::new();
        a.shuffle_seeded(Some(42));
        b.shuffle_seeded(Some(42));
        assert_eq!(a, b);
        let mut c = Deck::new();
        c.shuffle_seeded(Some(43));
        assert_ne!(a, c);
    }

    #[test]
    fn shuffle_permutes() {
        let mut deck = Deck::new();
        deck.shuffle_seeded(Some(1));
        assert_ne!(deck, Deck::new());
        assert_eq!(Hand::from(deck).size(), 52);
    }

    #[test]
    fn reset_restores_order() {
        let mut deck = Deck::new();
        deck.shuffle_seeded(None);
        deck.deal(10).unwrap();
        assert_eq!(deck.cards_remaining(), 42);
        deck.reset();
        assert_eq!(deck, Deck::new());
    }

    #[test]
    fn deal_too_many() {
        let mut deck = Deck::new();
        deck.deal(50).unwrap();
        assert_eq!(deck.deal(3), Err(Error::EmptyDeck));
        assert_eq!(deck.cards_remaining(), 2);
    }

    #[test]
    fn exclude_known_cards() {
        let mut deck = Deck::new();
        let known = Card::parse("As Kd 2c").unwrap().into_iter().collect::<Hand>();
        deck.exclude(known);
        assert_eq!(deck.cards_remaining(), 49);
        assert!(deck.all(|c| !known.contains(&c)));
    }

    #[test]
    fn remove_one_card() {
        let mut deck = Deck::new();
        let card = Card::try_from("Qh").unwrap();
        deck.remove(card);
        deck.remove(card);
        assert_eq!(deck.cards_remaining(), 51);
        assert!(!deck.cards().contains(&card));
    }
}
