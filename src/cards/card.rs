use super::rank::Rank;
use super::suit::Suit;
use crate::Error;

/// A playing card encoded as a single byte.
///
/// The 52 cards are bijectively mapped to `0..52` where the encoding is
/// `rank * 4 + suit`. This yields a natural ordering where cards are sorted
/// first by rank, then by suit within each rank.
///
/// # Representations
///
/// - `u8`: Compact index `0..52` for array indexing
/// - `u64`: Single-bit representation for set membership in [`Hand`]
/// - `String`: two-character notation like `"As"`, used for serialization
///
/// # Parsing
///
/// Cards parse from two-character strings like `"As"` (ace of spades)
/// or `"tc"` (ten of clubs), case-insensitive. `"10h"` is accepted
/// for `"Th"`. Use [`Card::parse`] for whitespace-separated lists.
///
/// [`Hand`]: super::hand::Hand
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Card(u8);

impl Card {
    /// Extracts the rank component (2 through Ace).
    pub fn rank(&self) -> Rank {
        Rank::from(self.0 / 4)
    }
    /// Extracts the suit component (clubs, diamonds, hearts, spades).
    pub fn suit(&self) -> Suit {
        Suit::from(self.0 % 4)
    }
    /// Parses whitespace-separated card notation into an ordered list.
    ///
    /// `"As Kh"` becomes `[As, Kh]`. Fails on the first malformed token.
    pub fn parse(s: &str) -> Result<Vec<Self>, Error> {
        s.split_whitespace()
            .map(Self::try_from)
            .collect::<Result<Vec<Self>, _>>()
    }
}

/// (Rank, Suit) isomorphism
impl From<(Rank, Suit)> for Card {
    fn from((r, s): (Rank, Suit)) -> Self {
        Self(u8::from(r) * 4 + u8::from(s))
    }
}

/// u8 isomorphism
/// each card is mapped to its location in a sorted deck 0-51
/// Ts
/// 35
/// 0b00100011
impl From<Card> for u8 {
    fn from(c: Card) -> u8 {
        c.0
    }
}
impl From<u8> for Card {
    fn from(n: u8) -> Self {
        debug_assert!(n < 52);
        Self(n)
    }
}

/// u64 representation
/// each card is just one bit turned on. this is a one-way morphism
/// Ts
/// xxxxxxxxxxxx 0000000000000000100000000000000000000000000000000000
impl From<Card> for u64 {
    fn from(c: Card) -> u64 {
        1 << u8::from(c)
    }
}

/// str isomorphism
impl TryFrom<&str> for Card {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let trimmed = s.trim();
        let chars = match trimmed.strip_prefix("10") {
            Some(rest) => std::iter::once('T').chain(rest.chars()).collect::<Vec<_>>(),
            None => trimmed.chars().collect::<Vec<_>>(),
        };
        match chars.as_slice() {
            [r, s] => {
                let rank = Rank::try_from(*r).map_err(|_| Error::CardFormat(trimmed.into(), "invalid rank"))?;
                let suit = Suit::try_from(*s).map_err(|_| Error::CardFormat(trimmed.into(), "invalid suit"))?;
                Ok(Card::from((rank, suit)))
            }
            _ => Err(Error::CardFormat(trimmed.into(), "must be 2 characters")),
        }
    }
}
impl TryFrom<String> for Card {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<Card> for String {
    fn from(c: Card) -> Self {
        c.to_string()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", self.rank(), self.suit())
    }
}
