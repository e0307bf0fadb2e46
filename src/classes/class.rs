use super::suitedness::Suitedness;
use crate::Arbitrary;
use crate::Error;
use crate::cards::Card;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Rank;
use crate::cards::Suit;
use rand::Rng;
use rand::seq::IndexedRandom;

/// One of the 169 strategically distinct starting hands.
///
/// "AKs", "72o" and "TT" each stand for every concrete hole that shares
/// the two ranks and the suit relationship. Ranks are stored high then low
/// regardless of how they were written, so "KAs" and "AKs" are the same class.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[derive(serde::Serialize, serde::Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct HandClass {
    hi: Rank,
    lo: Rank,
    suitedness: Suitedness,
}

impl HandClass {
    pub fn hi(&self) -> Rank {
        self.hi
    }
    pub fn lo(&self) -> Rank {
        self.lo
    }
    pub fn suitedness(&self) -> Suitedness {
        self.suitedness
    }
    pub fn combos_count(&self) -> usize {
        self.suitedness.combos()
    }

    /// Every concrete hole in this class.
    pub fn combos(&self) -> Vec<Hole> {
        let suits = Suit::all();
        match self.suitedness {
            Suitedness::Pair => suits
                .iter()
                .enumerate()
                .flat_map(|(i, a)| suits[i + 1..].iter().map(move |b| (*a, *b)))
                .map(|(a, b)| self.hole(a, b))
                .collect(),
            Suitedness::Suited => suits.iter().map(|s| self.hole(*s, *s)).collect(),
            Suitedness::Offsuit => suits
                .iter()
                .flat_map(|a| suits.iter().map(move |b| (*a, *b)))
                .filter(|(a, b)| a != b)
                .map(|(a, b)| self.hole(a, b))
                .collect(),
        }
    }

    /// Draws one combo uniformly from those that avoid every excluded card.
    pub fn sample<R: Rng + ?Sized>(&self, excluded: Hand, rng: &mut R) -> Result<Hole, Error> {
        let available = self
            .combos()
            .into_iter()
            .filter(|hole| Hand::from(*hole).into_iter().all(|c| !excluded.contains(&c)))
            .collect::<Vec<Hole>>();
        available
            .choose(rng)
            .copied()
            .ok_or_else(|| Error::Exhausted(self.to_string()))
    }

    /// All 169 classes in grid order, row by row:
    /// pairs on the diagonal, suited above it, offsuit below it.
    pub fn all() -> impl Iterator<Item = Self> {
        Rank::all().into_iter().enumerate().flat_map(|(i, row)| {
            Rank::all()
                .into_iter()
                .enumerate()
                .map(move |(j, col)| match i.cmp(&j) {
                    std::cmp::Ordering::Equal => Self::from((row, col, Suitedness::Pair)),
                    std::cmp::Ordering::Less => Self::from((row, col, Suitedness::Suited)),
                    std::cmp::Ordering::Greater => Self::from((col, row, Suitedness::Offsuit)),
                })
        })
    }

    /// (row, column) of this class in the 13x13 grid, aces first.
    pub fn cell(&self) -> (usize, usize) {
        let hi = Self::index(self.hi);
        let lo = Self::index(self.lo);
        match self.suitedness {
            Suitedness::Pair | Suitedness::Suited => (hi, lo),
            Suitedness::Offsuit => (lo, hi),
        }
    }

    fn index(rank: Rank) -> usize {
        usize::from(u8::from(Rank::Ace) - u8::from(rank))
    }
    fn hole(&self, a: Suit, b: Suit) -> Hole {
        Hole::from((Card::from((self.hi, a)), Card::from((self.lo, b))))
    }
}

/// ranks in either order; the pair shape wins over the given suitedness
impl From<(Rank, Rank, Suitedness)> for HandClass {
    fn from((a, b, suitedness): (Rank, Rank, Suitedness)) -> Self {
        Self {
            hi: a.max(b),
            lo: a.min(b),
            suitedness: if a == b { Suitedness::Pair } else { suitedness },
        }
    }
}

impl TryFrom<&str> for HandClass {
    type Error = Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let trimmed = s.trim();
        let fail = |reason| Error::ClassFormat(trimmed.to_string(), reason);
        let chars = trimmed.chars().collect::<Vec<char>>();
        if chars.len() < 2 || chars.len() > 3 {
            return Err(fail("must be 2 or 3 characters"));
        }
        let a = Rank::try_from(chars[0]).map_err(|_| fail("invalid rank"))?;
        let b = Rank::try_from(chars[1]).map_err(|_| fail("invalid rank"))?;
        let suitedness = match (a == b, chars.get(2).map(|c| c.to_ascii_lowercase())) {
            (true, None) => Suitedness::Pair,
            (true, Some(_)) => return Err(fail("pairs take no suited/offsuit modifier")),
            (false, Some('s')) => Suitedness::Suited,
            (false, Some('o')) => Suitedness::Offsuit,
            (false, Some(_)) => return Err(fail("invalid suited/offsuit modifier")),
            (false, None) => return Err(fail("non-pairs must specify 's' or 'o'")),
        };
        Ok(Self::from((a, b, suitedness)))
    }
}
impl TryFrom<String> for HandClass {
    type Error = Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}
impl From<HandClass> for String {
    fn from(class: HandClass) -> Self {
        class.to_string()
    }
}

impl Arbitrary for HandClass {
    fn random() -> Self {
        let n = rand::rng().random_range(0..169);
        Self::all().nth(n).unwrap_or_else(|| Self::from((Rank::Ace, Rank::Ace, Suitedness::Pair)))
    }
}

impl std::fmt::Display for HandClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.hi, self.lo, self.suitedness)
    }
}
