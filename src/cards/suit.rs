use crate::Error;

#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suit {
    #[default]
    Club = 0,
    Diamond = 1,
    Heart = 2,
    Spade = 3,
}

impl Suit {
    pub const fn all() -> [Self; 4] {
        [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade]
    }
}

impl From<u8> for Suit {
    fn from(n: u8) -> Suit {
        match n & 0x3 {
            0 => Suit::Club,
            1 => Suit::Diamond,
            2 => Suit::Heart,
            _ => Suit::Spade,
        }
    }
}
impl From<Suit> for u8 {
    fn from(s: Suit) -> u8 {
        s as u8
    }
}

/// u64 injection
/// every rank of this suit, as laid out in a Hand
/// c
/// xxxxxxxxxxxx 0001000100010001000100010001000100010001000100010001
impl From<Suit> for u64 {
    fn from(s: Suit) -> u64 {
        0x0001111111111111 << u8::from(s)
    }
}

/// char isomorphism, case-insensitive
impl TryFrom<char> for Suit {
    type Error = Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c.to_ascii_lowercase() {
            'c' => Ok(Suit::Club),
            'd' => Ok(Suit::Diamond),
            'h' => Ok(Suit::Heart),
            's' => Ok(Suit::Spade),
            _ => Err(Error::CardFormat(c.to_string(), "invalid suit")),
        }
    }
}

impl std::fmt::Display for Suit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Suit::Club => "c",
                Suit::Diamond => "d",
                Suit::Heart => "h",
                Suit::Spade => "s",
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thirteen_bits_per_suit() {
        for suit in Suit::all() {
            assert_eq!(u64::from(suit).count_ones(), 13);
        }
        let union = Suit::all().map(u64::from).iter().fold(0, |a, b| a | b);
        assert_eq!(union, (1 << 52) - 1);
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(Suit::try_from('H'), Ok(Suit::Heart));
        assert_eq!(Suit::try_from('s'), Ok(Suit::Spade));
        assert!(Suit::try_from('z').is_err());
    }
}
