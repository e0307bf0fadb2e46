/// How a starting hand's two suits relate.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Suitedness {
    Pair,
    Suited,
    Offsuit,
}

impl Suitedness {
    /// concrete holes per class
    pub const fn combos(&self) -> usize {
        match self {
            Suitedness::Pair => 6,
            Suitedness::Suited => 4,
            Suitedness::Offsuit => 12,
        }
    }
}

impl std::fmt::Display for Suitedness {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Suitedness::Pair => Ok(()),
            Suitedness::Suited => write!(f, "s"),
            Suitedness::Offsuit => write!(f, "o"),
        }
    }
}
