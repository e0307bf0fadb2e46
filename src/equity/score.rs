use crate::Probability;
use crate::SHARE_UNITS;

/// Pot shares won across trials, in integer units of 1/SHARE_UNITS.
///
/// Integers make the total independent of the order trials are summed in,
/// which is what lets chunks finish in any order and still agree bit for bit.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Score(u64);

impl Score {
    pub const fn win() -> Self {
        Self(SHARE_UNITS)
    }
    pub const fn tie() -> Self {
        Self(SHARE_UNITS / 2)
    }
    /// one of `k` equal shares of the pot
    pub const fn share(k: usize) -> Self {
        Self(SHARE_UNITS / k as u64)
    }
    pub fn units(&self) -> u64 {
        self.0
    }
    /// mean pot share over `trials`
    pub fn probability(&self, trials: usize) -> Probability {
        self.0 as Probability / (SHARE_UNITS as Probability * trials as Probability)
    }
}

impl std::ops::Add for Score {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}
impl std::ops::AddAssign for Score {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

/// Per-seat shares, outright wins and split count of a multiway run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tally {
    shares: Vec<Score>,
    outright: Vec<u64>,
    splits: u64,
}

impl Tally {
    pub fn new(seats: usize) -> Self {
        Self {
            shares: vec![Score::default(); seats],
            outright: vec![0; seats],
            splits: 0,
        }
    }
    pub fn record(&mut self, showdown: &super::Showdown) {
        let share = showdown.share();
        for &seat in showdown.winners() {
            self.shares[seat] += share;
        }
        match showdown.winners() {
            [seat] => self.outright[*seat] += 1,
            _ => self.splits += 1,
        }
    }
    pub fn shares(&self) -> &[Score] {
        &self.shares
    }
    pub fn outright(&self) -> &[u64] {
        &self.outright
    }
    pub fn splits(&self) -> u64 {
        self.splits
    }
}

impl std::ops::Add for Tally {
    type Output = Self;
    fn add(mut self, rhs: Self) -> Self {
        for (a, b) in self.shares.iter_mut().zip(rhs.shares) {
            *a += b;
        }
        for (a, b) in self.outright.iter_mut().zip(rhs.outright) {
            *a += b;
        }
        self.splits += rhs.splits;
        self
    }
}
