use super::score::Score;

/// The seats holding the best hand at a showdown.
///
/// Every seat in here ties for the maximum strength; the pot is split
/// evenly among them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Showdown(Vec<usize>);

impl Showdown {
    pub fn winners(&self) -> &[usize] {
        &self.0
    }
    pub fn contains(&self, seat: usize) -> bool {
        self.0.contains(&seat)
    }
    pub fn is_split(&self) -> bool {
        self.0.len() > 1
    }
    /// what each winner takes home
    pub fn share(&self) -> Score {
        Score::share(self.0.len().max(1))
    }
}

/// (seat, strength) pairs, in seat order
impl<S: Ord + Copy> From<Vec<(usize, S)>> for Showdown {
    fn from(strengths: Vec<(usize, S)>) -> Self {
        let mut best = None;
        let mut winners = Vec::with_capacity(strengths.len());
        for (seat, strength) in strengths {
            match best.map(|b: S| strength.cmp(&b)) {
                Some(std::cmp::Ordering::Less) => {}
                Some(std::cmp::Ordering::Equal) => winners.push(seat),
                Some(std::cmp::Ordering::Greater) | None => {
                    best = Some(strength);
                    winners.clear();
                    winners.push(seat);
                }
            }
        }
        Self(winners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sole_winner() {
        let showdown = Showdown::from(vec![(0, 3), (2, 9), (4, 1)]);
        assert_eq!(showdown.winners(), &[2]);
        assert!(!showdown.is_split());
        assert_eq!(showdown.share(), Score::win());
    }

    #[test]
    fn three_way_tie() {
        let showdown = Showdown::from(vec![(0, 7), (1, 7), (2, 2), (3, 7)]);
        assert_eq!(showdown.winners(), &[0, 1, 3]);
        assert!(showdown.is_split());
        assert!(showdown.contains(3));
        assert!(!showdown.contains(2));
        assert_eq!(showdown.share(), Score::share(3));
    }

    #[test]
    fn later_best_resets_ties() {
        let showdown = Showdown::from(vec![(0, 4), (1, 4), (2, 5)]);
        assert_eq!(showdown.winners(), &[2]);
    }
}
