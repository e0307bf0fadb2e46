use crate::Probability;
use crate::cards::Street;

/// How an [`Outcome`] was reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// everyone else folded
    Uncontested,
    /// the river is out, so one showdown settles it
    Exact,
    /// Monte Carlo over the missing board cards
    Sampled { trials: usize },
}

/// The result of one equity calculation over a live session.
///
/// Equity is the expected pot share. Outright is the chance of taking the
/// whole pot alone, and split the chance that any tie happens at all.
/// Folded seats always read zero.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Outcome {
    street: Street,
    method: Method,
    equities: Vec<Probability>,
    outright: Vec<Probability>,
    split: Probability,
}

impl Outcome {
    pub(crate) fn new(
        street: Street,
        method: Method,
        equities: Vec<Probability>,
        outright: Vec<Probability>,
        split: Probability,
    ) -> Self {
        debug_assert!(equities.len() == outright.len());
        Self {
            street,
            method,
            equities,
            outright,
            split,
        }
    }
    pub fn street(&self) -> Street {
        self.street
    }
    pub fn method(&self) -> Method {
        self.method
    }
    pub fn equities(&self) -> &[Probability] {
        &self.equities
    }
    pub fn equity(&self, seat: usize) -> Probability {
        self.equities.get(seat).copied().unwrap_or_default()
    }
    pub fn outright(&self) -> &[Probability] {
        &self.outright
    }
    pub fn split(&self) -> Probability {
        self.split
    }
    /// seats sharing the greatest equity, in seat order
    pub fn winners(&self) -> Vec<usize> {
        let best = self
            .equities
            .iter()
            .copied()
            .fold(0.0, Probability::max);
        match best > 0.0 {
            true => (0..self.equities.len())
                .filter(|i| self.equities[*i] == best)
                .collect(),
            false => vec![],
        }
    }
    /// the seat that takes the whole pot, once nothing is left to chance
    pub fn winner(&self) -> Option<usize> {
        self.equities.iter().position(|e| *e == 1.0)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.method {
            Method::Sampled { trials } => writeln!(f, "{} ({} trials)", self.street, trials)?,
            Method::Exact => writeln!(f, "{} (exact)", self.street)?,
            Method::Uncontested => writeln!(f, "{} (uncontested)", self.street)?,
        }
        for (i, (equity, outright)) in self.equities.iter().zip(self.outright.iter()).enumerate() {
            writeln!(
                f,
                "P{:<2} {:>6.2}%  win {:>6.2}%",
                i + 1,
                equity * 100.,
                outright * 100.
            )?;
        }
        write!(f, "split {:>6.2}%", self.split * 100.)
    }
}
