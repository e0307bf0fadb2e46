use crate::Probability;
use crate::classes::HandClass;

/// One hand class's line in the preflop table.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Row {
    pub hand_class: HandClass,
    pub equity: Probability,
    pub combos: usize,
    /// share of all 1326 combos this class beats or ties, by combo-range midpoint
    pub percentile: Probability,
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:<4} {:>6.2}%  (percentile: {:>6.2}%)",
            self.hand_class.to_string(),
            self.equity * 100.,
            self.percentile
        )
    }
}
