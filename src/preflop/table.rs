use super::row::Row;
use crate::Error;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use crate::Probability;
use crate::Result;
use crate::cards::Oracle;
use crate::classes::HandClass;
use crate::equity::multiway;

const COMBOS: usize = 1326;

/// Multiway preflop equity of all 169 hand classes.
///
/// Rows are sorted strongest first, ties kept in grid order. Each row's
/// percentile is the midpoint of its cumulative combo range over all 1326
/// combos, so the percentile of AA at a full table sits just above zero.
#[derive(Debug, Clone, PartialEq)]
pub struct Table(Vec<Row>);

impl Table {
    /// Runs the multiway estimator for every class against `players - 1`
    /// random hands. Every class is sampled with the same seed.
    pub fn compute<O>(players: usize, sims: usize, seed: Option<u64>, oracle: &O) -> Result<Self>
    where
        O: Oracle + Sync,
    {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(Error::PlayerCount(players));
        }
        log::info!(
            "computing {}-player equity for 169 hand classes, {} trials each",
            players,
            sims
        );
        let mut equities = Vec::with_capacity(169);
        for (i, class) in HandClass::all().enumerate() {
            let equity = multiway(&class, players - 1, sims, seed, oracle)?;
            log::debug!("{:<4} {:.4}", class.to_string(), equity);
            if (i + 1) % 13 == 0 {
                log::info!("{:>3} / 169 hand classes", i + 1);
            }
            equities.push((class, equity));
        }
        Ok(Self::from(equities))
    }

    pub fn rows(&self) -> &[Row] {
        &self.0
    }
    pub fn get(&self, class: &HandClass) -> Option<&Row> {
        self.0.iter().find(|row| row.hand_class == *class)
    }
    /// strongest first
    pub fn top(&self, n: usize) -> &[Row] {
        &self.0[..n.min(self.0.len())]
    }
    /// weakest first
    pub fn bottom(&self, n: usize) -> Vec<Row> {
        self.0.iter().rev().take(n).copied().collect()
    }

    /// 13x13 matrix of some column, aces top-left,
    /// suited above the diagonal and offsuit below.
    pub fn grid<F>(&self, value: F) -> [[Probability; 13]; 13]
    where
        F: Fn(&Row) -> Probability,
    {
        let mut grid = [[0.; 13]; 13];
        for row in self.0.iter() {
            let (i, j) = row.hand_class.cell();
            grid[i][j] = value(row);
        }
        grid
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&self.0)
    }

    pub fn write_csv<W: std::io::Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "hand_class,equity,combos,percentile")?;
        for row in self.0.iter() {
            writeln!(
                writer,
                "{},{:.4},{},{:.4}",
                row.hand_class, row.equity, row.combos, row.percentile
            )?;
        }
        Ok(())
    }
}

/// aggregate already-computed equities
impl From<Vec<(HandClass, Probability)>> for Table {
    fn from(mut equities: Vec<(HandClass, Probability)>) -> Self {
        equities.sort_by(|(a, x), (b, y)| y.total_cmp(x).then(a.cell().cmp(&b.cell())));
        let mut cumulative = 0;
        Self(
            equities
                .into_iter()
                .map(|(hand_class, equity)| {
                    let combos = hand_class.combos_count();
                    cumulative += combos;
                    let midpoint = cumulative as Probability - combos as Probability / 2.;
                    Row {
                        hand_class,
                        equity,
                        combos,
                        percentile: midpoint / COMBOS as Probability * 100.,
                    }
                })
                .collect(),
        )
    }
}
