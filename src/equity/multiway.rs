use super::Score;
use super::Showdown;
use super::Trials;
use super::seven;
use crate::Error;
use crate::MAX_PLAYERS;
use crate::Probability;
use crate::Result;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Oracle;
use crate::classes::HandClass;

/// Equity of a hand class against `opponents` random hands.
///
/// Each of the `k` best hands at showdown takes `1/k` of the pot; the hero
/// scores only when it is among them. More opponents never help.
pub fn multiway<O>(
    class: &HandClass,
    opponents: usize,
    sims: usize,
    seed: Option<u64>,
    oracle: &O,
) -> Result<Probability>
where
    O: Oracle + Sync,
{
    if !(1..MAX_PLAYERS).contains(&opponents) {
        return Err(Error::Opponents(opponents));
    }
    let trials = Trials::new(sims, seed)?;
    log::debug!(
        "multiway {} vs {} over {} trials (seed {})",
        class,
        opponents,
        sims,
        trials.seed()
    );
    trials
        .run(Score::default, |rng, score| {
            let mut deck = Deck::new();
            deck.shuffle(rng);
            let hero = class.sample(Hand::empty(), rng)?;
            deck.exclude(Hand::from(hero));
            let holes = std::iter::once(Ok(hero))
                .chain((0..opponents).map(|_| deck.hole()))
                .collect::<Result<Vec<_>>>()?;
            let board = deck.deal(5)?;
            let strengths = holes
                .iter()
                .enumerate()
                .map(|(seat, hole)| Ok((seat, oracle.evaluate(&seven(hole, &board))?)))
                .collect::<Result<Vec<_>>>()?;
            let showdown = Showdown::from(strengths);
            if showdown.contains(0) {
                *score += showdown.share();
            }
            Ok(())
        })
        .map(|score| score.probability(sims))
}
