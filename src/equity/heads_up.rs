use super::Score;
use super::Trials;
use super::seven;
use crate::Probability;
use crate::Result;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Oracle;
use crate::classes::HandClass;
use std::cmp::Ordering;

/// All-in equity of a hand class against one random hand.
///
/// Each trial shuffles a fresh deck, samples the hero from the class with
/// nothing excluded, then deals the villain two and the board five off the
/// top of what's left. Wins score 1, ties 1/2.
pub fn heads_up<O>(class: &HandClass, sims: usize, seed: Option<u64>, oracle: &O) -> Result<Probability>
where
    O: Oracle + Sync,
{
    let trials = Trials::new(sims, seed)?;
    log::debug!("heads up {} over {} trials (seed {})", class, sims, trials.seed());
    trials
        .run(Score::default, |rng, score| {
            let mut deck = Deck::new();
            deck.shuffle(rng);
            let hero = class.sample(Hand::empty(), rng)?;
            deck.exclude(Hand::from(hero));
            let villain = deck.hole()?;
            let board = deck.deal(5)?;
            let hero = oracle.evaluate(&seven(&hero, &board))?;
            let villain = oracle.evaluate(&seven(&villain, &board))?;
            *score += match hero.cmp(&villain) {
                Ordering::Greater => Score::win(),
                Ordering::Equal => Score::tie(),
                Ordering::Less => Score::default(),
            };
            Ok(())
        })
        .map(|score| score.probability(sims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;
    use crate::cards::Holdem;

    fn equity(class: &str, sims: usize, seed: u64) -> Probability {
        heads_up(&HandClass::try_from(class).unwrap(), sims, Some(seed), &Holdem).unwrap()
    }

    #[test]
    fn aces_vs_random() {
        let e = equity("AA", 50_000, 42);
        assert!((0.83..=0.87).contains(&e), "AA equity {e}");
    }

    #[test]
    fn seven_deuce_vs_random() {
        let e = equity("72o", 50_000, 42);
        assert!((0.33..=0.37).contains(&e), "72o equity {e}");
    }

    #[test]
    fn seeded_repeat() {
        assert_eq!(equity("KQs", 3000, 5), equity("KQs", 3000, 5));
    }

    #[test]
    fn zero_sims() {
        let class = HandClass::try_from("AA").unwrap();
        assert_eq!(heads_up(&class, 0, None, &Holdem), Err(Error::Simulations));
    }
}
