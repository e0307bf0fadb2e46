use super::Score;
use super::Trials;
use super::seven;
use crate::Error;
use crate::Probability;
use crate::Result;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Oracle;
use std::cmp::Ordering;

/// Hero's equity against one known hand, given 0 to 5 known board cards.
///
/// A complete board is a single exact comparison. Otherwise each trial
/// completes the board from a shuffled deck with every known card removed.
pub fn matchup<O>(
    hero: &Hole,
    villain: &Hole,
    board: &[Card],
    sims: usize,
    seed: Option<u64>,
    oracle: &O,
) -> Result<Probability>
where
    O: Oracle + Sync,
{
    if board.len() > 5 {
        return Err(Error::Sequencing("board cannot have more than 5 cards"));
    }
    let mut known = Hand::from(*hero);
    for card in Hand::from(*villain).into_iter().chain(board.iter().copied()) {
        if known.contains(&card) {
            return Err(Error::Duplicate(card));
        }
        known.insert(card);
    }
    let score = |board: &[Card]| -> Result<Score> {
        let hero = oracle.evaluate(&seven(hero, board))?;
        let villain = oracle.evaluate(&seven(villain, board))?;
        Ok(match hero.cmp(&villain) {
            Ordering::Greater => Score::win(),
            Ordering::Equal => Score::tie(),
            Ordering::Less => Score::default(),
        })
    };
    if board.len() == 5 {
        log::debug!("matchup {} vs {} on a complete board", hero, villain);
        return score(board).map(|s| s.probability(1));
    }
    let trials = Trials::new(sims, seed)?;
    log::debug!("matchup {} vs {} over {} trials (seed {})", hero, villain, sims, trials.seed());
    trials
        .run(Score::default, |rng, total| {
            let mut deck = Deck::new();
            deck.shuffle(rng);
            deck.exclude(known);
            let mut full = board.to_vec();
            full.extend(deck.deal(5 - board.len())?);
            *total += score(&full)?;
            Ok(())
        })
        .map(|total| total.probability(sims))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Holdem;

    fn hole(s: &str) -> Hole {
        Hole::try_from(s).unwrap()
    }
    fn cards(s: &str) -> Vec<Card> {
        Card::parse(s).unwrap()
    }

    #[test]
    fn river_is_exact() {
        let board = cards("Ah Kd 7c 4s 2h");
        let win = matchup(&hole("As Qc"), &hole("Kh Qd"), &board, 10, Some(1), &Holdem);
        assert_eq!(win, Ok(1.0));
        let lose = matchup(&hole("Kh Qd"), &hole("As Qc"), &board, 10, Some(1), &Holdem);
        assert_eq!(lose, Ok(0.0));
    }

    #[test]
    fn river_tie_is_half() {
        let board = cards("Ah Kd Qc Js Ts");
        let tie = matchup(&hole("2c 3d"), &hole("4c 5d"), &board, 10, None, &Holdem);
        assert_eq!(tie, Ok(0.5));
    }

    #[test]
    fn river_needs_no_trials() {
        let board = cards("Ah Kd Qc Js 2s");
        let e = matchup(&hole("Ac As"), &hole("Kh Kc"), &board, 0, None, &Holdem);
        assert_eq!(e, Ok(1.0));
        let e = matchup(&hole("Ac As"), &hole("Kh Kc"), &board[..4], 0, None, &Holdem);
        assert_eq!(e, Err(Error::Simulations));
    }

    #[test]
    fn turn_draw_dead() {
        // quads on the turn, villain cannot catch up with one card
        let board = cards("As Ad 7c 2h");
        let e = matchup(&hole("Ah Ac"), &hole("Kh Qh"), &board, 2000, Some(3), &Holdem).unwrap();
        assert_eq!(e, 1.0);
    }

    #[test]
    fn flop_favourite() {
        let board = cards("Ah 7d 2c");
        let e = matchup(&hole("As Ac"), &hole("Kh Kd"), &board, 5000, Some(11), &Holdem).unwrap();
        assert!(e > 0.95, "set over underpair {e}");
    }

    #[test]
    fn preflop_coinflip() {
        let e = matchup(&hole("Qs Qh"), &hole("Ac Kd"), &[], 20_000, Some(8), &Holdem).unwrap();
        assert!((0.52..=0.60).contains(&e), "QQ vs AKo {e}");
    }

    #[test]
    fn rejects_overlap() {
        let err = matchup(&hole("As Kd"), &hole("As Qc"), &[], 100, None, &Holdem);
        assert_eq!(err, Err(Error::Duplicate(Card::try_from("As").unwrap())));
        let err = matchup(&hole("As Kd"), &hole("Jh Qc"), &cards("Kd 2c 3c"), 100, None, &Holdem);
        assert_eq!(err, Err(Error::Duplicate(Card::try_from("Kd").unwrap())));
    }

    #[test]
    fn rejects_long_board() {
        let board = cards("2c 3c 4c 5c 6c 7c");
        let err = matchup(&hole("As Kd"), &hole("Jh Qd"), &board, 100, None, &Holdem);
        assert!(matches!(err, Err(Error::Sequencing(_))));
    }
}
