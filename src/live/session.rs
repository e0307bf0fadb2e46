use super::outcome::Method;
use super::outcome::Outcome;
use crate::Error;
use crate::MAX_PLAYERS;
use crate::MIN_PLAYERS;
use crate::Probability;
use crate::Result;
use crate::cards::Board;
use crate::cards::Card;
use crate::cards::Deck;
use crate::cards::Hand;
use crate::cards::Hole;
use crate::cards::Holdem;
use crate::cards::Oracle;
use crate::cards::Rank;
use crate::cards::Street;
use crate::equity::Showdown;
use crate::equity::Tally;
use crate::equity::Trials;
use crate::equity::seven;
use std::collections::BTreeSet;

/// One hand of live poker, tracked card by card.
///
/// Hole cards are appended seat by seat, the board grows along
/// preflop, flop, turn, river, and seats can fold at any point. Every
/// card ever committed stays in `known`, folded seats included, so it can
/// never show up again in a simulated board.
///
/// Every mutating call validates first. A rejected call leaves the session
/// exactly as it was.
#[derive(Debug, Clone)]
pub struct Session<O: Oracle = Holdem> {
    oracle: O,
    players: usize,
    holes: Vec<Hole>,
    board: Board,
    folded: BTreeSet<usize>,
    known: Hand,
}

impl Session<Holdem> {
    pub fn new(players: usize) -> Result<Self> {
        Self::with_oracle(players, Holdem)
    }
}

impl<O: Oracle + Sync> Session<O> {
    pub fn with_oracle(players: usize, oracle: O) -> Result<Self> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&players) {
            return Err(Error::PlayerCount(players));
        }
        Ok(Self {
            oracle,
            players,
            holes: Vec::with_capacity(players),
            board: Board::new(),
            folded: BTreeSet::new(),
            known: Hand::empty(),
        })
    }

    pub fn players(&self) -> usize {
        self.players
    }
    pub fn holes(&self) -> &[Hole] {
        &self.holes
    }
    pub fn board(&self) -> &Board {
        &self.board
    }
    pub fn street(&self) -> Street {
        self.board.street()
    }
    pub fn folded(&self) -> &BTreeSet<usize> {
        &self.folded
    }
    /// every hole card and board card committed so far
    pub fn known(&self) -> Hand {
        self.known
    }
    pub fn is_complete(&self) -> bool {
        self.holes.len() == self.players
    }

    /// seats still in the hand, in seat order
    pub fn active_players(&self) -> Vec<usize> {
        (0..self.players)
            .filter(|i| !self.folded.contains(i))
            .collect()
    }

    pub fn add_player_hand(&mut self, cards: &[Card]) -> Result<()> {
        if cards.len() != 2 {
            return Err(Error::Cardinality {
                what: "hole cards",
                expected: 2,
                actual: cards.len(),
            });
        }
        if self.is_complete() {
            return Err(Error::TableFull(self.players));
        }
        self.check(cards)?;
        let hole = Hole::try_from(cards)?;
        log::debug!("seat {} holds {}", self.holes.len() + 1, hole);
        self.commit(cards);
        self.holes.push(hole);
        Ok(())
    }

    /// Replaces the board with a longer one that keeps what's already dealt.
    pub fn set_board(&mut self, cards: &[Card]) -> Result<()> {
        let street = Street::try_from(cards.len()).map_err(|_| Error::Cardinality {
            what: "board",
            expected: if cards.len() < 3 { 3 } else { 5 },
            actual: cards.len(),
        })?;
        let dealt = self.board.cards();
        if cards.len() < dealt.len() {
            return Err(Error::Sequencing("board cannot shrink"));
        }
        if cards[..dealt.len()] != *dealt {
            return Err(Error::Sequencing("dealt board cards cannot change"));
        }
        if cards.len() == dealt.len() {
            return match street {
                Street::Pref => Ok(()),
                Street::Flop => Err(Error::Sequencing("flop already dealt")),
                Street::Turn => Err(Error::Sequencing("turn already dealt")),
                Street::Rive => Err(Error::Sequencing("river already dealt")),
            };
        }
        let fresh = &cards[dealt.len()..];
        self.check(fresh)?;
        self.deal(fresh);
        Ok(())
    }

    pub fn deal_flop(&mut self, cards: &[Card]) -> Result<()> {
        if !self.board.is_empty() {
            return Err(Error::Sequencing("flop already dealt"));
        }
        if cards.len() != 3 {
            return Err(Error::Cardinality {
                what: "flop",
                expected: 3,
                actual: cards.len(),
            });
        }
        self.check(cards)?;
        self.deal(cards);
        Ok(())
    }

    pub fn deal_turn(&mut self, card: Card) -> Result<()> {
        match self.board.len() {
            3 => {}
            n if n < 3 => return Err(Error::Sequencing("must deal flop before turn")),
            _ => return Err(Error::Sequencing("turn already dealt")),
        }
        self.check(&[card])?;
        self.deal(&[card]);
        Ok(())
    }

    pub fn deal_river(&mut self, card: Card) -> Result<()> {
        match self.board.len() {
            4 => {}
            n if n < 4 => return Err(Error::Sequencing("must deal turn before river")),
            _ => return Err(Error::Sequencing("river already dealt")),
        }
        self.check(&[card])?;
        self.deal(&[card]);
        Ok(())
    }

    /// Folds a seat for the rest of the hand. Its cards stay known.
    pub fn fold_player(&mut self, seat: usize) -> Result<()> {
        if seat >= self.players {
            return Err(Error::PlayerIndex {
                index: seat,
                players: self.players,
            });
        }
        if self.folded.contains(&seat) {
            return Err(Error::AlreadyFolded(seat));
        }
        if self.active_players().len() <= 1 {
            return Err(Error::LastPlayer);
        }
        log::debug!("seat {} folds", seat + 1);
        self.folded.insert(seat);
        Ok(())
    }

    /// Hand category of a seat, once the river is out.
    pub fn category(&self, seat: usize) -> Result<Option<String>> {
        if seat >= self.players {
            return Err(Error::PlayerIndex {
                index: seat,
                players: self.players,
            });
        }
        match (self.holes.get(seat), self.board.street()) {
            (Some(hole), Street::Rive) => self
                .oracle
                .category(&seven(hole, self.board.cards()))
                .map(Some),
            _ => Ok(None),
        }
    }

    /// Equity of every seat.
    ///
    /// A lone active seat takes the pot without a showdown. A complete
    /// board is settled exactly. Anything else is sampled over `sims`
    /// completions of the board, reproducibly so when seeded.
    pub fn calculate_equities(&self, sims: usize, seed: Option<u64>) -> Result<Outcome> {
        if !self.is_complete() {
            return Err(Error::Incomplete {
                expected: self.players,
                actual: self.holes.len(),
            });
        }
        let active = self.active_players();
        match (active.as_slice(), self.board.street()) {
            ([seat], _) => Ok(self.uncontested(*seat)),
            (_, Street::Rive) => self.exact(&active),
            _ => self.sampled(&active, sims, seed),
        }
    }
}

impl<O: Oracle + Sync> Session<O> {
    /// duplicates and rank counts, against everything known plus the batch itself
    fn check(&self, cards: &[Card]) -> Result<()> {
        let mut seen = self.known;
        for card in cards {
            if seen.contains(card) {
                return Err(Error::Duplicate(*card));
            }
            seen.insert(*card);
        }
        for rank in Rank::all() {
            match seen.count_rank(&rank) {
                count if count > 4 => return Err(Error::RankCount { rank, count }),
                _ => {}
            }
        }
        Ok(())
    }
    fn commit(&mut self, cards: &[Card]) {
        for card in cards {
            self.known.insert(*card);
        }
    }
    fn deal(&mut self, cards: &[Card]) {
        self.commit(cards);
        self.board.extend(cards);
        log::debug!("{} {}", self.board.street(), self.board);
    }

    fn uncontested(&self, seat: usize) -> Outcome {
        log::debug!("seat {} uncontested", seat + 1);
        let equities = (0..self.players)
            .map(|i| if i == seat { 1. } else { 0. })
            .collect::<Vec<Probability>>();
        Outcome::new(
            self.street(),
            Method::Uncontested,
            equities.clone(),
            equities,
            0.,
        )
    }

    fn showdown(&self, active: &[usize], board: &[Card]) -> Result<Showdown> {
        active
            .iter()
            .map(|&seat| Ok((seat, self.oracle.evaluate(&seven(&self.holes[seat], board))?)))
            .collect::<Result<Vec<_>>>()
            .map(Showdown::from)
    }

    fn exact(&self, active: &[usize]) -> Result<Outcome> {
        let showdown = self.showdown(active, self.board.cards())?;
        let k = showdown.winners().len() as Probability;
        log::debug!("showdown winners {:?}", showdown.winners());
        let equities = (0..self.players)
            .map(|i| if showdown.contains(i) { 1. / k } else { 0. })
            .collect::<Vec<Probability>>();
        let outright = (0..self.players)
            .map(|i| match showdown.winners() {
                [seat] if *seat == i => 1.,
                _ => 0.,
            })
            .collect::<Vec<Probability>>();
        let split = if showdown.is_split() { 1. } else { 0. };
        Ok(Outcome::new(self.street(), Method::Exact, equities, outright, split))
    }

    fn sampled(&self, active: &[usize], sims: usize, seed: Option<u64>) -> Result<Outcome> {
        let trials = Trials::new(sims, seed)?;
        let missing = self.street().n_missing();
        log::debug!(
            "sampling {} trials of {} board cards around {} known (seed {})",
            sims,
            missing,
            self.known.size(),
            trials.seed()
        );
        let tally = trials.run(
            || Tally::new(self.players),
            |rng, tally| {
                let mut deck = Deck::new();
                deck.shuffle(rng);
                let board = self
                    .board
                    .cards()
                    .iter()
                    .copied()
                    .chain(
                        deck.cards()
                            .iter()
                            .filter(|c| !self.known.contains(c))
                            .take(missing)
                            .copied(),
                    )
                    .collect::<Vec<Card>>();
                tally.record(&self.showdown(active, &board)?);
                Ok(())
            },
        )?;
        let equities = tally
            .shares()
            .iter()
            .map(|s| s.probability(sims))
            .collect::<Vec<Probability>>();
        let outright = tally
            .outright()
            .iter()
            .map(|n| *n as Probability / sims as Probability)
            .collect::<Vec<Probability>>();
        let split = tally.splits() as Probability / sims as Probability;
        Ok(Outcome::new(
            self.street(),
            Method::Sampled { trials: sims },
            equities,
            outright,
            split,
        ))
    }
}
