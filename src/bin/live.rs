//! Live Odds Binary
//!
//! Tracks one hand street by street, re-estimating every seat's equity
//! after each card and each fold.

use anyhow::Result;
use colored::Colorize;
use dialoguer::Input;
use dialoguer::Select;
use oddsmaker::cards::Card;
use oddsmaker::cards::Street;
use oddsmaker::live::Outcome;
use oddsmaker::live::Session;
use oddsmaker::*;

fn main() -> Result<()> {
    log();
    println!("{}", "Live poker odds calculator".bold());
    println!("All players' hole cards must be known.\n");
    let players = Input::<usize>::new()
        .with_prompt("How many players? (2-6)")
        .validate_with(|n: &usize| -> std::result::Result<(), &str> {
            match (MIN_PLAYERS..=MAX_PLAYERS).contains(n) {
                true => Ok(()),
                false => Err("Enter a number between 2 and 6"),
            }
        })
        .interact_text()?;
    let mut session = Session::new(players)?;
    println!("\nEnter hole cards for each player (format: As Kh)");
    for seat in 0..players {
        retry(&name(seat), |cards| session.add_player_hand(cards))?;
    }
    report(&session)?;
    loop {
        if session.active_players().len() == 1 || session.street() == Street::Rive {
            return finish(&session);
        }
        let next = match session.street() {
            Street::Pref => "Deal the flop",
            Street::Flop => "Deal the turn",
            _ => "Deal the river",
        };
        match Select::new()
            .with_prompt("Next")
            .items(&[next, "Fold a player", "Quit"])
            .default(0)
            .interact()?
        {
            0 => deal(&mut session)?,
            1 => fold(&mut session)?,
            _ => return Ok(()),
        }
        report(&session)?;
    }
}

/// prompts until the cards parse and the session accepts them
fn retry<F>(prompt: &str, mut apply: F) -> Result<()>
where
    F: FnMut(&[Card]) -> oddsmaker::Result<()>,
{
    loop {
        let text = Input::<String>::new().with_prompt(prompt).interact_text()?;
        match Card::parse(&text).and_then(|cards| apply(&cards)) {
            Ok(()) => return Ok(()),
            Err(e) => eprintln!("{}", format!("Error: {}", e).red()),
        }
    }
}

fn deal(session: &mut Session) -> Result<()> {
    match session.street() {
        Street::Pref => retry("Flop (3 cards, e.g. Kc 7d 2h)", |cards| {
            session.deal_flop(cards)
        }),
        Street::Flop => retry("Turn (1 card)", |cards| match cards {
            [card] => session.deal_turn(*card),
            _ => Err(Error::Cardinality {
                what: "turn",
                expected: 1,
                actual: cards.len(),
            }),
        }),
        _ => retry("River (1 card)", |cards| match cards {
            [card] => session.deal_river(*card),
            _ => Err(Error::Cardinality {
                what: "river",
                expected: 1,
                actual: cards.len(),
            }),
        }),
    }
}

fn fold(session: &mut Session) -> Result<()> {
    let active = session.active_players();
    let names = active.iter().map(|i| name(*i)).collect::<Vec<_>>();
    let choice = Select::new()
        .with_prompt("Who folds?")
        .items(&names)
        .default(0)
        .interact()?;
    if let Err(e) = session.fold_player(active[choice]) {
        eprintln!("{}", format!("Error: {}", e).red());
    }
    Ok(())
}

fn sims(street: Street) -> usize {
    match street {
        Street::Pref => LIVE_SIMS_PREFLOP,
        Street::Flop => LIVE_SIMS_FLOP,
        _ => LIVE_SIMS_TURN,
    }
}

fn report(session: &Session) -> Result<Outcome> {
    let outcome = session.calculate_equities(sims(session.street()), None)?;
    println!();
    if !session.board().is_empty() {
        println!("Board: {}", session.board().to_string().bold());
    }
    println!("--- {} equities ---", session.street().to_string().to_uppercase());
    for (seat, hole) in session.holes().iter().enumerate() {
        let equity = outcome.equity(seat);
        let label = session
            .category(seat)?
            .map(|c| format!(" ({})", c))
            .unwrap_or_default();
        let line = format!(
            "{:<10} [{}]  {:>5.1}%  {}{}",
            name(seat),
            hole,
            equity * 100.,
            bar(equity),
            label
        );
        match session.folded().contains(&seat) {
            true => println!("{}", format!("{} folded", line).dimmed()),
            false if outcome.winners().contains(&seat) => println!("{}", line.green()),
            false => println!("{}", line),
        }
    }
    if outcome.split() > 0. {
        println!("split pot {:>5.1}%", outcome.split() * 100.);
    }
    println!();
    Ok(outcome)
}

fn finish(session: &Session) -> Result<()> {
    let outcome = report(session)?;
    match outcome.winner() {
        Some(0) => println!("{}", "You win!".green().bold()),
        Some(seat) => println!("{}", format!("{} wins!", name(seat)).green().bold()),
        None => println!(
            "{}",
            format!(
                "Split pot between: {}",
                outcome
                    .winners()
                    .into_iter()
                    .map(name)
                    .collect::<Vec<_>>()
                    .join(", ")
            )
            .yellow()
            .bold()
        ),
    }
    Ok(())
}

fn name(seat: usize) -> String {
    match seat {
        0 => "You".to_string(),
        n => format!("Player {}", n + 1),
    }
}

fn bar(equity: Probability) -> String {
    let filled = (equity * 30.).round() as usize;
    format!("|{}{}|", "█".repeat(filled), " ".repeat(30 - filled.min(30)))
}
