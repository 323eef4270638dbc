//! Eval command handler: showdown evaluation of 7-card hands.
//!
//! Each `--hand` is seven cards in short notation. Every hand is evaluated,
//! printed with its category and tie-breakers, and the winning set is reported
//! (more than one index means a split pot).

use crate::error::CliError;
use crate::ui;
use fairdeal_engine::cards::{Card, parse_cards};
use fairdeal_engine::hand::{EvaluatedHand, evaluate, winners};
use std::collections::HashSet;
use std::io::Write;

/// Handle the eval command.
///
/// # Errors
///
/// Returns `CliError::InvalidInput` if a hand does not hold exactly seven
/// distinct, well-formed cards.
pub fn handle_eval_command(hands: &[String], out: &mut dyn Write) -> Result<(), CliError> {
    let parsed = hands
        .iter()
        .enumerate()
        .map(|(i, h)| {
            parse_hand(h).map_err(|e| CliError::InvalidInput(format!("hand {}: {}", i + 1, e)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    for (i, cards) in parsed.iter().enumerate() {
        let evaluated = evaluate(cards);
        writeln!(
            out,
            "Hand {}: {} => {}",
            i + 1,
            ui::format_cards(cards),
            describe(&evaluated)
        )?;
    }

    let best: Vec<String> = winners(&parsed)
        .into_iter()
        .map(|i| (i + 1).to_string())
        .collect();
    if best.len() > 1 {
        writeln!(out, "Split pot: {}", best.join(", "))?;
    } else {
        writeln!(out, "Winner: {}", best.join(", "))?;
    }
    Ok(())
}

fn parse_hand(s: &str) -> Result<[Card; 7], String> {
    let cards = parse_cards(s).map_err(|e| e.to_string())?;
    let unique: HashSet<Card> = cards.iter().copied().collect();
    if unique.len() != cards.len() {
        return Err("duplicate card".to_string());
    }
    let n = cards.len();
    cards
        .try_into()
        .map_err(|_| format!("expected 7 cards, got {}", n))
}

fn describe(h: &EvaluatedHand) -> String {
    let ranks: Vec<String> = h
        .tie_breaker
        .iter()
        .map(|r| r.symbol().to_string())
        .collect();
    format!("{} [{}]", h.category.name(), ranks.join(" "))
}
