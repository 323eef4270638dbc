//! Bench command handler for hand evaluation performance benchmarking.
//!
//! Deals 7-card hands from a deterministically seeded deck, then times
//! sequential evaluation and batch evaluation over the same hands.

use crate::config;
use crate::error::CliError;
use fairdeal_engine::cards::Card;
use fairdeal_engine::deck::Deck;
use fairdeal_engine::hand::{evaluate, evaluate_batch};
use fairdeal_engine::rng::{RandomSource, SEED_LEN};
use fairdeal_engine::shuffle::{HandContext, shuffle};
use std::io::Write;
use std::time::Instant;
use uuid::Uuid;

/// Handle the bench command.
///
/// `iterations` overrides the configured `bench_iterations`.
pub fn handle_bench_command(iterations: Option<u32>, out: &mut dyn Write) -> Result<(), CliError> {
    let n = match iterations {
        Some(0) => return Err(CliError::InvalidInput("iterations must be >0".into())),
        Some(n) => n,
        None => {
            config::load()
                .map_err(|e| CliError::Config(e.to_string()))?
                .bench_iterations
        }
    };
    let hands = deal_hands(n as usize);

    let start = Instant::now();
    for h in &hands {
        std::hint::black_box(evaluate(h));
    }
    let sequential = start.elapsed();

    let start = Instant::now();
    let batch = evaluate_batch(&hands);
    let batched = start.elapsed();

    writeln!(out, "Benchmark: {} iters in {:?}", hands.len(), sequential)?;
    writeln!(out, "Batch: {} hands in {:?}", batch.len(), batched)?;
    Ok(())
}

fn deal_hands(n: usize) -> Vec<[Card; 7]> {
    let mut rng = RandomSource::from_seed(&[1; SEED_LEN]);
    let ctx = HandContext::new(Uuid::nil());
    let mut deck = Deck::new();
    shuffle(&mut deck, &mut rng, ctx);
    let mut hands = Vec::with_capacity(n);
    while hands.len() < n {
        if deck.remaining() < 7 {
            shuffle(&mut deck, &mut rng, ctx);
        }
        let dealt: Vec<Card> = (0..7).filter_map(|_| deck.deal()).collect();
        if let Ok(hand) = <[Card; 7]>::try_from(dealt) {
            hands.push(hand);
        }
    }
    hands
}
