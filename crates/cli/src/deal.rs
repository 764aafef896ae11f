// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Random rounds dealing.
use anyhow::{Result, anyhow};
use log::debug;
use rand::Rng;
use std::io::Write;

use trips_eval::{Deck, Entry, Hand};

/// Deals a hand to each player from a shuffled deck, players ids start from 0.
pub fn deal_round<R: Rng + ?Sized>(rng: &mut R, players: usize) -> Result<Vec<Entry>> {
    let mut deck = Deck::new_and_shuffled(rng);

    (0..players)
        .map(|id| -> Result<Entry> {
            let mut deal = || {
                deck.deal()
                    .ok_or_else(|| anyhow!("Not enough cards for {players} players"))
            };

            let hand = Hand::new([deal()?, deal()?, deal()?]);
            debug!("Dealt {hand} to player {id}");
            Ok(Entry::new(id as i64, hand))
        })
        .collect()
}

/// Writes a round in the same format read by the CLI.
pub fn write_round<W: Write>(w: &mut W, entries: &[Entry]) -> Result<()> {
    writeln!(w, "{}", entries.len())?;
    for entry in entries {
        writeln!(w, "{} {}", entry.player, entry.hand)?;
    }

    Ok(())
}
