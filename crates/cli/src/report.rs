// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown results output.
use anyhow::Result;
use std::io::Write;

use trips_eval::{Entry, Showdown};

/// Output format options.
#[derive(Debug, Default, Clone, Copy)]
pub struct Format {
    /// Print the showdown as a JSON object.
    pub json: bool,
    /// Print each player hand before the winners.
    pub verbose: bool,
}

/// Writes the showdown result.
///
/// The default output is the winners ids separated by a space on one line.
pub fn write<W: Write>(
    w: &mut W,
    entries: &[Entry],
    showdown: &Showdown,
    format: &Format,
) -> Result<()> {
    if format.json {
        serde_json::to_writer(&mut *w, showdown)?;
        writeln!(w)?;
        return Ok(());
    }

    if format.verbose {
        for entry in entries {
            writeln!(w, "{:>4}: {}  {}", entry.player, entry.hand, entry.hand.rank())?;
        }

        let tie = if showdown.is_tie() { " (tie)" } else { "" };
        writeln!(w, "Winning hand: {}{tie}", showdown.rank())?;
    }

    writeln!(w, "{}", winners_line(showdown))?;
    Ok(())
}

/// The winners ids separated by a space.
pub fn winners_line(showdown: &Showdown) -> String {
    showdown
        .winners()
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
