// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown winners resolution.
use log::debug;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};
use thiserror::Error;

use crate::{
    Hand,
    hand::{HandRank, compare_within_category},
};

/// Errors returned by the evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EvalError {
    /// No hands to evaluate.
    #[error("no hands to evaluate")]
    EmptyInput,
}

/// A player identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(i64);

impl PlayerId {
    /// Creates a player id.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// The integer id.
    pub fn id(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A player hand in a round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry {
    /// The player holding the hand.
    pub player: PlayerId,
    /// The player hand.
    pub hand: Hand,
}

impl Entry {
    /// Creates a new entry for the player with the given id.
    pub fn new(id: i64, hand: Hand) -> Self {
        Self {
            player: PlayerId::new(id),
            hand,
        }
    }
}

/// The result of a round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown {
    rank: HandRank,
    winners: Vec<PlayerId>,
}

impl Showdown {
    /// The winning hands category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The winners in input order.
    pub fn winners(&self) -> &[PlayerId] {
        &self.winners
    }

    /// Checks if there is more than one winner.
    pub fn is_tie(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Resolves the winners of a round.
///
/// Only hands in the highest category present compete, the winners are all
/// the players whose hand compares equal to the best hand in that category.
/// Winners are returned in input order.
pub fn resolve_winners(entries: &[Entry]) -> Result<Showdown, EvalError> {
    let rank = entries
        .iter()
        .map(|e| e.hand.rank())
        .max()
        .ok_or(EvalError::EmptyInput)?;

    let contenders = entries.iter().filter(|e| e.hand.rank() == rank);

    // The first best hand seen is the reference, ties don't replace it.
    let mut best: Option<&Hand> = None;
    for entry in contenders.clone() {
        match best {
            Some(hand) if compare_within_category(&entry.hand, hand) != Ordering::Greater => {}
            _ => best = Some(&entry.hand),
        }
    }

    let Some(best) = best else {
        return Err(EvalError::EmptyInput);
    };

    let winners = contenders
        .filter(|e| compare_within_category(&e.hand, best) == Ordering::Equal)
        .map(|e| e.player)
        .collect::<Vec<_>>();

    debug!("{rank} wins with {best}, winners: {winners:?}");

    Ok(Showdown { rank, winners })
}
