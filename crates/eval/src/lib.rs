// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Trips 3-card poker hand evaluator.
//!
//! A [Hand] holds 3 cards sorted by rank and its [HandRank] category, from the
//! lowest to the highest: high card, pair, flush, straight, three of a kind,
//! and straight flush. Aces are high only so `QKA` is a straight and `A23` is
//! not.
//!
//! To find the winners of a round create an [Entry] for each player and call
//! [resolve_winners], ties return all the tied players:
//!
//! ```
//! # use trips_eval::*;
//! let hand = |s: &str| {
//!     let cards = s.split_whitespace().map(|c| c.parse::<Card>().unwrap());
//!     Hand::new(cards.collect::<Vec<_>>().try_into().unwrap())
//! };
//!
//! let entries = [
//!     Entry::new(0, hand("AS KH TD")),
//!     Entry::new(1, hand("AC KD TS")),
//!     Entry::new(2, hand("2C 9D KS")),
//! ];
//!
//! let showdown = resolve_winners(&entries).unwrap();
//! assert_eq!(showdown.rank(), HandRank::HighCard);
//! assert_eq!(showdown.winners(), &[PlayerId::new(0), PlayerId::new(1)]);
//! ```
//!
//! Rounds in text form can be parsed with [parse_round].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod hand;
pub use hand::{Hand, HandRank, PairKey, classify, compare_within_category};

pub mod input;
pub use input::{InputError, parse_round};

pub mod showdown;
pub use showdown::{Entry, EvalError, PlayerId, Showdown, resolve_winners};

// Reexport cards types.
pub use trips_cards::{Card, Deck, ParseCardError, Rank, Suit};
