// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Trips cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use trips_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let td: Card = "TD".parse().unwrap();
//! assert!(ah.rank() > td.rank());
//! ```
//!
//! and a [Deck] type for shuffling, dealing, and iterating cards in the deck.
//!
//! For example to iterate through all 3 cards hands:
//!
//! ```
//! # use trips_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(3, |hand| {
//!     assert_eq!(hand.len(), 3);
//!     counter += 1;
//! });
//! assert_eq!(counter, 22_100);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, Deck, ParseCardError, Rank, Suit};
