// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all3
// ...
// Total hands      22100
//
// High Card:       16440
// Pair:            3744
// Flush:           1096
// Straight:        720
// Three of a Kind: 52
// Straight Flush:  48
// ```

use std::time::Instant;

use trips_eval::*;

fn main() {
    // Evaluate all 22100 hands.
    let now = Instant::now();
    let mut counts = [0usize; HandRank::ALL.len()];

    Deck::default().for_each(Hand::SIZE, |cards| {
        let hand = Hand::new([cards[0], cards[1], cards[2]]);
        counts[hand.rank().priority() as usize] += 1;
    });

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.6}s\n", elapsed);

    for rank in HandRank::ALL {
        let label = format!("{rank}:");
        println!("{label:<17}{}", counts[rank.priority() as usize]);
    }
}
