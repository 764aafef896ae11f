// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! 3 cards hands, categories and comparison.
//!
//! A [Hand] keeps its cards sorted by rank and computes its [HandRank] once at
//! construction. Hands of the same category are compared with
//! [compare_within_category], the high card first, then the middle and low
//! cards, except for pairs with the same [PairKey] that are always equal.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use crate::{Card, Rank};

/// The category of a 3 cards hand.
///
/// Categories are ordered by [HandRank::priority], from the lowest
/// [HandRank::HighCard] to the highest [HandRank::StraightFlush].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HandRank {
    /// No pair, straight, or flush.
    HighCard,
    /// Two cards of the same rank.
    Pair,
    /// Three cards of the same suit.
    Flush,
    /// Three consecutive ranks, aces are high only.
    Straight,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Three consecutive ranks of the same suit.
    StraightFlush,
}

impl HandRank {
    /// All categories from the lowest to the highest.
    pub const ALL: [HandRank; 6] = [
        HandRank::HighCard,
        HandRank::Pair,
        HandRank::Flush,
        HandRank::Straight,
        HandRank::ThreeOfAKind,
        HandRank::StraightFlush,
    ];

    /// The category priority, a higher value beats a lower one.
    pub const fn priority(self) -> u8 {
        match self {
            HandRank::HighCard => 0,
            HandRank::Pair => 1,
            HandRank::Flush => 2,
            HandRank::Straight => 3,
            HandRank::ThreeOfAKind => 4,
            HandRank::StraightFlush => 5,
        }
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority().cmp(&other.priority())
    }
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HandRank::HighCard => "High Card",
            HandRank::Pair => "Pair",
            HandRank::Flush => "Flush",
            HandRank::Straight => "Straight",
            HandRank::ThreeOfAKind => "Three of a Kind",
            HandRank::StraightFlush => "Straight Flush",
        };

        write!(f, "{s}")
    }
}

/// The rank of the pair in a hand with exactly one pair.
///
/// With 3 cards sorted by rank and exactly two of them sharing a rank the
/// repeated rank is always the middle card: either `x x y` or `y x x`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PairKey(Rank);

impl PairKey {
    /// Gets the pair key from rank sorted cards, `None` if there is not
    /// exactly one pair.
    pub fn from_sorted(cards: &[Card; 3]) -> Option<Self> {
        let [lo, mid, hi] = cards.map(|c| c.rank());
        let is_pair = (lo == mid) != (mid == hi);
        is_pair.then_some(PairKey(mid))
    }

    /// The rank of the pair.
    pub fn rank(&self) -> Rank {
        self.0
    }
}

/// A 3 cards poker hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hand {
    cards: [Card; 3],
    rank: HandRank,
}

impl Hand {
    /// The number of cards in a hand.
    pub const SIZE: usize = 3;

    /// Creates a hand sorting the cards by rank.
    pub fn new(mut cards: [Card; 3]) -> Self {
        // Stable sort so equal ranks keep their input order.
        cards.sort_by_key(|c| c.rank());
        let rank = category(&cards);
        Self { cards, rank }
    }

    /// The cards sorted from the lowest to the highest rank.
    pub fn cards(&self) -> &[Card; 3] {
        &self.cards
    }

    /// The hand category.
    pub fn rank(&self) -> HandRank {
        self.rank
    }

    /// The pair key if this hand is a pair.
    pub fn pair_key(&self) -> Option<PairKey> {
        match self.rank {
            HandRank::Pair => PairKey::from_sorted(&self.cards),
            _ => None,
        }
    }
}

impl From<[Card; 3]> for Hand {
    fn from(cards: [Card; 3]) -> Self {
        Hand::new(cards)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [c1, c2, c3] = self.cards;
        write!(f, "{c1} {c2} {c3}")
    }
}

/// Computes the category of a hand.
pub fn classify(hand: &Hand) -> HandRank {
    category(hand.cards())
}

/// Computes the category of rank sorted cards.
fn category(cards: &[Card; 3]) -> HandRank {
    let [lo, mid, hi] = cards.map(|c| c.rank().ordinal());

    let straight = mid == lo + 1 && hi == lo + 2;
    let flush = cards[0].suit() == cards[1].suit() && cards[0].suit() == cards[2].suit();

    if straight && flush {
        HandRank::StraightFlush
    } else if lo == hi {
        HandRank::ThreeOfAKind
    } else if straight {
        HandRank::Straight
    } else if flush {
        HandRank::Flush
    } else if lo == mid || mid == hi {
        HandRank::Pair
    } else {
        HandRank::HighCard
    }
}

/// Compares two hands of the same category.
///
/// Hands compare the high, middle, and low card in this order, suits are
/// never compared. Pairs with the same [PairKey] are equal whatever the third
/// card, pairs with different keys use the high, middle, low rule.
pub fn compare_within_category(a: &Hand, b: &Hand) -> Ordering {
    debug_assert_eq!(a.rank(), b.rank(), "hands must have the same category");

    if a.pair_key().is_some() && a.pair_key() == b.pair_key() {
        return Ordering::Equal;
    }

    let ranks = |h: &Hand| {
        let [lo, mid, hi] = h.cards().map(|c| c.rank());
        [hi, mid, lo]
    };

    ranks(a).cmp(&ranks(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Deck, Suit};
    use ahash::HashSet;

    fn hand(s: &str) -> Hand {
        let cards = s
            .split_whitespace()
            .map(|t| t.parse::<Card>().unwrap())
            .collect::<Vec<_>>();
        Hand::new(cards.try_into().unwrap())
    }

    #[test]
    fn hand_sorted_by_rank() {
        let h = hand("AS 2H TD");
        assert_eq!(h.to_string(), "2H TD AS");

        // Equal ranks keep their suits and input order.
        let h = hand("7C 2H 7D");
        assert_eq!(h.to_string(), "2H 7C 7D");
        assert_eq!(h.cards()[1].suit(), Suit::Clubs);
        assert_eq!(h.cards()[2].suit(), Suit::Diamonds);
    }

    #[test]
    fn category_priority() {
        use HandRank::*;
        let expected = [StraightFlush, ThreeOfAKind, Straight, Flush, Pair, HighCard];
        assert!(expected.windows(2).all(|w| w[0] > w[1]));

        let mut ranks = HandRank::ALL.to_vec();
        ranks.sort();
        assert_eq!(ranks, HandRank::ALL);
        assert!(Straight > Flush);
    }

    #[test]
    fn classify_hands() {
        assert_eq!(hand("QS KH AD").rank(), HandRank::Straight);
        assert_eq!(hand("AS 2H 3D").rank(), HandRank::HighCard);
        assert_eq!(hand("AS 2S 3S").rank(), HandRank::Flush);
        assert_eq!(hand("AS AH 3D").rank(), HandRank::Pair);
        assert_eq!(hand("9H TH JH").rank(), HandRank::StraightFlush);
        assert_eq!(hand("QC KC AC").rank(), HandRank::StraightFlush);
        assert_eq!(hand("KS KH KD").rank(), HandRank::ThreeOfAKind);
        assert_eq!(hand("2S 9S 5S").rank(), HandRank::Flush);
        assert_eq!(hand("4D 2S 3C").rank(), HandRank::Straight);
        assert_eq!(hand("2S 7H 9D").rank(), HandRank::HighCard);
        assert_eq!(hand("7S 7H 2D").rank(), HandRank::Pair);
        assert_eq!(hand("7S 7H 9D").rank(), HandRank::Pair);
    }

    #[test]
    fn classify_is_pure() {
        let h = hand("JD 9D TD");
        assert_eq!(classify(&h), classify(&h));
        assert_eq!(classify(&h), h.rank());

        // Input order doesn't matter, the hand sorts its cards.
        assert_eq!(classify(&hand("KS QS AS")), HandRank::StraightFlush);
    }

    #[test]
    fn compare_default_rule() {
        // High card decides.
        let a = hand("2S 5H KD");
        let b = hand("JS QH 3D");
        assert_eq!(compare_within_category(&a, &b), Ordering::Greater);

        // Then the middle card.
        let a = hand("2S 9H KD");
        let b = hand("7S 8H KC");
        assert_eq!(compare_within_category(&a, &b), Ordering::Greater);

        // Then the low card.
        let a = hand("3S 9H KD");
        let b = hand("2S 9D KC");
        assert_eq!(compare_within_category(&a, &b), Ordering::Greater);
        assert_eq!(compare_within_category(&b, &a), Ordering::Less);

        // Suits don't matter.
        let a = hand("AS KH TD");
        let b = hand("AC KD TS");
        assert_eq!(compare_within_category(&a, &b), Ordering::Equal);
    }

    #[test]
    fn compare_pairs() {
        let a = hand("7S 7H 2D");
        let b = hand("7C 7D 9S");
        assert_eq!(a.cards()[1].rank(), Rank::Seven);
        assert_eq!(b.cards()[1].rank(), Rank::Seven);
        assert_eq!(compare_within_category(&a, &b), Ordering::Equal);
        assert_eq!(compare_within_category(&b, &a), Ordering::Equal);

        // Different pairs use the high card first.
        let c = hand("8S 8H 2D");
        assert_eq!(compare_within_category(&c, &b), Ordering::Less);
        assert_eq!(compare_within_category(&c, &a), Ordering::Greater);

        let d = hand("3S 3H AD");
        assert_eq!(compare_within_category(&d, &a), Ordering::Greater);

        // Same high card, middle card decides.
        let e = hand("KS KH 2D");
        let f = hand("2S 2H KD");
        assert_eq!(compare_within_category(&e, &f), Ordering::Greater);
    }

    #[test]
    fn pair_key_is_middle_card() {
        let mut pairs = 0;
        Deck::default().for_each(3, |cards| {
            let h = Hand::new([cards[0], cards[1], cards[2]]);
            let ranks = h.cards().map(|c| c.rank());
            let distinct = ranks.iter().collect::<HashSet<_>>().len();

            if distinct == 2 {
                pairs += 1;
                let key = h.pair_key().unwrap();
                assert_eq!(key.rank(), ranks[1]);
                assert_eq!(ranks.iter().filter(|&&r| r == key.rank()).count(), 2);
            } else {
                assert_eq!(h.pair_key(), None);
            }
        });

        assert_eq!(pairs, 3_744);
    }

    #[test]
    fn category_counts() {
        let mut counts = [0usize; 6];
        Deck::default().for_each(3, |cards| {
            let h = Hand::new([cards[0], cards[1], cards[2]]);
            counts[h.rank().priority() as usize] += 1;
        });

        assert_eq!(counts[HandRank::HighCard.priority() as usize], 16_440);
        assert_eq!(counts[HandRank::Pair.priority() as usize], 3_744);
        assert_eq!(counts[HandRank::Flush.priority() as usize], 1_096);
        assert_eq!(counts[HandRank::Straight.priority() as usize], 720);
        assert_eq!(counts[HandRank::ThreeOfAKind.priority() as usize], 52);
        assert_eq!(counts[HandRank::StraightFlush.priority() as usize], 48);
    }

    #[test]
    fn category_order() {
        let rank = |s: &str| hand(s).rank();
        assert!(rank("QS KH AD") > rank("2S 3S 5S"));
        assert!(rank("2S 3S 5S") > rank("AS AH KD"));
        assert!(rank("2S 3H 4D") > rank("AS AH KD"));
        assert!(rank("2S 2H 3D") > rank("AS KH JD"));
        assert!(rank("2S 3S 4S") > rank("AS AH AD"));
    }
}
