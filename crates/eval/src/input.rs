// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Round text input parsing.
//!
//! A round starts with the number of players on its own line followed by one
//! record per player, each with the player id and three cards:
//!
//! ```text
//! 2
//! 0 AS KH TD
//! 1 AC KD TS
//! ```
//!
//! Blank lines are skipped, the whole input is validated before returning
//! any entry.
use log::warn;
use thiserror::Error;

use crate::{Card, Entry, Hand, ParseCardError, PlayerId};

/// Errors returned when parsing a round.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    /// The input has no player count.
    #[error("missing player count")]
    MissingPlayerCount,
    /// The player count is not a positive integer.
    #[error("invalid player count '{0}'")]
    InvalidPlayerCount(String),
    /// A card has an invalid rank character.
    #[error("line {line}: invalid rank in card '{token}'")]
    InvalidRankToken {
        /// The input line number starting from 1.
        line: usize,
        /// The card token.
        token: String,
    },
    /// A card has an invalid suit character.
    #[error("line {line}: invalid suit in card '{token}'")]
    InvalidSuitToken {
        /// The input line number starting from 1.
        line: usize,
        /// The card token.
        token: String,
    },
    /// A record doesn't have the expected format.
    #[error("line {line}: {reason}")]
    MalformedRecord {
        /// The input line number starting from 1.
        line: usize,
        /// What is wrong with the record.
        reason: String,
    },
}

impl InputError {
    fn malformed(line: usize, reason: impl Into<String>) -> Self {
        InputError::MalformedRecord {
            line,
            reason: reason.into(),
        }
    }
}

/// Parses a round from text.
pub fn parse_round(text: &str) -> Result<Vec<Entry>, InputError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty());

    let (mut last_line, count) = lines.next().ok_or(InputError::MissingPlayerCount)?;
    let count = parse_count(count)?;

    let mut entries = Vec::new();
    for (line, record) in lines.by_ref().take(count) {
        entries.push(parse_record(line, record)?);
        last_line = line;
    }

    if entries.len() < count {
        return Err(InputError::malformed(
            last_line + 1,
            format!("missing record, expected {count} players found {}", entries.len()),
        ));
    }

    let extra = lines.count();
    if extra > 0 {
        warn!("Ignoring {extra} lines after the last record");
    }

    Ok(entries)
}

fn parse_count(s: &str) -> Result<usize, InputError> {
    match s.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(InputError::InvalidPlayerCount(s.to_string())),
    }
}

/// Parses a `<player id> <card> <card> <card>` record.
pub fn parse_record(line: usize, record: &str) -> Result<Entry, InputError> {
    let tokens = record.split_whitespace().collect::<Vec<_>>();
    let [id, c1, c2, c3] = tokens.as_slice() else {
        return Err(InputError::malformed(
            line,
            format!(
                "expected a player id and 3 cards, found {} cards",
                tokens.len().saturating_sub(1)
            ),
        ));
    };

    let player = id
        .parse::<i64>()
        .map(PlayerId::new)
        .map_err(|_| InputError::malformed(line, format!("invalid player id '{id}'")))?;

    let cards = [
        parse_card(line, c1)?,
        parse_card(line, c2)?,
        parse_card(line, c3)?,
    ];

    Ok(Entry {
        player,
        hand: Hand::new(cards),
    })
}

fn parse_card(line: usize, token: &str) -> Result<Card, InputError> {
    token.parse::<Card>().map_err(|e| match e {
        ParseCardError::InvalidRank(_) => InputError::InvalidRankToken {
            line,
            token: token.to_string(),
        },
        ParseCardError::InvalidSuit(_) => InputError::InvalidSuitToken {
            line,
            token: token.to_string(),
        },
        ParseCardError::InvalidLength(_) => InputError::malformed(line, e.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::HandRank;

    #[test]
    fn parse_valid_round() {
        let entries = parse_round("2\n0 AS KH TD\n1 AC KD TS\n").unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].player, PlayerId::new(0));
        assert_eq!(entries[0].hand.to_string(), "TD KH AS");
        assert_eq!(entries[1].player, PlayerId::new(1));
        assert_eq!(entries[1].hand.rank(), HandRank::HighCard);
    }

    #[test]
    fn parse_skips_blank_lines() {
        let entries = parse_round("\n  3  \n\n7 2s 2h 3d\n\n-1 qc kc ac\n 42 4♥ 4♦ 4♠ \n").unwrap();
        let ids = entries.iter().map(|e| e.player.id()).collect::<Vec<_>>();
        assert_eq!(ids, vec![7, -1, 42]);
        assert_eq!(entries[1].hand.rank(), HandRank::StraightFlush);
        assert_eq!(entries[2].hand.rank(), HandRank::ThreeOfAKind);
    }

    #[test]
    fn parse_ignores_trailing_lines() {
        let entries = parse_round("1\n0 AS KH TD\n1 AC KD TS\n").unwrap();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn player_count_errors() {
        assert_eq!(parse_round(""), Err(InputError::MissingPlayerCount));
        assert_eq!(parse_round(" \n\n"), Err(InputError::MissingPlayerCount));
        assert_eq!(
            parse_round("0\n"),
            Err(InputError::InvalidPlayerCount("0".to_string()))
        );
        assert_eq!(
            parse_round("-2\n"),
            Err(InputError::InvalidPlayerCount("-2".to_string()))
        );
        assert_eq!(
            parse_round("two\n0 AS KH TD\n"),
            Err(InputError::InvalidPlayerCount("two".to_string()))
        );
        assert_eq!(
            parse_round("1 0 AS KH TD\n"),
            Err(InputError::InvalidPlayerCount("1 0 AS KH TD".to_string()))
        );
    }

    #[test]
    fn invalid_rank_token() {
        assert_eq!(
            parse_round("2\n0 AS KH TD\n1 AC 1D TS\n"),
            Err(InputError::InvalidRankToken {
                line: 3,
                token: "1D".to_string()
            })
        );
    }

    #[test]
    fn invalid_suit_token() {
        assert_eq!(
            parse_round("1\n0 AS KX TD\n"),
            Err(InputError::InvalidSuitToken {
                line: 2,
                token: "KX".to_string()
            })
        );
    }

    #[test]
    fn malformed_records() {
        let err = parse_round("1\n0 AS KH\n").unwrap_err();
        assert!(matches!(err, InputError::MalformedRecord { line: 2, .. }));

        let err = parse_round("1\n0 AS KH TD QC\n").unwrap_err();
        assert!(matches!(err, InputError::MalformedRecord { line: 2, .. }));

        let err = parse_round("1\n0 AS KH 10D\n").unwrap_err();
        assert!(matches!(err, InputError::MalformedRecord { line: 2, .. }));

        let err = parse_round("1\nP1 AS KH TD\n").unwrap_err();
        assert!(matches!(err, InputError::MalformedRecord { line: 2, .. }));
    }

    #[test]
    fn missing_records() {
        let err = parse_round("3\n0 AS KH TD\n1 AC KD TS\n").unwrap_err();
        assert_eq!(
            err,
            InputError::MalformedRecord {
                line: 4,
                reason: "missing record, expected 3 players found 2".to_string()
            }
        );
    }

    #[test]
    fn huge_player_count() {
        let err = parse_round("9999999999999999\n0 AS KH TD\n").unwrap_err();
        assert_eq!(
            err,
            InputError::MalformedRecord {
                line: 3,
                reason: "missing record, expected 9999999999999999 players found 1".to_string()
            }
        );
    }
}
