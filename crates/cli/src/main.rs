// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Trips CLI, reads a round of 3 cards hands and prints the winners.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::{SeedableRng, rngs::StdRng};
use std::{
    fs,
    io::{self, Read},
    path::PathBuf,
};

use trips_eval::{parse_round, resolve_winners};

pub mod deal;
pub mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// Read the round from this file instead of stdin.
    #[clap(long, short)]
    input: Option<PathBuf>,
    /// Deal a random round for this number of players.
    #[clap(long, conflicts_with = "input", value_parser = clap::value_parser!(u8).range(1..=17))]
    deal: Option<u8>,
    /// The seed used to deal a reproducible round.
    #[clap(long, requires = "deal")]
    seed: Option<u64>,
    /// Print the result as JSON.
    #[clap(long)]
    json: bool,
    /// Print each player hand and enable debug logs.
    #[clap(long, short)]
    verbose: bool,
}

/// Where the round comes from.
#[derive(Debug)]
enum Source {
    Stdin,
    File(PathBuf),
    Deal { players: usize, seed: Option<u64> },
}

/// The CLI configuration.
#[derive(Debug)]
struct Config {
    source: Source,
    format: report::Format,
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let source = match (cli.deal, cli.input) {
            (Some(players), _) => Source::Deal {
                players: players as usize,
                seed: cli.seed,
            },
            (None, Some(path)) => Source::File(path),
            (None, None) => Source::Stdin,
        };

        Config {
            source,
            format: report::Format {
                json: cli.json,
                verbose: cli.verbose,
            },
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    run(Config::from(cli))
}

fn run(config: Config) -> Result<()> {
    let mut stdout = io::stdout().lock();

    let entries = match config.source {
        Source::Stdin => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read stdin")?;
            parse_round(&text).context("Invalid round")?
        }
        Source::File(path) => {
            let text = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            parse_round(&text).with_context(|| format!("Invalid round in {}", path.display()))?
        }
        Source::Deal { players, seed } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };

            let entries = deal::deal_round(&mut rng, players)?;
            if !config.format.json {
                deal::write_round(&mut stdout, &entries)?;
            }

            entries
        }
    };

    info!("Evaluating {} hands", entries.len());

    let showdown = resolve_winners(&entries)?;
    report::write(&mut stdout, &entries, &showdown, &config.format)
}
