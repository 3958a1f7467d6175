/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::str::FromStr;

use crate::{Difficulty, Rank, Side};
use clap::{builder::PossibleValue, Parser, ValueEnum};

/// Command-line arguments for launching the engine.
#[derive(Debug, Clone, Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Maximum level of log messages to print.
    #[arg(long, default_value = "warn")]
    pub log_level: log::LevelFilter,

    /// Difficulty the Computer plays at, unless a search says otherwise.
    #[arg(short, long, default_value = "medium")]
    pub difficulty: Difficulty,

    /// Engine commands to execute on startup, in order, before reading from stdin.
    #[arg(short, long = "command", value_name = "COMMAND")]
    pub commands: Vec<String>,
}

/// A command to be sent to the engine.
#[derive(Debug, Clone, Parser)]
#[command(
    multicall = true,
    about,
    rename_all = "lower",
    override_usage("<ENGINE COMMAND>")
)]
pub enum EngineCommand {
    /// Time the search with and without alpha-beta pruning on the current position.
    Bench {
        /// Benchmark only this depth, instead of the depth of every difficulty.
        #[arg(short, long, required = false)]
        depth: Option<usize>,

        /// Number of searches to average over.
        #[arg(short, long, default_value = "3")]
        runs: usize,
    },

    /// Print a visual representation of the current board state.
    #[command(alias = "d")]
    Display,

    /// Change the difficulty the Computer plays at, or display the current difficulty.
    #[command(aliases = ["difficulty", "level"])]
    SetDifficulty {
        /// The difficulty to switch to.
        difficulty: Option<Difficulty>,
    },

    /// Print an evaluation of the current position.
    Eval {
        /// If set, the contribution of every piece will be printed as well.
        #[arg(short, long, default_value = "false")]
        pretty: bool,
    },

    /// Quit the engine.
    #[command(alias = "quit")]
    Exit,

    /// Flips the side-to-move, passing the turn without moving.
    Flip,

    /// Search for the Computer's best move and play it.
    Go {
        /// Search this many plies deep.
        #[arg(short, long, conflicts_with = "difficulty")]
        depth: Option<usize>,

        /// Search at this difficulty, instead of the engine's current difficulty.
        #[arg(short = 'l', long)]
        difficulty: Option<Difficulty>,
    },

    /// Shows all legal moves for the side to move, numbered for use with `play`.
    Moves {
        /// If set, moves will be sorted by square instead of generation order.
        #[arg(short, long, default_value = "false")]
        sort: bool,
    },

    /// Reset the board to the starting position, with the Player to move.
    #[command(aliases = ["new", "reset"])]
    NewGame,

    /// Performs a perft on the current position at the supplied depth, printing total node count.
    Perft { depth: usize },

    /// Place a piece on the provided square.
    Place {
        side: Side,
        rank: Rank,
        row: i32,
        col: i32,
    },

    /// Play the legal move with the provided index, as listed by `moves`.
    ///
    /// If it becomes the Computer's turn, the Computer replies immediately.
    Play {
        index: usize,

        /// If set, the Computer will not reply on its own.
        #[arg(short, long, default_value = "false")]
        manual: bool,
    },

    /// Performs a split perft on the current position at the supplied depth.
    #[command(alias = "sperft")]
    Splitperft { depth: usize },

    /// Remove the piece at the provided square.
    Take { row: i32, col: i32 },
}

impl FromStr for EngineCommand {
    type Err = clap::Error;
    /// Attempt to parse an [`EngineCommand`] from a whitespace-separated string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_parse_from(s.split_ascii_whitespace())
    }
}

impl ValueEnum for Difficulty {
    fn value_variants<'a>() -> &'a [Self] {
        &Difficulty::ALL
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        // Difficulties may also be given by their depth
        let value = match self {
            Difficulty::Easy => PossibleValue::new("easy").alias("2"),
            Difficulty::Medium => PossibleValue::new("medium").alias("4"),
            Difficulty::Hard => PossibleValue::new("hard").alias("8"),
        };

        Some(value.help(format!("{} plies", self.depth())))
    }
}

impl ValueEnum for Side {
    fn value_variants<'a>() -> &'a [Self] {
        &[Side::Player, Side::Computer]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = match self {
            Side::Player => PossibleValue::new("player").alias("p"),
            Side::Computer => PossibleValue::new("computer").alias("c"),
        };

        Some(value)
    }
}

impl ValueEnum for Rank {
    fn value_variants<'a>() -> &'a [Self] {
        &[Rank::Man, Rank::King]
    }

    fn to_possible_value(&self) -> Option<PossibleValue> {
        let value = match self {
            Rank::Man => PossibleValue::new("man").alias("m"),
            Rank::King => PossibleValue::new("king").alias("k"),
        };

        Some(value)
    }
}
