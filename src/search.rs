/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{fmt, time::Instant};

use log::{debug, info};

use crate::{Board, Evaluator, Move, Score, Side};

/// How hard the Computer should think, expressed as a fixed search depth.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Every difficulty, from easiest to hardest.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Number of plies searched at this difficulty.
    ///
    /// # Example
    /// ```
    /// # use leap::Difficulty;
    /// assert_eq!(Difficulty::Easy.depth(), 2);
    /// assert_eq!(Difficulty::Medium.depth(), 4);
    /// assert_eq!(Difficulty::Hard.depth(), 8);
    /// ```
    #[inline(always)]
    pub const fn depth(&self) -> usize {
        match self {
            Self::Easy => 2,
            Self::Medium => 4,
            Self::Hard => 8,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?} ({} plies)", self.depth())
    }
}

/// The result of a search, containing the best move found, score, and total nodes searched.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SearchResult {
    /// Number of nodes searched.
    pub nodes: u64,

    /// Best move found during the search.
    ///
    /// This is `None` if the search was given no depth, the game was already over, or the Computer had no legal move.
    pub bestmove: Option<Move>,

    /// Evaluation of the position after `bestmove` is made.
    pub score: Score,
}

impl Default for SearchResult {
    /// A default search result should initialize to a *very bad* value,
    /// since there isn't a move to play.
    #[inline(always)]
    fn default() -> Self {
        Self {
            nodes: 0,
            bestmove: None,
            score: Score::MIN,
        }
    }
}

/// Configuration variables for executing a [`Search`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Depth, in plies, to execute the search.
    pub max_depth: usize,

    /// Whether to prune with alpha-beta cutoffs.
    ///
    /// Disabling this yields plain minimax, which visits every node but picks the same move.
    pub prune: bool,
}

impl Default for SearchConfig {
    /// A default [`SearchConfig`] searches at the default [`Difficulty`], with pruning.
    #[inline(always)]
    fn default() -> Self {
        Difficulty::default().into()
    }
}

impl SearchConfig {
    /// A pruned search `max_depth` plies deep.
    #[inline(always)]
    pub const fn from_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            prune: true,
        }
    }
}

impl From<Difficulty> for SearchConfig {
    #[inline(always)]
    fn from(difficulty: Difficulty) -> Self {
        Self::from_depth(difficulty.depth())
    }
}

/// Executes a minimax search for the Computer on the provided board at a specified depth.
///
/// The Computer is always the maximizing side, and the Player the minimizing side.
pub struct Search<'a> {
    /// The board to search on.
    ///
    /// This board is copied when moves are applied to it; it is never modified.
    board: &'a Board,

    /// The result of the search, updated as-needed during search.
    result: SearchResult,

    /// Configuration variables for this instance of the search.
    config: SearchConfig,
}

impl<'a> Search<'a> {
    /// Construct a new [`Search`] instance to execute on the provided [`Board`].
    #[inline(always)]
    pub fn new(board: &'a Board, config: SearchConfig) -> Self {
        Self {
            board,
            result: SearchResult::default(),
            config,
        }
    }

    /// Start the search, returning its results.
    pub fn start(mut self) -> SearchResult {
        let starttime = Instant::now();
        info!(
            "Starting search at depth {} (pruning {})",
            self.config.max_depth,
            if self.config.prune { "on" } else { "off" }
        );

        self.search_root();

        let res = self.result;
        info!(
            "Search finished in {}ms: bestmove {} score {:?} nodes {}",
            starttime.elapsed().as_millis(),
            res.bestmove
                .as_ref()
                .map(Move::to_string)
                .unwrap_or_else(|| String::from("(none)")),
            res.score,
            res.nodes,
        );

        res
    }

    /// Tries every Computer move at the root, keeping the first one with the highest minimax value.
    ///
    /// Each root move is searched with a full window, so ties are always broken in favour of generation order.
    fn search_root(&mut self) {
        let depth = self.config.max_depth;
        self.result.nodes += 1;

        if depth == 0 || self.board.is_terminal() {
            self.result.score = Evaluator::new(self.board).eval();
            return;
        }

        let moves = self.board.legal_moves(Side::Computer);
        if moves.is_empty() {
            self.result.score = Score::LOSS;
            return;
        }

        for mv in moves {
            // Copy-make the new position
            let child = self.board.with_move_made(&mv);

            let score = self.minimax(&child, depth - 1, Score::MIN, Score::MAX, false);
            debug!("Root move {mv} scored {score:?}");

            if self.result.bestmove.is_none() || score > self.result.score {
                self.result.score = score;
                self.result.bestmove = Some(mv);
            }
        }
    }

    /// Primary location of search logic.
    ///
    /// Uses the [minimax](https://www.chessprogramming.org/Minimax) algorithm with
    /// [alpha-beta pruning](https://www.chessprogramming.org/Alpha-Beta).
    fn minimax(
        &mut self,
        board: &Board,
        depth: usize,
        mut alpha: Score,
        mut beta: Score,
        maximizing: bool,
    ) -> Score {
        self.result.nodes += 1;

        // Depth is checked before generating moves, so a blocked side at the horizon is still just evaluated.
        if depth == 0 {
            return Evaluator::new(board).eval();
        }

        let side = if maximizing {
            Side::Computer
        } else {
            Side::Player
        };
        let moves = board.legal_moves(side);

        // A side that cannot move has lost.
        if moves.is_empty() {
            return if maximizing { Score::LOSS } else { Score::WIN };
        }

        let mut best = if maximizing { Score::MIN } else { Score::MAX };

        for mv in moves {
            // Copy-make the new position
            let child = board.with_move_made(&mv);
            let score = self.minimax(&child, depth - 1, alpha, beta, !maximizing);

            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }

            if self.config.prune && beta <= alpha {
                break;
            }
        }

        best
    }
}

/// Searches `board` for the Computer's best move, `depth` plies deep, with alpha-beta pruning.
///
/// # Example
/// ```
/// # use leap::{best_move, Board, Difficulty};
/// let res = best_move(&Board::new(), Difficulty::Easy.depth());
/// assert!(res.bestmove.is_some());
/// ```
pub fn best_move(board: &Board, depth: usize) -> SearchResult {
    Search::new(board, SearchConfig::from_depth(depth)).start()
}

/// Computes the minimax value of `board`, `depth` plies deep, within the window `[alpha, beta]`.
///
/// If `maximizing` is set, the Computer is to move; otherwise, the Player is.
pub fn minimax(board: &Board, depth: usize, alpha: Score, beta: Score, maximizing: bool) -> Score {
    let mut search = Search::new(board, SearchConfig::default());
    search.minimax(board, depth, alpha, beta, maximizing)
}
