/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use std::{
    io,
    sync::mpsc::{channel, Receiver, Sender},
    thread,
    time::{Duration, Instant},
};

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::{info, warn};

use crate::{
    perft, splitperft, Difficulty, EngineCommand, Evaluator, Game, GameStatus, Piece, Search,
    SearchConfig, SearchResult, Side, Square,
};

/// The Leap checkers engine.
///
/// The engine owns the authoritative game, reads commands from `stdin`, and plays the Computer's side.
#[derive(Debug)]
pub struct Engine {
    /// The current state of the game, as known to the engine.
    ///
    /// This is modified whenever moves are played or pieces are placed,
    /// and is reset whenever the engine is told to start a new game.
    game: Game,

    /// Difficulty the Computer plays at when no depth is requested.
    difficulty: Difficulty,

    /// One half of a channel, responsible for sending commands to the engine to execute.
    sender: Sender<EngineCommand>,

    /// One half of a channel, responsible for receiving commands for the engine to execute.
    receiver: Receiver<EngineCommand>,
}

impl Engine {
    /// Constructs a new [`Engine`] instance to be executed with [`Engine::run`].
    pub fn new(difficulty: Difficulty) -> Self {
        let (sender, receiver) = channel();

        Self {
            game: Game::new(),
            difficulty,
            sender,
            receiver,
        }
    }

    /// Returns a string of the engine's name and current version.
    pub fn name(&self) -> String {
        format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
    }

    /// The game currently held by the engine.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Sends an [`EngineCommand`] to the engine to be executed.
    pub fn send_command(&self, command: EngineCommand) -> Result<()> {
        self.sender
            .send(command)
            .context("Failed to send command to engine")
    }

    /// Execute the main event loop for the engine.
    ///
    /// This function spawns a thread to handle input from `stdin` and waits on received commands.
    pub fn run(&mut self) -> Result<()> {
        println!("{}", self.name());

        // Spawn a separate thread for handling user input
        let sender = self.sender.clone();
        thread::spawn(|| {
            if let Err(err) = input_handler(sender) {
                warn!("Input handler thread stopping after fatal error: {err:#}");
            }
        });

        // Loop on user input
        while let Ok(cmd) = self.receiver.recv() {
            if matches!(cmd, EngineCommand::Exit) {
                break;
            }

            // Keep running, even on error
            if let Err(e) = self.execute(cmd) {
                eprintln!("Error: {e:#}");
            }
        }

        Ok(())
    }

    /// Handle the execution of a single [`EngineCommand`].
    pub fn execute(&mut self, cmd: EngineCommand) -> Result<()> {
        info!("Executing {cmd:?}");

        match cmd {
            EngineCommand::Bench { depth, runs } => self.bench(depth, runs)?,

            EngineCommand::Display => println!("{}", self.game),

            EngineCommand::SetDifficulty { difficulty } => {
                if let Some(difficulty) = difficulty {
                    self.difficulty = difficulty;
                }
                println!("Difficulty: {}", self.difficulty);
            }

            EngineCommand::Eval { pretty } => self.eval(pretty),

            EngineCommand::Exit => {}

            EngineCommand::Flip => {
                self.game.toggle_side_to_move();
                println!("{} to move", self.game.side_to_move());
            }

            EngineCommand::Go { depth, difficulty } => {
                let depth = depth.unwrap_or_else(|| difficulty.unwrap_or(self.difficulty).depth());
                self.computer_turn(depth)?;
            }

            EngineCommand::Moves { sort } => {
                let mut moves = self.game.legal_moves();
                if sort {
                    moves.sort();
                }

                if moves.is_empty() {
                    println!("(none)");
                }
                for (i, mv) in moves.iter().enumerate() {
                    println!("{i:>3}: {mv}");
                }
            }

            EngineCommand::NewGame => {
                self.game = Game::new();
                println!("{}", self.game);
            }

            EngineCommand::Perft { depth } => println!("{}", perft(&self.game, depth)),

            EngineCommand::Place {
                side,
                rank,
                row,
                col,
            } => {
                let square = Square::new(row, col)?;
                if !square.is_dark() {
                    bail!("Pieces may only stand on dark squares, and {square} is light");
                }

                let piece = Piece::new(side, rank);
                self.game.board_mut().place(square, piece);
                println!("Placed {piece:?} at {square}");
            }

            EngineCommand::Play { index, manual } => {
                let over = self.player_turn(index)?;

                if !manual && !over && self.game.side_to_move() == Side::Computer {
                    self.computer_turn(self.difficulty.depth())?;
                }
            }

            EngineCommand::Splitperft { depth } => println!("{}", splitperft(&self.game, depth)),

            EngineCommand::Take { row, col } => {
                let square = Square::new(row, col)?;
                match self.game.board_mut().take(square) {
                    Some(piece) => println!("Removed {piece:?} at {square}"),
                    None => println!("No piece at {square}"),
                }
            }
        };

        Ok(())
    }

    /// Plays the legal move numbered `index` for the side to move, returning `true` if that ended the game.
    fn player_turn(&mut self, index: usize) -> Result<bool> {
        let moves = self.game.legal_moves();
        let Some(mv) = moves.get(index) else {
            bail!(
                "No move numbered {index}; {} has {} legal moves",
                self.game.side_to_move(),
                moves.len()
            );
        };

        self.game.play(mv)?;
        println!("{} played {mv}", self.game.side_to_move().opponent());
        println!("{}", self.game.board());

        Ok(self.announce_if_over())
    }

    /// Searches for the Computer's best move, `depth` plies deep, and plays it.
    fn computer_turn(&mut self, depth: usize) -> Result<()> {
        if self.game.side_to_move() != Side::Computer {
            bail!("It is the {}'s turn, not the Computer's", self.game.side_to_move());
        }
        if depth == 0 {
            bail!("Search depth must be at least 1 to pick a move");
        }

        // Nothing to search once either side has lost
        if self.announce_if_over() {
            return Ok(());
        }

        let res = Search::new(self.game.board(), SearchConfig::from_depth(depth)).start();

        let Some(mv) = res.bestmove else {
            bail!("Search at depth {depth} found no move for the Computer");
        };

        self.game
            .play(&mv)
            .with_context(|| format!("Search produced a move that could not be played: {mv}"))?;

        if res.score.is_decisive() {
            println!("Computer played {mv} (forced result: {:?}, {} nodes)", res.score, res.nodes);
        } else {
            println!("Computer played {mv} (score {}, {} nodes)", res.score, res.nodes);
        }
        println!("{}", self.game.board());
        self.announce_if_over();

        Ok(())
    }

    /// Prints the winner if the game is over, returning `true` if so.
    fn announce_if_over(&self) -> bool {
        match self.game.status() {
            GameStatus::InProgress => false,
            GameStatus::Won(side) => {
                println!("Game over: {side} wins");
                true
            }
        }
    }

    /// Execute the `bench` command, timing searches with and without pruning on the current position.
    fn bench(&self, depth: Option<usize>, runs: usize) -> Result<()> {
        if runs == 0 {
            bail!("Cannot average over zero runs");
        }

        let depths = match depth {
            Some(depth) => vec![depth],
            None => Difficulty::ALL.iter().map(Difficulty::depth).collect(),
        };

        println!("+-------+----------------+----------------+--------------+--------------+");
        println!("| depth | pruned (ms)    | full (ms)      | pruned nodes | full nodes   |");
        println!("+-------+----------------+----------------+--------------+--------------+");

        for depth in depths {
            let (pruned_time, pruned) = self.time_search(depth, true, runs);
            let (full_time, full) = self.time_search(depth, false, runs);

            if pruned.bestmove != full.bestmove {
                warn!(
                    "Pruned and full searches disagree at depth {depth}: {:?} vs {:?}",
                    pruned.bestmove, full.bestmove
                );
            }

            println!(
                "| {depth:<5} | {:<14.3} | {:<14.3} | {:<12} | {:<12} |",
                pruned_time.as_secs_f64() * 1000.0,
                full_time.as_secs_f64() * 1000.0,
                pruned.nodes,
                full.nodes,
            );
        }
        println!("+-------+----------------+----------------+--------------+--------------+");

        Ok(())
    }

    /// Runs the same search `runs` times, returning the average time taken and the last result.
    fn time_search(&self, depth: usize, prune: bool, runs: usize) -> (Duration, SearchResult) {
        let config = SearchConfig {
            max_depth: depth,
            prune,
        };

        let start = Instant::now();
        let mut res = SearchResult::default();
        for _ in 0..runs {
            res = Search::new(self.game.board(), config).start();
        }

        (start.elapsed() / runs as u32, res)
    }

    /// Executes the `eval` command, printing an evaluation of the current position.
    fn eval(&self, pretty: bool) {
        let evaluator = Evaluator::new(self.game.board());
        if pretty {
            println!("{evaluator}");
        } else {
            println!("{}", evaluator.eval());
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(Difficulty::default())
    }
}

/// Loops endlessly to await input via `stdin`, sending all successfully-parsed commands through the supplied `sender`.
fn input_handler(sender: Sender<EngineCommand>) -> Result<()> {
    let mut buffer = String::with_capacity(256);

    loop {
        // Clear the buffer, read input, and trim the trailing newline
        buffer.clear();
        let bytes = io::stdin()
            .read_line(&mut buffer)
            .context("Failed to read line when parsing engine commands")?;

        // For ctrl + d
        if 0 == bytes {
            // Send the Exit command and exit this function
            sender
                .send(EngineCommand::Exit)
                .context("Failed to send 'exit' command after receiving empty input")?;

            return Ok(());
        }

        // Trim any leading/trailing whitespace
        let buf = buffer.trim();

        // Ignore empty lines
        if buf.is_empty() {
            continue;
        }

        match EngineCommand::try_parse_from(buf.split_ascii_whitespace()) {
            Ok(cmd) => sender
                .send(cmd)
                .context("Failed to send command to engine")?,

            // If an invalid command was received, just print the error and continue running
            Err(err) => eprintln!("{err}"),
        }
    }
}
