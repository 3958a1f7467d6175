/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use clap::Parser;
use leap::{Cli, Engine, EngineCommand};
use simple_logger::SimpleLogger;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = SimpleLogger::new().with_level(cli.log_level).init() {
        eprintln!("Failed to initialize logger: {e}");
    }

    let mut engine = Engine::new(cli.difficulty);

    // Startup commands are queued ahead of anything read from stdin
    for input in &cli.commands {
        match input.parse::<EngineCommand>() {
            Ok(cmd) => {
                if let Err(e) = engine.send_command(cmd) {
                    eprintln!("{e:#}");
                }
            }
            Err(e) => eprintln!("ERROR on input {input:?}:\n{e}"),
        }
    }

    if let Err(e) = engine.run() {
        eprintln!("{} encountered an error: {e:#}", env!("CARGO_PKG_NAME"));
    }
}
