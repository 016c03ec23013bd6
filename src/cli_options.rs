/*
cli_options.rs

Copyright 2025 The Wordmaze Authors

This file is part of Wordmaze.

Wordmaze is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Wordmaze is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Wordmaze. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Process command-line options.
//!
//! Wordmaze generates word-maze levels from the command line. Each level is
//! printed as a text grid, or as JSON with `--json` so that other tools can
//! consume it.
//!
//! # Examples
//!
//! Generate a medium level from the default dictionary:
//!
//! ```
//! $ wordmaze
//! FJK#AQZPMLERTYU
//! ...
//! ```
//!
//! Generate three hard levels with a fixed seed and print statistics:
//!
//! ```
//! $ wordmaze -f hard -c 3 -s 42 --summary
//! ```

use clap::Parser;
use log::debug;
use std::env;
use std::path::PathBuf;
use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::COPYRIGHT_NOTICE;
use crate::dictionary;
use crate::game::Game;
use crate::generator;
use crate::generator::Level;
use crate::generator::params::{CarveOrder, Connectivity, Difficulty, Params};

/// Consecutive generation failures tolerated before giving up.
const MAX_FAILURES: usize = 100;

/// Generate word-maze levels.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Difficulty level, which drives the grid size
    #[arg(value_enum, short = 'f', long, default_value_t = Difficulty::Medium)]
    difficulty: Difficulty,

    /// Number of columns, overriding the difficulty preset
    #[arg(long)]
    width: Option<usize>,

    /// Number of rows, overriding the difficulty preset
    #[arg(long)]
    height: Option<usize>,

    /// Cell neighborhood
    #[arg(value_enum, long, default_value_t = Connectivity::Four)]
    connectivity: Connectivity,

    /// Carve the walls before or after placing the words
    #[arg(value_enum, long, default_value_t = CarveOrder::BeforeWords)]
    carve_order: CarveOrder,

    /// Dictionary file to pick the words from
    #[arg(short, long, default_value = "words.txt")]
    words: PathBuf,

    /// Seed for the random generator, for reproducible levels
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of levels to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Print the levels as JSON
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the levels
    #[arg(long, default_value_t = false)]
    summary: bool,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let mut params: Params = Params::from_difficulty(args.difficulty);
    if let Some(width) = args.width {
        params.width = width;
    }
    if let Some(height) = args.height {
        params.height = height;
    }
    params.connectivity = args.connectivity;
    params.carve_order = args.carve_order;

    let word_list: Vec<String> = dictionary::load_words(&args.words, params.max_words);

    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let mut total: f32 = 0.0;
    let mut max: f32 = 0.0;
    let mut errors: usize = 0;
    let mut i: usize = 0;
    while i < args.count {
        debug!("Iteration {i}");

        let before: Instant = Instant::now();
        let ret: Result<Level, generator::GenerationError> =
            generator::generate(&params, &word_list, &mut rng);
        let duration: f32 = before.elapsed().as_secs_f32();

        match ret {
            Ok(level) => {
                total += duration;
                if duration > max {
                    max = duration;
                }

                if args.json {
                    match serde_json::to_string_pretty(&level) {
                        Ok(s) => println!("{s}"),
                        Err(e) => {
                            eprintln!("Cannot serialize the level: {e}");
                            return 1;
                        }
                    }
                } else {
                    print_level(&level);
                }

                verify_solution(level);
                i += 1;
            }
            Err(e) => {
                // Unlucky carving or endpoint draw, try again
                errors += 1;
                debug!("ERROR generating the level: {e:?}");
                if errors >= MAX_FAILURES {
                    eprintln!(
                        "Giving up after {errors} failed attempts. \
                         Try a larger grid or a smaller separation."
                    );
                    return 1;
                }
            }
        }
    }

    // Print some stats
    if args.summary {
        println!(
            "
  total time = {}s
average time = {}s
    max time = {}s
      errors = {}",
            total,
            average(total, args.count),
            max,
            errors
        );
    }
    0
}

/// Average duration of a level, zero when no level was requested.
fn average(total: f32, count: usize) -> f32 {
    if count == 0 {
        return 0.0;
    }
    total / count as f32
}

/// Print the level as text.
fn print_level(level: &Level) {
    println!("{}", level.grid);
    println!(
        "start {:?}, end {:?}",
        level.grid.coordinates(level.start),
        level.grid.coordinates(level.end)
    );
    for p in &level.placements {
        println!("{} at {:?} {:?}", p.word, p.start, p.orientation);
    }
    println!("solution: {}", level.solution.letters);
}

/// Replay the solution through the game rules.
///
/// Every generated level is checked before being emitted: each step of the
/// stitched solution must be a legal move, and the walk must land on the
/// end cell.
fn verify_solution(level: Level) {
    let cells: Vec<usize> = level.solution.cells.clone();
    let end: usize = level.end;
    let mut game: Game = Game::new(level);

    for pair in cells.windows(2) {
        let (r1, c1) = game.level.grid.coordinates(pair[0]);
        let (r2, c2) = game.level.grid.coordinates(pair[1]);
        let drow: i32 = r2 as i32 - r1 as i32;
        let dcol: i32 = c2 as i32 - c1 as i32;
        if !game.attempt_move(drow, dcol) {
            eprintln!(
                "Illegal step {:?} -> {:?} in the solution {cells:?}",
                (r1, c1),
                (r2, c2)
            );
            panic!("Bug: the stitched solution is not replayable");
        }
    }

    if game.player.position != end {
        eprintln!("The solution walk ends on {}", game.player.position);
        panic!("Bug: the stitched solution does not reach the end cell");
    }
    debug!(
        "solution replayed: {} moves, score {}",
        game.moves, game.player.score
    );
}
