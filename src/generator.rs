/*
generator.rs

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

//! Level generation pipeline.
//!
//! A level goes through the following phases:
//!
//! 1. Build the grid and its adjacency ([`grid`]).
//! 2. Carve walls by recursive partition ([`carver`]) and place the
//!    dictionary words ([`words`]), in the order given by
//!    [`params::CarveOrder`].
//! 3. Fill the remaining empty cells with random letters.
//! 4. Pick the start and end cells ([`waypoints`]).
//! 5. Plan the word visit order ([`route`]) and stitch the shortest paths
//!    between the waypoints into the solution ([`stitcher`]).
//!
//! Carving and letter placement both run over a shared grid, so a level
//! where the carver happened to seal off the start or the end cell is
//! reported as unsolvable rather than emitted broken.

pub mod carver;
pub mod cells;
pub mod edges;
pub mod grid;
pub mod params;
pub mod path;
pub mod pathfinder;
pub mod route;
pub mod stitcher;
pub mod waypoints;
pub mod words;

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use self::grid::Grid;
use self::params::{CarveOrder, Params};
use self::pathfinder::PathError;
use self::route::Route;
use self::stitcher::Solution;
use self::words::Placement;

/// Why a level could not be generated.
///
/// All the variants are recoverable: the caller is expected to retry with a
/// fresh random draw or with different parameters.
#[derive(Debug, PartialEq)]
pub enum GenerationError {
    /// Fewer than two letter cells on the grid.
    TooFewLetterCells,

    /// No pair of letter cells lies far enough apart.
    SeparationNotMet,

    /// The carved walls cut the solution route somewhere.
    Unsolvable,
}

/// A complete playable level.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Level {
    /// The grid, with walls carved and every non-wall cell holding a letter.
    pub grid: Grid,

    /// The placed words.
    pub placements: Vec<Placement>,

    /// Index of the start cell.
    pub start: usize,

    /// Index of the end cell.
    pub end: usize,

    /// The planned waypoint order.
    pub route: Route,

    /// The stitched solution walk.
    pub solution: Solution,
}

impl Level {
    /// Words placed on the level.
    pub fn words(&self) -> Vec<String> {
        self.placements.iter().map(|p| p.word.clone()).collect()
    }
}

/// Generate a level.
///
/// Words that do not fit are dropped silently; a level with fewer words than
/// requested is still a valid level. The hard failures are reported as
/// [`GenerationError`] so that the caller can retry.
pub fn generate<R: Rng>(
    params: &Params,
    word_list: &[String],
    rng: &mut R,
) -> Result<Level, GenerationError> {
    let mut grid: Grid = Grid::new(params.width, params.height, params.connectivity);

    let placements: Vec<Placement> = match params.carve_order {
        CarveOrder::BeforeWords => {
            carver::carve(&mut grid, params.min_region, rng);
            words::place_words(&mut grid, word_list, params.placement_attempts, rng)
        }
        CarveOrder::AfterWords => {
            let placements: Vec<Placement> =
                words::place_words(&mut grid, word_list, params.placement_attempts, rng);
            carver::carve(&mut grid, params.min_region, rng);
            placements
        }
    };

    grid.fill_random_letters(rng);
    grid.debug();

    if !grid.is_fully_connected() {
        // Not fatal on its own: the solution only needs the route cells
        debug!("the carved grid is not fully connected");
    }

    let (start, end) = waypoints::select_endpoints(&grid, params.min_separation, rng)?;
    let route: Route = route::plan(&grid, start, end, &placements);
    let solution: Solution = match stitcher::stitch(&grid, &route) {
        Ok(s) => s,
        Err(PathError::NotFound) => {
            warn!("a route waypoint is unreachable, discarding the level");
            return Err(GenerationError::Unsolvable);
        }
    };

    debug!(
        "level ready: {} words, solution of {} cells",
        placements.len(),
        solution.cells.len()
    );
    Ok(Level {
        grid,
        placements,
        start,
        end,
        route,
        solution,
    })
}
