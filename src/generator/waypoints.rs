/*
waypoints.rs

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

//! Select the start and end cells of the level.

use log::debug;
use rand::Rng;

use super::GenerationError;
use super::grid::Grid;

/// Number of random draws for the end cell before giving up.
const ENDPOINT_ATTEMPTS: usize = 1000;

/// Pick the start and end cells of the level.
///
/// Both cells must hold a letter, and the end cell must lie at least
/// `min_separation` Manhattan steps away from the start cell. The end draw
/// is bounded, so a grid too small for the requested separation reports
/// [`GenerationError::SeparationNotMet`] instead of spinning forever.
pub fn select_endpoints<R: Rng>(
    grid: &Grid,
    min_separation: usize,
    rng: &mut R,
) -> Result<(usize, usize), GenerationError> {
    let eligible: Vec<usize> = (0..grid.len())
        .filter(|&i| grid.cell(i).letter().is_some())
        .collect();
    if eligible.len() < 2 {
        return Err(GenerationError::TooFewLetterCells);
    }

    let start: usize = eligible[rng.random_range(0..eligible.len())];

    for _ in 0..ENDPOINT_ATTEMPTS {
        let end: usize = eligible[rng.random_range(0..eligible.len())];
        if end != start && grid.manhattan(start, end) >= min_separation {
            debug!(
                "start {:?}, end {:?}, distance {}",
                grid.coordinates(start),
                grid.coordinates(end),
                grid.manhattan(start, end)
            );
            return Ok((start, end));
        }
    }
    Err(GenerationError::SeparationNotMet)
}
