/*
stitcher.rs

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

//! Stitch the per-waypoint shortest paths into the full solution.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::path::Path;
use super::pathfinder::{self, PathError};
use super::route::Route;

/// The full solution of a level.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Solution {
    /// Every cell of the solution walk, in order, without duplicates at the
    /// segment boundaries.
    pub cells: Vec<usize>,

    /// Letters read along the walk, with the start and end letters stripped
    /// and the shared letter at each segment boundary written once.
    pub letters: String,
}

impl Solution {
    /// Number of letters of the solution.
    pub fn len(&self) -> usize {
        self.letters.chars().count()
    }

    /// Whether the solution holds no letter.
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }
}

/// Build the solution by walking the route waypoint by waypoint.
///
/// Each waypoint pair is joined by a shortest path. A waypoint appears once
/// in the stitched walk even though it ends one segment and starts the next.
pub fn stitch(grid: &Grid, route: &Route) -> Result<Solution, PathError> {
    let mut cells: Vec<usize> = Vec::new();
    let mut letters: String = String::new();

    if route.waypoints.len() == 1 {
        cells.push(route.waypoints[0]);
        letters.push(grid.cell(route.waypoints[0]).content.to_char());
    }

    for pair in route.waypoints.windows(2) {
        let path: Path = pathfinder::shortest_path(grid, pair[0], pair[1])?;
        let segment: String = path.letters(grid);

        for (i, &cell) in path.get().iter().enumerate() {
            if i == 0 && cells.last() == Some(&cell) {
                continue;
            }
            cells.push(cell);
        }
        for (i, ch) in segment.chars().enumerate() {
            if i == 0 && letters.chars().last() == Some(ch) {
                continue;
            }
            letters.push(ch);
        }
    }

    Ok(Solution {
        cells,
        letters: strip_markers(&letters),
    })
}

/// Drop the first and last letters, which mark the maze start and end and
/// are not part of the letter trail.
fn strip_markers(letters: &str) -> String {
    let count: usize = letters.chars().count();
    if count <= 2 {
        return String::new();
    }
    letters.chars().skip(1).take(count - 2).collect()
}
