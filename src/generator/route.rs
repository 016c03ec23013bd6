/*
route.rs

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

//! Order the waypoints of the solution route.

use log::debug;
use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::words::Placement;

/// Ordered waypoints from the maze start to the maze end, visiting every
/// placed word in between.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Route {
    /// Waypoint cells, in visit order. With N placed words the route holds
    /// 2N + 2 waypoints: the start, each word's first and last letter, and
    /// the end.
    pub waypoints: Vec<usize>,
}

/// Plan the visit order of the placed words.
///
/// The next word is picked greedily: the one whose first letter lies nearest
/// (Manhattan distance) to the current position. Ties keep the word list
/// order. Greedy planning is not optimal, but the route only needs to be
/// reasonable, not minimal.
pub fn plan(grid: &Grid, start: usize, end: usize, placements: &[Placement]) -> Route {
    let mut waypoints: Vec<usize> = Vec::with_capacity(2 * placements.len() + 2);
    waypoints.push(start);

    let mut remaining: Vec<&Placement> = placements.iter().collect();
    let mut current: usize = start;
    while !remaining.is_empty() {
        let mut best: usize = 0;
        let mut best_distance: usize = usize::MAX;
        for (i, p) in remaining.iter().enumerate() {
            let word_start: usize = grid.index(p.start.0, p.start.1);
            let distance: usize = grid.manhattan(current, word_start);
            if distance < best_distance {
                best = i;
                best_distance = distance;
            }
        }

        let placement: &Placement = remaining.remove(best);
        let word_start: usize = grid.index(placement.start.0, placement.start.1);
        let word_end: usize = grid.index(placement.end.0, placement.end.1);
        debug!(
            "route visits {:?} (distance {best_distance})",
            placement.word
        );
        waypoints.push(word_start);
        waypoints.push(word_end);
        current = word_end;
    }

    waypoints.push(end);
    Route { waypoints }
}
