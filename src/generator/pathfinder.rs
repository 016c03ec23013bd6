/*
pathfinder.rs

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

//! Shortest path search over the grid.
//!
//! Every traversable step costs one, so the uniform-cost search degenerates
//! to a breadth-first order, but the priority queue keeps the implementation
//! correct if weighted edges ever show up.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use super::grid::Grid;
use super::path::Path;

#[derive(Debug, PartialEq)]
pub enum PathError {
    /// No traversable route exists between the two cells.
    NotFound,
}

/// Find a shortest path between the given cells.
///
/// Wall cells are never traversed, neither as endpoints nor as intermediate
/// steps. The returned path includes both the source and the target cell.
pub fn shortest_path(grid: &Grid, source: usize, target: usize) -> Result<Path, PathError> {
    if grid.cell(source).is_wall() || grid.cell(target).is_wall() {
        return Err(PathError::NotFound);
    }
    if source == target {
        let mut path: Path = Path::new(1);
        path.push(source);
        return Ok(path);
    }

    let mut distances: Vec<usize> = vec![usize::MAX; grid.len()];
    let mut previous: Vec<Option<usize>> = vec![None; grid.len()];
    let mut queue: BinaryHeap<Reverse<(usize, usize)>> = BinaryHeap::new();

    distances[source] = 0;
    queue.push(Reverse((0, source)));

    while let Some(Reverse((distance, cell))) = queue.pop() {
        if cell == target {
            break;
        }
        // Stale queue entry, a shorter route already went through
        if distance > distances[cell] {
            continue;
        }
        for &neighbor in grid.neighbors(cell) {
            if grid.cell(neighbor).is_wall() {
                continue;
            }
            let candidate: usize = distance + 1;
            if candidate < distances[neighbor] {
                distances[neighbor] = candidate;
                previous[neighbor] = Some(cell);
                queue.push(Reverse((candidate, neighbor)));
            }
        }
    }

    if distances[target] == usize::MAX {
        return Err(PathError::NotFound);
    }

    let mut reversed: Vec<usize> = Vec::with_capacity(distances[target] + 1);
    let mut cell: usize = target;
    reversed.push(cell);
    while let Some(p) = previous[cell] {
        reversed.push(p);
        cell = p;
    }

    let mut path: Path = Path::new(reversed.len());
    for &c in reversed.iter().rev() {
        path.push(c);
    }
    Ok(path)
}
