/*
path.rs

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

//! A path through the grid.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::grid::Grid;

/// Represent a path as an ordered list of cell indexes.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Path {
    /// Cells in the path, in order.
    cells: Vec<usize>,

    /// Cells in the path, for quick lookups.
    visited: HashSet<usize>,
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.cells == other.cells
    }
}

impl Path {
    /// Create an empty path.
    pub fn new(capacity: usize) -> Self {
        Self {
            cells: Vec::with_capacity(capacity),
            visited: HashSet::with_capacity(capacity),
        }
    }

    /// Add a cell at the end of the path.
    pub fn push(&mut self, cell: usize) {
        self.cells.push(cell);
        self.visited.insert(cell);
    }

    /// Remove the cell at the end of the path.
    pub fn pop(&mut self) -> Option<usize> {
        let cell: Option<usize> = self.cells.pop();
        if let Some(c) = cell
            && !self.cells.contains(&c)
        {
            self.visited.remove(&c);
        }
        cell
    }

    /// Number of cells in the path.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the path is empty.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether the path goes through the given cell.
    pub fn contains(&self, cell: usize) -> bool {
        self.visited.contains(&cell)
    }

    /// Get the cells in the path, in order.
    pub fn get(&self) -> &Vec<usize> {
        &self.cells
    }

    /// Get the first cell of the path.
    pub fn get_first(&self) -> Option<usize> {
        self.cells.first().copied()
    }

    /// Get the last cell of the path.
    pub fn get_last(&self) -> Option<usize> {
        self.cells.last().copied()
    }

    /// Letters of the cells along the path.
    pub fn letters(&self, grid: &Grid) -> String {
        let mut s: String = String::with_capacity(self.cells.len());
        for &cell in &self.cells {
            s.push(grid.cell(cell).content.to_char());
        }
        s
    }
}
