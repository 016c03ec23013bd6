/*
edges.rs

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

//! Edges between cells in the word-maze graph.
//!
//! Cells are addressed by their index in the grid's flat cell container, so
//! removing an edge never invalidates a reference held elsewhere.

use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represent the edges in the word-maze graph.
///
/// Invariant: the adjacency is symmetric. An edge between two cells exists in
/// both directions or in neither.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct Edges {
    /// For each cell, the [`std::collections::HashMap`] stores the list of
    /// the adjacent cells.
    edges: HashMap<usize, Vec<usize>>,
}

impl Edges {
    /// Create the edge object that stores all the edges.
    pub fn new() -> Self {
        Self {
            edges: HashMap::new(),
        }
    }

    /// Add all the adjacent cells of the given cell.
    pub fn push_from_array(&mut self, cell: usize, adjacent_cell_array: &[usize]) {
        // Because the method is used in a loop to initialize all the cells,
        // it is not necessary to create the edges in both directions.
        self.edges.insert(cell, adjacent_cell_array.to_vec());
    }

    /// For the given cell, return all the adjacent cells.
    pub fn get_cells(&self, cell: usize) -> &[usize] {
        match self.edges.get(&cell) {
            Some(a) => a,
            None => &[],
        }
    }

    /// Whether an edge exists between the given cells.
    pub fn contains(&self, cell1: usize, cell2: usize) -> bool {
        self.get_cells(cell1).contains(&cell2)
    }

    /// Remove the edge between the given cells, in both directions.
    pub fn remove(&mut self, cell1: usize, cell2: usize) {
        if let Some(a) = self.edges.get_mut(&cell1) {
            a.retain(|c| *c != cell2);
        }
        if let Some(a) = self.edges.get_mut(&cell2) {
            a.retain(|c| *c != cell1);
        }
    }

    /// Remove all the edges of the given cell, in both directions.
    pub fn remove_all(&mut self, cell: usize) {
        if let Some(adjacent) = self.edges.remove(&cell) {
            for c in adjacent {
                if let Some(a) = self.edges.get_mut(&c) {
                    a.retain(|v| *v != cell);
                }
            }
        }
        self.edges.insert(cell, Vec::new());
    }

    /// Number of adjacent cells of the given cell.
    pub fn num_edges(&self, cell: usize) -> usize {
        self.get_cells(cell).len()
    }

    /// Print the edges.
    pub fn debug(&self) {
        let mut v: Vec<_> = self.edges.iter().collect();

        v.sort_by_key(|a| a.0);
        for (c1, adjacent) in v {
            debug!("{c1:>3} --> {adjacent:?}");
        }
    }
}
