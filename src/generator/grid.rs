/*
grid.rs

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

//! The word-maze grid: a flat cell container with symmetric adjacency.

use log::{Level, debug, log_enabled};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::cells::{Cell, CellContent};
use super::edges::Edges;
use super::params::Connectivity;

/// Represent the word-maze grid.
///
/// Cells live in a flat vector indexed by `row * width + col`; the adjacency
/// refers to cells by index only.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Grid {
    /// Number of columns.
    pub width: usize,

    /// Number of rows.
    pub height: usize,

    /// Cell neighborhood used when the edges were built.
    connectivity: Connectivity,

    /// Grid cells, in row-major order.
    cells: Vec<Cell>,

    /// Symmetric adjacency between the cells.
    edges: Edges,
}

impl Grid {
    /// Create the grid and connect every cell to its neighborhood.
    ///
    /// No self-loops and no duplicate edges are created, and the adjacency
    /// is symmetric by construction.
    pub fn new(width: usize, height: usize, connectivity: Connectivity) -> Self {
        let mut cells: Vec<Cell> = Vec::with_capacity(width * height);
        for row in 0..height {
            for col in 0..width {
                cells.push(Cell::new(row, col));
            }
        }

        let offsets: &[(i32, i32)] = match connectivity {
            Connectivity::Four => &[(-1, 0), (1, 0), (0, -1), (0, 1)],
            Connectivity::Eight => &[
                (-1, 0),
                (1, 0),
                (0, -1),
                (0, 1),
                (-1, -1),
                (-1, 1),
                (1, -1),
                (1, 1),
            ],
        };

        let mut edges: Edges = Edges::new();
        let mut adjacent: Vec<usize> = Vec::with_capacity(offsets.len());
        for row in 0..height {
            for col in 0..width {
                adjacent.clear();
                for (drow, dcol) in offsets {
                    let r: i32 = row as i32 + drow;
                    let c: i32 = col as i32 + dcol;
                    if r >= 0 && r < height as i32 && c >= 0 && c < width as i32 {
                        adjacent.push(r as usize * width + c as usize);
                    }
                }
                edges.push_from_array(row * width + col, &adjacent);
            }
        }

        Self {
            width,
            height,
            connectivity,
            cells,
            edges,
        }
    }

    /// Cell neighborhood used when the edges were built.
    pub fn connectivity(&self) -> Connectivity {
        self.connectivity
    }

    /// Number of cells in the grid.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the grid holds no cell at all.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Index of the cell at the given coordinates.
    pub fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Coordinates (row, column) of the given cell.
    pub fn coordinates(&self, index: usize) -> (usize, usize) {
        (index / self.width, index % self.width)
    }

    /// Get the cell at the given index.
    pub fn cell(&self, index: usize) -> &Cell {
        &self.cells[index]
    }

    /// Get a mutable reference to the cell at the given index.
    pub fn cell_mut(&mut self, index: usize) -> &mut Cell {
        &mut self.cells[index]
    }

    /// Get the cell at the given coordinates.
    pub fn cell_at(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row * self.width + col]
    }

    /// For the given cell, return all the adjacent cells.
    pub fn neighbors(&self, index: usize) -> &[usize] {
        self.edges.get_cells(index)
    }

    /// Whether an edge exists between the given cells.
    pub fn has_edge(&self, cell1: usize, cell2: usize) -> bool {
        self.edges.contains(cell1, cell2)
    }

    /// Remove the edge between the given cells, in both directions.
    pub fn remove_edge(&mut self, cell1: usize, cell2: usize) {
        self.edges.remove(cell1, cell2);
    }

    /// Remove all the edges of the given cell, in both directions.
    pub fn remove_all_edges(&mut self, index: usize) {
        self.edges.remove_all(index);
    }

    /// Manhattan distance between the given cells.
    pub fn manhattan(&self, cell1: usize, cell2: usize) -> usize {
        let (r1, c1) = self.coordinates(cell1);
        let (r2, c2) = self.coordinates(cell2);
        r1.abs_diff(r2) + c1.abs_diff(c2)
    }

    /// Fill every empty cell with a uniformly random letter.
    pub fn fill_random_letters<R: Rng>(&mut self, rng: &mut R) {
        for cell in &mut self.cells {
            if cell.content == CellContent::Empty {
                cell.content = CellContent::Letter((b'A' + rng.random_range(0..26u8)) as char);
            }
        }
    }

    /// Whether every non-wall cell can reach every other non-wall cell.
    ///
    /// Walls are treated as non-traversable even if they kept residual
    /// edges.
    pub fn is_fully_connected(&self) -> bool {
        let total: usize = self.cells.iter().filter(|c| !c.is_wall()).count();
        let first: usize = match self.cells.iter().position(|c| !c.is_wall()) {
            Some(i) => i,
            None => return true,
        };

        let mut seen: Vec<bool> = vec![false; self.cells.len()];
        let mut stack: Vec<usize> = vec![first];
        let mut reached: usize = 0;
        seen[first] = true;
        while let Some(cell) = stack.pop() {
            reached += 1;
            for &neighbor in self.neighbors(cell) {
                if !seen[neighbor] && !self.cells[neighbor].is_wall() {
                    seen[neighbor] = true;
                    stack.push(neighbor);
                }
            }
        }
        reached == total
    }

    /// Print the grid.
    pub fn debug(&self) {
        if log_enabled!(Level::Debug) {
            for line in self.to_string().lines() {
                debug!("{line}");
            }
            self.edges.debug();
        }
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in 0..self.height {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.width {
                write!(f, "{}", self.cell_at(row, col).content.to_char())?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn adjacency_is_symmetric_four() {
        let grid: Grid = Grid::new(6, 4, Connectivity::Four);
        for i in 0..grid.len() {
            for &n in grid.neighbors(i) {
                assert!(grid.has_edge(n, i), "missing reverse edge {n} -> {i}");
            }
        }
    }

    #[test]
    fn adjacency_is_symmetric_eight() {
        let grid: Grid = Grid::new(5, 5, Connectivity::Eight);
        for i in 0..grid.len() {
            for &n in grid.neighbors(i) {
                assert!(grid.has_edge(n, i), "missing reverse edge {n} -> {i}");
            }
        }
    }

    #[test]
    fn no_self_loops_or_duplicates() {
        let grid: Grid = Grid::new(5, 5, Connectivity::Eight);
        for i in 0..grid.len() {
            let neighbors: &[usize] = grid.neighbors(i);
            assert!(!neighbors.contains(&i), "self-loop on {i}");
            let mut sorted: Vec<usize> = neighbors.to_vec();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(sorted.len(), neighbors.len(), "duplicate edge on {i}");
        }
    }

    #[test]
    fn neighbor_counts() {
        let four: Grid = Grid::new(10, 10, Connectivity::Four);
        assert_eq!(four.neighbors(four.index(0, 0)).len(), 2);
        assert_eq!(four.neighbors(four.index(5, 5)).len(), 4);
        assert_eq!(four.neighbors(four.index(0, 5)).len(), 3);

        let eight: Grid = Grid::new(10, 10, Connectivity::Eight);
        assert_eq!(eight.neighbors(eight.index(0, 0)).len(), 3);
        assert_eq!(eight.neighbors(eight.index(5, 5)).len(), 8);
        assert_eq!(eight.neighbors(eight.index(0, 5)).len(), 5);
    }

    #[test]
    fn empty_grids() {
        assert!(Grid::new(0, 15, Connectivity::Four).is_empty());
        assert!(Grid::new(15, 0, Connectivity::Four).is_empty());
        let grid: Grid = Grid::new(2, 2, Connectivity::Four);
        assert!(!grid.is_empty());
        assert_eq!(grid.len(), 4);
    }

    #[test]
    fn manhattan_distance() {
        let grid: Grid = Grid::new(10, 10, Connectivity::Four);
        let a: usize = grid.index(2, 3);
        let b: usize = grid.index(7, 1);
        assert_eq!(grid.manhattan(a, b), 7);
        assert_eq!(grid.manhattan(b, a), 7);
        assert_eq!(grid.manhattan(a, a), 0);
    }

    #[test]
    fn random_fill_covers_every_empty_cell() {
        let mut grid: Grid = Grid::new(8, 8, Connectivity::Four);
        let wall: usize = grid.index(3, 3);
        grid.cell_mut(wall).content = CellContent::Wall;

        let mut rng: StdRng = StdRng::seed_from_u64(7);
        grid.fill_random_letters(&mut rng);

        for i in 0..grid.len() {
            if i == wall {
                assert!(grid.cell(i).is_wall());
            } else {
                let c: char = grid.cell(i).letter().expect("cell left empty");
                assert!(c.is_ascii_uppercase());
            }
        }
    }

    #[test]
    fn connectivity_check() {
        let mut grid: Grid = Grid::new(5, 5, Connectivity::Four);
        assert!(grid.is_fully_connected());

        // Wall the full middle column: no passage, two components
        for row in 0..5 {
            let i: usize = grid.index(row, 2);
            grid.cell_mut(i).content = CellContent::Wall;
            grid.remove_all_edges(i);
        }
        assert!(!grid.is_fully_connected());
    }

    #[test]
    fn display_marks_walls() {
        let mut grid: Grid = Grid::new(3, 2, Connectivity::Four);
        grid.cell_mut(grid.index(0, 1)).content = CellContent::Wall;
        grid.cell_mut(grid.index(1, 0)).content = CellContent::Letter('Z');
        assert_eq!(grid.to_string(), " # \nZ  ");
    }
}
