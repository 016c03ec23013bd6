/*
cells.rs

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

//! Cells of the word-maze grid.

use serde::{Deserialize, Serialize};

/// Content of a cell in the word-maze grid.
///
/// - An `Empty` cell has not received a letter yet. Only the generation
///   pipeline sees empty cells: once a level is ready for play, every cell is
///   either a wall or a letter.
/// - A `Wall` cell is impassable. Carving removes all its adjacency edges.
/// - A `Letter` cell holds one uppercase letter, from a placed dictionary
///   word or from the random fill.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CellContent {
    #[default]
    Empty,
    Wall,
    Letter(char),
}

impl CellContent {
    /// Character used when printing the grid.
    pub fn to_char(self) -> char {
        match self {
            CellContent::Empty => ' ',
            CellContent::Wall => '#',
            CellContent::Letter(c) => c,
        }
    }
}

/// One position in the grid.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Cell {
    /// Row coordinate.
    pub row: usize,

    /// Column coordinate.
    pub col: usize,

    /// Content of the cell.
    pub content: CellContent,

    /// Whether the cell holds a letter of a placed dictionary word.
    pub part_of_word: bool,

    /// Whether the player entered the cell.
    pub visited: bool,
}

impl Cell {
    /// Create an empty cell at the given coordinates.
    pub fn new(row: usize, col: usize) -> Self {
        Self {
            row,
            col,
            content: CellContent::Empty,
            part_of_word: false,
            visited: false,
        }
    }

    /// Whether the cell is a wall.
    pub fn is_wall(&self) -> bool {
        self.content == CellContent::Wall
    }

    /// Return the letter of the cell, if it holds one.
    pub fn letter(&self) -> Option<char> {
        match self.content {
            CellContent::Letter(c) => Some(c),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn content_chars() {
        assert_eq!(CellContent::Empty.to_char(), ' ');
        assert_eq!(CellContent::Wall.to_char(), '#');
        assert_eq!(CellContent::Letter('Q').to_char(), 'Q');
    }

    #[test]
    fn new_cell_is_empty() {
        let cell: Cell = Cell::new(3, 7);
        assert_eq!(cell.row, 3);
        assert_eq!(cell.col, 7);
        assert_eq!(cell.content, CellContent::Empty);
        assert!(!cell.is_wall());
        assert!(cell.letter().is_none());
        assert!(!cell.part_of_word);
        assert!(!cell.visited);
    }
}
