/*
words.rs

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

//! Place dictionary words onto the grid.

use log::{debug, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::cells::CellContent;
use super::grid::Grid;

/// Orientation of a placed word.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A word written onto the grid.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Placement {
    /// Word text.
    pub word: String,

    /// Coordinates (row, column) of the first letter.
    pub start: (usize, usize),

    /// Coordinates (row, column) of the last letter.
    pub end: (usize, usize),

    /// Orientation of the word.
    pub orientation: Orientation,
}

impl Placement {
    /// Number of letters of the word.
    pub fn len(&self) -> usize {
        self.word.chars().count()
    }
}

/// Try to place every word onto the grid.
///
/// A word that cannot be placed within the attempt budget is dropped: this
/// is a soft failure, the level is simply generated with fewer words.
pub fn place_words<R: Rng>(
    grid: &mut Grid,
    words: &[String],
    attempts: usize,
    rng: &mut R,
) -> Vec<Placement> {
    let mut placements: Vec<Placement> = Vec::with_capacity(words.len());
    for word in words {
        match try_place_word(grid, word, attempts, rng) {
            Some(p) => {
                debug!("placed {:?} at {:?} ({:?})", p.word, p.start, p.orientation);
                placements.push(p);
            }
            None => warn!("could not place the word {word:?} after {attempts} attempts"),
        }
    }
    placements
}

/// Try up to `attempts` random placements for one word.
fn try_place_word<R: Rng>(
    grid: &mut Grid,
    word: &str,
    attempts: usize,
    rng: &mut R,
) -> Option<Placement> {
    let letters: Vec<char> = word.chars().collect();
    if letters.is_empty() || grid.is_empty() {
        return None;
    }

    for _ in 0..attempts {
        let orientation: Orientation = if rng.random_range(0..2) == 0 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let row: usize = rng.random_range(0..grid.height);
        let col: usize = rng.random_range(0..grid.width);

        if can_place(grid, &letters, row, col, orientation) {
            write_word(grid, &letters, row, col, orientation);
            let end: (usize, usize) = match orientation {
                Orientation::Horizontal => (row, col + letters.len() - 1),
                Orientation::Vertical => (row + letters.len() - 1, col),
            };
            return Some(Placement {
                word: word.to_string(),
                start: (row, col),
                end,
                orientation,
            });
        }
    }
    None
}

/// Whether the word fits at the given origin.
///
/// The word must stay inside the grid, and every cell it would cover must be
/// empty or already hold the same letter (crossing words share a letter).
/// Walls are never overwritten.
fn can_place(grid: &Grid, letters: &[char], row: usize, col: usize, orientation: Orientation) -> bool {
    match orientation {
        Orientation::Horizontal => {
            if col + letters.len() > grid.width {
                return false;
            }
            for (i, &ch) in letters.iter().enumerate() {
                match grid.cell_at(row, col + i).content {
                    CellContent::Empty => (),
                    CellContent::Letter(c) if c == ch => (),
                    _ => return false,
                }
            }
        }
        Orientation::Vertical => {
            if row + letters.len() > grid.height {
                return false;
            }
            for (i, &ch) in letters.iter().enumerate() {
                match grid.cell_at(row + i, col).content {
                    CellContent::Empty => (),
                    CellContent::Letter(c) if c == ch => (),
                    _ => return false,
                }
            }
        }
    }
    true
}

/// Write the letters and mark the covered cells.
fn write_word(grid: &mut Grid, letters: &[char], row: usize, col: usize, orientation: Orientation) {
    for (i, &ch) in letters.iter().enumerate() {
        let index: usize = match orientation {
            Orientation::Horizontal => grid.index(row, col + i),
            Orientation::Vertical => grid.index(row + i, col),
        };
        grid.cell_mut(index).content = CellContent::Letter(ch);
        grid.cell_mut(index).part_of_word = true;
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generator::params::Connectivity;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn word_fits_only_in_one_spot() {
        // On a 3x1 grid, "CAT" only fits horizontally at the origin.
        let mut grid: Grid = Grid::new(3, 1, Connectivity::Four);
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        let placements: Vec<Placement> =
            place_words(&mut grid, &["CAT".to_string()], 100, &mut rng);

        assert_eq!(placements.len(), 1);
        assert_eq!(placements[0].start, (0, 0));
        assert_eq!(placements[0].end, (0, 2));
        assert_eq!(placements[0].orientation, Orientation::Horizontal);
        assert_eq!(placements[0].len(), 3);
        assert_eq!(grid.to_string(), "CAT");
        for i in 0..3 {
            assert!(grid.cell(i).part_of_word);
        }
    }

    #[test]
    fn different_letters_are_never_overwritten() {
        // The grid is already fully covered by "CAT"; "DOG" shares no letter
        // with it so the budget runs out and the word is dropped.
        let mut grid: Grid = Grid::new(3, 1, Connectivity::Four);
        let mut rng: StdRng = StdRng::seed_from_u64(11);
        place_words(&mut grid, &["CAT".to_string()], 100, &mut rng);

        let placements: Vec<Placement> =
            place_words(&mut grid, &["DOG".to_string()], 100, &mut rng);
        assert!(placements.is_empty());
        assert_eq!(grid.to_string(), "CAT");
    }

    #[test]
    fn crossings_on_the_same_letter_are_allowed() {
        // Every cell already holds the letters of "CAT": placing "CAT"
        // again succeeds by crossing on identical letters.
        let mut grid: Grid = Grid::new(3, 1, Connectivity::Four);
        grid.cell_mut(0).content = CellContent::Letter('C');
        grid.cell_mut(1).content = CellContent::Letter('A');
        grid.cell_mut(2).content = CellContent::Letter('T');

        let mut rng: StdRng = StdRng::seed_from_u64(3);
        let placements: Vec<Placement> =
            place_words(&mut grid, &["CAT".to_string()], 100, &mut rng);
        assert_eq!(placements.len(), 1);
    }

    #[test]
    fn zero_sized_grid_places_nothing() {
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        for (width, height) in [(0, 15), (15, 0), (0, 0)] {
            let mut grid: Grid = Grid::new(width, height, Connectivity::Four);
            let placements: Vec<Placement> =
                place_words(&mut grid, &["CAT".to_string()], 100, &mut rng);
            assert!(placements.is_empty());
        }
    }

    #[test]
    fn oversized_word_is_dropped() {
        let mut grid: Grid = Grid::new(4, 4, Connectivity::Four);
        let mut rng: StdRng = StdRng::seed_from_u64(5);
        let placements: Vec<Placement> =
            place_words(&mut grid, &["ELEPHANT".to_string()], 100, &mut rng);
        assert!(placements.is_empty());
        for i in 0..grid.len() {
            assert_eq!(grid.cell(i).content, CellContent::Empty);
        }
    }
}
