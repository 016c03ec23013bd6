/*
carver.rs

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

//! Carve walls into the grid by recursive spatial partition.
//!
//! Each partition step cuts a rectangular region with one wall line and
//! leaves exactly one passage cell on that line, then splits the region in
//! two at the cut. The single passage per cut is what keeps the maze
//! traversable; the pipeline still verifies the result afterwards, because a
//! passage drawn onto an already walled cell would silently seal a region.

use log::debug;
use rand::Rng;

use super::cells::CellContent;
use super::grid::Grid;

/// Rectangular region of the grid, inclusive on all four sides.
#[derive(Debug, Copy, Clone)]
struct Region {
    r1: usize,
    c1: usize,
    r2: usize,
    c2: usize,
}

/// Carve walls into the grid.
///
/// The partition uses an explicit work stack instead of recursion, so a
/// pathological grid size cannot exhaust the call stack. Regions whose
/// extent along either axis is below `min_region` are left untouched.
pub fn carve<R: Rng>(grid: &mut Grid, min_region: usize, rng: &mut R) {
    if grid.width < 2 || grid.height < 2 {
        return;
    }

    // A cut needs a line strictly inside the region
    let min_extent: usize = min_region.max(2);

    let mut regions: Vec<Region> = vec![Region {
        r1: 0,
        c1: 0,
        r2: grid.height - 1,
        c2: grid.width - 1,
    }];

    while let Some(region) = regions.pop() {
        let width: usize = region.c2 - region.c1;
        let height: usize = region.r2 - region.r1;
        if width < min_extent || height < min_extent {
            continue;
        }

        // Bisect the longer side; flip a coin on square regions
        let vertical: bool = if width != height {
            width > height
        } else {
            rng.random_range(0..2) == 0
        };

        if vertical {
            let cut: usize = rng.random_range(region.c1 + 1..region.c2);
            let passage: usize = rng.random_range(region.r1..=region.r2);
            for row in region.r1..=region.r2 {
                if row != passage {
                    wall_cell(grid, row, cut);
                }
            }
            debug!("vertical cut at column {cut}, passage at row {passage}");
            regions.push(Region {
                c2: cut - 1,
                ..region
            });
            regions.push(Region {
                c1: cut + 1,
                ..region
            });
        } else {
            let cut: usize = rng.random_range(region.r1 + 1..region.r2);
            let passage: usize = rng.random_range(region.c1..=region.c2);
            for col in region.c1..=region.c2 {
                if col != passage {
                    wall_cell(grid, cut, col);
                }
            }
            debug!("horizontal cut at row {cut}, passage at column {passage}");
            regions.push(Region {
                r2: cut - 1,
                ..region
            });
            regions.push(Region {
                r1: cut + 1,
                ..region
            });
        }
    }
}

/// Turn the cell into a wall and detach it from all its neighbors.
///
/// Cells holding a letter are left alone: word integrity takes priority over
/// carving.
fn wall_cell(grid: &mut Grid, row: usize, col: usize) {
    let index: usize = grid.index(row, col);
    if grid.cell(index).content != CellContent::Empty {
        return;
    }
    grid.cell_mut(index).content = CellContent::Wall;
    grid.remove_all_edges(index);
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generator::params::Connectivity;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn sub_minimum_region_is_untouched() {
        let mut grid: Grid = Grid::new(3, 3, Connectivity::Four);
        let mut rng: StdRng = StdRng::seed_from_u64(1);
        carve(&mut grid, 3, &mut rng);

        for i in 0..grid.len() {
            assert_eq!(grid.cell(i).content, CellContent::Empty);
        }
        // Edges untouched too
        assert_eq!(grid.neighbors(grid.index(1, 1)).len(), 4);
    }

    #[test]
    fn walls_lose_all_their_edges() {
        let mut grid: Grid = Grid::new(10, 10, Connectivity::Eight);
        let mut rng: StdRng = StdRng::seed_from_u64(42);
        carve(&mut grid, 2, &mut rng);

        let mut walls: usize = 0;
        for i in 0..grid.len() {
            if grid.cell(i).is_wall() {
                walls += 1;
                assert_eq!(grid.neighbors(i).len(), 0, "wall {i} kept edges");
                for j in 0..grid.len() {
                    assert!(!grid.has_edge(j, i), "residual edge {j} -> {i}");
                }
            }
        }
        assert!(walls > 0, "carving a 10x10 grid placed no wall");
    }

    #[test]
    fn single_cut_keeps_the_grid_connected() {
        // min_region 4 on a 5x5 grid allows exactly one cut: one wall line
        // with one passage, which can never disconnect anything.
        for seed in 0..20 {
            let mut grid: Grid = Grid::new(5, 5, Connectivity::Four);
            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            carve(&mut grid, 4, &mut rng);

            let walls: usize = (0..grid.len()).filter(|&i| grid.cell(i).is_wall()).count();
            assert_eq!(walls, 4, "one cut on a 5-cell line leaves 4 walls");
            assert!(grid.is_fully_connected(), "seed {seed} disconnected the grid");
        }
    }

    #[test]
    fn letter_cells_are_never_walled() {
        for seed in 0..20 {
            let mut grid: Grid = Grid::new(10, 10, Connectivity::Four);
            // Write a fake placed word across the middle row
            for col in 0..10 {
                let i: usize = grid.index(5, col);
                grid.cell_mut(i).content = CellContent::Letter('W');
                grid.cell_mut(i).part_of_word = true;
            }

            let mut rng: StdRng = StdRng::seed_from_u64(seed);
            carve(&mut grid, 2, &mut rng);

            for col in 0..10 {
                assert_eq!(
                    grid.cell_at(5, col).content,
                    CellContent::Letter('W'),
                    "seed {seed} overwrote a word letter"
                );
            }
        }
    }
}
