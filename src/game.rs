/*
game.rs

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

//! Play a generated level.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::generator::Level;
use crate::generator::params::Connectivity;
use crate::score;

/// State of the player on the grid.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Player {
    /// Index of the cell the player stands on.
    pub position: usize,

    /// Score, computed when the level is solved.
    pub score: u32,

    /// Letters collected so far, in collection order.
    pub collected: String,
}

/// A level being played.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Game {
    /// The level under play.
    pub level: Level,

    /// The player state.
    pub player: Player,

    /// Number of committed moves.
    pub moves: usize,

    solved: bool,
}

impl Game {
    /// Start playing the given level.
    ///
    /// The player stands on the start cell. The start and end letters are
    /// never collected: they mark the endpoints and are not part of the
    /// letter trail.
    pub fn new(level: Level) -> Self {
        let start: usize = level.start;
        let mut game: Game = Self {
            level,
            player: Player {
                position: start,
                score: 0,
                collected: String::new(),
            },
            moves: 0,
            solved: false,
        };
        game.level.grid.cell_mut(start).visited = true;
        game
    }

    /// Whether the player reached the end cell.
    pub fn is_solved(&self) -> bool {
        self.solved
    }

    /// Try to move the player by one cell.
    ///
    /// The move is rejected when it is not a single step, when it is a
    /// diagonal step on an orthogonal grid, when it leaves the grid, or when
    /// the target cell is a wall. Returns whether the move was committed.
    pub fn attempt_move(&mut self, drow: i32, dcol: i32) -> bool {
        if !self.step_allowed(drow, dcol) {
            return false;
        }

        let (row, col) = self.level.grid.coordinates(self.player.position);
        let r: i64 = row as i64 + drow as i64;
        let c: i64 = col as i64 + dcol as i64;
        if r < 0
            || r >= self.level.grid.height as i64
            || c < 0
            || c >= self.level.grid.width as i64
        {
            return false;
        }

        let target: usize = self.level.grid.index(r as usize, c as usize);
        if self.level.grid.cell(target).is_wall() {
            return false;
        }

        self.player.position = target;
        self.moves += 1;

        if !self.level.grid.cell(target).visited {
            self.level.grid.cell_mut(target).visited = true;
            if target != self.level.end
                && let Some(letter) = self.level.grid.cell(target).letter()
            {
                self.player.collected.push(letter);
            }
        }

        if target == self.level.end && !self.solved {
            self.solved = true;
            self.player.score = score::score(
                &self.player.collected,
                &self.level.words(),
                self.level.solution.len(),
            );
            debug!(
                "level solved in {} moves, score {}",
                self.moves, self.player.score
            );
        }
        true
    }

    fn step_allowed(&self, drow: i32, dcol: i32) -> bool {
        if drow == 0 && dcol == 0 {
            return false;
        }
        if drow.abs() > 1 || dcol.abs() > 1 {
            return false;
        }
        // Diagonal steps need a diagonal neighborhood
        if drow != 0 && dcol != 0 && self.level.grid.connectivity() != Connectivity::Eight {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::generator::cells::CellContent;
    use crate::generator::grid::Grid;
    use crate::generator::route::Route;
    use crate::generator::stitcher::Solution;

    fn tiny_level(connectivity: Connectivity) -> Level {
        // 3x3 grid:
        //   S A B
        //   # # C
        //   F E D
        // Start top-left, end bottom-left, a wall pair in the middle row.
        let mut grid: Grid = Grid::new(3, 3, connectivity);
        let letters: [(usize, usize, char); 7] = [
            (0, 0, 'S'),
            (0, 1, 'A'),
            (0, 2, 'B'),
            (1, 2, 'C'),
            (2, 2, 'D'),
            (2, 1, 'E'),
            (2, 0, 'F'),
        ];
        for (row, col, ch) in letters {
            let i: usize = grid.index(row, col);
            grid.cell_mut(i).content = CellContent::Letter(ch);
        }
        for col in 0..2 {
            let i: usize = grid.index(1, col);
            grid.cell_mut(i).content = CellContent::Wall;
            grid.remove_all_edges(i);
        }

        let start: usize = grid.index(0, 0);
        let end: usize = grid.index(2, 0);
        Level {
            grid,
            placements: Vec::new(),
            start,
            end,
            route: Route {
                waypoints: vec![start, end],
            },
            solution: Solution {
                cells: vec![0, 1, 2, 5, 8, 7, 6],
                letters: "ABCDE".to_string(),
            },
        }
    }

    #[test]
    fn walls_and_bounds_reject_moves() {
        let mut game: Game = Game::new(tiny_level(Connectivity::Four));
        assert!(!game.attempt_move(-1, 0), "left the grid");
        assert!(!game.attempt_move(0, -1), "left the grid");
        assert!(!game.attempt_move(1, 0), "walked into a wall");
        assert!(!game.attempt_move(0, 0), "did not move");
        assert!(!game.attempt_move(0, 2), "jumped two cells");
        assert_eq!(game.moves, 0);
    }

    #[test]
    fn diagonal_steps_need_eight_connectivity() {
        let mut four: Game = Game::new(tiny_level(Connectivity::Four));
        assert!(!four.attempt_move(1, 1));

        let mut eight: Game = Game::new(tiny_level(Connectivity::Eight));
        assert!(!eight.attempt_move(1, 1), "the diagonal target is a wall");
        assert!(eight.attempt_move(0, 1));
        assert!(eight.attempt_move(1, 1), "diagonal step onto C");
        assert_eq!(eight.player.collected, "AC");
    }

    #[test]
    fn letters_are_collected_once() {
        let mut game: Game = Game::new(tiny_level(Connectivity::Four));
        assert!(game.attempt_move(0, 1));
        assert!(game.attempt_move(0, -1), "back to the start");
        assert!(game.attempt_move(0, 1), "onto A again");
        assert_eq!(game.player.collected, "A");
        assert_eq!(game.moves, 3);
    }

    #[test]
    fn solving_latches_and_scores() {
        let mut game: Game = Game::new(tiny_level(Connectivity::Four));
        for (drow, dcol) in [(0, 1), (0, 1), (1, 0), (1, 0), (0, -1), (0, -1)] {
            assert!(game.attempt_move(drow, dcol));
        }
        assert!(game.is_solved());
        assert_eq!(game.player.position, game.level.end);
        assert_eq!(game.player.collected, "ABCDE");
        // No words on the level: the score stays zero
        assert_eq!(game.player.score, 0);

        // Moving away does not unsolve the level
        assert!(game.attempt_move(0, 1));
        assert!(game.is_solved());
    }

    #[test]
    fn word_on_the_trail_scores() {
        let mut level: Level = tiny_level(Connectivity::Four);
        level.placements.push(crate::generator::words::Placement {
            word: "CDE".to_string(),
            start: (1, 2),
            end: (2, 1),
            orientation: crate::generator::words::Orientation::Vertical,
        });

        let mut game: Game = Game::new(level);
        for (drow, dcol) in [(0, 1), (0, 1), (1, 0), (1, 0), (0, -1), (0, -1)] {
            assert!(game.attempt_move(drow, dcol));
        }
        assert!(game.is_solved());
        // 3 letters at 3 points each, plus the bonus: the trail "ABCDE"
        // matches the solution length exactly.
        assert_eq!(game.player.score, 9 + score::ALL_WORDS_BONUS);
    }
}
