/*
params.rs

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

//! Generation parameters.
//!
//! A single [`Params`] object drives the whole pipeline, so one
//! implementation covers every level variant (grid size, connectivity,
//! carving order) instead of one copy of the code per variant.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Neighborhood used when connecting the grid cells.
#[derive(ValueEnum, Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum Connectivity {
    /// Orthogonal neighbors only.
    #[default]
    Four,

    /// Orthogonal and diagonal neighbors.
    Eight,
}

/// Whether the walls are carved before or after the words are placed.
///
/// Both orders produce valid levels: carving only ever walls empty cells, so
/// placed letters survive either way.
#[derive(ValueEnum, Serialize, Deserialize, Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum CarveOrder {
    #[default]
    BeforeWords,
    AfterWords,
}

/// Difficulty level, which drives the grid size.
#[derive(ValueEnum, Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Difficulty::Easy => write!(f, "easy"),
            Difficulty::Medium => write!(f, "medium"),
            Difficulty::Hard => write!(f, "hard"),
        }
    }
}

/// Parameters of the generation pipeline.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Params {
    /// Number of columns in the grid.
    pub width: usize,

    /// Number of rows in the grid.
    pub height: usize,

    /// Cell neighborhood.
    pub connectivity: Connectivity,

    /// Order of the carving and word placement phases.
    pub carve_order: CarveOrder,

    /// Minimum region extent along either axis below which carving stops.
    pub min_region: usize,

    /// Number of random placements tried before a word is dropped.
    pub placement_attempts: usize,

    /// Minimum Manhattan distance between the start and end cells.
    pub min_separation: usize,

    /// Number of words read from the dictionary.
    pub max_words: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            width: 15,
            height: 15,
            connectivity: Connectivity::Four,
            carve_order: CarveOrder::BeforeWords,
            min_region: 2,
            placement_attempts: 100,
            min_separation: 5,
            max_words: 5,
        }
    }
}

impl Params {
    /// Return the parameters for the given difficulty level.
    pub fn from_difficulty(difficulty: Difficulty) -> Self {
        let size: usize = match difficulty {
            Difficulty::Easy => 10,
            Difficulty::Medium => 15,
            Difficulty::Hard => 20,
        };
        Self {
            width: size,
            height: size,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn difficulty_tiers() {
        assert_eq!(Params::from_difficulty(Difficulty::Easy).width, 10);
        assert_eq!(Params::from_difficulty(Difficulty::Medium).height, 15);
        assert_eq!(Params::from_difficulty(Difficulty::Hard).width, 20);
    }

    #[test]
    fn defaults_match_the_classic_variant() {
        let params: Params = Params::default();
        assert_eq!(params.width, 15);
        assert_eq!(params.placement_attempts, 100);
        assert_eq!(params.min_separation, 5);
        assert_eq!(params.max_words, 5);
        assert_eq!(params.connectivity, Connectivity::Four);
    }
}
