/*
dictionary.rs

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

//! Load the word list from a dictionary file.

use log::warn;
use std::fs;
use std::path::Path;

/// Read up to `max_words` words from the given file.
///
/// Words are whitespace separated and folded to uppercase, since the grid
/// only ever holds uppercase letters. A missing or unreadable file is not
/// fatal: the level is simply generated without words.
pub fn load_words(path: &Path, max_words: usize) -> Vec<String> {
    let contents: String = match fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("cannot read the dictionary {}: {e}", path.display());
            return Vec::new();
        }
    };
    contents
        .split_whitespace()
        .take(max_words)
        .map(|w| w.to_uppercase())
        .collect()
}
