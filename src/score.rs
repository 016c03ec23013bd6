/*
score.rs

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

//! Score the letters collected by the player.

/// Points per letter of a found word.
pub const POINTS_PER_LETTER: u32 = 3;

/// Bonus for finding every word without wandering off the solution walk.
pub const ALL_WORDS_BONUS: u32 = 50;

/// Compute the final score.
///
/// A word counts when its letters appear consecutively somewhere in the
/// collected trail. The bonus requires every word found and a trail no
/// longer than the solution: collecting extra letters along the way costs
/// the bonus, not the word points.
pub fn score(collected: &str, words: &[String], solution_len: usize) -> u32 {
    let mut total: u32 = 0;
    let mut all_found: bool = !words.is_empty();
    for word in words {
        if collected.contains(word.as_str()) {
            total += POINTS_PER_LETTER * word.chars().count() as u32;
        } else {
            all_found = false;
        }
    }
    if all_found && collected.chars().count() <= solution_len {
        total += ALL_WORDS_BONUS;
    }
    total
}

#[cfg(test)]
mod test {
    use super::*;

    fn words() -> Vec<String> {
        vec!["CAT".to_string(), "DOG".to_string()]
    }

    #[test]
    fn letters_of_found_words() {
        assert_eq!(score("XCATX", &words(), 100), 9);
        assert_eq!(score("CATDOG", &words(), 100), 18 + ALL_WORDS_BONUS);
    }

    #[test]
    fn bonus_requires_a_tight_trail() {
        // 9 letters collected against a 8-letter solution: no bonus
        assert_eq!(score("XCATXDOGX", &words(), 8), 18);
        assert_eq!(score("XCATXDOGX", &words(), 9), 18 + ALL_WORDS_BONUS);
    }

    #[test]
    fn missing_word_blocks_the_bonus() {
        assert_eq!(score("CAT", &words(), 100), 9);
    }

    #[test]
    fn no_words_no_bonus() {
        assert_eq!(score("ANYTHING", &[], 100), 0);
    }

    #[test]
    fn scattered_letters_do_not_count() {
        // C, A and T collected, but never consecutively
        assert_eq!(score("CXAXT", &words(), 100), 0);
    }
}
