/*
* Copyright (C) 2026  Webdoku contributors
* This file is part of Webdoku.
*
* Webdoku is free software: you can redistribute it and/or modify
* it under the terms of the GNU Affero General Public License as published
* by the Free Software Foundation, either version 3 of the License, or
* (at your option) any later version.
*
* Webdoku is distributed in the hope that it will be useful,
* but WITHOUT ANY WARRANTY; without even the implied warranty of
* MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
* GNU Affero General Public License for more details.
*
* You should have received a copy of the GNU Affero General Public License
* along with Webdoku.  If not, see <https://www.gnu.org/licenses/>.
*/

//! Puzzle generation: a randomized fill phase followed by a clue-removal
//! phase sized by the chosen difficulty.

use crate::board::Board;
use crate::solver;
use crate::types::GeneratedPuzzle;
use rand::Rng;
use rand::RngExt;
use rand::rng;
use rand::seq::SliceRandom;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Represents the target difficulty of the generated puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Inclusive range of clues removed from a full solution. The removal
    /// count is drawn uniformly from this range on every generation call.
    pub fn removal_range(self) -> RangeInclusive<usize> {
        match self {
            Difficulty::Easy => 36..=40,
            Difficulty::Medium => 30..=35,
            Difficulty::Hard => 25..=30,
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    /// Parses the values a difficulty `<select>` submits, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(format!("unknown difficulty '{s}'")),
        }
    }
}

/// Generate a complete, solved Sudoku board.
fn generate_full_solution<R: Rng + ?Sized>(rng: &mut R) -> Board {
    let mut board = Board::empty();
    // Always succeeds: a 9x9 grid is satisfiable from empty.
    solver::fill_randomized(&mut board, rng);
    board
}

/// Clears `count` filled cells at uniformly random positions.
///
/// Only non-empty cells advance the counter, so the loop terminates for any
/// `count` up to 81; the difficulty ranges top out at 40.
fn remove_numbers<R: Rng + ?Sized>(board: &mut Board, count: usize, rng: &mut R) {
    let mut removed = 0;
    while removed < count {
        let index = rng.random_range(0..81);
        if board.cells[index] != 0 {
            board.cells[index] = 0;
            removed += 1;
        }
    }
}

/// Generates a puzzle of a specific difficulty.
///
/// Removal is purely random: the puzzle is always solvable (its fill-phase
/// solution survives), but it is not guaranteed to have only one solution.
/// Use [`generate_unique`] when uniqueness matters.
pub fn generate(difficulty: Difficulty) -> GeneratedPuzzle {
    let mut rng = rng();
    let mut board = generate_full_solution(&mut rng);
    let remove_count = rng.random_range(difficulty.removal_range());
    remove_numbers(&mut board, remove_count, &mut rng);
    GeneratedPuzzle::from_board(&board)
}

/// Generates a puzzle of a specific difficulty with a unique solution.
///
/// Visits the cells in a random order and attempts to remove each clue,
/// putting it back whenever the removal admits a second solution. Stops at
/// the difficulty's drawn removal count, or earlier if no further clue can
/// be removed without breaking uniqueness.
pub fn generate_unique(difficulty: Difficulty) -> GeneratedPuzzle {
    let mut rng = rng();
    let mut puzzle = generate_full_solution(&mut rng);
    let target = rng.random_range(difficulty.removal_range());

    let mut indices: Vec<usize> = (0..81).collect();
    indices.shuffle(&mut rng);

    let mut removed = 0;
    for index in indices {
        if removed == target {
            break;
        }
        let original_value = puzzle.cells[index];
        puzzle.cells[index] = 0;
        if solver::count_solutions(&puzzle) != 1 {
            puzzle.cells[index] = original_value;
        } else {
            removed += 1;
        }
    }
    GeneratedPuzzle::from_board(&puzzle)
}
