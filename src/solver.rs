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

//! Backtracking over the board: deterministic solving, randomized filling
//! for generation, and solution counting.
//!
//! Recursion depth is bounded by 81 (one frame per empty cell), so the
//! native call stack is sufficient even on wasm.

use crate::board::Board;
use rand::Rng;
use rand::seq::SliceRandom;
use std::fmt;

/// Why a solve attempt produced no completed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveError {
    /// The submitted board already violates a row/column/box constraint.
    InvalidInput,
    /// The board is consistent but admits no completion.
    Unsolvable,
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::InvalidInput => write!(f, "puzzle contains conflicting digits"),
            SolveError::Unsolvable => write!(f, "no solution exists"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Completes `board` in place, trying digits in ascending order.
///
/// A board with pre-existing conflicts is rejected up front; backtracking
/// can never succeed on one, and running it anyway would only burn cycles.
/// On `Err(Unsolvable)` every tentative digit has been reset, so the board
/// equals its input state.
pub fn solve(board: &mut Board) -> Result<(), SolveError> {
    if !board.find_conflicts().is_empty() {
        return Err(SolveError::InvalidInput);
    }
    if solve_from_first_empty(board) {
        Ok(())
    } else {
        Err(SolveError::Unsolvable)
    }
}

fn solve_from_first_empty(board: &mut Board) -> bool {
    let Some(index) = board.find_empty() else {
        return true;
    };
    let row = index / 9;
    let col = index % 9;

    for value in 1..=9 {
        if board.is_valid(value, row, col) {
            board.cells[index] = value;
            if solve_from_first_empty(board) {
                return true;
            }
            board.cells[index] = 0;
        }
    }
    false
}

/// Fills `board` in place like [`solve`], but tries the digits of each cell
/// in a freshly shuffled order so repeated calls produce varied grids.
///
/// Always succeeds from an empty board; returns false only when handed a
/// partial board with no completion.
pub fn fill_randomized<R: Rng + ?Sized>(board: &mut Board, rng: &mut R) -> bool {
    let Some(index) = board.find_empty() else {
        return true;
    };
    let row = index / 9;
    let col = index % 9;

    let mut values: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    values.shuffle(rng);

    for &value in &values {
        if board.is_valid(value, row, col) {
            board.cells[index] = value;
            if fill_randomized(board, rng) {
                return true;
            }
            board.cells[index] = 0;
        }
    }
    false
}

/// Counts the completions of `board`, stopping at 2.
///
/// Only "zero", "one", and "more than one" are ever needed, so the search
/// short-circuits once a second solution turns up. Boards with pre-existing
/// conflicts count as having zero solutions.
pub fn count_solutions(board: &Board) -> usize {
    if !board.find_conflicts().is_empty() {
        return 0;
    }
    let mut scratch = *board;
    count_from_first_empty(&mut scratch)
}

fn count_from_first_empty(board: &mut Board) -> usize {
    let Some(index) = board.find_empty() else {
        return 1;
    };
    let row = index / 9;
    let col = index % 9;

    let mut found = 0;
    for value in 1..=9 {
        if board.is_valid(value, row, col) {
            board.cells[index] = value;
            found += count_from_first_empty(board);
            board.cells[index] = 0;
            if found >= 2 {
                break;
            }
        }
    }
    found
}
