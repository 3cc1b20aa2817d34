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

//! Webdoku engine: Sudoku generation, clue reduction, solving and validity
//! checking over a flat 81-cell grid.
//!
//! The browser UI owns the DOM and calls into this crate through the
//! `wasm_bindgen` exports below, passing grids as 81-element arrays
//! (`0` = empty) and getting grids, masks, or booleans back. The engine
//! holds no UI state.

pub mod board;
pub mod generate;
pub mod solver;
pub mod types;

use crate::board::Board;
use crate::generate::Difficulty;
use wasm_bindgen::prelude::*;

/// Runs once when the wasm module is instantiated.
#[wasm_bindgen(start)]
pub fn init() {
    // Route panic messages to console.error instead of an opaque trap.
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Per-keystroke validation for the cell at `index`.
///
/// Returns false for out-of-range digits, a bad index, or a grid of the
/// wrong shape, before any constraint is checked. The cell under edit is
/// excluded from the scan since the DOM already shows the candidate there.
#[wasm_bindgen]
pub fn is_valid_input(cells: &[u8], value: u8, index: usize) -> bool {
    if !(1..=9).contains(&value) || index >= 81 {
        return false;
    }
    let Ok(board) = Board::from_cells(cells) else {
        return false;
    };
    board.is_valid_input(value, index)
}

/// Generates a puzzle for the given difficulty (`"easy"`, `"medium"`,
/// `"hard"`) and returns `{ cells, givens }`.
#[wasm_bindgen]
pub fn generate_puzzle(difficulty: &str) -> Result<JsValue, JsValue> {
    let difficulty: Difficulty = difficulty.parse().map_err(|e: String| js_error(&e))?;
    let puzzle = generate::generate(difficulty);
    serde_wasm_bindgen::to_value(&puzzle).map_err(JsValue::from)
}

/// Like [`generate_puzzle`], but reverts any clue removal that would leave
/// the puzzle with more than one solution.
#[wasm_bindgen]
pub fn generate_unique_puzzle(difficulty: &str) -> Result<JsValue, JsValue> {
    let difficulty: Difficulty = difficulty.parse().map_err(|e: String| js_error(&e))?;
    let puzzle = generate::generate_unique(difficulty);
    serde_wasm_bindgen::to_value(&puzzle).map_err(JsValue::from)
}

/// Solves the submitted grid and returns the completed 81 cells.
///
/// Fails with a descriptive error when the grid is malformed, already
/// conflicting, or has no solution; the UI surfaces the message as its
/// "no solution exists" notice.
#[wasm_bindgen]
pub fn solve_puzzle(cells: &[u8]) -> Result<Vec<u8>, JsValue> {
    let mut board = Board::from_cells(cells).map_err(|e| js_error(&e))?;
    solver::solve(&mut board).map_err(|e| js_error(&e.to_string()))?;
    Ok(board.cells.to_vec())
}

fn js_error(message: &str) -> JsValue {
    JsError::new(message).into()
}
