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

//! Data types crossing the wasm boundary.

use crate::board::Board;
use serde::{Deserialize, Serialize};

/// A generated puzzle as handed to the UI: the 81 cell values plus a mask
/// marking which cells are givens (pre-filled, to be rendered non-editable).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedPuzzle {
    /// Cell values in scan order; `0` is an empty, player-editable cell.
    pub cells: Vec<u8>,
    /// `givens[i]` is true iff `cells[i]` holds a clue.
    pub givens: Vec<bool>,
}

impl GeneratedPuzzle {
    /// Snapshots a reduced board into the boundary shape.
    pub fn from_board(board: &Board) -> Self {
        GeneratedPuzzle {
            cells: board.cells.to_vec(),
            givens: board.cells.iter().map(|&c| c != 0).collect(),
        }
    }
}
