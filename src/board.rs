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

//! The grid model and row/column/box constraint checks.

use std::fmt;
use std::str::FromStr;

/// Bitmask of all nine digits, used by the solved-board check.
pub(crate) const ALL_DIGITS: u16 = 0b111111111;

// Pre-calculate and cache the cell indices of every row, column, and box.
lazy_static::lazy_static! {
    pub(crate) static ref ROW_UNITS: [[usize; 9]; 9] = {
        let mut units = [[0; 9]; 9];
        for (i, row) in units.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = i * 9 + j;
            }
        }
        units
    };
    pub(crate) static ref COL_UNITS: [[usize; 9]; 9] = {
        let mut units = [[0; 9]; 9];
        for (i, row) in units.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = j * 9 + i;
            }
        }
        units
    };
    pub(crate) static ref BOX_UNITS: [[usize; 9]; 9] = {
        let mut units = [[0; 9]; 9];
        for (i, unit) in units.iter_mut().enumerate() {
            let start_row = (i / 3) * 3;
            let start_col = (i % 3) * 3;
            for (j, cell) in unit.iter_mut().enumerate() {
                *cell = (start_row + j / 3) * 9 + (start_col + j % 3);
            }
        }
        units
    };
    /// A collection of all 27 units (9 rows, 9 columns, 9 boxes).
    pub(crate) static ref ALL_UNITS: Vec<&'static [usize]> = {
        let mut units = Vec::with_capacity(27);
        units.extend(ROW_UNITS.iter().map(|u| &u[..]));
        units.extend(COL_UNITS.iter().map(|u| &u[..]));
        units.extend(BOX_UNITS.iter().map(|u| &u[..]));
        units
    };
}

/// A Sudoku board as a flat array of 81 cells.
///
/// Index `i` maps to row `i / 9` and column `i % 9`. A `0` marks an empty
/// cell; `1..=9` is a placed digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    pub cells: [u8; 81],
}

impl Board {
    /// An all-empty board.
    pub const fn empty() -> Self {
        Board { cells: [0; 81] }
    }

    /// Builds a board from a caller-supplied slice, validating length and
    /// digit range. This is the entry point for grids handed over from the UI.
    pub fn from_cells(cells: &[u8]) -> Result<Self, String> {
        if cells.len() != 81 {
            return Err(format!("expected 81 cells, got {}", cells.len()));
        }
        if let Some(pos) = cells.iter().position(|&c| c > 9) {
            return Err(format!(
                "cell {pos} holds {}, expected a value in 0-9",
                cells[pos]
            ));
        }
        let mut board = Board::empty();
        board.cells.copy_from_slice(cells);
        Ok(board)
    }

    /// Checks whether `value` can be placed at `(row, col)` without repeating
    /// in the row, the column, or the containing 3x3 box.
    ///
    /// The target cell is expected to be empty; fill and solve only call this
    /// on empty cells, so the scan never collides with the cell itself.
    pub fn is_valid(&self, value: u8, row: usize, col: usize) -> bool {
        for i in 0..9 {
            if self.cells[row * 9 + i] == value || self.cells[i * 9 + col] == value {
                return false;
            }
        }

        let box_row = row / 3 * 3;
        let box_col = col / 3 * 3;
        for r in box_row..box_row + 3 {
            for c in box_col..box_col + 3 {
                if self.cells[r * 9 + c] == value {
                    return false;
                }
            }
        }

        true
    }

    /// Live-input variant of [`is_valid`](Self::is_valid) for a cell the user
    /// is editing: the cell at `index` already holds the candidate in the UI,
    /// so it is excluded from the scan.
    pub fn is_valid_input(&self, value: u8, index: usize) -> bool {
        let row = index / 9;
        let col = index % 9;

        for i in 0..9 {
            let in_row = row * 9 + i;
            let in_col = i * 9 + col;
            if (in_row != index && self.cells[in_row] == value)
                || (in_col != index && self.cells[in_col] == value)
            {
                return false;
            }
        }

        let box_row = row / 3 * 3;
        let box_col = col / 3 * 3;
        for r in box_row..box_row + 3 {
            for c in box_col..box_col + 3 {
                let in_box = r * 9 + c;
                if in_box != index && self.cells[in_box] == value {
                    return false;
                }
            }
        }

        true
    }

    /// Index of the first empty cell in scan order, if any.
    pub fn find_empty(&self) -> Option<usize> {
        self.cells.iter().position(|&c| c == 0)
    }

    /// Indices of filled cells whose digit repeats within one of their units.
    pub fn find_conflicts(&self) -> Vec<usize> {
        let mut conflicted = [false; 81];
        for unit in ALL_UNITS.iter() {
            for (pos, &a) in unit.iter().enumerate() {
                if self.cells[a] == 0 {
                    continue;
                }
                for &b in &unit[pos + 1..] {
                    if self.cells[a] == self.cells[b] {
                        conflicted[a] = true;
                        conflicted[b] = true;
                    }
                }
            }
        }
        (0..81).filter(|&i| conflicted[i]).collect()
    }

    /// True when every unit contains each of 1-9 exactly once.
    pub fn is_solved(&self) -> bool {
        ALL_UNITS.iter().all(|unit| {
            let mut seen = 0u16;
            for &i in unit.iter() {
                let value = self.cells[i];
                if value == 0 {
                    return false;
                }
                seen |= 1 << (value - 1);
            }
            seen == ALL_DIGITS
        })
    }
}

impl FromStr for Board {
    type Err = String;

    /// Parses the 81-character puzzle format where `.` or `0` is an empty
    /// cell. Whitespace is ignored, so multi-line fixtures parse too.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != 81 {
            return Err(format!("expected 81 cells, got {}", chars.len()));
        }

        let mut cells = [0u8; 81];
        for (i, &ch) in chars.iter().enumerate() {
            cells[i] = match ch {
                '.' | '0' => 0,
                '1'..='9' => ch as u8 - b'0',
                _ => return Err(format!("invalid character '{ch}' at cell {i}")),
            };
        }
        Ok(Board { cells })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &cell in &self.cells {
            let ch = if cell == 0 {
                '.'
            } else {
                char::from(b'0' + cell)
            };
            write!(f, "{ch}")?;
        }
        Ok(())
    }
}
