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

use webdoku_wasm::board::Board;

const PUZZLE: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

#[test]
fn test_parse_and_display_round_trip() {
    let board: Board = PUZZLE.parse().unwrap();
    assert_eq!(board.to_string(), PUZZLE);
}

#[test]
fn test_parse_ignores_whitespace_and_accepts_zero_for_empty() {
    let spaced = PUZZLE
        .chars()
        .enumerate()
        .flat_map(|(i, c)| {
            let c = if c == '.' && i % 2 == 0 { '0' } else { c };
            if i % 9 == 0 { vec!['\n', c] } else { vec![c] }
        })
        .collect::<String>();
    let board: Board = spaced.parse().unwrap();
    assert_eq!(board.to_string(), PUZZLE);
}

#[test]
fn test_parse_rejects_malformed_strings() {
    assert!("123".parse::<Board>().is_err());
    let with_letter = format!("x{}", ".".repeat(80));
    assert!(with_letter.parse::<Board>().is_err());
}

#[test]
fn test_from_cells_validates_shape_and_range() {
    assert!(Board::from_cells(&[0; 80]).is_err());
    let mut cells = [0u8; 81];
    cells[40] = 10;
    assert!(Board::from_cells(&cells).is_err());
    cells[40] = 9;
    assert!(Board::from_cells(&cells).is_ok());
}

#[test]
fn test_is_valid_checks_row_column_and_box() {
    let mut board = Board::empty();
    board.cells[8] = 5; // (0, 8): same row as (0, 0)
    assert!(!board.is_valid(5, 0, 0));
    assert!(board.is_valid(6, 0, 0));

    let mut board = Board::empty();
    board.cells[72] = 5; // (8, 0): same column as (0, 0)
    assert!(!board.is_valid(5, 0, 0));

    let mut board = Board::empty();
    board.cells[10] = 5; // (1, 1): same box as (0, 0), different row/col
    assert!(!board.is_valid(5, 0, 0));
    assert!(board.is_valid(5, 0, 3), "neighboring box is unaffected");
}

#[test]
fn test_is_valid_input_excludes_the_edited_cell() {
    let mut board = Board::empty();
    board.cells[0] = 5;

    // Re-entering the digit already shown in the cell is not a conflict.
    assert!(board.is_valid_input(5, 0));
    // The same digit elsewhere in the row is.
    assert!(!board.is_valid_input(5, 1));
}

#[test]
fn test_find_conflicts_flags_both_offenders() {
    let board: Board = PUZZLE.parse().unwrap();
    assert!(board.find_conflicts().is_empty());

    let duplicated = format!("1.1{}", ".".repeat(78));
    let board: Board = duplicated.parse().unwrap();
    assert_eq!(board.find_conflicts(), vec![0, 2]);
}

#[test]
fn test_is_solved() {
    let solved: Board =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
            .parse()
            .unwrap();
    assert!(solved.is_solved());

    let incomplete: Board = PUZZLE.parse().unwrap();
    assert!(!incomplete.is_solved());

    // Full but with a swapped pair: complete is not the same as correct.
    let mut broken = solved;
    broken.cells.swap(0, 1);
    assert!(!broken.is_solved());
}

#[test]
fn test_find_empty_scans_in_index_order() {
    let board: Board = PUZZLE.parse().unwrap();
    assert_eq!(board.find_empty(), Some(2));

    let solved: Board =
        "534678912672195348198342567859761423426853791713924856961537284287419635345286179"
            .parse()
            .unwrap();
    assert_eq!(solved.find_empty(), None);
}
