#![cfg(feature = "std")]

//! Text rendering of a board for the terminal driver. Sunk ships show as
//! lowercase letters, live hits as `X`, misses as `o`, land as `#`.

use std::fmt::Write as _;
use std::string::String;

use crate::board::Board;

fn cell_char(board: &Board, row: i32, col: i32, reveal: bool) -> char {
    let fired = board.was_fired(row, col);
    let owner = board.grid().owner_at(row, col);
    match (fired, owner) {
        (true, Some(owner)) => {
            let sunk = board
                .fleet()
                .ship(owner.id)
                .map(|s| s.sunk())
                .unwrap_or(false);
            if sunk {
                owner.letter.to_ascii_lowercase()
            } else {
                'X'
            }
        }
        (true, None) => 'o',
        (false, Some(owner)) if reveal => owner.letter,
        _ => {
            if board.layout().is_land(row, col) {
                '#'
            } else {
                '.'
            }
        }
    }
}

/// Render the board as text. With `reveal`, unhit ship cells show their
/// letters (own-fleet view); without, they stay hidden (tracking view).
pub fn render_board(board: &Board, reveal: bool) -> String {
    let layout = board.layout();
    let mut out = String::new();
    out.push_str("    ");
    for c in 0..layout.cols {
        let ch = (b'A' + c as u8) as char;
        let _ = write!(out, " {}", ch);
    }
    out.push('\n');
    for r in 0..layout.rows {
        let _ = write!(out, " {:2} ", r + 1);
        for c in 0..layout.cols {
            let _ = write!(out, " {}", cell_char(board, r, c, reveal));
        }
        out.push('\n');
    }
    if reveal {
        out.push_str("    Legend: letter=Ship  X=Hit  o=Miss  #=Land  .=Sea\n");
    } else {
        out.push_str("    Legend: X=Hit  o=Miss  #=Land  .=Unknown\n");
    }
    out
}

/// One line per ship: letter, cell count, hits, sunk marker.
pub fn render_fleet_status(board: &Board) -> String {
    let mut out = String::new();
    for ship in board.fleet().ships() {
        let status = if ship.sunk() {
            "SUNK"
        } else if ship.is_placed() {
            "Active"
        } else {
            "Unplaced"
        };
        let _ = writeln!(
            out,
            "  {}  {}/{} {}",
            ship.letter(),
            ship.hits().len(),
            ship.cells().len(),
            status
        );
    }
    out
}
