//! Incremental win detection.
//!
//! Rather than rescanning the whole board after every move, the detector
//! walks outward from the token that was just placed, in both directions of
//! each of the four orientations, and stops as soon as every walk has hit a
//! gap, an opponent token or the edge of the board.

use std::collections::BTreeSet;

use super::board::{Board, Position};
use super::player::Player;

/// Every cell belonging to at least one completed line.
pub type WinSet = BTreeSet<Position>;

/// Minimum run length that wins.
pub const WIN_LENGTH: usize = 4;

/// `(d_row, d_col)` unit steps: horizontal, vertical, `\` diagonal, `/` diagonal.
const ORIENTATIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// Run along one orientation, grown independently towards both ends.
struct Line {
    step: (isize, isize),
    positions: Vec<Position>,
    forward: bool,
    backward: bool,
}

impl Line {
    fn new(origin: Position, step: (isize, isize)) -> Self {
        Line {
            step,
            positions: vec![origin],
            forward: true,
            backward: true,
        }
    }

    fn is_active(&self) -> bool {
        self.forward || self.backward
    }
}

/// Return every cell of every run of [`WIN_LENGTH`] or more `player` tokens
/// that passes through `last_move`.
///
/// Runs in all four orientations are collected before anything is decided,
/// so a move completing several lines at once yields their union. A run of
/// five or more contributes all of its cells.
pub fn find_winning_cells(board: &Board, last_move: Position, player: Player) -> WinSet {
    let target = player.to_cell();
    let mut lines = ORIENTATIONS.map(|step| Line::new(last_move, step));
    let span = board.columns().max(board.rows());

    for k in 1..span {
        for line in lines.iter_mut() {
            let (d_row, d_col) = line.step;

            if line.forward {
                match board.offset(last_move, d_row, d_col, k) {
                    Some(pos) if board.cell(pos) == target => line.positions.push(pos),
                    _ => line.forward = false,
                }
            }

            if line.backward {
                match board.offset(last_move, -d_row, -d_col, k) {
                    Some(pos) if board.cell(pos) == target => line.positions.push(pos),
                    _ => line.backward = false,
                }
            }
        }

        if !lines.iter().any(Line::is_active) {
            break;
        }
    }

    lines
        .into_iter()
        .filter(|line| line.positions.len() >= WIN_LENGTH)
        .flat_map(|line| line.positions)
        .collect()
}
