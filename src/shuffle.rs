//! Solvable scramble generation.

use rand::{thread_rng, Rng};

use crate::{parity, Board, Error, Pos};

/// A uniformly shuffled `dim`×`dim` board, repaired to be solvable.
pub fn generate_random(dim: u8) -> Result<Board, Error> {
    generate_random_with(dim, &mut thread_rng())
}

/// Fisher–Yates over the flat cell indices, then a single corrective swap if
/// the shuffle landed on the unsolvable half of the permutation space. The
/// swap exchanges two adjacent non-blank cells in a row the blank does not
/// occupy, flipping inversion parity by exactly one.
pub fn generate_random_with(dim: u8, rng: &mut impl Rng) -> Result<Board, Error> {
    let mut board = Board::solved(dim)?;
    let n = board.tiles().len();
    for i in (1..n).rev() {
        board.swap_flat(i, rng.gen_range(0..=i));
    }

    if !parity::is_solvable(&board) {
        let row = if board.blank().row() == 0 { 1 } else { 0 };
        board.swap(Pos(row, 0), Pos(row, 1));
        debug_assert!(parity::is_solvable(&board));
    }
    Ok(board)
}
