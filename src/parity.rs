//! Solvability classification via inversion parity.
//!
//! A pair of flat positions `(i < j)` is an inversion when the earlier value
//! is larger. Pairs whose right-hand element is the blank are not counted.
//! Together with the blank's row parity this decides reachability from the
//! goal state.

use crate::Board;

/// Merge-count of inversions in a flattened board.
pub fn count_inversions(tiles: &[u8]) -> usize {
    let mut scratch = tiles.to_vec();
    let mut tmp = vec![0u8; tiles.len()];
    merge_count(&mut scratch, &mut tmp)
}

fn merge_count(a: &mut [u8], tmp: &mut [u8]) -> usize {
    let n = a.len();
    if n <= 1 {
        return 0;
    }
    let mid = n / 2;
    let mut inversions =
        merge_count(&mut a[..mid], &mut tmp[..mid]) + merge_count(&mut a[mid..], &mut tmp[mid..]);

    let (mut i, mut j) = (0, mid);
    for slot in tmp[..n].iter_mut() {
        if i < mid && (j >= n || a[i] <= a[j]) {
            *slot = a[i];
            i += 1;
        } else {
            // The blank is not a tile; it never closes an inversion.
            if a[j] != 0 {
                inversions += mid - i;
            }
            *slot = a[j];
            j += 1;
        }
    }
    a.copy_from_slice(&tmp[..n]);
    inversions
}

/// The 15-puzzle parity theorem. Odd N: solvable iff inversions are even.
/// Even N: solvable iff inversion parity differs from the blank row's parity.
pub fn is_solvable(board: &Board) -> bool {
    let inversions = count_inversions(board.tiles());
    if board.dim() % 2 == 1 {
        inversions % 2 == 0
    } else if board.blank().row() % 2 == 0 {
        inversions % 2 == 1
    } else {
        inversions % 2 == 0
    }
}
