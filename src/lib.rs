use std::ops::Index;

use arrayvec::ArrayVec;

mod fmt;
mod parse;

pub mod parity;
pub mod shuffle;
pub mod solve;

/// Boards with more cells than `u8` can label are rejected up front.
pub const MAX_DIM: u8 = 16;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    DimensionTooSmall(usize),
    DimensionTooLarge(usize),
    NotSquare,
    NoBlank,
    BadTile(u8),
    IllegalMove(Pos),
    Unsolvable,
    Aborted,
}

/// `(row, col)` cell coordinate. A solution step is the `Pos` the blank
/// moves into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos(pub u8, pub u8);

impl Pos {
    pub fn row(self) -> u8 {
        self.0
    }

    pub fn col(self) -> u8 {
        self.1
    }

    pub(crate) fn from_flat(idx: usize, dim: u8) -> Self {
        Self((idx / usize::from(dim)) as u8, (idx % usize::from(dim)) as u8)
    }

    fn flat(self, dim: u8) -> usize {
        usize::from(self.0) * usize::from(dim) + usize::from(self.1)
    }

    fn is_adjacent(self, other: Self) -> bool {
        self.0.abs_diff(other.0) + self.1.abs_diff(other.1) == 1
    }
}

/// An N×N sliding-tile board. Tiles are `1..N²-1`, the blank is `0`.
///
/// `blank` caches the position of the `0` cell and is kept in sync by every
/// mutating primitive, so lookups never rescan the grid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    dim: u8,
    blank: Pos,
    tiles: Box<[u8]>,
}

impl Index<Pos> for Board {
    type Output = u8;
    fn index(&self, pos: Pos) -> &Self::Output {
        &self.tiles[pos.flat(self.dim)]
    }
}

impl Board {
    /// The canonical goal: `1..N²-1` row-major, blank in the last cell.
    pub fn solved(dim: u8) -> Result<Self, Error> {
        check_dim(usize::from(dim))?;
        let n = usize::from(dim) * usize::from(dim);
        let mut tiles: Vec<u8> = (1..n).map(|v| v as u8).collect();
        tiles.push(0);
        Ok(Self {
            dim,
            blank: Pos(dim - 1, dim - 1),
            tiles: tiles.into(),
        })
    }

    /// Validating constructor: the board must be square and hold every value
    /// in `0..N²` exactly once.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, Error> {
        let dim = rows.len();
        check_dim(dim)?;
        let n = dim * dim;

        let mut tiles = Vec::with_capacity(n);
        let mut seen = vec![false; n];
        let mut blank = None;
        for (r, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(Error::NotSquare);
            }
            for (c, &tile) in row.iter().enumerate() {
                if usize::from(tile) >= n || seen[usize::from(tile)] {
                    return Err(Error::BadTile(tile));
                }
                seen[usize::from(tile)] = true;
                if tile == 0 {
                    blank = Some(Pos(r as u8, c as u8));
                }
                tiles.push(tile);
            }
        }

        Ok(Self {
            dim: dim as u8,
            blank: blank.ok_or(Error::NoBlank)?,
            tiles: tiles.into(),
        })
    }

    pub fn dim(&self) -> u8 {
        self.dim
    }

    pub fn blank(&self) -> Pos {
        self.blank
    }

    /// The grid in row-major order.
    pub fn tiles(&self) -> &[u8] {
        &self.tiles
    }

    pub fn is_goal(&self) -> bool {
        let n = self.tiles.len();
        self.tiles[n - 1] == 0
            && self.tiles[..n - 1]
                .iter()
                .zip(1..)
                .all(|(&tile, want)| usize::from(tile) == want)
    }

    /// Where `tile` sits on the solved board. `tile` must be non-zero.
    pub fn goal_pos(tile: u8, dim: u8) -> Pos {
        debug_assert_ne!(tile, 0);
        Pos((tile - 1) / dim, (tile - 1) % dim)
    }

    /// Move the blank into the given cell. The target must be orthogonally
    /// adjacent to the blank; anything else is rejected, so callers may feed
    /// untrusted input straight through.
    pub fn slide(&mut self, to: Pos) -> Result<(), Error> {
        if to.0 >= self.dim || to.1 >= self.dim || !self.blank.is_adjacent(to) {
            return Err(Error::IllegalMove(to));
        }
        self.swap(self.blank, to);
        Ok(())
    }

    /// All boards one blank move away. Each is an independent clone; `self`
    /// is untouched.
    pub fn neighbors(&self) -> ArrayVec<Self, 4> {
        let mut out = ArrayVec::new();
        let Pos(r, c) = self.blank;
        if r > 0 {
            out.push(self.child(Pos(r - 1, c)));
        }
        if c > 0 {
            out.push(self.child(Pos(r, c - 1)));
        }
        if r + 1 < self.dim {
            out.push(self.child(Pos(r + 1, c)));
        }
        if c + 1 < self.dim {
            out.push(self.child(Pos(r, c + 1)));
        }
        out
    }

    fn child(&self, to: Pos) -> Self {
        let mut board = self.clone();
        board.swap(board.blank, to);
        board
    }

    pub(crate) fn swap(&mut self, a: Pos, b: Pos) {
        self.tiles.swap(a.flat(self.dim), b.flat(self.dim));
        if self.blank == a {
            self.blank = b;
        } else if self.blank == b {
            self.blank = a;
        }
    }

    pub(crate) fn swap_flat(&mut self, i: usize, j: usize) {
        self.swap(Pos::from_flat(i, self.dim), Pos::from_flat(j, self.dim));
    }
}

fn check_dim(dim: usize) -> Result<(), Error> {
    if dim < 2 {
        return Err(Error::DimensionTooSmall(dim));
    }
    if dim > usize::from(MAX_DIM) {
        return Err(Error::DimensionTooLarge(dim));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solved_layout() {
        let board = Board::solved(3).unwrap();
        assert_eq!(board.tiles(), &[1, 2, 3, 4, 5, 6, 7, 8, 0]);
        assert_eq!(board.blank(), Pos(2, 2));
        assert!(board.is_goal());
    }

    #[test]
    fn dimension_bounds() {
        assert_eq!(Board::solved(0), Err(Error::DimensionTooSmall(0)));
        assert_eq!(Board::solved(1), Err(Error::DimensionTooSmall(1)));
        assert_eq!(Board::solved(17), Err(Error::DimensionTooLarge(17)));
        assert!(Board::solved(16).is_ok());
    }

    #[test]
    fn from_rows_validates() {
        assert_eq!(
            Board::from_rows(vec![vec![1, 2], vec![3, 0], vec![4, 5]]),
            Err(Error::NotSquare),
        );
        assert_eq!(
            Board::from_rows(vec![vec![1, 2], vec![3, 4]]),
            Err(Error::BadTile(4)),
        );
        assert_eq!(
            Board::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 8]]),
            Err(Error::BadTile(8)),
        );
        let board = Board::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 0, 8]]).unwrap();
        assert_eq!(board.blank(), Pos(2, 1));
        assert!(!board.is_goal());
    }

    #[test]
    fn goal_positions() {
        assert_eq!(Board::goal_pos(1, 3), Pos(0, 0));
        assert_eq!(Board::goal_pos(3, 3), Pos(0, 2));
        assert_eq!(Board::goal_pos(8, 3), Pos(2, 1));
        assert_eq!(Board::goal_pos(15, 4), Pos(3, 2));
    }

    #[test]
    fn slide_moves_blank() {
        let mut board = Board::solved(3).unwrap();
        board.slide(Pos(2, 1)).unwrap();
        assert_eq!(board.blank(), Pos(2, 1));
        assert_eq!(board[Pos(2, 2)], 8);
        assert_eq!(board[Pos(2, 1)], 0);
    }

    #[test]
    fn slide_rejects_illegal_targets() {
        let mut board = Board::solved(3).unwrap();
        // Diagonal.
        assert_eq!(board.slide(Pos(1, 1)), Err(Error::IllegalMove(Pos(1, 1))));
        // The blank itself.
        assert_eq!(board.slide(Pos(2, 2)), Err(Error::IllegalMove(Pos(2, 2))));
        // Out of bounds.
        assert_eq!(board.slide(Pos(2, 3)), Err(Error::IllegalMove(Pos(2, 3))));
        assert!(board.is_goal());
    }

    #[test]
    fn neighbor_counts() {
        // Blank in the corner, on an edge, then in the center.
        let corner = Board::solved(3).unwrap();
        assert_eq!(corner.neighbors().len(), 2);

        let mut edge = corner.clone();
        edge.slide(Pos(2, 1)).unwrap();
        assert_eq!(edge.neighbors().len(), 3);

        let mut center = edge.clone();
        center.slide(Pos(1, 1)).unwrap();
        assert_eq!(center.neighbors().len(), 4);
    }

    #[test]
    fn neighbors_leave_source_untouched() {
        let board = Board::from_rows(vec![vec![1, 2, 3], vec![4, 0, 6], vec![7, 5, 8]]).unwrap();
        let snapshot = board.clone();
        let neighbors = board.neighbors();
        assert_eq!(board, snapshot);
        assert_eq!(neighbors.len(), 4);
        for neighbor in &neighbors {
            assert_ne!(*neighbor, board);
            assert_ne!(neighbor[board.blank()], 0);
            assert_eq!(neighbor[neighbor.blank()], 0);
        }
    }
}
