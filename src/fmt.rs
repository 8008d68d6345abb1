use std::fmt;

use crate::{Board, Error, Pos};

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Pad to the widest tile label so rows line up; `.` marks the blank.
        let width = (self.tiles().len() - 1).to_string().len();
        for (idx, &tile) in self.tiles().iter().enumerate() {
            if idx % usize::from(self.dim()) != 0 {
                " ".fmt(f)?;
            }
            if tile == 0 {
                write!(f, "{:>width$}", ".")?;
            } else {
                write!(f, "{tile:>width$}")?;
            }
            if (idx + 1) % usize::from(self.dim()) == 0 {
                "\n".fmt(f)?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::DimensionTooSmall(dim) => write!(f, "Dimension {dim} is below 2"),
            Error::DimensionTooLarge(dim) => write!(f, "Dimension {dim} is above {}", crate::MAX_DIM),
            Error::NotSquare => "Board is not square".fmt(f),
            Error::NoBlank => "Board has no blank cell".fmt(f),
            Error::BadTile(tile) => write!(f, "Duplicate or out-of-range tile {tile}"),
            Error::IllegalMove(pos) => write!(f, "Cell {pos} is not adjacent to the blank"),
            Error::Unsolvable => "Board is not solvable".fmt(f),
            Error::Aborted => "Search aborted".fmt(f),
        }
    }
}

impl std::error::Error for Error {}
