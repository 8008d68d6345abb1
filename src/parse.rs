use std::str::FromStr;

use anyhow::{ensure, Context, Result};

use crate::{Board, Pos};

impl FromStr for Board {
    type Err = anyhow::Error;

    /// One row per line, tiles separated by whitespace, `.` (or `0`) for the
    /// blank. All structural invariants are enforced here; this is the only
    /// boundary where untrusted board data enters the crate.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .lines()
            .map(|line| line.trim())
            .filter(|line| !line.is_empty())
            .map(|line| {
                line.split_whitespace()
                    .map(|token| {
                        if token == "." {
                            Ok(0)
                        } else {
                            token
                                .parse::<u8>()
                                .with_context(|| format!("Invalid tile: {token:?}"))
                        }
                    })
                    .collect::<Result<Vec<u8>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        ensure!(!rows.is_empty(), "Empty board");
        Ok(Board::from_rows(rows)?)
    }
}

impl FromStr for Pos {
    type Err = anyhow::Error;

    /// `row,col`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (row, col) = s
            .split_once(',')
            .with_context(|| format!("Invalid position: {s:?}"))?;
        Ok(Self(
            row.trim().parse().context("Invalid row")?,
            col.trim().parse().context("Invalid column")?,
        ))
    }
}
