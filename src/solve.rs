//! Heuristic evaluation and the best-first search engine.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::{parity, Board, Error, Pos};

/// Weight applied to the heuristic in the priority key. Anything above 1
/// makes the search greedier than classical A*: much faster on scrambled
/// boards, at the cost of returning a near-optimal rather than shortest
/// path.
pub const HEURISTIC_FACTOR: u32 = 2;

/// Sum of each tile's distance to its goal cell. Admissible.
pub fn manhattan(board: &Board) -> u32 {
    let dim = board.dim();
    let mut distance = 0;
    for (idx, &tile) in board.tiles().iter().enumerate() {
        if tile == 0 {
            continue;
        }
        let pos = Pos::from_flat(idx, dim);
        let goal = Board::goal_pos(tile, dim);
        distance += u32::from(pos.row().abs_diff(goal.row())) + u32::from(pos.col().abs_diff(goal.col()));
    }
    distance
}

/// Pairs of tiles sharing a line with their goal cells but sitting in
/// reversed order. Each such pair costs at least two moves beyond Manhattan
/// distance, so `manhattan + 2 * linear_conflict` stays admissible.
pub fn linear_conflict(board: &Board) -> u32 {
    let dim = board.dim();
    let mut conflicts = 0;

    for row in 0..dim {
        for c1 in 0..dim {
            for c2 in c1 + 1..dim {
                let (t1, t2) = (board[Pos(row, c1)], board[Pos(row, c2)]);
                if t1 == 0 || t2 == 0 {
                    continue;
                }
                let (g1, g2) = (Board::goal_pos(t1, dim), Board::goal_pos(t2, dim));
                if g1.row() == row && g2.row() == row && g1.col() > g2.col() {
                    conflicts += 1;
                }
            }
        }
    }

    for col in 0..dim {
        for r1 in 0..dim {
            for r2 in r1 + 1..dim {
                let (t1, t2) = (board[Pos(r1, col)], board[Pos(r2, col)]);
                if t1 == 0 || t2 == 0 {
                    continue;
                }
                let (g1, g2) = (Board::goal_pos(t1, dim), Board::goal_pos(t2, dim));
                if g1.col() == col && g2.col() == col && g1.row() > g2.row() {
                    conflicts += 1;
                }
            }
        }
    }

    conflicts
}

/// Admissible lower bound on the remaining moves; zero exactly at the goal.
pub fn heuristic(board: &Board) -> u32 {
    manhattan(board) + 2 * linear_conflict(board)
}

struct Node {
    board: Board,
    heuristic: u32,
    steps: u32,
    parent: Option<usize>,
}

fn priority(node: &Node) -> u32 {
    node.heuristic * HEURISTIC_FACTOR + node.steps
}

/// Find a move sequence from `board` to the goal: the chronological list of
/// cells the blank moves into, empty if the board is already solved.
///
/// Fails fast with [`Error::Unsolvable`] when the board is on the wrong side
/// of the parity classifier; the search below would otherwise never
/// terminate.
pub fn solve(board: &Board) -> Result<Vec<Pos>, Error> {
    solve_with(board, || false)
}

/// [`solve`] with a host hook consulted once per pop/expand cycle. Returning
/// `true` abandons the search with [`Error::Aborted`]; hosts can also use the
/// hook purely for progress reporting.
pub fn solve_with(board: &Board, mut on_step: impl FnMut() -> bool) -> Result<Vec<Pos>, Error> {
    if !parity::is_solvable(board) {
        return Err(Error::Unsolvable);
    }

    // Arena of immutable nodes; parent links are indices into it. There is
    // deliberately no visited set: the only duplicate check is the
    // immediate-reversal prune below, so older states can be re-expanded.
    let root = Node {
        board: board.clone(),
        heuristic: heuristic(board),
        steps: 0,
        parent: None,
    };
    let mut queue = BinaryHeap::new();
    queue.push(Reverse((priority(&root), 0usize)));
    let mut nodes = vec![root];

    loop {
        if on_step() {
            return Err(Error::Aborted);
        }

        // The frontier cannot empty before the goal: every node on a board
        // of dimension ≥ 2 has at least one non-parent neighbor.
        let Reverse((_, idx)) = queue.pop().unwrap();

        if nodes[idx].heuristic == 0 {
            let mut steps = Vec::new();
            let mut cur = Some(idx);
            while let Some(i) = cur {
                steps.push(nodes[i].board.blank());
                cur = nodes[i].parent;
            }
            // The start position is not a move.
            steps.pop();
            steps.reverse();
            return Ok(steps);
        }

        let steps = nodes[idx].steps + 1;
        for neighbor in nodes[idx].board.neighbors() {
            if nodes[idx]
                .parent
                .map_or(false, |p| nodes[p].board == neighbor)
            {
                continue;
            }
            let node = Node {
                heuristic: heuristic(&neighbor),
                board: neighbor,
                steps,
                parent: Some(idx),
            };
            queue.push(Reverse((priority(&node), nodes.len())));
            nodes.push(node);
        }
    }
}
