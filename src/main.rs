use anyhow::{Context, Result};
use console::{Key, Term};
use indicatif::ProgressBar;
use npuzzle_solver::{shuffle, solve, Pos};

enum Action {
    Exit,
    Slide(i8, i8),
    Scramble,
    Solve,
    Undo,
}

impl TryFrom<Key> for Action {
    type Error = ();

    fn try_from(key: Key) -> Result<Self, Self::Error> {
        Ok(match key {
            Key::ArrowLeft | Key::Char('a') => Self::Slide(0, -1),
            Key::ArrowRight | Key::Char('d') => Self::Slide(0, 1),
            Key::ArrowUp | Key::Char('w') => Self::Slide(-1, 0),
            Key::ArrowDown | Key::Char('s') => Self::Slide(1, 0),
            Key::Escape | Key::Char('q') => Self::Exit,
            Key::Char('n') => Self::Scramble,
            Key::Char('z') => Self::Undo,
            Key::Enter | Key::Char(' ') => Self::Solve,
            _ => return Err(()),
        })
    }
}

fn main() -> Result<()> {
    let dim = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u8>().context("Invalid dimension argument")?,
        None => 4,
    };

    let mut board = shuffle::generate_random(dim)?;
    let mut history = Vec::new();

    let term = Term::stderr();
    eprintln!("arrows move the blank, n scrambles, z undoes, enter solves, q quits");
    loop {
        eprintln!("{board}");

        let action = loop {
            if let Ok(action) = Action::try_from(term.read_key()?) {
                break action;
            }
        };

        match action {
            Action::Exit => break,
            Action::Slide(dr, dc) => {
                let Pos(r, c) = board.blank();
                let target = match (r.checked_add_signed(dr), c.checked_add_signed(dc)) {
                    (Some(r), Some(c)) => Pos(r, c),
                    _ => continue,
                };
                let mut next = board.clone();
                if next.slide(target).is_ok() {
                    history.push(board);
                    board = next;
                }
            }
            Action::Scramble => {
                history.clear();
                board = shuffle::generate_random(dim)?;
            }
            Action::Undo => {
                if let Some(last) = history.pop() {
                    board = last;
                }
            }
            Action::Solve => {
                let bar = ProgressBar::new_spinner().with_message("solving");
                let steps = solve::solve_with(&board, || {
                    bar.tick();
                    false
                })?;
                bar.finish_and_clear();

                for &step in &steps {
                    history.push(board.clone());
                    board.slide(step)?;
                    eprintln!("{board}");
                }
                eprintln!("solved in {} moves", steps.len());
            }
        }

        if board.is_goal() {
            eprintln!("{board}\nsolved!");
            break;
        }
    }

    Ok(())
}
