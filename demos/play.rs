//! Play the built-in puzzles in the terminal.
//!
//! Usage: cargo run --example play [-- seed]
//!
//! Commands:
//!   <row> <word>   fill a row (rows are numbered from 1)
//!   r <row>        reveal a row
//!   h              reveal a random row
//!   m <from> <to>  move a row (ordering puzzles)
//!   x              start the puzzle over
//!   n              next puzzle
//!   q              quit
//!
//! Set RUST_LOG=word_ladder=debug to watch the state transitions.

use std::env;
use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use tracing_subscriber::EnvFilter;
use word_ladder::{
    CellTone, InputGranularity, PuzzleCatalog, PuzzleSession, SessionConfig, SessionView, UiEvent,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let seed: u64 = env::args().nth(1).and_then(|s| s.parse().ok()).unwrap_or(0);
    let config = SessionConfig {
        input: InputGranularity::Word,
        ..SessionConfig::default()
    };
    let mut session = PuzzleSession::from_seed(PuzzleCatalog::builtin(), config, seed);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_view(&session.view());
        print!("> ");
        io::stdout().flush()?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("failed to read stdin")?;
        let words: Vec<&str> = line.split_whitespace().collect();
        if words.first() == Some(&"q") {
            break;
        }
        match parse_command(&words) {
            Ok(events) => events.into_iter().for_each(|event| session.dispatch(event)),
            Err(e) => println!("{e}"),
        }
    }
    Ok(())
}

fn parse_row(s: &str) -> Result<usize> {
    let row: usize = s.parse().with_context(|| format!("not a row number: {s}"))?;
    if row == 0 {
        bail!("rows are numbered from 1");
    }
    Ok(row - 1)
}

fn parse_command(words: &[&str]) -> Result<Vec<UiEvent>> {
    let event = match words {
        [] => return Ok(Vec::new()),
        ["h"] => UiEvent::HintRequest,
        ["x"] => UiEvent::ResetRequest,
        ["n"] => UiEvent::NextPuzzleRequest,
        ["r", row] => UiEvent::RevealRequest {
            row: parse_row(row)?,
        },
        ["m", from, to] => {
            // a drag is a start followed by a drop
            return Ok(vec![
                UiEvent::DragStart {
                    row: parse_row(from)?,
                },
                UiEvent::Drop {
                    row: parse_row(to)?,
                },
            ]);
        }
        [row, text] => UiEvent::CellEdit {
            row: parse_row(row)?,
            col: 0,
            text: (*text).to_owned(),
        },
        _ => bail!("unknown command: {}", words.join(" ")),
    };
    Ok(vec![event])
}

fn print_view(view: &SessionView) {
    println!();
    println!("Puzzle {} of {}  {}", view.puzzle_index + 1, view.puzzle_count, view.title);
    for (pos, row) in view.rows.iter().enumerate() {
        let cells: String = row
            .cells
            .iter()
            .map(|c| c.ch.unwrap_or('_'))
            .collect();
        let mark = match row.cells.first().map(|c| c.tone) {
            Some(CellTone::Correct) => "ok",
            Some(CellTone::Incorrect) => "x",
            Some(CellTone::Revealed) => "shown",
            _ => "",
        };
        println!("{:>2}. {}  {:<6} {}", pos + 1, cells, mark, row.clue);
    }
    if view.complete {
        println!("\nSolved! Type n for the next puzzle.");
    } else if view.reorderable {
        println!("\nPut the rows in ladder order with m <from> <to>.");
    }
}
