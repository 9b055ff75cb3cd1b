//! Benchmarks for the session transitions a page triggers most often.
//!
//! - `reset` on an ordering puzzle (includes the row shuffle)
//! - typing a full row, one cell at a time
//! - rendering the view
//! - a drag-and-drop reorder

#![feature(test)]

extern crate test;

use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use test::Bencher;
use word_ladder::{PuzzleCatalog, PuzzleSession, SessionConfig, SessionState, UiEvent};

const ORDERING_PUZZLE: usize = 1;

#[bench]
fn bench_reset_ordering(b: &mut Bencher) {
    let catalog = PuzzleCatalog::builtin();
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    b.iter(|| {
        let state = SessionState::new(&catalog, ORDERING_PUZZLE, &mut rng);
        test::black_box(state)
    });
}

#[bench]
fn bench_type_row(b: &mut Bencher) {
    let config = SessionConfig::default();
    let catalog = PuzzleCatalog::builtin();
    let mut rng = ChaCha20Rng::seed_from_u64(42);
    let start = SessionState::new(&catalog, 0, &mut rng);

    b.iter(|| {
        let state = "GARSO"
            .chars()
            .enumerate()
            .fold(start.clone(), |s, (col, c)| {
                s.set_cell(0, col, &c.to_string(), &config)
            });
        test::black_box(state)
    });
}

#[bench]
fn bench_view(b: &mut Bencher) {
    let session = PuzzleSession::from_seed(PuzzleCatalog::builtin(), SessionConfig::default(), 42);

    b.iter(|| test::black_box(session.view()));
}

#[bench]
fn bench_drag_drop(b: &mut Bencher) {
    let mut session =
        PuzzleSession::from_seed(PuzzleCatalog::builtin(), SessionConfig::default(), 42);
    session.select_puzzle(ORDERING_PUZZLE);

    b.iter(|| {
        session.dispatch(UiEvent::DragStart { row: 0 });
        session.dispatch(UiEvent::DragOver { row: 2 });
        session.dispatch(UiEvent::Drop { row: 3 });
        test::black_box(session.state().order().get(0))
    });
}
