use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

use crate::{
    Direction, DragTracker, InputGranularity, Key, PuzzleCatalog, SessionConfig, SessionState,
    SessionView, UiEvent,
};

/// Callback invoked with the new state after every change.
pub type Subscriber = Box<dyn FnMut(&SessionState)>;

/// One player's attempt at the puzzles of a catalog.
///
/// Owns the current [`SessionState`] and everything needed to step it: the
/// catalog, the configuration and the random source used for shuffling and
/// hints. Each operation replaces the state with the next value and notifies
/// subscribers if anything changed.
///
/// # Example
///
/// ```
/// use word_ladder::{PuzzleCatalog, PuzzleSession, SessionConfig};
///
/// let mut session = PuzzleSession::from_seed(PuzzleCatalog::builtin(), SessionConfig::default(), 0);
/// for (col, c) in "garso".chars().enumerate() {
///     session.set_cell(0, col, &c.to_string());
/// }
/// assert_eq!(session.state().grid().row_text(0), "GARSO");
/// assert!(!session.is_complete());
/// ```
pub struct PuzzleSession<R = ChaCha20Rng> {
    catalog: PuzzleCatalog,
    config: SessionConfig,
    state: SessionState,
    rng: R,
    drag: DragTracker,
    subscribers: Vec<Subscriber>,
}

impl PuzzleSession<ChaCha20Rng> {
    /// Creates a session whose randomness is derived from `seed`.
    pub fn from_seed(catalog: PuzzleCatalog, config: SessionConfig, seed: u64) -> Self {
        Self::new(catalog, config, ChaCha20Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> PuzzleSession<R> {
    /// Creates a session positioned on the first puzzle of `catalog`.
    pub fn new(catalog: PuzzleCatalog, config: SessionConfig, mut rng: R) -> Self {
        let state = SessionState::new(&catalog, 0, &mut rng);
        Self {
            catalog,
            config,
            state,
            rng,
            drag: DragTracker::default(),
            subscribers: Vec::new(),
        }
    }

    /// The current state value.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Render view of the current state.
    pub fn view(&self) -> SessionView {
        self.state.view()
    }

    /// Returns true once the current puzzle is solved.
    pub fn is_complete(&self) -> bool {
        self.state.is_complete()
    }

    /// The puzzles this session cycles through.
    pub fn catalog(&self) -> &PuzzleCatalog {
        &self.catalog
    }

    /// The configuration the session was created with.
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The drag gesture in progress, for hover highlighting.
    pub fn drag(&self) -> &DragTracker {
        &self.drag
    }

    /// Registers a callback run after every state change.
    pub fn subscribe(&mut self, subscriber: impl FnMut(&SessionState) + 'static) {
        self.subscribers.push(Box::new(subscriber));
    }

    /// Restarts the current puzzle.
    pub fn reset_current(&mut self) {
        self.drag.cancel();
        let next = self.state.reset(&self.catalog, &mut self.rng);
        self.commit(next);
    }

    /// Restarts on puzzle `index`, taken modulo the catalog length.
    pub fn select_puzzle(&mut self, index: usize) {
        self.drag.cancel();
        let next = SessionState::new(&self.catalog, index, &mut self.rng);
        self.commit(next);
    }

    /// Moves on to the next puzzle, wrapping after the last one.
    pub fn advance_to_next_puzzle(&mut self) {
        self.drag.cancel();
        let next = self.state.advance(&self.catalog, &mut self.rng);
        self.commit(next);
    }

    /// Writes player input into a cell; see [`SessionState::set_cell`].
    pub fn set_cell(&mut self, row: usize, col: usize, text: &str) {
        let next = self.state.set_cell(row, col, text, &self.config);
        self.commit(next);
    }

    /// Erases backwards from a cell; see [`SessionState::backspace`].
    pub fn backspace(&mut self, row: usize, col: usize) {
        let next = self.state.backspace(row, col, &self.config);
        self.commit(next);
    }

    /// Reveals a row according to the configured [`RevealPolicy`](crate::RevealPolicy).
    pub fn reveal_row(&mut self, row: usize) {
        let next = self.state.reveal_row(row, self.config.reveal_policy);
        self.commit(next);
    }

    /// Reveals one random unrevealed row.
    pub fn reveal_random_hint(&mut self) {
        let next = self.state.reveal_random_hint(&mut self.rng);
        self.commit(next);
    }

    /// Focuses a cell.
    pub fn focus(&mut self, row: usize, col: usize) {
        let next = self.state.focus(row, col);
        self.commit(next);
    }

    /// Drops the selection.
    pub fn blur(&mut self) {
        let next = self.state.blur();
        self.commit(next);
    }

    /// Moves the selection one cell, clamped to the grid.
    pub fn move_selection(&mut self, direction: Direction) {
        let next = self.state.move_selection(direction);
        self.commit(next);
    }

    /// Moves a row; only ordering puzzles react.
    pub fn reorder_row(&mut self, from: usize, to: usize) {
        let next = self.state.reorder_row(from, to);
        self.commit(next);
    }

    /// Routes a UI event to the matching operation.
    pub fn dispatch(&mut self, event: UiEvent) {
        tracing::trace!(?event, "dispatch");
        match event {
            UiEvent::CellEdit { row, col, text } => self.set_cell(row, col, &text),
            UiEvent::CellKey { row, col, key } => self.on_key(row, col, key),
            UiEvent::Focus { row, col } => self.focus(row, col),
            UiEvent::Blur => self.blur(),
            UiEvent::RevealRequest { row } => self.reveal_row(row),
            UiEvent::HintRequest => self.reveal_random_hint(),
            UiEvent::ResetRequest => self.reset_current(),
            UiEvent::NextPuzzleRequest => self.advance_to_next_puzzle(),
            UiEvent::DragStart { row } => {
                if self.state.is_reorderable() && row < self.state.rows() {
                    self.drag.start(row);
                }
            }
            UiEvent::DragOver { row } => self.drag.over(row),
            UiEvent::Drop { row } => {
                if let Some((from, to)) = self.drag.drop_on(row) {
                    self.reorder_row(from, to);
                }
            }
        }
    }

    fn on_key(&mut self, row: usize, col: usize, key: Key) {
        if let Some(direction) = key.direction() {
            if !self.state.grid().contains(row, col) {
                tracing::trace!(row, col, "focus outside the grid ignored");
            }
            let next = self.state.focus(row, col).move_selection(direction);
            self.commit(next);
            return;
        }
        match key {
            Key::Backspace => self.backspace(row, col),
            Key::Delete => self.set_cell(row, col, ""),
            Key::Char(c) => match self.config.input {
                InputGranularity::Cell => self.set_cell(row, col, c.encode_utf8(&mut [0; 4])),
                InputGranularity::Word => {
                    if row >= self.state.rows() {
                        return;
                    }
                    // a key press extends the row instead of replacing it
                    let mut text = self.state.grid().row_text(row);
                    text.push(c);
                    self.set_cell(row, col, &text);
                }
            },
            _ => {}
        }
    }

    fn commit(&mut self, next: SessionState) {
        if next == self.state {
            return;
        }
        let was_complete = self.state.is_complete();
        self.state = next;
        if !was_complete && self.state.is_complete() {
            tracing::info!(puzzle = self.state.puzzle_index(), "puzzle solved");
        }
        for subscriber in &mut self.subscribers {
            subscriber(&self.state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PuzzleDefinition, PuzzleVariant, RevealPolicy, Selection};
    use std::cell::RefCell;
    use std::rc::Rc;

    fn builtin_session() -> PuzzleSession {
        PuzzleSession::from_seed(PuzzleCatalog::builtin(), SessionConfig::default(), 42)
    }

    fn ordering_session(seed: u64) -> PuzzleSession {
        let catalog = PuzzleCatalog::new(vec![
            PuzzleDefinition::new(["CASTO", "CASCO", "CASCA", "CASPA"], ["a", "b", "c", "d"])
                .with_variant(PuzzleVariant::Ordering),
        ])
        .unwrap();
        PuzzleSession::from_seed(catalog, SessionConfig::default(), seed)
    }

    fn type_row(session: &mut PuzzleSession, row: usize, word: &str) {
        for (col, c) in word.chars().enumerate() {
            session.dispatch(UiEvent::CellKey {
                row,
                col,
                key: Key::Char(c),
            });
        }
    }

    #[test]
    fn subscribers_fire_only_on_change() {
        let mut session = builtin_session();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        session.subscribe(move |state| sink.borrow_mut().push(state.grid().row_text(0)));

        session.set_cell(0, 0, "g");
        session.set_cell(0, 1, "1");
        session.move_selection(Direction::Up);
        session.set_cell(0, 1, "a");

        assert_eq!(*seen.borrow(), ["G", "GA"]);
    }

    #[test]
    fn full_game_through_events() {
        let mut session = builtin_session();
        type_row(&mut session, 0, "garso");
        session.dispatch(UiEvent::RevealRequest { row: 1 });
        session.dispatch(UiEvent::CellEdit {
            row: 1,
            col: 0,
            text: "x".into(),
        });
        assert_eq!(session.state().grid().row_text(1), "GARCO");

        type_row(&mut session, 3, "garra");
        assert!(!session.is_complete());
        type_row(&mut session, 2, "garca");
        assert!(session.is_complete());
        assert!(session.view().complete);

        session.dispatch(UiEvent::NextPuzzleRequest);
        assert_eq!(session.state().puzzle_index(), 1);
        assert!(!session.is_complete());
    }

    #[test]
    fn arrow_keys_focus_then_move() {
        let mut session = builtin_session();
        session.dispatch(UiEvent::CellKey {
            row: 2,
            col: 2,
            key: Key::Right,
        });
        assert_eq!(session.state().selection(), Some(Selection::new(2, 3)));
        session.dispatch(UiEvent::CellKey {
            row: 0,
            col: 0,
            key: Key::Up,
        });
        assert_eq!(session.state().selection(), Some(Selection::ORIGIN));
        session.dispatch(UiEvent::CellKey {
            row: 0,
            col: 0,
            key: Key::Other,
        });
        assert_eq!(session.state().selection(), Some(Selection::ORIGIN));
    }

    #[test]
    fn backspace_and_delete_keys() {
        let mut session = builtin_session();
        type_row(&mut session, 0, "gar");
        session.dispatch(UiEvent::CellKey {
            row: 0,
            col: 3,
            key: Key::Backspace,
        });
        assert_eq!(session.state().grid().row_text(0), "GA");
        session.dispatch(UiEvent::CellKey {
            row: 0,
            col: 0,
            key: Key::Delete,
        });
        assert_eq!(session.state().grid().row_text(0), "A");
    }

    #[test]
    fn hint_requests_exhaust_rows() {
        let mut session = builtin_session();
        for _ in 0..4 {
            assert!(session.view().hint_available);
            session.dispatch(UiEvent::HintRequest);
        }
        assert!(!session.view().hint_available);
        assert!(session.is_complete());
        let before = session.state().clone();
        session.dispatch(UiEvent::HintRequest);
        assert_eq!(*session.state(), before);
    }

    #[test]
    fn reset_request_clears_progress() {
        let mut session = builtin_session();
        type_row(&mut session, 0, "garso");
        session.dispatch(UiEvent::RevealRequest { row: 2 });
        session.dispatch(UiEvent::Blur);
        session.dispatch(UiEvent::ResetRequest);
        let state = session.state();
        assert!(state.grid().cells().iter().all(Option::is_none));
        assert!(state.unrevealed_rows().len() == 4);
        assert_eq!(state.selection(), Some(Selection::ORIGIN));
    }

    #[test]
    fn drag_only_moves_on_drop() {
        let mut session = ordering_session(9);
        let start = session.state().order().clone();
        let moved_row = start.get(0);

        session.dispatch(UiEvent::DragStart { row: 0 });
        session.dispatch(UiEvent::DragOver { row: 1 });
        session.dispatch(UiEvent::DragOver { row: 3 });
        assert_eq!(session.state().order(), &start);
        assert_eq!(session.drag().hover(), Some(3));

        session.dispatch(UiEvent::Drop { row: 3 });
        assert_eq!(session.state().order().get(3), moved_row);
        assert!(!session.drag().is_dragging());

        let after = session.state().order().clone();
        session.dispatch(UiEvent::Drop { row: 0 });
        assert_eq!(session.state().order(), &after, "drop without drag is ignored");
    }

    #[test]
    fn drag_ignored_on_ladder_puzzles() {
        let mut session = builtin_session();
        session.dispatch(UiEvent::DragStart { row: 0 });
        assert!(!session.drag().is_dragging());
        session.dispatch(UiEvent::Drop { row: 2 });
        assert!(session.state().order().is_identity());
    }

    #[test]
    fn ordering_puzzle_solved_by_sorting_rows() {
        let mut session = ordering_session(1);
        for row in 0..4 {
            let word = session.state().target(row).to_owned();
            type_row(&mut session, row, &word);
        }
        for target in 0..4 {
            let from = session.state().order().position_of(target).unwrap();
            session.dispatch(UiEvent::DragStart { row: from });
            session.dispatch(UiEvent::Drop { row: target });
        }
        assert!(session.state().order().is_identity());
        assert!(session.is_complete());
    }

    #[test]
    fn reveal_policy_comes_from_config() {
        let config = SessionConfig {
            reveal_policy: RevealPolicy::Always,
            ..SessionConfig::default()
        };
        let mut session = PuzzleSession::from_seed(PuzzleCatalog::builtin(), config, 0);
        type_row(&mut session, 0, "garso");
        session.dispatch(UiEvent::RevealRequest { row: 0 });
        assert!(session.state().is_revealed(0));

        let mut session = builtin_session();
        type_row(&mut session, 0, "garso");
        session.dispatch(UiEvent::RevealRequest { row: 0 });
        assert!(!session.state().is_revealed(0));
    }

    #[test]
    fn word_granularity_edits() {
        let config = SessionConfig {
            input: InputGranularity::Word,
            ..SessionConfig::default()
        };
        let mut session = PuzzleSession::from_seed(PuzzleCatalog::builtin(), config, 0);
        for (row, word) in ["garso", "garco", "garca", "garra"].iter().enumerate() {
            session.dispatch(UiEvent::CellEdit {
                row,
                col: 0,
                text: (*word).to_owned(),
            });
        }
        assert!(session.is_complete());
    }

    #[test]
    fn word_granularity_keys_extend_row() {
        let config = SessionConfig {
            input: InputGranularity::Word,
            ..SessionConfig::default()
        };
        let mut session = PuzzleSession::from_seed(PuzzleCatalog::builtin(), config, 0);
        session.dispatch(UiEvent::CellEdit {
            row: 0,
            col: 0,
            text: "gars".into(),
        });
        session.dispatch(UiEvent::CellKey {
            row: 0,
            col: 4,
            key: Key::Char('o'),
        });
        assert_eq!(session.state().grid().row_text(0), "GARSO");

        // row is full: further letters are dropped
        session.dispatch(UiEvent::CellKey {
            row: 0,
            col: 4,
            key: Key::Char('x'),
        });
        assert_eq!(session.state().grid().row_text(0), "GARSO");

        for _ in 0..2 {
            session.dispatch(UiEvent::CellKey {
                row: 0,
                col: 4,
                key: Key::Backspace,
            });
        }
        assert_eq!(session.state().grid().row_text(0), "GAR");
        session.dispatch(UiEvent::CellKey {
            row: 0,
            col: 3,
            key: Key::Char('o'),
        });
        assert_eq!(session.state().grid().row_text(0), "GARO");

        session.dispatch(UiEvent::CellKey {
            row: 9,
            col: 0,
            key: Key::Char('a'),
        });
        assert_eq!(session.state().grid().row_text(0), "GARO");
    }

    #[test]
    fn arrow_key_outside_grid_moves_current_selection() {
        let mut session = builtin_session();
        session.focus(1, 1);
        session.dispatch(UiEvent::CellKey {
            row: 9,
            col: 9,
            key: Key::Down,
        });
        assert_eq!(session.state().selection(), Some(Selection::new(2, 1)));
    }

    #[test]
    fn select_puzzle_wraps() {
        let mut session = builtin_session();
        let n = session.catalog().len();
        session.select_puzzle(n + 1);
        assert_eq!(session.state().puzzle_index(), 1 % n);
    }
}
