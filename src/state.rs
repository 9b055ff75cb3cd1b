use std::sync::Arc;

use rand::Rng;
use rand::seq::IndexedRandom;
use serde::{Deserialize, Serialize};

use crate::{
    GridState, InputGranularity, PuzzleCatalog, PuzzleDefinition, RevealPolicy, RowOrder,
    SessionConfig,
};

/// The focused cell, in display coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub row: usize,
    pub col: usize,
}

impl Selection {
    pub const ORIGIN: Selection = Selection { row: 0, col: 0 };

    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Direction for [`SessionState::move_selection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Everything that changes during one attempt at one puzzle.
///
/// A `SessionState` is a plain value. Every operation borrows the current
/// state and returns the next one; invalid operations return an unchanged
/// copy. Grid rows, revealed flags and the selection are all indexed by
/// display position, and [`RowOrder`] maps a display position to the
/// definition row it represents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionState {
    puzzle_index: usize,
    catalog_len: usize,
    puzzle: Arc<PuzzleDefinition>,
    grid: GridState,
    revealed: Vec<bool>,
    order: RowOrder,
    selection: Option<Selection>,
}

impl SessionState {
    /// Starts a fresh attempt at puzzle `index` (taken modulo the catalog length).
    ///
    /// The grid is emptied, no row is revealed and the selection sits on the
    /// first cell. Ordering puzzles get a uniformly random row order; all
    /// others keep the identity.
    pub fn new<R: Rng + ?Sized>(catalog: &PuzzleCatalog, index: usize, rng: &mut R) -> Self {
        let index = index % catalog.len();
        let puzzle = Arc::clone(catalog.get(index));
        let rows = puzzle.rows();
        let cols = puzzle.word_len();
        let order = if puzzle.variant().is_ordering() {
            RowOrder::shuffled(rows, rng)
        } else {
            RowOrder::identity(rows)
        };
        tracing::debug!(puzzle = index, rows, cols, order = ?order.as_slice(), "puzzle reset");

        Self {
            puzzle_index: index,
            catalog_len: catalog.len(),
            puzzle,
            grid: GridState::new_empty(rows, cols),
            revealed: vec![false; rows],
            order,
            selection: Some(Selection::ORIGIN),
        }
    }

    /// Starts the current puzzle over.
    #[must_use]
    pub fn reset<R: Rng + ?Sized>(&self, catalog: &PuzzleCatalog, rng: &mut R) -> Self {
        Self::new(catalog, self.puzzle_index, rng)
    }

    /// Moves on to the next puzzle in the catalog, wrapping after the last one.
    #[must_use]
    pub fn advance<R: Rng + ?Sized>(&self, catalog: &PuzzleCatalog, rng: &mut R) -> Self {
        Self::new(catalog, catalog.next_index(self.puzzle_index), rng)
    }

    /// Writes player input into the cell at display position `(row, col)`.
    ///
    /// With [`InputGranularity::Cell`] only the first character of `text` is
    /// kept; it must be alphabetic and is uppercased. Empty text clears the
    /// cell. With [`InputGranularity::Word`] the alphabetic characters of
    /// `text` replace the whole row. Revealed rows are left untouched.
    #[must_use]
    pub fn set_cell(&self, row: usize, col: usize, text: &str, config: &SessionConfig) -> Self {
        if !self.grid.contains(row, col) {
            tracing::trace!(row, col, "edit outside the grid ignored");
            return self.clone();
        }
        if self.revealed[row] {
            tracing::trace!(row, "edit on locked row ignored");
            return self.clone();
        }

        let last_col = self.grid.cols() - 1;
        let mut next = self.clone();
        match config.input {
            InputGranularity::Cell => {
                let entry = match text.chars().next() {
                    None => None,
                    Some(c) if c.is_alphabetic() => Some(uppercase(c)),
                    Some(c) => {
                        tracing::trace!(row, col, ch = %c, "non-alphabetic input rejected");
                        return next;
                    }
                };
                next.grid.set(row, col, entry);
                let col = if entry.is_some() && config.auto_advance && col < last_col {
                    col + 1
                } else {
                    col
                };
                next.selection = Some(Selection::new(row, col));
            }
            InputGranularity::Word => {
                let word: String = text
                    .chars()
                    .filter(|c| c.is_alphabetic())
                    .map(uppercase)
                    .take(self.grid.cols())
                    .collect();
                next.grid.write_row(row, &word);
                let col = if config.auto_advance {
                    word.chars().count().min(last_col)
                } else {
                    col
                };
                next.selection = Some(Selection::new(row, col));
            }
        }
        next
    }

    /// Erases backwards from `(row, col)`.
    ///
    /// A filled cell is cleared in place; on an empty cell the selection steps
    /// left and clears that cell instead. In word mode the last letter of the
    /// row is removed.
    #[must_use]
    pub fn backspace(&self, row: usize, col: usize, config: &SessionConfig) -> Self {
        if !self.grid.contains(row, col) || self.revealed[row] {
            return self.clone();
        }
        if config.input == InputGranularity::Word {
            let mut text = self.grid.row_text(row);
            text.pop();
            return self.set_cell(row, col, &text, config);
        }

        let mut next = self.clone();
        let col = if self.grid.get(row, col).is_none() && col > 0 {
            col - 1
        } else {
            col
        };
        next.grid.set(row, col, None);
        next.selection = Some(Selection::new(row, col));
        next
    }

    /// Reveals the target word of display row `row` and locks the row.
    ///
    /// Already revealed rows are left as they are. Under
    /// [`RevealPolicy::SkipSolved`] a row that already matches its target is
    /// not revealed either.
    #[must_use]
    pub fn reveal_row(&self, row: usize, policy: RevealPolicy) -> Self {
        if row >= self.rows() || self.revealed[row] {
            tracing::trace!(row, "row already revealed or out of range");
            return self.clone();
        }
        if policy == RevealPolicy::SkipSolved && self.is_row_correct(row) {
            tracing::trace!(row, "row already solved, not revealing");
            return self.clone();
        }
        self.lock_row(row)
    }

    /// Reveals one row chosen uniformly among the rows not yet revealed.
    ///
    /// Does nothing once every row is revealed. The chosen row is locked even
    /// if it was already solved.
    #[must_use]
    pub fn reveal_random_hint<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        let candidates = self.unrevealed_rows();
        match candidates.choose(rng) {
            Some(&row) => {
                tracing::debug!(row, remaining = candidates.len() - 1, "hint");
                self.lock_row(row)
            }
            None => {
                tracing::trace!("no rows left to hint");
                self.clone()
            }
        }
    }

    fn lock_row(&self, row: usize) -> Self {
        let mut next = self.clone();
        next.revealed[row] = true;
        next.grid.write_row(row, self.target(row));
        tracing::debug!(row, word = self.target(row), "row revealed");
        next
    }

    /// Focuses the cell at `(row, col)`. Positions outside the grid are ignored.
    #[must_use]
    pub fn focus(&self, row: usize, col: usize) -> Self {
        let mut next = self.clone();
        if self.grid.contains(row, col) {
            next.selection = Some(Selection::new(row, col));
        }
        next
    }

    /// Drops the selection, e.g. when focus leaves the grid.
    #[must_use]
    pub fn blur(&self) -> Self {
        let mut next = self.clone();
        next.selection = None;
        next
    }

    /// Moves the selection one cell, stopping at the edges of the grid.
    #[must_use]
    pub fn move_selection(&self, direction: Direction) -> Self {
        let Some(Selection { row, col }) = self.selection else {
            return self.clone();
        };
        let last_row = self.grid.rows().saturating_sub(1);
        let last_col = self.grid.cols().saturating_sub(1);
        let moved = match direction {
            Direction::Up => Selection::new(row.saturating_sub(1), col),
            Direction::Down => Selection::new((row + 1).min(last_row), col),
            Direction::Left => Selection::new(row, col.saturating_sub(1)),
            Direction::Right => Selection::new(row, (col + 1).min(last_col)),
        };
        let mut next = self.clone();
        next.selection = Some(moved);
        next
    }

    /// Moves the row at display position `from` to display position `to`.
    ///
    /// Rows in between shift by one. The row's entries, its revealed flag and
    /// the selection (if it is on that row) move with it. Only ordering
    /// puzzles can be reordered.
    #[must_use]
    pub fn reorder_row(&self, from: usize, to: usize) -> Self {
        if !self.is_reorderable() || from == to {
            return self.clone();
        }
        let mut next = self.clone();
        if !next.order.move_row(from, to) {
            tracing::trace!(from, to, "reorder out of range ignored");
            return next;
        }
        next.grid.move_row(from, to);
        let flag = next.revealed.remove(from);
        next.revealed.insert(to, flag);
        if let Some(sel) = self.selection {
            let identity = self.order.get(sel.row);
            if let Some(row) = next.order.position_of(identity) {
                next.selection = Some(Selection::new(row, sel.col));
            }
        }
        tracing::debug!(from, to, order = ?next.order.as_slice(), "row moved");
        next
    }

    /// True once every row spells its target word and the rows are in ladder order.
    pub fn is_complete(&self) -> bool {
        (!self.puzzle.variant().is_ordering() || self.order.is_identity())
            && (0..self.rows()).all(|pos| self.is_row_correct(pos))
    }

    /// True if display row `row` spells the word of the definition row it shows.
    pub fn is_row_correct(&self, row: usize) -> bool {
        self.grid.row_matches(row, self.target(row))
    }

    /// Target word for display row `row`.
    pub fn target(&self, row: usize) -> &str {
        self.puzzle.word(self.order.get(row))
    }

    /// Clue for display row `row`.
    pub fn clue(&self, row: usize) -> &str {
        self.puzzle.clue(self.order.get(row))
    }

    /// Clue of the row under the selection, if any.
    pub fn visible_clue(&self) -> Option<&str> {
        self.selection.map(|sel| self.clue(sel.row))
    }

    /// Returns true if display row `row` is revealed and locked.
    pub fn is_revealed(&self, row: usize) -> bool {
        self.revealed.get(row).copied().unwrap_or(false)
    }

    /// Display rows that have not been revealed yet.
    pub fn unrevealed_rows(&self) -> Vec<usize> {
        (0..self.rows()).filter(|&row| !self.revealed[row]).collect()
    }

    /// Returns true if rows of this puzzle can be dragged.
    pub fn is_reorderable(&self) -> bool {
        self.puzzle.variant().is_ordering()
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    /// Number of cells per row.
    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    /// The player's entries, by display position.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Display position to definition row mapping.
    pub fn order(&self) -> &RowOrder {
        &self.order
    }

    /// The focused cell, or `None` when focus left the grid.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The puzzle being played.
    pub fn puzzle(&self) -> &PuzzleDefinition {
        &self.puzzle
    }

    /// Index of the puzzle in its catalog.
    pub fn puzzle_index(&self) -> usize {
        self.puzzle_index
    }

    /// Number of puzzles in the catalog.
    pub fn catalog_len(&self) -> usize {
        self.catalog_len
    }
}

fn uppercase(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
