//! Read-only projection of a [`SessionState`] for a presentation layer.

use serde::Serialize;

use crate::SessionState;

/// Colouring hint for a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellTone {
    /// Nothing to say yet: the row is incomplete.
    Neutral,
    /// The row spells its target word.
    Correct,
    /// The row is filled but spells something else.
    Incorrect,
    /// The row was revealed and is locked.
    Revealed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CellView {
    pub ch: Option<char>,
    pub locked: bool,
    pub selected: bool,
    pub tone: CellTone,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    /// Definition row shown at this display position.
    pub identity: usize,
    pub locked: bool,
    pub correct: bool,
    pub clue: String,
    pub cells: Vec<CellView>,
}

/// Everything a renderer needs to draw the puzzle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionView {
    pub title: String,
    pub rows: Vec<RowView>,
    pub selection: Option<(usize, usize)>,
    pub visible_clue: Option<String>,
    pub complete: bool,
    pub hint_available: bool,
    pub reorderable: bool,
    pub puzzle_index: usize,
    pub puzzle_count: usize,
}

impl SessionState {
    /// Builds the render view of this state.
    pub fn view(&self) -> SessionView {
        let selection = self.selection();
        let rows = (0..self.rows())
            .map(|row| {
                let locked = self.is_revealed(row);
                let correct = self.is_row_correct(row);
                let tone = if locked {
                    CellTone::Revealed
                } else if correct {
                    CellTone::Correct
                } else if self.grid().is_row_filled(row) {
                    CellTone::Incorrect
                } else {
                    CellTone::Neutral
                };
                let cells = self
                    .grid()
                    .row(row)
                    .iter()
                    .enumerate()
                    .map(|(col, &ch)| CellView {
                        ch,
                        locked,
                        selected: selection.is_some_and(|s| s.row == row && s.col == col),
                        tone,
                    })
                    .collect();
                RowView {
                    identity: self.order().get(row),
                    locked,
                    correct,
                    clue: self.clue(row).to_owned(),
                    cells,
                }
            })
            .collect();

        SessionView {
            title: self.puzzle().title().to_owned(),
            rows,
            selection: selection.map(|s| (s.row, s.col)),
            visible_clue: self.visible_clue().map(str::to_owned),
            complete: self.is_complete(),
            hint_available: !self.unrevealed_rows().is_empty(),
            reorderable: self.is_reorderable(),
            puzzle_index: self.puzzle_index(),
            puzzle_count: self.catalog_len(),
        }
    }
}
