//! Raw input events forwarded by a presentation layer.

use serde::{Deserialize, Serialize};

use crate::Direction;

/// A key pressed while a cell has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Backspace,
    Delete,
    Char(char),
    /// Any key the game does not react to.
    Other,
}

impl Key {
    /// Maps a DOM `KeyboardEvent.key` value.
    pub fn from_dom(key: &str) -> Self {
        match key {
            "ArrowUp" => Key::Up,
            "ArrowDown" => Key::Down,
            "ArrowLeft" => Key::Left,
            "ArrowRight" => Key::Right,
            "Backspace" => Key::Backspace,
            "Delete" => Key::Delete,
            _ => {
                let mut chars = key.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Key::Char(c),
                    _ => Key::Other,
                }
            }
        }
    }

    pub fn direction(self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            Key::Left => Some(Direction::Left),
            Key::Right => Some(Direction::Right),
            _ => None,
        }
    }
}

/// Input events understood by [`PuzzleSession::dispatch`](crate::PuzzleSession::dispatch).
///
/// Rows are display positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    CellEdit { row: usize, col: usize, text: String },
    CellKey { row: usize, col: usize, key: Key },
    Focus { row: usize, col: usize },
    Blur,
    RevealRequest { row: usize },
    HintRequest,
    ResetRequest,
    NextPuzzleRequest,
    DragStart { row: usize },
    DragOver { row: usize },
    Drop { row: usize },
}

/// Tracks a row drag gesture between its start and its drop.
///
/// Only the drop produces a move; intermediate events just update the
/// tracker so the page can highlight the hover target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragTracker {
    source: Option<usize>,
    hover: Option<usize>,
}

impl DragTracker {
    /// Begins dragging the row at display position `row`.
    pub fn start(&mut self, row: usize) {
        self.source = Some(row);
        self.hover = None;
    }

    /// Records the row under the pointer. Ignored when no drag is active.
    pub fn over(&mut self, row: usize) {
        if self.source.is_some() {
            self.hover = Some(row);
        }
    }

    /// Ends the gesture and returns the `(from, to)` move, if one was started.
    pub fn drop_on(&mut self, row: usize) -> Option<(usize, usize)> {
        let from = self.source.take();
        self.hover = None;
        from.map(|from| (from, row))
    }

    /// Abandons the gesture without moving anything.
    pub fn cancel(&mut self) {
        self.source = None;
        self.hover = None;
    }

    /// Row being dragged.
    pub fn source(&self) -> Option<usize> {
        self.source
    }

    /// Row currently under the pointer.
    pub fn hover(&self) -> Option<usize> {
        self.hover
    }

    /// Returns true while a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.source.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dom_keys() {
        assert_eq!(Key::from_dom("ArrowLeft"), Key::Left);
        assert_eq!(Key::from_dom("Backspace"), Key::Backspace);
        assert_eq!(Key::from_dom("a"), Key::Char('a'));
        assert_eq!(Key::from_dom("ñ"), Key::Char('ñ'));
        assert_eq!(Key::from_dom("Shift"), Key::Other);
        assert_eq!(Key::from_dom(""), Key::Other);
        assert_eq!(Key::Down.direction(), Some(Direction::Down));
        assert_eq!(Key::Char('x').direction(), None);
    }

    #[test]
    fn drag_yields_move_on_drop_only() {
        let mut drag = DragTracker::default();
        drag.over(2);
        assert_eq!(drag.hover(), None, "hover without a drag is ignored");

        drag.start(0);
        drag.over(1);
        drag.over(3);
        assert!(drag.is_dragging());
        assert_eq!(drag.hover(), Some(3));

        assert_eq!(drag.drop_on(3), Some((0, 3)));
        assert!(!drag.is_dragging());
        assert_eq!(drag.drop_on(1), None);
    }

    #[test]
    fn cancel_discards_gesture() {
        let mut drag = DragTracker::default();
        drag.start(1);
        drag.cancel();
        assert_eq!(drag.drop_on(0), None);
    }

    #[test]
    fn events_from_json() {
        let event: UiEvent =
            serde_json::from_str(r#"{"type":"cell_key","row":1,"col":2,"key":"backspace"}"#)
                .unwrap();
        assert_eq!(
            event,
            UiEvent::CellKey {
                row: 1,
                col: 2,
                key: Key::Backspace
            }
        );
        let event: UiEvent = serde_json::from_str(r#"{"type":"hint_request"}"#).unwrap();
        assert_eq!(event, UiEvent::HintRequest);
    }
}
