use thiserror::Error;

/// Errors raised while building a [`PuzzleCatalog`](crate::PuzzleCatalog).
///
/// Session operations never fail; only catalog data can be malformed.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog contains no puzzles.
    #[error("catalog must contain at least one puzzle")]
    Empty,

    /// A puzzle has no words.
    #[error("puzzle {puzzle} has no words")]
    NoWords { puzzle: usize },

    /// A word is the empty string.
    #[error("puzzle {puzzle}: word {row} is empty")]
    EmptyWord { puzzle: usize, row: usize },

    /// Words of one puzzle differ in length.
    #[error("puzzle {puzzle}: word {row} has {found} letters, expected {expected}")]
    UnevenWordLength {
        puzzle: usize,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The clue list does not line up with the word list.
    #[error("puzzle {puzzle} has {words} words but {clues} clues")]
    ClueCountMismatch {
        puzzle: usize,
        words: usize,
        clues: usize,
    },

    /// Catalog JSON could not be parsed.
    #[error("invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
