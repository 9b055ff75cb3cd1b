use serde::{Deserialize, Serialize};

use crate::CatalogError;

/// Whether the rows of a puzzle arrive in order or must be sorted by the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PuzzleVariant {
    /// Rows are shown in ladder order and cannot be moved.
    #[default]
    Ladder,
    /// Rows start shuffled and the ladder order has to be restored by dragging.
    Ordering,
}

impl PuzzleVariant {
    /// Returns true if rows of this variant can be reordered.
    pub fn is_ordering(self) -> bool {
        self == PuzzleVariant::Ordering
    }
}

/// A single word-ladder puzzle: `N` target words of equal length and one clue per word.
///
/// Adjacent words are expected to differ in exactly one position (the ladder
/// property). This is a property of the catalog data and is only reported by
/// [`PuzzleDefinition::is_ladder`], never enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleDefinition {
    words: Vec<String>,
    clues: Vec<String>,
    #[serde(default)]
    title: String,
    #[serde(default)]
    variant: PuzzleVariant,
}

impl PuzzleDefinition {
    /// Creates a ladder puzzle from its words and clues.
    ///
    /// The definition is checked when it is added to a
    /// [`PuzzleCatalog`](crate::PuzzleCatalog).
    pub fn new<W, C>(words: W, clues: C) -> Self
    where
        W: IntoIterator,
        W::Item: Into<String>,
        C: IntoIterator,
        C::Item: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            clues: clues.into_iter().map(Into::into).collect(),
            title: String::new(),
            variant: PuzzleVariant::Ladder,
        }
    }

    /// Sets the title shown above the grid.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets whether the rows start shuffled.
    pub fn with_variant(mut self, variant: PuzzleVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Number of rows `N`.
    pub fn rows(&self) -> usize {
        self.words.len()
    }

    /// Word length `L`, counted in characters.
    pub fn word_len(&self) -> usize {
        self.words.first().map_or(0, |w| w.chars().count())
    }

    /// Target words in ladder order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Target word of definition row `row`.
    pub fn word(&self, row: usize) -> &str {
        &self.words[row]
    }

    /// Clues, parallel to [`words`](Self::words).
    pub fn clues(&self) -> &[String] {
        &self.clues
    }

    /// Clue of definition row `row`.
    pub fn clue(&self, row: usize) -> &str {
        &self.clues[row]
    }

    /// Title of the puzzle; empty when it has none.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the puzzle variant.
    pub fn variant(&self) -> PuzzleVariant {
        self.variant
    }

    /// Returns the `col`-th character of the target word for definition row `row`.
    pub(crate) fn target_char(&self, row: usize, col: usize) -> Option<char> {
        self.words.get(row)?.chars().nth(col)
    }

    /// Returns true if every pair of adjacent words differs in exactly one position.
    pub fn is_ladder(&self) -> bool {
        self.words.windows(2).all(|pair| {
            let diffs = pair[0]
                .chars()
                .zip(pair[1].chars())
                .filter(|(a, b)| a != b)
                .count();
            diffs == 1 && pair[0].chars().count() == pair[1].chars().count()
        })
    }

    /// Checks the shape of the definition and uppercases its words.
    ///
    /// `index` is the position of the puzzle in its catalog and is only used
    /// for error reporting.
    pub(crate) fn normalize(mut self, index: usize) -> Result<Self, CatalogError> {
        if self.words.is_empty() {
            return Err(CatalogError::NoWords { puzzle: index });
        }
        if self.clues.len() != self.words.len() {
            return Err(CatalogError::ClueCountMismatch {
                puzzle: index,
                words: self.words.len(),
                clues: self.clues.len(),
            });
        }

        for word in &mut self.words {
            *word = word.trim().to_uppercase();
        }

        let expected = self.word_len();
        for (row, word) in self.words.iter().enumerate() {
            let found = word.chars().count();
            if found == 0 {
                return Err(CatalogError::EmptyWord { puzzle: index, row });
            }
            if found != expected {
                return Err(CatalogError::UnevenWordLength {
                    puzzle: index,
                    row,
                    expected,
                    found,
                });
            }
        }

        Ok(self)
    }
}
