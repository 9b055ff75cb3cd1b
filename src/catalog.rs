use std::sync::Arc;

use crate::{CatalogError, PuzzleDefinition, PuzzleVariant};

/// An ordered, non-empty list of puzzles, navigated cyclically by index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleCatalog {
    puzzles: Vec<Arc<PuzzleDefinition>>,
}

impl PuzzleCatalog {
    /// Builds a catalog, checking the shape of every puzzle.
    ///
    /// Words are uppercased. Puzzles that break the ladder property are
    /// accepted with a warning.
    pub fn new(puzzles: Vec<PuzzleDefinition>) -> Result<Self, CatalogError> {
        if puzzles.is_empty() {
            return Err(CatalogError::Empty);
        }
        let puzzles = puzzles
            .into_iter()
            .enumerate()
            .map(|(index, def)| {
                let def = def.normalize(index)?;
                if !def.is_ladder() {
                    tracing::warn!(puzzle = index, words = ?def.words(), "puzzle is not a ladder");
                }
                Ok(Arc::new(def))
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;
        tracing::debug!(puzzles = puzzles.len(), "catalog loaded");
        Ok(Self { puzzles })
    }

    /// Parses a catalog from a JSON array of `{ words, clues, title?, variant? }`.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let puzzles: Vec<PuzzleDefinition> = serde_json::from_str(json)?;
        Self::new(puzzles)
    }

    /// The puzzles shipped with the game.
    pub fn builtin() -> Self {
        Self {
            puzzles: builtin_puzzles().into_iter().map(Arc::new).collect(),
        }
    }

    /// Number of puzzles.
    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    /// Returns the puzzle at `index`, wrapping around the end of the catalog.
    pub fn get(&self, index: usize) -> &Arc<PuzzleDefinition> {
        &self.puzzles[index % self.puzzles.len()]
    }

    /// Index of the puzzle after `index`, wrapping to 0 after the last one.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.puzzles.len()
    }

    /// Iterates over the puzzles in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &PuzzleDefinition> {
        self.puzzles.iter().map(AsRef::as_ref)
    }
}

impl Default for PuzzleCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

fn builtin_puzzles() -> Vec<PuzzleDefinition> {
    vec![
        PuzzleDefinition::new(
            ["GARSO", "GARCO", "GARCA", "GARRA"],
            [
                "Acción de escupir con catarro.",
                "Defecar, materia fecal, excremento.",
                "Persona que actúa de manera deshonesta o traicionera.",
                "Sinónimo de esfuerzo (en deportes).",
            ],
        ),
        PuzzleDefinition::new(
            ["CASTO", "CASCO", "CASCA", "CASPA"],
            [
                "Puro, que se abstiene de placeres.",
                "Pieza que protege la cabeza.",
                "Corteza de ciertos árboles, usada para curtir.",
                "Escamas blancas que se forman en el cuero cabelludo.",
            ],
        )
        .with_title("Ordena la escalera")
        .with_variant(PuzzleVariant::Ordering),
    ]
}
