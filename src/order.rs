use rand::Rng;
use rand::seq::SliceRandom;

/// A permutation mapping display position to definition row index.
///
/// `order[pos]` is the definition row currently shown at display position `pos`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RowOrder {
    order: Vec<usize>,
}

impl RowOrder {
    /// The identity permutation of `n` rows.
    pub fn identity(n: usize) -> Self {
        Self {
            order: (0..n).collect(),
        }
    }

    /// A uniformly random permutation of `n` rows.
    ///
    /// Uses the Fisher-Yates shuffle, so each of the `n!` orders is equally likely.
    pub fn shuffled<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Self {
        let mut order: Vec<usize> = (0..n).collect();
        order.shuffle(rng);
        Self { order }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true for a puzzle without rows.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Definition row shown at display position `pos`.
    ///
    /// # Panics
    /// Panics if `pos >= len()`.
    pub fn get(&self, pos: usize) -> usize {
        self.order[pos]
    }

    /// The permutation as a slice indexed by display position.
    pub fn as_slice(&self) -> &[usize] {
        &self.order
    }

    /// Display position of definition row `row`.
    pub fn position_of(&self, row: usize) -> Option<usize> {
        self.order.iter().position(|&r| r == row)
    }

    /// Returns true if every row sits at its own position.
    pub fn is_identity(&self) -> bool {
        self.order.iter().enumerate().all(|(pos, &row)| pos == row)
    }

    /// Removes the entry at `from` and reinserts it at `to`.
    ///
    /// Entries between the two positions shift by one. Out-of-range positions
    /// leave the order untouched and return false.
    pub(crate) fn move_row(&mut self, from: usize, to: usize) -> bool {
        if from >= self.order.len() || to >= self.order.len() {
            return false;
        }
        let row = self.order.remove(from);
        self.order.insert(to, row);
        true
    }
}
