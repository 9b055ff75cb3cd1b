/// The player's entries: an `N x L` matrix of characters, each possibly empty.
///
/// Rows are indexed by display position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridState {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

impl GridState {
    /// Creates an empty grid with `rows` rows of `cols` cells.
    pub fn new_empty(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Returns the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Returns the number of cells per row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if `(r, c)` lies inside the grid.
    pub fn contains(&self, r: usize, c: usize) -> bool {
        r < self.rows && c < self.cols
    }

    /// Returns the entry at `(r, c)`.
    ///
    /// # Panics
    /// Panics if `r >= rows` or `c >= cols`.
    pub fn get(&self, r: usize, c: usize) -> Option<char> {
        assert!(self.contains(r, c), "index out of bounds");
        self.cells[r * self.cols + c]
    }

    pub(crate) fn set(&mut self, r: usize, c: usize, v: Option<char>) {
        self.cells[r * self.cols + c] = v;
    }

    /// Returns the cells of row `r`.
    pub fn row(&self, r: usize) -> &[Option<char>] {
        &self.cells[r * self.cols..(r + 1) * self.cols]
    }

    /// Returns the cells as a flat slice in row-major order.
    ///
    /// The cell at position (r, c) is at index `r * cols + c`.
    pub fn cells(&self) -> &[Option<char>] {
        &self.cells
    }

    /// Concatenation of the filled cells of row `r`.
    pub fn row_text(&self, r: usize) -> String {
        self.row(r).iter().flatten().collect()
    }

    /// Returns true if every cell of row `r` is filled.
    pub fn is_row_filled(&self, r: usize) -> bool {
        self.row(r).iter().all(Option::is_some)
    }

    /// Returns true if row `r` spells exactly `word`.
    pub fn row_matches(&self, r: usize, word: &str) -> bool {
        let mut target = word.chars();
        self.row(r)
            .iter()
            .all(|cell| cell.is_some() && *cell == target.next())
            && target.next().is_none()
    }

    /// Overwrites row `r` with the characters of `text`, clearing the rest of the row.
    pub(crate) fn write_row(&mut self, r: usize, text: &str) {
        let cols = self.cols;
        let mut chars = text.chars();
        for cell in &mut self.cells[r * cols..(r + 1) * cols] {
            *cell = chars.next();
        }
    }

    /// Removes row `from` and reinserts it at `to`, shifting the rows in between.
    pub(crate) fn move_row(&mut self, from: usize, to: usize) {
        let cols = self.cols;
        if from < to {
            self.cells[from * cols..(to + 1) * cols].rotate_left(cols);
        } else if to < from {
            self.cells[to * cols..(from + 1) * cols].rotate_right(cols);
        }
    }
}
