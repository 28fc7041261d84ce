use super::PlayerId;

/// A gravity-fed grid. Row 0 is the bottom; pieces stack upward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: usize,
    rows: usize,
    /// Column-major: cell `(col, row)` lives at `col * rows + row`
    cells: Vec<Option<PlayerId>>,
}

impl Board {
    /// Create a new empty board
    pub fn new(columns: usize, rows: usize) -> Self {
        Board {
            columns,
            rows,
            cells: vec![None; columns * rows],
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the occupant of a cell. Out-of-range coordinates read as empty.
    pub fn get(&self, col: usize, row: usize) -> Option<PlayerId> {
        if col >= self.columns || row >= self.rows {
            return None;
        }
        self.cells[col * self.rows + row]
    }

    /// Check if a column is full (out-of-range columns count as full)
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.columns {
            return true;
        }
        self.get(col, self.rows - 1).is_some()
    }

    /// Number of pieces in a column
    pub fn height(&self, col: usize) -> usize {
        (0..self.rows)
            .take_while(|&row| self.get(col, row).is_some())
            .count()
    }

    /// Drop a piece in a column, returns the row where it landed, or `None`
    /// if the column is full or out of range.
    pub(crate) fn drop_piece(&mut self, col: usize, player: PlayerId) -> Option<usize> {
        if self.is_column_full(col) {
            return None;
        }
        let row = self.height(col);
        self.cells[col * self.rows + row] = Some(player);
        Some(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|col| self.is_column_full(col))
    }

    /// Total number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }
}
