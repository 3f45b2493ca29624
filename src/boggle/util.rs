/// Row and column offsets of the eight king-move neighbours
static OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Zero-indexed cell position on a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a row-major index back to a position
    pub fn from_index(index: usize, cols: usize) -> Self {
        Self {
            row: index / cols,
            col: index % cols,
        }
    }

    /// Converts the row/col to a 1d index
    pub fn as_index(&self, cols: usize) -> usize {
        self.row * cols + self.col
    }

    /// Returns all the valid adjacent positions to this position, including
    /// diagonals, clipped to a `rows` x `cols` board
    pub fn adjacent(&self, rows: usize, cols: usize) -> Vec<Position> {
        OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| {
                let row = self.row.checked_add_signed(dr)?;
                let col = self.col.checked_add_signed(dc)?;
                if row < rows && col < cols {
                    Some(Position { row, col })
                } else {
                    None
                }
            })
            .collect()
    }

    /// 1-indexed "row/col" label used in diagnostics
    pub fn label(&self) -> String {
        format!("{}/{}", self.row + 1, self.col + 1)
    }
}
