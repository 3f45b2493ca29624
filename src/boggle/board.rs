use std::fmt;
use std::fs;
use std::path::Path;

use rand::seq::SliceRandom;
use rand::Rng;

use super::error::BoggleError;
use super::token::{foreign_letter, tokenize, Token};
use super::util::Position;

/// Faces of the sixteen classic cubes. `Q` stands for the `qu` face
static CLASSIC_DICE: [&str; 16] = [
    "AAEEGN", "ABBJOO", "ACHOPS", "AFFKPS", "AOOTTW", "CIMOTU", "DEILRX", "DELRVY", "DISTTY",
    "EEGHNW", "EEINSU", "EHRTVW", "EIOSST", "ELRTTY", "HIMNQU", "HLNNRZ",
];

/// A single square of the board
#[derive(Debug, Clone)]
pub struct Cell {
    /// 1-indexed "row/col" label
    name: String,
    token: Option<Token>,
    /// Row-major indices of the adjacent cells
    neighbors: Vec<usize>,
}

impl Cell {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn token(&self) -> Option<Token> {
        self.token
    }

    pub fn neighbors(&self) -> &[usize] {
        &self.neighbors
    }
}

#[derive(Debug, Clone)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Cells in row-major order
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a blank board and wires up the neighbour graph. The graph only
    /// depends on the dimensions and never changes afterwards
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoggleError> {
        let size = rows.checked_mul(cols).filter(|&n| n > 0);
        let size = size.ok_or(BoggleError::InvalidDimension { rows, cols })?;

        let cells = (0..size)
            .map(|i| {
                let pos = Position::from_index(i, cols);
                Cell {
                    name: pos.label(),
                    token: None,
                    neighbors: pos
                        .adjacent(rows, cols)
                        .into_iter()
                        .map(|n| n.as_index(cols))
                        .collect(),
                }
            })
            .collect();

        Ok(Self { rows, cols, cells })
    }

    /// Parses a JSON board of the form `[["a", "b"], ["qu", "d"]]`. The
    /// dimensions come from the JSON itself
    pub fn from_json_str(data: &str) -> Result<Self, BoggleError> {
        let raw_board: Vec<Vec<String>> = serde_json::from_str(data)?;
        let rows = raw_board.len();
        let cols = raw_board.first().map_or(0, Vec::len);
        if let Some(row) = raw_board.iter().find(|r| r.len() != cols) {
            return Err(BoggleError::InvalidBoard(format!(
                "row of width {} in a board of width {}",
                row.len(),
                cols
            )));
        }

        let mut board = Self::new(rows, cols)?;
        for (i, row) in raw_board.iter().enumerate() {
            for (j, tile) in row.iter().enumerate() {
                board.set_token(Position::new(i, j), tile)?;
            }
        }
        Ok(board)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self, BoggleError> {
        let path = path.as_ref();
        let data = fs::read_to_string(path).map_err(|source| BoggleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&data)
    }

    /// Rolls a random board. A sixteen cell board uses each classic cube once,
    /// any other size rolls a randomly chosen cube for every cell
    pub fn random<R: Rng>(rows: usize, cols: usize, rng: &mut R) -> Result<Self, BoggleError> {
        let mut board = Self::new(rows, cols)?;
        let cell_count = board.len();
        let mut dice = CLASSIC_DICE.to_vec();
        dice.shuffle(rng);

        for (i, cell) in board.cells.iter_mut().enumerate() {
            let die = if dice.len() == cell_count {
                dice[i]
            } else {
                CLASSIC_DICE[rng.gen_range(0..CLASSIC_DICE.len())]
            };
            let face = die.as_bytes()[rng.gen_range(0..die.len())];
            cell.token = match face {
                b'Q' => Some(Token::Qu),
                b => Some(Token::Letter(b.to_ascii_lowercase() as char)),
            };
        }
        Ok(board)
    }

    /// Fills the board from raw puzzle text in row-major order. Letters beyond
    /// the last cell are ignored. When the text runs out early the remaining
    /// cells are left unset and `LengthMismatch` is returned; the board is still
    /// usable. Text containing a letter outside a-z is refused with
    /// `InvalidToken` and the board is left untouched.
    pub fn parse(&mut self, raw: &str) -> Result<(), BoggleError> {
        if let Some(c) = foreign_letter(raw) {
            return Err(BoggleError::InvalidToken(c.to_string()));
        }
        let tokens = tokenize(raw);
        let found = tokens.len();
        let mut tokens = tokens.into_iter();
        for cell in self.cells.iter_mut() {
            cell.token = tokens.next();
        }

        if found < self.cells.len() {
            return Err(BoggleError::LengthMismatch {
                expected: self.cells.len(),
                found,
            });
        }
        Ok(())
    }

    /// Assigns a single token to a cell. Only a single ascii letter or `qu`
    /// (any case) is accepted; anything else, including other multi-letter
    /// strings such as `"ab"`, is refused and the cell keeps its previous value
    pub fn set_token(&mut self, pos: Position, token: &str) -> Result<(), BoggleError> {
        let index = self.index_of(pos).ok_or(BoggleError::OutOfBounds {
            row: pos.row,
            col: pos.col,
        })?;
        let token = Token::parse(token).ok_or_else(|| BoggleError::InvalidToken(token.to_string()))?;
        self.cells[index].token = Some(token);
        Ok(())
    }

    /// Zero-indexed lookup, `None` when outside the board
    pub fn cell_at(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index_of(Position::new(row, col)).map(|i| &self.cells[i])
    }

    pub fn index_of(&self, pos: Position) -> Option<usize> {
        if pos.row < self.rows && pos.col < self.cols {
            Some(pos.as_index(self.cols))
        } else {
            None
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Board contents as rows of token strings, empty for unset cells
    pub fn to_rows(&self) -> Vec<Vec<String>> {
        self.cells
            .chunks(self.cols)
            .map(|row| {
                row.iter()
                    .map(|c| c.token.map(|t| t.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

impl std::ops::Index<usize> for Board {
    type Output = Cell;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cells[index]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line = row
                .iter()
                .map(|c| match c.token {
                    Some(Token::Qu) => "Qu".to_string(),
                    Some(Token::Letter(l)) => l.to_ascii_uppercase().to_string(),
                    None => ".".to_string(),
                })
                .map(|s| format!("{:<3}", s))
                .collect::<String>();
            writeln!(f, "{}", line.trim_end())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    fn tokens(board: &Board) -> Vec<Option<Token>> {
        board.cells().iter().map(Cell::token).collect()
    }

    #[test]
    fn test_invalid_dimensions() {
        assert!(matches!(
            Board::new(0, 3),
            Err(BoggleError::InvalidDimension { rows: 0, cols: 3 })
        ));
        assert!(matches!(
            Board::new(3, 0),
            Err(BoggleError::InvalidDimension { .. })
        ));
        assert!(Board::new(usize::MAX, 2).is_err());
    }

    #[test]
    fn test_neighbors() {
        let board = Board::new(3, 3).unwrap();
        assert_eq!(board.len(), 9);
        let counts = board
            .cells()
            .iter()
            .map(|c| c.neighbors().len())
            .collect::<Vec<_>>();
        assert_eq!(counts, vec![3, 5, 3, 5, 8, 5, 3, 5, 3]);

        // The relation is symmetric and never reflexive
        for (i, cell) in board.cells().iter().enumerate() {
            for &n in cell.neighbors() {
                assert_ne!(n, i);
                assert!(board[n].neighbors().contains(&i));
            }
        }
    }

    #[test]
    fn test_cell_names() {
        let board = Board::new(2, 3).unwrap();
        assert_eq!(board.cell_at(0, 0).unwrap().name(), "1/1");
        assert_eq!(board.cell_at(1, 2).unwrap().name(), "2/3");
        assert!(board.cell_at(2, 0).is_none());
        assert!(board.cell_at(0, 3).is_none());
    }

    #[test]
    fn test_parse() {
        let mut board = Board::new(2, 2).unwrap();
        board.parse("\n  A t\n  qu s extra\n").unwrap();
        assert_eq!(
            tokens(&board),
            vec![
                Some(Token::Letter('a')),
                Some(Token::Letter('t')),
                Some(Token::Qu),
                Some(Token::Letter('s')),
            ]
        );
        assert_eq!(board.to_rows(), vec![vec!["a", "t"], vec!["qu", "s"]]);
    }

    #[test]
    fn test_parse_length_mismatch() {
        let mut board = Board::new(2, 2).unwrap();
        let err = board.parse("a b 1").unwrap_err();
        assert!(matches!(
            err,
            BoggleError::LengthMismatch {
                expected: 4,
                found: 2
            }
        ));
        assert_eq!(
            tokens(&board),
            vec![Some(Token::Letter('a')), Some(Token::Letter('b')), None, None]
        );
    }

    #[test]
    fn test_parse_refuses_accented_letters() {
        let mut board = Board::new(2, 2).unwrap();
        board.parse("a b c d").unwrap();

        let err = board.parse("r é s u").unwrap_err();
        assert!(matches!(err, BoggleError::InvalidToken(ref t) if t == "é"));
        assert_eq!(
            tokens(&board),
            vec![
                Some(Token::Letter('a')),
                Some(Token::Letter('b')),
                Some(Token::Letter('c')),
                Some(Token::Letter('d')),
            ]
        );
    }

    #[test]
    fn test_set_token() {
        let mut board = Board::new(1, 2).unwrap();
        board.set_token(Position::new(0, 0), "Qu").unwrap();
        assert_eq!(board[0].token(), Some(Token::Qu));

        let err = board.set_token(Position::new(0, 1), "7").unwrap_err();
        assert!(matches!(err, BoggleError::InvalidToken(ref t) if t == "7"));
        assert_eq!(board[1].token(), None);

        let err = board.set_token(Position::new(0, 1), "ab").unwrap_err();
        assert!(matches!(err, BoggleError::InvalidToken(ref t) if t == "ab"));
        assert_eq!(board[1].token(), None);

        let err = board.set_token(Position::new(1, 0), "a").unwrap_err();
        assert!(matches!(err, BoggleError::OutOfBounds { row: 1, col: 0 }));
    }

    #[test]
    fn test_from_json() {
        let board = Board::from_json_str(r#"[["a", "b", "c"], ["qu", "E", "f"]]"#).unwrap();
        assert_eq!(board.rows(), 2);
        assert_eq!(board.cols(), 3);
        assert_eq!(board.cell_at(1, 0).unwrap().token(), Some(Token::Qu));
        assert_eq!(board.cell_at(1, 1).unwrap().token(), Some(Token::Letter('e')));

        assert!(matches!(
            Board::from_json_str(r#"[["a", "b"], ["c"]]"#),
            Err(BoggleError::InvalidBoard(_))
        ));
        assert!(matches!(
            Board::from_json_str("[]"),
            Err(BoggleError::InvalidDimension { .. })
        ));
        assert!(matches!(
            Board::from_json_str(r#"[["a", "?"]]"#),
            Err(BoggleError::InvalidToken(_))
        ));
        assert!(matches!(Board::from_json_str("{"), Err(BoggleError::Json(_))));
    }

    #[test]
    fn test_random() {
        let mut rng = StdRng::seed_from_u64(7);
        let board = Board::random(4, 4, &mut rng).unwrap();
        assert!(tokens(&board).iter().all(Option::is_some));

        let mut rng = StdRng::seed_from_u64(7);
        let again = Board::random(4, 4, &mut rng).unwrap();
        assert_eq!(tokens(&board), tokens(&again));

        let board = Board::random(2, 5, &mut rng).unwrap();
        assert_eq!(board.len(), 10);
        assert!(tokens(&board).iter().all(Option::is_some));
    }

    #[test]
    fn test_display() {
        let mut board = Board::new(2, 2).unwrap();
        let _ = board.parse("qua");
        assert_eq!(board.to_string(), "Qu A\n.  .\n");
    }
}
