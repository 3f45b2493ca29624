// Word grid solver: trie lexicon + king-move board + pruned DFS
pub mod board;
pub mod error;
pub mod lexicon;
pub mod search;
pub mod token;
pub mod util;

pub const DEFAULT_ROWS: usize = 4;
pub const DEFAULT_COLS: usize = 4;
pub const DEFAULT_MIN_LENGTH: usize = 3;
pub const DEFAULT_MAX_LENGTH: usize = 8;

pub use self::board::Board;
pub use self::error::BoggleError;
pub use self::lexicon::Lexicon;
