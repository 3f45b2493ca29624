use std::fmt;

/// A single unit of the board alphabet. Every letter is its own token except
/// the `qu` digraph, which always travels together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Token {
    Letter(char),
    Qu,
}

impl Token {
    /// Parses a single token such as `"e"`, `"Q"` or `"qu"`. Anything that is
    /// not exactly one ascii letter or the `qu` digraph is rejected
    pub fn parse(text: &str) -> Option<Token> {
        let lower = text.to_ascii_lowercase();
        if lower == "qu" {
            return Some(Token::Qu);
        }
        let mut chars = lower.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) if c.is_ascii_lowercase() => Some(Token::Letter(c)),
            _ => None,
        }
    }

    /// Appends the letters of this token to a word under construction
    pub fn push_to(&self, word: &mut String) {
        match self {
            Self::Letter(c) => word.push(*c),
            Self::Qu => word.push_str("qu"),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Letter(c) => write!(f, "{}", c),
            Self::Qu => write!(f, "qu"),
        }
    }
}

/// First letter in `text` that lies outside the ascii alphabet, if any
pub fn foreign_letter(text: &str) -> Option<char> {
    text.chars().find(|c| c.is_alphabetic() && !c.is_ascii())
}

/// Splits raw text into tokens. Non-letters are dropped, everything is
/// lowercased and a `q` directly followed by a `u` (ignoring anything that was
/// dropped in between) collapses into [`Token::Qu`].
pub fn tokenize(text: &str) -> Vec<Token> {
    let mut letters = text
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .peekable();

    let mut tokens = Vec::new();
    while let Some(c) = letters.next() {
        if c == 'q' && letters.peek() == Some(&'u') {
            letters.next();
            tokens.push(Token::Qu);
        } else {
            tokens.push(Token::Letter(c));
        }
    }
    tokens
}
