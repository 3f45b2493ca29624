use std::collections::HashMap;
use std::fs;
use std::ops::RangeInclusive;
use std::path::Path;

use super::error::BoggleError;
use super::token::{foreign_letter, tokenize, Token};

/// Prefix tree node. Each node stands for the prefix spelled by the tokens on
/// the path from the root
#[derive(Debug, Default)]
pub struct TrieNode {
    word: String,
    next: HashMap<Token, TrieNode>,
    terminal: bool,
}

impl TrieNode {
    /// Inserts a token sequence below this node. Returns true if the sequence
    /// was not already a word
    fn add_tokens(&mut self, tokens: &[Token]) -> bool {
        let mut node = self;
        for &token in tokens {
            let prefix = &node.word;
            node = node.next.entry(token).or_insert_with(|| {
                let mut word = prefix.clone();
                token.push_to(&mut word);
                TrieNode {
                    word,
                    next: HashMap::new(),
                    terminal: false,
                }
            });
        }
        let added = !node.terminal;
        node.terminal = true;
        added
    }

    /// Every token that continues a known prefix from here
    pub fn next_letters(&self) -> impl Iterator<Item = Token> + '_ {
        self.next.keys().copied()
    }

    /// Follows `token` to the child node. Lookup never inserts
    pub fn advance(&self, token: Token) -> Option<&TrieNode> {
        self.next.get(&token)
    }

    /// True if this prefix was inserted as a whole word
    pub fn is_word(&self) -> bool {
        self.terminal
    }

    /// The prefix this node represents
    pub fn word(&self) -> &str {
        &self.word
    }
}

/// Validates a user supplied word length range
pub fn length_range(min: usize, max: usize) -> Result<RangeInclusive<usize>, BoggleError> {
    if min == 0 || min > max {
        return Err(BoggleError::InvalidLengthRange { min, max });
    }
    Ok(min..=max)
}

/// Dictionary of accepted words stored as a token trie
#[derive(Debug)]
pub struct Lexicon {
    root: TrieNode,
    len: usize,
    length_range: RangeInclusive<usize>,
}

impl Lexicon {
    /// Builds the trie from raw words. A word is kept when its token count lies
    /// inside `length_range`; anything else (including lines with no letters
    /// at all, or with letters outside a-z) is skipped without complaint.
    pub fn build<I, S>(words: I, length_range: RangeInclusive<usize>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut root = TrieNode::default();
        let mut len = 0;
        let mut skipped = 0;
        for word in words {
            let word = word.as_ref();
            if foreign_letter(word).is_some() {
                skipped += 1;
                continue;
            }
            let tokens = tokenize(word);
            if tokens.is_empty() || !length_range.contains(&tokens.len()) {
                skipped += 1;
                continue;
            }
            if root.add_tokens(&tokens) {
                len += 1;
            }
        }
        log::debug!("Skipped {} malformed or out of range entries", skipped);

        Self {
            root,
            len,
            length_range,
        }
    }

    /// Reads a word list with one word per line. Lines that are not valid
    /// UTF-8 are skipped like any other malformed entry
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        length_range: RangeInclusive<usize>,
    ) -> Result<Self, BoggleError> {
        let path = path.as_ref();
        let data = fs::read(path).map_err(|source| BoggleError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let lines = data
            .split(|&b| b == b'\n')
            .filter_map(|line| std::str::from_utf8(line).ok());
        Ok(Self::build(lines, length_range))
    }

    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Number of distinct words in the trie
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn length_range(&self) -> &RangeInclusive<usize> {
        &self.length_range
    }

    /// Checks whether `word` was accepted into the lexicon
    pub fn contains(&self, word: &str) -> bool {
        let tokens = tokenize(word);
        if tokens.is_empty() {
            return false;
        }
        tokens
            .into_iter()
            .try_fold(&self.root, |node, token| node.advance(token))
            .map_or(false, TrieNode::is_word)
    }
}
