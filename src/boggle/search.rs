use std::collections::HashSet;

use rayon::prelude::*;

use super::board::Board;
use super::lexicon::{Lexicon, TrieNode};

/*
    Depth first walk over the board that advances through the lexicon trie in
    lock-step. A neighbour is only entered when its token continues the prefix
    spelled so far, so dead prefixes are never expanded.
*/

/// Counters collected while walking the board
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Number of (cell, trie node) pairs entered
    pub expansions: usize,
}

#[derive(Debug, Clone, Copy)]
pub struct WordSearcher<'a> {
    pub board: &'a Board,
    pub root: &'a TrieNode,
}

impl<'a> WordSearcher<'a> {
    pub fn new(board: &'a Board, lexicon: &'a Lexicon) -> Self {
        Self {
            board,
            root: lexicon.root(),
        }
    }

    /// Finds every word whose path starts on the cell at `start`
    pub fn find_words(&self, start: usize) -> HashSet<String> {
        let mut stats = SearchStats::default();
        let found = self.find_words_with_stats(start, &mut stats);
        log::debug!(
            "{} -> {} words ({} expansions)",
            self.board[start].name(),
            found.len(),
            stats.expansions
        );
        found
    }

    pub fn find_words_with_stats(&self, start: usize, stats: &mut SearchStats) -> HashSet<String> {
        let mut found = HashSet::new();
        // An unset cell or a letter that starts no word ends the search here
        let node = match self.board[start].token().and_then(|t| self.root.advance(t)) {
            Some(node) => node,
            None => return found,
        };

        let mut visited = vec![false; self.board.len()];
        self.walk(start, node, &mut visited, &mut found, stats);
        found
    }

    fn walk(
        &self,
        cell: usize,
        node: &TrieNode,
        visited: &mut [bool],
        found: &mut HashSet<String>,
        stats: &mut SearchStats,
    ) {
        stats.expansions += 1;
        visited[cell] = true;

        if node.is_word() {
            found.insert(node.word().to_string());
        }

        for &n in self.board[cell].neighbors() {
            if visited[n] {
                continue;
            }
            let next = self.board[n].token().and_then(|t| node.advance(t));
            if let Some(next) = next {
                self.walk(n, next, visited, found, stats);
            }
        }

        // Sibling branches must not see this cell as used
        visited[cell] = false;
    }
}

/// Runs a search from every cell and merges the results
pub fn find_all_words(board: &Board, lexicon: &Lexicon) -> HashSet<String> {
    let searcher = WordSearcher::new(board, lexicon);
    let mut words = HashSet::new();
    for start in 0..board.len() {
        words.extend(searcher.find_words(start));
    }
    words
}

/// Same as [`find_all_words`] but the starting cells are searched on the rayon
/// thread pool. Board and lexicon are only read
pub fn find_all_words_par(board: &Board, lexicon: &Lexicon) -> HashSet<String> {
    let searcher = WordSearcher::new(board, lexicon);
    (0..board.len())
        .into_par_iter()
        .map(|start| searcher.find_words(start))
        .reduce(HashSet::new, |mut acc, found| {
            acc.extend(found);
            acc
        })
}

/// Orders words by ascending length, alphabetically among equal lengths
pub fn sort_by_length(words: HashSet<String>) -> Vec<String> {
    let mut words = words.into_iter().collect::<Vec<_>>();
    words.sort_unstable_by(|a, b| a.len().cmp(&b.len()).then_with(|| a.cmp(b)));
    words
}
