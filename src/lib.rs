//! Finds every dictionary word that can be traced through adjacent cells of a
//! letter grid, using each cell at most once per word.

pub mod boggle;
pub mod logging;
