//! Reference successor generation backed by shakmaty

use std::collections::HashSet;

use shakmaty::fen::Fen;
use shakmaty::{CastlingMode, Chess, EnPassantMode, Position};

use crate::error::ValidateError;
use crate::parser::FenString;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

/// Source of ground-truth successor positions.
///
/// Implementations must be pure: the same input always yields the same set,
/// and a token that is not a legal position is an error, never an empty set.
pub trait Oracle {
    fn successors(&self, fen: &str) -> Result<HashSet<FenString>, ValidateError>;
}

/// Standard chess oracle. Successors are rendered with the en-passant square
/// spelled out after every double pawn push, matching the log convention.
#[derive(Debug, Clone, Copy)]
pub struct StandardOracle {
    pub castling_mode: CastlingMode,
}

impl Default for StandardOracle {
    fn default() -> Self {
        Self {
            castling_mode: CastlingMode::Standard,
        }
    }
}

impl StandardOracle {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, fen_str: &str) -> Result<Chess, ValidateError> {
        let fen: Fen = fen_str
            .trim()
            .parse()
            .map_err(|e| ValidateError::malformed(fen_str, e))?;
        fen.into_position(self.castling_mode)
            .map_err(|e| ValidateError::malformed(fen_str, e))
    }
}

impl Oracle for StandardOracle {
    fn successors(&self, fen: &str) -> Result<HashSet<FenString>, ValidateError> {
        let pos = self.position(fen)?;

        let mut successors = HashSet::new();
        for m in pos.legal_moves() {
            let mut new_pos = pos.clone();
            new_pos.play_unchecked(&m);
            successors.insert(to_fen(new_pos));
        }
        Ok(successors)
    }
}

fn to_fen(pos: Chess) -> FenString {
    Fen::from_setup(pos.into_setup(EnPassantMode::Always)).to_string()
}

/// Collapse internal whitespace so tokens differing only in spacing compare equal.
pub fn normalize(token: &str) -> FenString {
    token.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_has_twenty_successors() {
        let successors = StandardOracle::new().successors(START_FEN).unwrap();
        assert_eq!(successors.len(), 20);
    }

    #[test]
    fn double_push_keeps_en_passant_square() {
        let successors = StandardOracle::new().successors(START_FEN).unwrap();
        assert!(successors
            .contains("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"));
        assert!(!successors
            .contains("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1"));
    }

    #[test]
    fn garbage_is_malformed() {
        let err = StandardOracle::new().successors("not a fen").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn position_without_kings_is_malformed() {
        let err = StandardOracle::new()
            .successors("8/8/8/8/8/8/8/8 w - - 0 1")
            .unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn normalize_collapses_spacing() {
        assert_eq!(normalize("  8/8/8/8/8/8/8/k6K   w - -  0 1 "), "8/8/8/8/8/8/8/k6K w - - 0 1");
    }
}
