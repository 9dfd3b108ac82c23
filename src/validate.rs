//! Structural checks on an encoded facelet string.
//!
//! Only shape is checked here: length and alphabet. Whether the stickers
//! describe a reachable cube is left to the solving algorithm.

use thiserror::Error;

use crate::facelet::{Face, FACELET_COUNT};

/// Why a facelet string was refused before reaching the solver.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid cube string: must be 54 characters.")]
    InvalidLength { found: usize },
    #[error("Invalid cube string: contains invalid characters.")]
    InvalidAlphabet { found: char, position: usize },
}

/// Checks that `facelets` is 54 face letters.
///
/// Rules are applied in order and the first failure is returned.
pub fn validate(facelets: &str) -> Result<(), ValidationError> {
    let length = facelets.chars().count();
    if length != FACELET_COUNT {
        return Err(ValidationError::InvalidLength { found: length });
    }

    if let Some((position, found)) = facelets
        .chars()
        .enumerate()
        .find(|&(_, symbol)| Face::from_char(symbol).is_err())
    {
        return Err(ValidationError::InvalidAlphabet { found, position });
    }

    Ok(())
}
