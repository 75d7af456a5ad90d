//! Raffle entry validation.
//!
//! The raffle field is free text while the user types; this module is the
//! single place it is parsed. Both call sites, the on-change handler and
//! the pre-submit gate, go through [`validate`].

use thiserror::Error;

/// Minimum number of raffle entries
pub const MIN_ENTRIES: usize = 10;

/// Inclusive raffle window
pub const MIN_VALUE: u32 = 1;
pub const MAX_VALUE: u32 = 100;

/// Why a raffle entry string was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RaffleError {
    #[error("Please enter at least 10 numbers.")]
    TooFew,
    #[error("All numbers must be between 1 and 100.")]
    OutOfRange,
}

/// Parse comma-separated raffle entries.
///
/// Tokens are trimmed and empty tokens dropped before counting. Tokens are
/// checked left to right and the first out-of-window or unparsable one
/// fails the whole input. Duplicates are allowed; the output preserves
/// order and repetition exactly as typed.
pub fn validate(text: &str) -> Result<Vec<u32>, RaffleError> {
    let tokens: Vec<&str> = text
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.len() < MIN_ENTRIES {
        return Err(RaffleError::TooFew);
    }

    let mut numbers = Vec::with_capacity(tokens.len());
    for token in tokens {
        match token.parse::<u32>() {
            Ok(value) if (MIN_VALUE..=MAX_VALUE).contains(&value) => numbers.push(value),
            _ => return Err(RaffleError::OutOfRange),
        }
    }
    Ok(numbers)
}
