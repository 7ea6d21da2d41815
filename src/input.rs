//! Strict parsing of raw text input.
//!
//! Front ends that read from a console can run each line through these
//! functions and re-prompt on error. Nothing here falls back to a default.

extern crate alloc;

use alloc::string::{String, ToString};

use crate::decision::Action;
use crate::error::{BetError, ChoiceError, NameError};

/// Checks a bet amount against the player's pot.
///
/// # Errors
///
/// Returns [`BetError::NotPositive`] if `amount` is zero or negative, and
/// [`BetError::InsufficientFunds`] if it exceeds `pot`.
pub fn validate_bet(amount: isize, pot: usize) -> Result<usize, BetError> {
    let amount = usize::try_from(amount).map_err(|_| BetError::NotPositive)?;
    if amount == 0 {
        return Err(BetError::NotPositive);
    }
    if amount > pot {
        return Err(BetError::InsufficientFunds);
    }
    Ok(amount)
}

/// Parses and validates a bet typed by the player.
///
/// # Errors
///
/// Returns [`BetError::NotANumber`] if the input is not an integer, otherwise
/// the errors of [`validate_bet`].
pub fn parse_bet(input: &str, pot: usize) -> Result<usize, BetError> {
    let amount = input
        .trim()
        .parse::<isize>()
        .map_err(|_| BetError::NotANumber)?;
    validate_bet(amount, pot)
}

/// Parses a hit/stand answer.
///
/// Accepts `1`, `h`, `hit`, `2`, `s`, `stay` and `stand` in any case.
///
/// # Errors
///
/// Returns [`ChoiceError::Unrecognized`] for anything else.
pub fn parse_action(input: &str) -> Result<Action, ChoiceError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "1" | "h" | "hit" => Ok(Action::Hit),
        "2" | "s" | "stay" | "stand" => Ok(Action::Stand),
        _ => Err(ChoiceError::Unrecognized),
    }
}

/// Parses a yes/no answer.
///
/// # Errors
///
/// Returns [`ChoiceError::Unrecognized`] unless the input is `y`, `yes`, `n`
/// or `no` in any case.
pub fn parse_yes_no(input: &str) -> Result<bool, ChoiceError> {
    match input.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(ChoiceError::Unrecognized),
    }
}

/// Trims a player name and rejects it if nothing is left.
///
/// # Errors
///
/// Returns [`NameError::Empty`] for an empty or whitespace-only name.
pub fn validate_name(input: &str) -> Result<String, NameError> {
    let name = input.trim();
    if name.is_empty() {
        return Err(NameError::Empty);
    }
    Ok(name.to_string())
}
