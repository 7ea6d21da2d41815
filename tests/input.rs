//! Input parsing tests.

use blackjack_engine::input::{parse_action, parse_bet, parse_yes_no, validate_bet, validate_name};
use blackjack_engine::{Action, BetError, ChoiceError, NameError};

#[test]
fn bet_must_be_positive_and_within_pot() {
    assert_eq!(validate_bet(1, 100), Ok(1));
    assert_eq!(validate_bet(100, 100), Ok(100));
    assert_eq!(validate_bet(0, 100), Err(BetError::NotPositive));
    assert_eq!(validate_bet(-20, 100), Err(BetError::NotPositive));
    assert_eq!(validate_bet(101, 100), Err(BetError::InsufficientFunds));
    assert_eq!(validate_bet(1, 0), Err(BetError::InsufficientFunds));
}

#[test]
fn bet_text_is_parsed_strictly() {
    assert_eq!(parse_bet(" 250 \n", 1_000), Ok(250));
    assert_eq!(parse_bet("abc", 1_000), Err(BetError::NotANumber));
    assert_eq!(parse_bet("", 1_000), Err(BetError::NotANumber));
    assert_eq!(parse_bet("12.5", 1_000), Err(BetError::NotANumber));
    assert_eq!(parse_bet("-3", 1_000), Err(BetError::NotPositive));
    assert_eq!(parse_bet("0", 1_000), Err(BetError::NotPositive));
    assert_eq!(parse_bet("1001", 1_000), Err(BetError::InsufficientFunds));
}

#[test]
fn action_accepts_numbers_and_words() {
    for input in ["1", "h", "hit", "HIT", " Hit "] {
        assert_eq!(parse_action(input), Ok(Action::Hit));
    }
    for input in ["2", "s", "stay", "Stand", "STAY\n"] {
        assert_eq!(parse_action(input), Ok(Action::Stand));
    }
    for input in ["", "3", "double", "hi"] {
        assert_eq!(parse_action(input), Err(ChoiceError::Unrecognized));
    }
}

#[test]
fn yes_no_is_strict() {
    assert_eq!(parse_yes_no("y"), Ok(true));
    assert_eq!(parse_yes_no("YES"), Ok(true));
    assert_eq!(parse_yes_no(" n "), Ok(false));
    assert_eq!(parse_yes_no("No"), Ok(false));
    assert_eq!(parse_yes_no("maybe"), Err(ChoiceError::Unrecognized));
    assert_eq!(parse_yes_no(""), Err(ChoiceError::Unrecognized));
}

#[test]
fn names_are_trimmed_and_must_not_be_blank() {
    assert_eq!(validate_name("  Ada  "), Ok("Ada".to_string()));
    assert_eq!(validate_name(""), Err(NameError::Empty));
    assert_eq!(validate_name(" \t "), Err(NameError::Empty));
}
