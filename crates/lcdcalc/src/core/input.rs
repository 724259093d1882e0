//! Keypad input events
//!
//! Every front end (terminal keys, mouse clicks, scripted key strings)
//! reduces to a stream of [`Input`] values.

use uuid::Uuid;

use crate::core::{CalcError, CalcResult, Operator};

/// A single key gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Digit key 0-9
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(Operator),
    /// Equals / Enter
    Equals,
    /// Percent
    Percent,
    /// Square root
    SquareRoot,
    /// Sign toggle (±)
    ToggleSign,
    /// Remove the last character
    Backspace,
    /// Clear display and pending operation
    Clear,
    /// Empty the history drawer
    ClearHistory,
    /// Open or close the history drawer
    ToggleHistory,
    /// Load a past result onto the display
    RecallHistory(Uuid),
    /// Next background pattern
    AdvancePattern,
    /// Pause or resume the background animation
    ToggleAnimation,
}

impl Input {
    /// Maps a printable key to its input
    ///
    /// Covers the characters shared by the terminal and key scripts.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        if let Some(d) = c.to_digit(10) {
            return Some(Self::Digit(d as u8));
        }
        if let Some(op) = Operator::from_symbol(c) {
            return Some(Self::Operator(op));
        }
        match c {
            '.' | ',' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            '%' => Some(Self::Percent),
            'r' | 's' => Some(Self::SquareRoot),
            'n' => Some(Self::ToggleSign),
            '<' => Some(Self::Backspace),
            'c' => Some(Self::Clear),
            'h' => Some(Self::ToggleHistory),
            'x' => Some(Self::ClearHistory),
            'p' => Some(Self::AdvancePattern),
            'a' => Some(Self::ToggleAnimation),
            _ => None,
        }
    }

    /// Whether this input is handled by the calculator itself
    #[must_use]
    pub const fn is_keypad(&self) -> bool {
        matches!(
            self,
            Self::Digit(_)
                | Self::Decimal
                | Self::Operator(_)
                | Self::Equals
                | Self::Percent
                | Self::SquareRoot
                | Self::ToggleSign
                | Self::Backspace
                | Self::Clear
        )
    }
}

/// Parses a key script such as `"5+3="` or `"200+10%="`
///
/// Whitespace is ignored.
pub fn parse_keys(script: &str) -> CalcResult<Vec<Input>> {
    script
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Input::from_char(c).ok_or(CalcError::UnknownKey(c)))
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_char_digits() {
        for d in 0..=9u8 {
            let c = char::from(b'0' + d);
            assert_eq!(Input::from_char(c), Some(Input::Digit(d)));
        }
    }

    #[test]
    fn test_from_char_operators() {
        assert_eq!(Input::from_char('+'), Some(Input::Operator(Operator::Add)));
        assert_eq!(
            Input::from_char('-'),
            Some(Input::Operator(Operator::Subtract))
        );
        assert_eq!(
            Input::from_char('*'),
            Some(Input::Operator(Operator::Multiply))
        );
        assert_eq!(
            Input::from_char('/'),
            Some(Input::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_from_char_decimal_variants() {
        assert_eq!(Input::from_char('.'), Some(Input::Decimal));
        assert_eq!(Input::from_char(','), Some(Input::Decimal));
    }

    #[test]
    fn test_from_char_unknown() {
        assert_eq!(Input::from_char('z'), None);
        assert_eq!(Input::from_char('('), None);
    }

    #[test]
    fn test_parse_keys_simple() {
        let keys = parse_keys("5+3=").unwrap();
        assert_eq!(
            keys,
            vec![
                Input::Digit(5),
                Input::Operator(Operator::Add),
                Input::Digit(3),
                Input::Equals,
            ]
        );
    }

    #[test]
    fn test_parse_keys_ignores_whitespace() {
        let keys = parse_keys(" 9 s n <\tc ").unwrap();
        assert_eq!(
            keys,
            vec![
                Input::Digit(9),
                Input::SquareRoot,
                Input::ToggleSign,
                Input::Backspace,
                Input::Clear,
            ]
        );
    }

    #[test]
    fn test_parse_keys_unknown_key() {
        let err = parse_keys("5+q").unwrap_err();
        assert!(matches!(err, CalcError::UnknownKey('q')));
    }

    #[test]
    fn test_parse_keys_empty() {
        assert!(parse_keys("").unwrap().is_empty());
    }

    #[test]
    fn test_is_keypad() {
        assert!(Input::Digit(1).is_keypad());
        assert!(Input::Clear.is_keypad());
        assert!(!Input::ToggleHistory.is_keypad());
        assert!(!Input::RecallHistory(Uuid::nil()).is_keypad());
    }
}
