//! Two-operand accumulator
//!
//! Holds at most one pending operator. Every transition returns a new value,
//! so callers can keep the previous state around for comparison.

use crate::core::{round_to, Calculation, Operator, PERCENT_PRECISION};

/// Pending operation: up to two operands and one operator
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accumulator {
    operand1: Option<f64>,
    operand2: Option<f64>,
    operator: Option<Operator>,
}

impl Accumulator {
    /// Empty accumulator
    #[must_use]
    pub const fn new() -> Self {
        Self {
            operand1: None,
            operand2: None,
            operator: None,
        }
    }

    /// Sets the pending operator
    #[must_use]
    pub const fn with_operator(self, operator: Operator) -> Self {
        Self {
            operator: Some(operator),
            ..self
        }
    }

    /// Sets the left operand
    #[must_use]
    pub const fn with_operand1(self, value: f64) -> Self {
        Self {
            operand1: Some(value),
            ..self
        }
    }

    /// Sets the right operand
    #[must_use]
    pub const fn with_operand2(self, value: f64) -> Self {
        Self {
            operand2: Some(value),
            ..self
        }
    }

    /// Back to empty
    #[must_use]
    pub const fn reset(self) -> Self {
        Self::new()
    }

    /// Whether an operator is waiting for its second operand
    #[must_use]
    pub const fn is_operator_ready(&self) -> bool {
        self.operator.is_some()
    }

    /// Left operand, if set
    #[must_use]
    pub const fn operand1(&self) -> Option<f64> {
        self.operand1
    }

    /// Right operand, if set
    #[must_use]
    pub const fn operand2(&self) -> Option<f64> {
        self.operand2
    }

    /// Pending operator, if any
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// `operand1 × operand2 / 100`, rounded to four places
    #[must_use]
    pub fn percentage(&self) -> Option<f64> {
        let (a, b) = (self.operand1?, self.operand2?);
        Some(round_to(a * b / 100.0, PERCENT_PRECISION))
    }

    /// Builds the committed calculation once all three parts are present
    #[must_use]
    pub fn resolve(&self) -> Option<Calculation> {
        Some(Calculation::new(
            self.operand1?,
            self.operand2?,
            self.operator?,
        ))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_empty() {
        let acc = Accumulator::new();
        assert_eq!(acc, Accumulator::default());
        assert!(!acc.is_operator_ready());
        assert_eq!(acc.operand1(), None);
        assert_eq!(acc.operand2(), None);
        assert_eq!(acc.operator(), None);
    }

    #[test]
    fn test_transitions_leave_original_untouched() {
        let empty = Accumulator::new();
        let seeded = empty.with_operand1(5.0).with_operator(Operator::Add);
        assert_eq!(empty, Accumulator::new());
        assert_eq!(seeded.operand1(), Some(5.0));
        assert!(seeded.is_operator_ready());
    }

    #[test]
    fn test_replace_operator_keeps_operand1() {
        let acc = Accumulator::new()
            .with_operand1(9.0)
            .with_operator(Operator::Add)
            .with_operator(Operator::Divide);
        assert_eq!(acc.operand1(), Some(9.0));
        assert_eq!(acc.operator(), Some(Operator::Divide));
    }

    #[test]
    fn test_resolve_requires_all_parts() {
        let acc = Accumulator::new().with_operand1(5.0);
        assert!(acc.resolve().is_none());
        let acc = acc.with_operator(Operator::Add);
        assert!(acc.resolve().is_none());
        let calc = acc.with_operand2(3.0).resolve().unwrap();
        assert_eq!(calc.result(), 8.0);
        assert_eq!(calc.operator(), Operator::Add);
    }

    #[test]
    fn test_percentage() {
        let acc = Accumulator::new().with_operand1(200.0).with_operand2(10.0);
        assert_eq!(acc.percentage(), Some(20.0));
    }

    #[test]
    fn test_percentage_rounds_to_four_places() {
        let acc = Accumulator::new().with_operand1(1.0).with_operand2(1.0 / 3.0);
        assert_eq!(acc.percentage(), Some(0.0033));
    }

    #[test]
    fn test_percentage_needs_both_operands() {
        assert_eq!(Accumulator::new().with_operand1(3.0).percentage(), None);
    }

    #[test]
    fn test_reset() {
        let acc = Accumulator::new()
            .with_operand1(1.0)
            .with_operand2(2.0)
            .with_operator(Operator::Multiply)
            .reset();
        assert_eq!(acc, Accumulator::new());
    }
}
