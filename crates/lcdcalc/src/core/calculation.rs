//! Operators and committed calculations
//!
//! A [`Calculation`] is created exactly once both operands and an operator are
//! resolved, and never changes afterwards.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::{format_number, round_to, CalcError, RESULT_PRECISION};

/// Binary operator - one pending at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (*)
    #[serde(rename = "*")]
    Multiply,
    /// Division (/)
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(&self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Returns the button name (`add`, `subtract`, ...)
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }

    /// Looks an operator up by its symbol
    #[must_use]
    pub const fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// Applies the operator without rounding.
    ///
    /// Division by zero is not guarded and yields `inf` or `NaN`.
    #[must_use]
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if let Some(op) = Self::from_symbol(c) {
                return Ok(op);
            }
        }
        Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| CalcError::UnknownOperator(trimmed.to_string()))
    }
}

/// A committed calculation record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Calculation {
    id: Uuid,
    operand1: f64,
    operand2: f64,
    operator: Operator,
    result: f64,
}

impl Calculation {
    /// Creates a calculation with a fresh id, computing its result
    #[must_use]
    pub fn new(operand1: f64, operand2: f64, operator: Operator) -> Self {
        Self::with_id(Uuid::new_v4(), operand1, operand2, operator)
    }

    /// Creates a calculation with a known id (used when restoring history)
    #[must_use]
    pub fn with_id(id: Uuid, operand1: f64, operand2: f64, operator: Operator) -> Self {
        Self {
            id,
            operand1,
            operand2,
            operator,
            result: Self::evaluate(operand1, operand2, operator),
        }
    }

    /// Reassembles a stored calculation without recomputing its result
    #[must_use]
    pub(crate) const fn from_parts(
        id: Uuid,
        operand1: f64,
        operand2: f64,
        operator: Operator,
        result: f64,
    ) -> Self {
        Self {
            id,
            operand1,
            operand2,
            operator,
            result,
        }
    }

    /// `operand1 <op> operand2` rounded to [`RESULT_PRECISION`] places
    #[must_use]
    pub fn evaluate(operand1: f64, operand2: f64, operator: Operator) -> f64 {
        round_to(operator.apply(operand1, operand2), RESULT_PRECISION)
    }

    /// Unique identifier
    #[must_use]
    pub const fn id(&self) -> Uuid {
        self.id
    }

    /// Left operand
    #[must_use]
    pub const fn operand1(&self) -> f64 {
        self.operand1
    }

    /// Right operand
    #[must_use]
    pub const fn operand2(&self) -> f64 {
        self.operand2
    }

    /// The operator
    #[must_use]
    pub const fn operator(&self) -> Operator {
        self.operator
    }

    /// The rounded result
    #[must_use]
    pub const fn result(&self) -> f64 {
        self.result
    }

    /// `a op b` as shown in the history drawer
    #[must_use]
    pub fn expression(&self) -> String {
        format!(
            "{} {} {}",
            format_number(self.operand1),
            self.operator,
            format_number(self.operand2)
        )
    }
}

impl fmt::Display for Calculation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.expression(), format_number(self.result))
    }
}
