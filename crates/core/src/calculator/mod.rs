//! Four-function calculator shown next to the currency converter.
//!
//! Operations chain left to right without precedence: `2 + 3 × 4 =` is 20.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CalculatorError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Invalid operand: {0}")]
    InvalidOperand(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<f64, CalculatorError> {
        match self {
            Self::Add => Ok(lhs + rhs),
            Self::Subtract => Ok(lhs - rhs),
            Self::Multiply => Ok(lhs * rhs),
            Self::Divide if rhs == 0.0 => Err(CalculatorError::DivisionByZero),
            Self::Divide => Ok(lhs / rhs),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Calculator {
    display: String,
    accumulator: Option<f64>,
    pending: Option<Operation>,
    waiting_for_operand: bool,
}

impl Default for Calculator {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
            accumulator: None,
            pending: None,
            waiting_for_operand: false,
        }
    }
}

impl Calculator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn input_digit(&mut self, digit: u8) -> Result<(), CalculatorError> {
        if digit > 9 {
            return Err(CalculatorError::InvalidOperand(digit.to_string()));
        }
        let digit = char::from(b'0' + digit);

        if self.waiting_for_operand {
            self.display = digit.to_string();
            self.waiting_for_operand = false;
        } else if self.display == "0" {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
        Ok(())
    }

    pub fn input_decimal(&mut self) {
        if self.waiting_for_operand {
            self.display = "0.".to_string();
            self.waiting_for_operand = false;
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
    }

    /// Applies any pending operation, then waits for the next operand.
    ///
    /// Pressing an operation twice in a row only replaces the pending one.
    pub fn input_operation(&mut self, operation: Operation) -> Result<(), CalculatorError> {
        if !self.waiting_for_operand {
            let value = self.current_value()?;
            match (self.accumulator, self.pending) {
                (Some(lhs), Some(pending)) => {
                    let result = self.evaluate(pending, lhs, value)?;
                    self.show(result);
                    self.accumulator = Some(result);
                }
                _ => self.accumulator = Some(value),
            }
        }

        self.waiting_for_operand = true;
        self.pending = Some(operation);
        Ok(())
    }

    /// Completes the pending operation, if any, and returns the display value.
    pub fn equals(&mut self) -> Result<f64, CalculatorError> {
        let value = self.current_value()?;
        if let (Some(lhs), Some(pending)) = (self.accumulator, self.pending) {
            let result = self.evaluate(pending, lhs, value)?;
            self.show(result);
            self.accumulator = None;
            self.pending = None;
            self.waiting_for_operand = true;
            return Ok(result);
        }
        Ok(value)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn clear_entry(&mut self) {
        self.display = "0".to_string();
    }

    fn current_value(&self) -> Result<f64, CalculatorError> {
        self.display
            .parse::<f64>()
            .map_err(|_| CalculatorError::InvalidOperand(self.display.clone()))
    }

    /// Runs `operation`, resetting the calculator if it fails.
    fn evaluate(&mut self, operation: Operation, lhs: f64, rhs: f64) -> Result<f64, CalculatorError> {
        operation.apply(lhs, rhs).inspect_err(|_| self.clear())
    }

    fn show(&mut self, value: f64) {
        self.display = value.to_string();
    }
}
