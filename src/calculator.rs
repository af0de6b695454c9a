//! Calculator facade.
//!
//! [`Calculator`] composes a [`MathBackend`] with a [`HistoryLog`]: every
//! operation computes its result through the backend, stores it as the
//! last result, appends a structured record to the log, and returns the
//! value to the caller. A failed division is recovered into the
//! [`CalcError::DivisionByZero`] marker rather than raised or printed.

use tracing::trace;

use crate::engine::MathBackend;
use crate::error::CalcError;
use crate::history::{HistoryLog, Operation};

/// Public-facing calculator with per-operation history.
///
/// The calculator owns its history log. An externally built log can be
/// supplied through [`with_history`](Calculator::with_history), read back
/// through [`history`](Calculator::history), and reclaimed through
/// [`into_history`](Calculator::into_history).
///
/// Invariant: after any operation, [`last_result`](Calculator::last_result)
/// equals the returned value, which equals the newest record's result.
#[derive(Debug, Clone)]
pub struct Calculator {
    backend: MathBackend,
    history: HistoryLog,
    last_result: Option<Result<f64, CalcError>>,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with a default backend and an empty log.
    pub fn new() -> Self {
        Self {
            backend: MathBackend::default(),
            history: HistoryLog::new(),
            last_result: None,
        }
    }

    /// Replaces the history log with an externally supplied one.
    pub fn with_history(mut self, history: HistoryLog) -> Self {
        self.history = history;
        self
    }

    /// Replaces the arithmetic backend.
    pub fn with_backend(mut self, backend: MathBackend) -> Self {
        self.backend = backend;
        self
    }

    fn record(&mut self, operation: Operation, operands: &[f64], result: Result<f64, CalcError>) {
        trace!(operation = %operation, ?result, "recording operation");
        self.history.add_entry(operation, operands, result);
        self.last_result = Some(result);
    }

    /// Adds two numbers and records the operation.
    pub fn add(&mut self, x: f64, y: f64) -> f64 {
        let value = self.backend.add(x, y);
        self.record(Operation::Add, &[x, y], Ok(value));
        value
    }

    /// Subtracts `y` from `x` and records the operation.
    pub fn subtract(&mut self, x: f64, y: f64) -> f64 {
        let value = self.backend.subtract(x, y);
        self.record(Operation::Subtract, &[x, y], Ok(value));
        value
    }

    /// Multiplies two numbers and records the operation.
    pub fn multiply(&mut self, x: f64, y: f64) -> f64 {
        let value = self.backend.multiply(x, y);
        self.record(Operation::Multiply, &[x, y], Ok(value));
        value
    }

    /// Divides `x` by `y` and records the operation.
    ///
    /// # Errors
    ///
    /// Returns [`CalcError::DivisionByZero`] when `y` is zero. The error is
    /// recorded in the log exactly like a successful result.
    pub fn divide(&mut self, x: f64, y: f64) -> Result<f64, CalcError> {
        let result = self.backend.divide(x, y);
        self.record(Operation::Divide, &[x, y], result);
        result
    }

    /// Raises `x` to the power `y` and records the operation.
    pub fn power(&mut self, x: f64, y: f64) -> f64 {
        let value = self.backend.power(x, y);
        self.record(Operation::Power, &[x, y], Ok(value));
        value
    }

    /// Computes the area of a circle and records the operation.
    ///
    /// As with [`MathBackend::circle_area`], a negative radius is accepted
    /// and yields a numeric area.
    pub fn circle_area(&mut self, radius: f64) -> f64 {
        let value = self.backend.circle_area(radius);
        self.record(Operation::CircleArea, &[radius], Ok(value));
        value
    }

    /// The outcome of the most recent operation, if any.
    pub fn last_result(&self) -> Option<Result<f64, CalcError>> {
        self.last_result
    }

    /// Read-only view of the history log.
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Mutable access to the history log, e.g. to clear it.
    pub fn history_mut(&mut self) -> &mut HistoryLog {
        &mut self.history
    }

    /// Consumes the calculator and returns its history log.
    pub fn into_history(self) -> HistoryLog {
        self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invariant(calculator: &Calculator, returned: Result<f64, CalcError>) {
        assert_eq!(calculator.last_result(), Some(returned));
        let newest = calculator.history().entries().last().unwrap();
        assert_eq!(newest.result(), returned);
    }

    #[test]
    fn test_add_returns_and_records() {
        let mut calculator = Calculator::new();
        let value = calculator.add(2.0, 3.0);
        assert_eq!(value, 5.0);
        assert_eq!(calculator.history().len(), 1);
        let record = &calculator.history().entries()[0];
        assert_eq!(record.operation(), Operation::Add);
        assert_eq!(record.operands(), &[2.0, 3.0]);
        assert_eq!(record.to_string(), "add(2, 3) = 5");
        assert_invariant(&calculator, Ok(value));
    }

    #[test]
    fn test_subtract_and_multiply() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.subtract(10.0, 4.0), 6.0);
        assert_invariant(&calculator, Ok(6.0));
        assert_eq!(calculator.multiply(6.0, 7.0), 42.0);
        assert_invariant(&calculator, Ok(42.0));
        assert_eq!(calculator.history().len(), 2);
    }

    #[test]
    fn test_divide_success() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.divide(10.0, 4.0), Ok(2.5));
        assert_invariant(&calculator, Ok(2.5));
    }

    #[test]
    fn test_divide_by_zero_recovers_into_marker() {
        let mut calculator = Calculator::new();
        let result = calculator.divide(4.0, 0.0);
        assert_eq!(result, Err(CalcError::DivisionByZero));
        assert_invariant(&calculator, Err(CalcError::DivisionByZero));
        let record = calculator.history().entries().last().unwrap();
        assert_eq!(record.to_string(), "divide(4, 0) = error: division by zero");
        // The calculator keeps working after a failed divide.
        assert_eq!(calculator.add(1.0, 1.0), 2.0);
        assert_eq!(calculator.history().len(), 2);
    }

    #[test]
    fn test_power_default_backend() {
        let mut calculator = Calculator::new();
        assert_eq!(calculator.power(2.0, 10.0), 1024.0);
        assert_invariant(&calculator, Ok(1024.0));
    }

    #[test]
    fn test_circle_area_default_pi() {
        let mut calculator = Calculator::new();
        let area = calculator.circle_area(2.0);
        assert!((area - 12.566370614).abs() < 1e-9);
        let record = calculator.history().entries().last().unwrap();
        assert_eq!(record.operands(), &[2.0]);
    }

    #[test]
    fn test_injected_backend_is_used() {
        let backend = MathBackend::new().with_pi(3.0).with_pow(|x, y| x + y);
        let mut calculator = Calculator::new().with_backend(backend);
        assert_eq!(calculator.circle_area(2.0), 12.0);
        assert_eq!(calculator.power(2.0, 10.0), 12.0);
    }

    #[test]
    fn test_last_result_starts_empty() {
        let calculator = Calculator::new();
        assert_eq!(calculator.last_result(), None);
        assert!(calculator.history().is_empty());
    }

    #[test]
    fn test_with_history_seeds_existing_log() {
        let mut seeded = HistoryLog::new();
        seeded.add_entry(Operation::Add, &[1.0, 1.0], Ok(2.0));
        let mut calculator = Calculator::new().with_history(seeded);
        calculator.multiply(3.0, 3.0);
        assert_eq!(calculator.history().len(), 2);
        let log = calculator.into_history();
        assert_eq!(log.entries()[0].operation(), Operation::Add);
        assert_eq!(log.entries()[1].operation(), Operation::Multiply);
    }

    #[test]
    fn test_clear_history_through_accessor() {
        let mut calculator = Calculator::new();
        calculator.add(2.0, 3.0);
        calculator.history_mut().clear();
        assert!(calculator.history().is_empty());
    }
}
