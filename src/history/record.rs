//! Structured history records.
//!
//! A record captures one calculator operation as data: which operation ran,
//! the operands it was given, the outcome, and when it happened. Rendering
//! to text happens only at the presentation and persistence boundary, so
//! the structured form stays queryable.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CalcError;

/// The fixed set of calculator operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    CircleArea,
}

impl Operation {
    /// Returns the name used in rendered history lines.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::CircleArea => "circle-area",
        }
    }

    /// Looks an operation up by its rendered name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "add" => Some(Operation::Add),
            "subtract" => Some(Operation::Subtract),
            "multiply" => Some(Operation::Multiply),
            "divide" => Some(Operation::Divide),
            "power" => Some(Operation::Power),
            "circle-area" => Some(Operation::CircleArea),
            _ => None,
        }
    }

    /// Returns how many operands the operation takes.
    pub fn operand_count(&self) -> usize {
        match self {
            Operation::CircleArea => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One immutable, timestamped history entry for a single operation.
///
/// Records are created only by [`HistoryLog::add_entry`], which stamps them
/// with the current time. The fields are read-only afterwards.
///
/// [`HistoryLog::add_entry`]: crate::history::HistoryLog::add_entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    operation: Operation,
    operands: Vec<f64>,
    result: Result<f64, CalcError>,
    recorded_at: DateTime<Utc>,
}

impl OperationRecord {
    pub(crate) fn new(
        operation: Operation,
        operands: Vec<f64>,
        result: Result<f64, CalcError>,
    ) -> Self {
        Self {
            operation,
            operands,
            result,
            recorded_at: Utc::now(),
        }
    }

    /// The operation that was performed.
    pub fn operation(&self) -> Operation {
        self.operation
    }

    /// The operands the operation was given, in order.
    pub fn operands(&self) -> &[f64] {
        &self.operands
    }

    /// The computed value, or the error marker for a failed operation.
    pub fn result(&self) -> Result<f64, CalcError> {
        self.result
    }

    /// When the record was created.
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

impl fmt::Display for OperationRecord {
    /// Renders the record in the persisted line format, for example
    /// `add(2, 3) = 5` or `divide(4, 0) = error: division by zero`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operands = self
            .operands
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        match self.result {
            Ok(value) => write!(f, "{}({}) = {}", self.operation, operands, value),
            Err(err) => write!(f, "{}({}) = error: {}", self.operation, operands, err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names_round_trip() {
        let all = [
            Operation::Add,
            Operation::Subtract,
            Operation::Multiply,
            Operation::Divide,
            Operation::Power,
            Operation::CircleArea,
        ];
        for op in all {
            assert_eq!(Operation::from_name(op.name()), Some(op));
        }
        assert_eq!(Operation::from_name("modulo"), None);
    }

    #[test]
    fn test_operand_counts() {
        assert_eq!(Operation::CircleArea.operand_count(), 1);
        assert_eq!(Operation::Add.operand_count(), 2);
        assert_eq!(Operation::Divide.operand_count(), 2);
    }

    #[test]
    fn test_render_success() {
        let record = OperationRecord::new(Operation::Add, vec![2.0, 3.0], Ok(5.0));
        assert_eq!(record.to_string(), "add(2, 3) = 5");
    }

    #[test]
    fn test_render_single_operand() {
        let record = OperationRecord::new(Operation::CircleArea, vec![2.0], Ok(12.5));
        assert_eq!(record.to_string(), "circle-area(2) = 12.5");
    }

    #[test]
    fn test_render_error_marker() {
        let record = OperationRecord::new(
            Operation::Divide,
            vec![4.0, 0.0],
            Err(CalcError::DivisionByZero),
        );
        assert_eq!(record.to_string(), "divide(4, 0) = error: division by zero");
    }

    #[test]
    fn test_serialized_operation_names_match_rendered_names() {
        let json = serde_json::to_string(&Operation::CircleArea).unwrap();
        assert_eq!(json, "\"circle-area\"");
    }
}
