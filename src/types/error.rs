//! Error types for the time deposit engine
//!
//! This module defines all error types that can occur while loading deposits,
//! accruing interest and writing results.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **Parsing Errors**: Malformed CSV or JSON, non-numeric balances
//! - **Record Errors**: Negative balances, duplicate ids, unknown plans
//! - **Arithmetic Errors**: Overflow while computing or crediting interest

use crate::types::deposit::DepositId;
use rust_decimal::Decimal;
use std::path::Path;
use thiserror::Error;

/// Main error type for the time deposit engine
///
/// Record-level variants are recoverable: the engine and the readers log them
/// and move on to the next deposit. File and I/O variants are fatal for a run.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DepositError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    ///
    /// The malformed record is skipped and processing continues.
    #[error("CSV parse error{}: {message}", line.map(|l| format!(" at line {}", l)).unwrap_or_default())]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// JSON (de)serialization failed
    #[error("Serialization error: {message}")]
    SerializationError { message: String },

    /// A monetary amount could not be parsed as an exact decimal
    #[error("Invalid amount '{amount}'")]
    InvalidAmount {
        /// The rejected input, verbatim
        amount: String,
    },

    /// A deposit carries a negative balance
    ///
    /// Rejected at construction time; if a corrupt record still reaches the
    /// engine, the accrual for that deposit fails and its balance is kept.
    #[error("Deposit {id} has negative balance {balance}")]
    NegativeBalance {
        /// Deposit id
        id: DepositId,
        /// Offending balance
        balance: Decimal,
    },

    /// Arithmetic overflow would occur
    #[error("Arithmetic overflow in {operation} for deposit {id}")]
    ArithmeticOverflow {
        /// Operation that would overflow
        operation: String,
        /// Deposit id
        id: DepositId,
    },

    /// A deposit with the same id was already loaded
    #[error("Duplicate deposit id {id}")]
    DuplicateDeposit { id: DepositId },

    /// No deposit with the requested id
    #[error("Deposit {id} not found")]
    DepositNotFound { id: DepositId },

    /// Plan identifier outside the rule table
    ///
    /// Only returned by explicit parsing. The engine treats unknown plans as
    /// ineligible and never raises this.
    #[error("Unknown plan type '{plan_type}'")]
    UnknownPlanType { plan_type: String },
}

impl From<std::io::Error> for DepositError {
    fn from(error: std::io::Error) -> Self {
        DepositError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for DepositError {
    fn from(error: csv::Error) -> Self {
        if error.is_io_error() {
            return DepositError::IoError {
                message: error.to_string(),
            };
        }

        let line = error.position().map(|pos| pos.line());

        DepositError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

impl From<serde_json::Error> for DepositError {
    fn from(error: serde_json::Error) -> Self {
        DepositError::SerializationError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl DepositError {
    /// Create an InvalidAmount error
    pub fn invalid_amount(amount: &str) -> Self {
        DepositError::InvalidAmount {
            amount: amount.to_string(),
        }
    }

    /// Create a NegativeBalance error
    pub fn negative_balance(id: DepositId, balance: Decimal) -> Self {
        DepositError::NegativeBalance { id, balance }
    }

    /// Create an ArithmeticOverflow error
    pub fn arithmetic_overflow(operation: &str, id: DepositId) -> Self {
        DepositError::ArithmeticOverflow {
            operation: operation.to_string(),
            id,
        }
    }

    /// Create a DuplicateDeposit error
    pub fn duplicate_deposit(id: DepositId) -> Self {
        DepositError::DuplicateDeposit { id }
    }

    /// Create a DepositNotFound error
    pub fn deposit_not_found(id: DepositId) -> Self {
        DepositError::DepositNotFound { id }
    }

    /// Tag a record-level error with the input line it came from
    ///
    /// Errors that already carry a line are returned unchanged.
    pub fn at_line(self, line: Option<u64>) -> Self {
        match self {
            DepositError::ParseError { line: Some(_), .. } => self,
            DepositError::ParseError { line: None, message } => {
                DepositError::ParseError { line, message }
            }
            other => DepositError::ParseError {
                line,
                message: other.to_string(),
            },
        }
    }

    /// Map a failure to open `path`, keeping "not found" distinct
    pub fn file_open(path: &Path, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => DepositError::FileNotFound {
                path: path.display().to_string(),
            },
            _ => DepositError::from(error),
        }
    }

    /// Create an UnknownPlanType error
    pub fn unknown_plan_type(plan_type: &str) -> Self {
        DepositError::UnknownPlanType {
            plan_type: plan_type.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        DepositError::FileNotFound { path: "deposits.csv".to_string() },
        "File not found: deposits.csv"
    )]
    #[case::io_error(
        DepositError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        DepositError::ParseError { line: Some(42), message: "Invalid field".to_string() },
        "CSV parse error at line 42: Invalid field"
    )]
    #[case::parse_error_without_line(
        DepositError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::invalid_amount(
        DepositError::InvalidAmount { amount: "abc".to_string() },
        "Invalid amount 'abc'"
    )]
    #[case::negative_balance(
        DepositError::NegativeBalance { id: 7, balance: Decimal::new(-1050, 2) },
        "Deposit 7 has negative balance -10.50"
    )]
    #[case::arithmetic_overflow(
        DepositError::ArithmeticOverflow { operation: "interest credit".to_string(), id: 3 },
        "Arithmetic overflow in interest credit for deposit 3"
    )]
    #[case::duplicate(
        DepositError::DuplicateDeposit { id: 9 },
        "Duplicate deposit id 9"
    )]
    #[case::not_found(
        DepositError::DepositNotFound { id: 9 },
        "Deposit 9 not found"
    )]
    #[case::unknown_plan(
        DepositError::UnknownPlanType { plan_type: "gold".to_string() },
        "Unknown plan type 'gold'"
    )]
    fn test_error_display(#[case] error: DepositError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::invalid_amount(
        DepositError::invalid_amount("1,000"),
        DepositError::InvalidAmount { amount: "1,000".to_string() }
    )]
    #[case::arithmetic_overflow(
        DepositError::arithmetic_overflow("interest", 1),
        DepositError::ArithmeticOverflow { operation: "interest".to_string(), id: 1 }
    )]
    #[case::duplicate(
        DepositError::duplicate_deposit(4),
        DepositError::DuplicateDeposit { id: 4 }
    )]
    #[case::unknown_plan(
        DepositError::unknown_plan_type("A"),
        DepositError::UnknownPlanType { plan_type: "A".to_string() }
    )]
    fn test_helper_functions(#[case] result: DepositError, #[case] expected: DepositError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: DepositError = io_error.into();
        assert!(matches!(error, DepositError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }

    #[test]
    fn test_file_open_distinguishes_missing_file() {
        let missing = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        assert_eq!(
            DepositError::file_open(Path::new("in.csv"), missing),
            DepositError::FileNotFound {
                path: "in.csv".to_string()
            }
        );

        let denied = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        assert!(matches!(
            DepositError::file_open(Path::new("in.csv"), denied),
            DepositError::IoError { .. }
        ));
    }

    #[test]
    fn test_csv_error_conversion_keeps_line() {
        let csv_error = csv::Reader::from_reader("id\n1\nx\n".as_bytes())
            .deserialize::<(u32,)>()
            .nth(1)
            .unwrap()
            .unwrap_err();

        let error: DepositError = csv_error.into();

        assert!(matches!(
            error,
            DepositError::ParseError { line: Some(3), .. }
        ));
    }

    #[test]
    fn test_csv_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        let error: DepositError = csv::Error::from(io_error).into();
        assert!(matches!(error, DepositError::IoError { .. }));
    }

    #[rstest]
    #[case::wraps_record_error(
        DepositError::invalid_amount("abc"),
        DepositError::ParseError { line: Some(3), message: "Invalid amount 'abc'".to_string() }
    )]
    #[case::fills_missing_line(
        DepositError::ParseError { line: None, message: "bad".to_string() },
        DepositError::ParseError { line: Some(3), message: "bad".to_string() }
    )]
    #[case::keeps_existing_line(
        DepositError::ParseError { line: Some(8), message: "bad".to_string() },
        DepositError::ParseError { line: Some(8), message: "bad".to_string() }
    )]
    fn test_at_line(#[case] error: DepositError, #[case] expected: DepositError) {
        assert_eq!(error.at_line(Some(3)), expected);
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<u32>>("[1,").unwrap_err();
        let error: DepositError = json_error.into();
        assert!(matches!(error, DepositError::SerializationError { .. }));
    }
}
