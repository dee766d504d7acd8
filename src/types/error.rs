//! Error types for the Bank Batch Engine
//!
//! The batch core itself never fails: unknown accounts and unknown kinds are
//! outcomes, not errors. Everything here belongs to the boundary around it.
//!
//! # Error Categories
//!
//! - **File I/O Errors**: File not found, permission denied, etc.
//! - **CSV Parsing Errors**: Malformed CSV, invalid amounts, unknown account types
//! - **Configuration Errors**: Out-of-range formatting or threshold settings

use thiserror::Error;

/// Main error type for the batch engine boundary
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BatchError {
    /// File not found at the specified path
    #[error("File not found: {path}")]
    FileNotFound {
        /// The path that was not found
        path: String,
    },

    /// I/O error occurred while reading or writing
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV parsing error occurred
    #[error(
        "CSV parse error{}: {message}",
        line.map(|l| format!(" at line {}", l)).unwrap_or_default()
    )]
    ParseError {
        /// Line number where the error occurred (if available)
        line: Option<u64>,
        /// Description of the parsing error
        message: String,
    },

    /// Account type column was neither checking nor savings
    #[error("Invalid account type '{account_type}' for account {account_id}")]
    InvalidAccountType {
        /// The unrecognized type string
        account_type: String,
        /// Account the row describes
        account_id: String,
    },

    /// A numeric column could not be parsed
    #[error("Invalid {field} '{value}' for {subject}")]
    InvalidAmount {
        /// Column name
        field: String,
        /// Raw text that failed to parse
        value: String,
        /// Account or transaction the row describes
        subject: String,
    },

    /// A column required by the row's type was empty
    #[error("Missing {field} for {subject}")]
    MissingField {
        /// Column name
        field: String,
        /// Account or transaction the row describes
        subject: String,
    },

    /// Batch configuration is out of range
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// What is wrong with the configuration
        message: String,
    },
}

impl From<std::io::Error> for BatchError {
    fn from(error: std::io::Error) -> Self {
        BatchError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for BatchError {
    fn from(error: csv::Error) -> Self {
        let line = error.position().map(|pos| pos.line());

        BatchError::ParseError {
            line,
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl BatchError {
    /// Create a FileNotFound error
    pub fn file_not_found(path: &str) -> Self {
        BatchError::FileNotFound {
            path: path.to_string(),
        }
    }

    /// Create a ParseError tied to a CSV line
    pub fn parse_error(line: Option<u64>, message: impl Into<String>) -> Self {
        BatchError::ParseError {
            line,
            message: message.into(),
        }
    }

    /// Create an InvalidAccountType error
    pub fn invalid_account_type(account_type: &str, account_id: &str) -> Self {
        BatchError::InvalidAccountType {
            account_type: account_type.to_string(),
            account_id: account_id.to_string(),
        }
    }

    /// Create an InvalidAmount error
    pub fn invalid_amount(field: &str, value: &str, subject: &str) -> Self {
        BatchError::InvalidAmount {
            field: field.to_string(),
            value: value.to_string(),
            subject: subject.to_string(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: &str, subject: &str) -> Self {
        BatchError::MissingField {
            field: field.to_string(),
            subject: subject.to_string(),
        }
    }

    /// Create an InvalidConfig error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        BatchError::InvalidConfig {
            message: message.into(),
        }
    }

    /// Attach a line number to a row-level error
    ///
    /// Row conversion errors other than `ParseError` are wrapped so the
    /// caller always learns which line was bad.
    pub fn at_line(self, line: Option<u64>) -> Self {
        match self {
            BatchError::ParseError {
                line: None,
                message,
            } => BatchError::ParseError { line, message },
            BatchError::ParseError { .. }
            | BatchError::FileNotFound { .. }
            | BatchError::IoError { .. } => self,
            other => BatchError::ParseError {
                line,
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::file_not_found(
        BatchError::FileNotFound { path: "accounts.csv".to_string() },
        "File not found: accounts.csv"
    )]
    #[case::io_error(
        BatchError::IoError { message: "Permission denied".to_string() },
        "I/O error: Permission denied"
    )]
    #[case::parse_error_with_line(
        BatchError::ParseError { line: Some(3), message: "Invalid field".to_string() },
        "CSV parse error at line 3: Invalid field"
    )]
    #[case::parse_error_without_line(
        BatchError::ParseError { line: None, message: "Invalid field".to_string() },
        "CSV parse error: Invalid field"
    )]
    #[case::invalid_account_type(
        BatchError::InvalidAccountType {
            account_type: "brokerage".to_string(),
            account_id: "B-1".to_string(),
        },
        "Invalid account type 'brokerage' for account B-1"
    )]
    #[case::invalid_amount(
        BatchError::InvalidAmount {
            field: "balance".to_string(),
            value: "abc".to_string(),
            subject: "account C-1".to_string(),
        },
        "Invalid balance 'abc' for account C-1"
    )]
    #[case::missing_field(
        BatchError::MissingField {
            field: "overdraft_limit".to_string(),
            subject: "account C-1".to_string(),
        },
        "Missing overdraft_limit for account C-1"
    )]
    #[case::invalid_config(
        BatchError::InvalidConfig { message: "bad digits".to_string() },
        "Invalid configuration: bad digits"
    )]
    fn test_error_display(#[case] error: BatchError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }

    #[rstest]
    #[case::file_not_found(
        BatchError::file_not_found("x.csv"),
        BatchError::FileNotFound { path: "x.csv".to_string() }
    )]
    #[case::invalid_account_type(
        BatchError::invalid_account_type("loan", "L-1"),
        BatchError::InvalidAccountType {
            account_type: "loan".to_string(),
            account_id: "L-1".to_string(),
        }
    )]
    #[case::missing_field(
        BatchError::missing_field("interest_rate", "account S-1"),
        BatchError::MissingField {
            field: "interest_rate".to_string(),
            subject: "account S-1".to_string(),
        }
    )]
    fn test_helper_functions(#[case] result: BatchError, #[case] expected: BatchError) {
        assert_eq!(result, expected);
    }

    #[test]
    fn test_at_line_wraps_row_errors() {
        let error = BatchError::missing_field("amount", "transaction for C-1").at_line(Some(4));
        assert_eq!(
            error.to_string(),
            "CSV parse error at line 4: Missing amount for transaction for C-1"
        );

        let error = BatchError::parse_error(None, "bad row").at_line(Some(2));
        assert_eq!(error.to_string(), "CSV parse error at line 2: bad row");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "Permission denied");
        let error: BatchError = io_error.into();
        assert!(matches!(error, BatchError::IoError { .. }));
        assert_eq!(error.to_string(), "I/O error: Permission denied");
    }
}
