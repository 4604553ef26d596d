//! Application error carrying the process exit code.
//!
//! Core record operations cannot fail; only the outer surfaces (roster files,
//! CSV exports, CLI input) produce an `AppError`.

/// Files could not be opened, created, parsed or written.
pub const EXIT_IO: u8 = 2;
/// Input was readable but not acceptable (e.g. a non-finite score).
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    exit_code: u8,
    message: String,
}

impl AppError {
    pub fn new(exit_code: u8, message: impl Into<String>) -> Self {
        Self {
            exit_code,
            message: message.into(),
        }
    }

    /// File or stream failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(EXIT_IO, message)
    }

    /// Rejected input value (exit code 3).
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(EXIT_INVALID_INPUT, message)
    }

    pub fn exit_code(&self) -> u8 {
        self.exit_code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_is_the_bare_message() {
        let err = AppError::invalid_input("Score must be finite.");
        assert_eq!(err.to_string(), "Score must be finite.");
        assert_eq!(err.exit_code(), EXIT_INVALID_INPUT);
        assert_eq!(err.message(), "Score must be finite.");
    }

    #[test]
    fn io_errors_use_exit_code_two() {
        assert_eq!(AppError::io("disk full").exit_code(), 2);
    }
}
