//! Process exit codes.

/// Exit codes for the filecat binary.
///
/// - 0: Session completed normally
/// - 1: General error (scan failure, storage I/O, console I/O)
/// - 2: Catalogue file malformed or of an unsupported version
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Session completed normally.
    Success = 0,
    /// An unexpected error occurred.
    GeneralError = 1,
    /// The persisted catalogue could not be deserialized.
    BadCatalogue = 2,
}

impl ExitCode {
    /// Get the numeric exit code.
    #[must_use]
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Get the machine-readable code prefix.
    #[must_use]
    pub fn code_prefix(self) -> &'static str {
        match self {
            Self::Success => "FC000",
            Self::GeneralError => "FC001",
            Self::BadCatalogue => "FC002",
        }
    }
}
