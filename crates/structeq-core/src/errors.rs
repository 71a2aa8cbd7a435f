use structeq_core_types::ValueKind;
use thiserror::Error;

/// Result type alias using StructEqError
pub type Result<T> = std::result::Result<T, StructEqError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling and testing. Comparison itself never fails; these kinds
/// classify failures of value construction and mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Construction
    InvalidRegexFlags,
    InvalidDate,

    // Mutation
    KindMismatch,

    // Integration
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidRegexFlags => "ERR_INVALID_REGEX_FLAGS",
            ExErrorKind::InvalidDate => "ERR_INVALID_DATE",
            ExErrorKind::KindMismatch => "ERR_KIND_MISMATCH",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }
}

/// Canonical structured error type
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Error taxonomy for value construction and mutation
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StructEqError {
    /// A regex flag outside `dgimsuvy`
    #[error("Invalid regular expression flags '{flags}': unknown flag '{flag}'")]
    InvalidRegexFlag { flags: String, flag: char },

    /// A regex flag given more than once
    #[error("Invalid regular expression flags '{flags}': duplicate flag '{flag}'")]
    DuplicateRegexFlag { flags: String, flag: char },

    /// Both `u` and `v` given
    #[error("Invalid regular expression flags '{flags}': 'u' and 'v' are mutually exclusive")]
    ConflictingRegexFlags { flags: String },

    /// Date text could not be parsed
    #[error("Invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    /// A mutator was applied to a value of the wrong kind
    #[error("Operation '{op}' expects {expected}, found {found}")]
    KindMismatch {
        op: String,
        expected: ValueKind,
        found: ValueKind,
    },

    /// JSON input could not be decoded
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl From<StructEqError> for ExError {
    fn from(err: StructEqError) -> Self {
        let message = err.to_string();
        match err {
            StructEqError::InvalidRegexFlag { .. }
            | StructEqError::DuplicateRegexFlag { .. }
            | StructEqError::ConflictingRegexFlags { .. } => {
                ExError::new(ExErrorKind::InvalidRegexFlags)
                    .with_op("regex")
                    .with_message(message)
            }

            StructEqError::InvalidDate { .. } => ExError::new(ExErrorKind::InvalidDate)
                .with_op("parse_date")
                .with_message(message),

            StructEqError::KindMismatch { op, .. } => ExError::new(ExErrorKind::KindMismatch)
                .with_op(op)
                .with_message(message),

            StructEqError::Serialization { .. } => ExError::new(ExErrorKind::Serialization)
                .with_op("from_json_str")
                .with_message(message),
        }
    }
}

impl From<&StructEqError> for ExError {
    fn from(err: &StructEqError) -> Self {
        err.clone().into()
    }
}

impl From<serde_json::Error> for StructEqError {
    fn from(err: serde_json::Error) -> Self {
        StructEqError::Serialization {
            message: err.to_string(),
        }
    }
}
