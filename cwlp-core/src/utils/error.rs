/// An error type which covers all failure kinds of instance reading and model formulation.
///
/// Solver outcomes such as infeasibility are not errors: they are terminal statuses
/// carried inside a solution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// Malformed instance or configuration text with an optional one-based line location.
    Parse {
        /// A one-based line of the offending token when known.
        line: Option<usize>,
        /// A human readable reason.
        message: String,
    },
    /// An array size inconsistent with the declared warehouse or customer counts.
    DimensionMismatch(String),
    /// A constraint toggle name which is missing from the catalog or requested twice.
    UnknownConstraint(String),
    /// A parameter or toggle combination which cannot be expressed.
    InvalidConfiguration(String),
    /// An underlying input failure.
    Io(String),
}

/// A type alias for result type with `ModelError`.
pub type ModelResult<T> = Result<T, ModelError>;

impl ModelError {
    /// Creates a parse error bound to a one-based line.
    pub fn parse_at(line: usize, message: impl Into<String>) -> Self {
        Self::Parse { line: Some(line), message: message.into() }
    }

    /// Creates a parse error without location information.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse { line: None, message: message.into() }
    }
}

impl std::fmt::Display for ModelError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse { line: Some(line), message } => write!(f, "cannot parse input at line {line}: {message}"),
            Self::Parse { line: None, message } => write!(f, "cannot parse input: {message}"),
            Self::DimensionMismatch(message) => write!(f, "dimension mismatch: {message}"),
            Self::UnknownConstraint(message) => write!(f, "unknown constraint: {message}"),
            Self::InvalidConfiguration(message) => write!(f, "invalid configuration: {message}"),
            Self::Io(message) => write!(f, "io error: {message}"),
        }
    }
}

impl std::error::Error for ModelError {}

impl From<std::io::Error> for ModelError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}
