use crate::error::{ParseError, RuntimeError};

/// The error returned when evaluating a single expression or statement.
///
/// Parsing and evaluation are interleaved, so a statement can fail for either
/// reason; this type keeps the two apart while letting `?` mix them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// The input is not a well-formed statement.
    Parse(ParseError),
    /// The input parsed, but a read or write against the context failed.
    Runtime(RuntimeError),
}

impl From<ParseError> for EvalError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for EvalError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "Parse error: {e}"),
            Self::Runtime(e) => write!(f, "Runtime error: {e}"),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

/// An [`EvalError`] raised by one line of a script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptError {
    /// 1-based line number of the failing statement.
    pub line:  usize,
    /// What went wrong on that line.
    pub error: EvalError,
}

impl std::fmt::Display for ScriptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error on line {}: {}", self.line, self.error)
    }
}

impl std::error::Error for ScriptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}
