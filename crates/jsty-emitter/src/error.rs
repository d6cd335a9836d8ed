//! Generator error taxonomy.
//!
//! Every generator failure is fatal for the whole pass: the emitted
//! syntax is an all-or-nothing contract and there is no per-node
//! recovery. A correctness mismatch is different: it is a diagnostic
//! result the caller checks before trusting annotated output.

use std::fmt;

use crate::oracle::Diff;

/// Fatal generation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmitError {
    /// No generator is registered for this node kind in either language
    /// table. Carries the ESTree kind name.
    UnsupportedNodeKind(String),
    /// A recognized shape the generator intentionally refuses to emit
    /// (generator functions, named function expressions, labeled jumps).
    UnsupportedConstruct(&'static str),
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::UnsupportedNodeKind(kind) => write!(f, "{kind} not implemented!"),
            EmitError::UnsupportedConstruct(what) => write!(f, "{what} not supported"),
        }
    }
}

impl std::error::Error for EmitError {}

/// Failure modes of the checked pipeline ([`crate::generate_checked`]).
#[derive(Debug, Clone, PartialEq)]
pub enum TranspileError {
    Emit(EmitError),
    /// The plain-mode output did not match the trusted reference
    /// rendering. Annotated output must not be surfaced.
    CorrectnessMismatch(Diff),
}

impl fmt::Display for TranspileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TranspileError::Emit(err) => err.fmt(f),
            TranspileError::CorrectnessMismatch(diff) => write!(
                f,
                "generated code differs from the reference rendering at offset {}: expected {:?}, found {:?}",
                diff.position, diff.expected, diff.found
            ),
        }
    }
}

impl std::error::Error for TranspileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranspileError::Emit(err) => Some(err),
            TranspileError::CorrectnessMismatch(_) => None,
        }
    }
}

impl From<EmitError> for TranspileError {
    fn from(err: EmitError) -> Self {
        TranspileError::Emit(err)
    }
}
