//! Source-text generation for the jsty transpiler.
//!
//! Turns a parsed program back into source text in one of two modes:
//! plain javascript, semantically identical to the input, or typescript,
//! a strict syntactic overlay that adds inferred `const`/`let` keywords,
//! `any`-family type annotations, and static imports rewritten from
//! legacy `define`/`require` module loads.
//!
//! Entry points:
//! - [`generate`]: one pass over a program with the given options
//! - [`generate_with_types`]: same, with a parameter-type lookup
//! - [`generate_checked`]: typescript output gated behind the
//!   correctness oracle: the plain rendering is verified against a
//!   trusted reference rendering first
//!
//! The generators never panic on valid trees; unsupported node kinds
//! surface as [`EmitError::UnsupportedNodeKind`] and abort the pass.

use jsty_ast::Node;
use tracing::debug;

pub mod comments;
pub mod context;
pub mod emitter;
pub mod error;
pub mod imports;
pub mod options;
pub mod oracle;
pub mod precedence;
pub mod scan;

pub use context::EmitContext;
pub use emitter::Emitter;
pub use error::{EmitError, TranspileError};
pub use options::{EmitOptions, OutputLanguage};
pub use oracle::Diff;
pub use scan::{NoTypeLookup, ParamTypeLookup};

/// Generate source text for a whole program.
pub fn generate(program: &Node, options: EmitOptions) -> Result<String, EmitError> {
    let ctx = EmitContext::new(program, options);
    Emitter::new(&ctx).emit(program)
}

/// Generate source text with a parameter-type lookup supplying candidate
/// types for annotated parameter lists.
pub fn generate_with_types(
    program: &Node,
    options: EmitOptions,
    types: &dyn ParamTypeLookup,
) -> Result<String, EmitError> {
    let ctx = EmitContext::with_type_lookup(program, options, types);
    Emitter::new(&ctx).emit(program)
}

/// Generate typescript output, trusting it only after the plain-mode
/// rendering of the same program matches `reference` (a rendering from
/// an independent generator) modulo whitespace.
pub fn generate_checked(
    program: &Node,
    options: EmitOptions,
    reference: &str,
) -> Result<String, TranspileError> {
    let plain = generate(program, EmitOptions::javascript())?;
    if let Some(diff) = oracle::find_difference(&oracle::normalize(reference), &oracle::normalize(&plain)) {
        debug!(position = diff.position, "reference mismatch");
        return Err(TranspileError::CorrectnessMismatch(diff));
    }
    debug!(language = options.language.as_str(), "reference rendering matched");
    Ok(generate(program, options)?)
}
