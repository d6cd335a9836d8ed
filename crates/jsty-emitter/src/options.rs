//! Generation options.
//!
//! The output language is an explicit value threaded through the emit
//! context for exactly one pass. It is never stored globally and never
//! changes mid-traversal, so there is nothing to restore afterward.

/// Output mode for one generation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputLanguage {
    /// Plain syntax, semantically identical to the input program.
    #[default]
    JavaScript,
    /// Plain syntax plus type annotations, inferred `const`/`let`
    /// keywords, and `define`/`require` rewritten to static imports.
    TypeScript,
}

impl OutputLanguage {
    pub fn as_str(self) -> &'static str {
        match self {
            OutputLanguage::JavaScript => "javascript",
            OutputLanguage::TypeScript => "typescript",
        }
    }
}

/// Options for one generation pass.
#[derive(Debug, Clone)]
pub struct EmitOptions {
    pub language: OutputLanguage,
    /// Insert explicit `any`-family annotations for the enumerated
    /// initializer shapes (empty array, empty object, null, undefined)
    /// and for uninitialized declarators. TypeScript mode only.
    pub insert_any: bool,
}

impl Default for EmitOptions {
    fn default() -> Self {
        EmitOptions {
            language: OutputLanguage::JavaScript,
            insert_any: true,
        }
    }
}

impl EmitOptions {
    pub fn javascript() -> Self {
        EmitOptions::default()
    }

    pub fn typescript() -> Self {
        EmitOptions {
            language: OutputLanguage::TypeScript,
            insert_any: true,
        }
    }
}
