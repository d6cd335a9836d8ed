use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use jsty_emitter::{EmitOptions, OutputLanguage};

/// CLI arguments for the jsty binary.
#[derive(Parser, Debug)]
#[command(
    name = "jsty",
    version,
    about = "Regenerates source text from an ESTree syntax tree, optionally annotated as TypeScript"
)]
pub struct CliArgs {
    /// Path to an ESTree JSON file produced by the parser
    /// (esprima with `range: true, attachComment: true`).
    pub input: PathBuf,

    /// Output language for the generated source.
    #[arg(short = 'l', long, value_enum, ignore_case = true, default_value = "typescript")]
    pub language: Language,

    /// Do not insert `any`-family annotations for empty-array, empty-object,
    /// null, and undefined initializers.
    #[arg(long = "no-insert-any")]
    pub no_insert_any: bool,

    /// Verify the plain-mode rendering against this reference file before
    /// emitting; a mismatch aborts with a diff report.
    #[arg(long = "verify-against", value_name = "FILE")]
    pub verify_against: Option<PathBuf>,

    /// Write the generated source here instead of stdout.
    #[arg(short = 'o', long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Language {
    Javascript,
    Typescript,
}

impl CliArgs {
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            language: match self.language {
                Language::Javascript => OutputLanguage::JavaScript,
                Language::Typescript => OutputLanguage::TypeScript,
            },
            insert_any: !self.no_insert_any,
        }
    }
}
