//! The jsty pipeline: read an ESTree JSON file, generate source text,
//! write it out.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use colored::Colorize;
use jsty_ast::Node;
use jsty_emitter::{Diff, TranspileError, generate, generate_checked};
use tracing::info;

use crate::args::CliArgs;

pub fn run(args: &CliArgs) -> Result<()> {
    let program = load_program(&args.input)?;
    let options = args.emit_options();
    info!(
        input = %args.input.display(),
        language = ?args.language,
        "generating source"
    );

    let output = match &args.verify_against {
        Some(reference_path) => {
            let reference = fs::read_to_string(reference_path).with_context(|| {
                format!("failed to read reference file {}", reference_path.display())
            })?;
            match generate_checked(&program, options, &reference) {
                Ok(output) => output,
                Err(TranspileError::CorrectnessMismatch(diff)) => {
                    report_mismatch(&diff);
                    bail!("output does not match the reference rendering");
                }
                Err(TranspileError::Emit(err)) => return Err(err.into()),
            }
        }
        None => generate(&program, options)?,
    };

    match &args.out {
        Some(out_path) => {
            fs::write(out_path, &output)
                .with_context(|| format!("failed to write {}", out_path.display()))?;
            info!(path = %out_path.display(), bytes = output.len(), "wrote output");
        }
        None => println!("{output}"),
    }
    Ok(())
}

fn load_program(path: &Path) -> Result<Node> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let program: Node = serde_json::from_str(&json)
        .with_context(|| format!("{} is not a valid ESTree JSON tree", path.display()))?;
    if !matches!(program, Node::Program(_)) {
        bail!("{} does not contain a Program root node", path.display());
    }
    Ok(program)
}

#[allow(clippy::print_stderr)]
fn report_mismatch(diff: &Diff) {
    eprintln!(
        "{} generated code diverges from the reference at offset {}",
        "error:".red().bold(),
        diff.position
    );
    eprintln!("  {} {}", "expected:".green(), diff.expected);
    eprintln!("  {} {}", "found:   ".red(), diff.found);
}
