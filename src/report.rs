//! The listing printed by the `msxsl` binary.

use crate::error::CliError;
use msxsl_script::{ScriptDescriptor, describe_scripts};
use std::fs;
use std::path::Path;

/// Reads a stylesheet file and parses its top-level script blocks.
pub fn describe_file(path: impl AsRef<Path>) -> Result<Vec<ScriptDescriptor>, CliError> {
    let source = fs::read_to_string(path.as_ref())?;
    Ok(describe_scripts(&source)?)
}

/// One line per script block: prefix, language and number of code lines.
pub fn format_descriptor(descriptor: &ScriptDescriptor) -> String {
    let lines = descriptor.code().lines().filter(|l| !l.trim().is_empty()).count();
    format!(
        "{:<16} {:<12} {} line(s)",
        descriptor.implements_prefix(),
        descriptor.language(),
        lines
    )
}
