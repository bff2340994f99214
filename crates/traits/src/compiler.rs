//! ScriptCompiler trait for turning script source into extension objects.
//!
//! Compilation is injected per language so that script registration never
//! depends on a particular compiler toolchain being available.

use crate::extension::ExtensionObject;
use msxsl_types::ScriptLanguage;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for script compilation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("Compiling {0} script blocks is not supported")]
    NotSupported(ScriptLanguage),

    #[error("Failed to compile {language} script: {message}")]
    Failed {
        language: ScriptLanguage,
        message: String,
    },
}

impl CompileError {
    pub fn failed(language: ScriptLanguage, message: impl Into<String>) -> Self {
        Self::Failed {
            language,
            message: message.into(),
        }
    }
}

/// Everything a compiler gets to see of one script block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompilationUnit<'s> {
    pub language: ScriptLanguage,
    pub implements_prefix: &'s str,
    pub code: &'s str,
}

/// A compiler for one scripting language.
pub trait ScriptCompiler: Send + Sync + Debug {
    /// Compiles `unit` into an object whose methods are the script's
    /// top-level functions.
    fn compile(&self, unit: &CompilationUnit<'_>) -> Result<Arc<dyn ExtensionObject>, CompileError>;

    /// Returns a human-readable name for this compiler (for logging/debugging).
    fn name(&self) -> &'static str;
}

/// The compiler used for a language when none has been configured.
/// Every compilation fails with [`CompileError::NotSupported`].
#[derive(Debug, Default, Clone, Copy)]
pub struct UnsupportedCompiler;

impl ScriptCompiler for UnsupportedCompiler {
    fn compile(&self, unit: &CompilationUnit<'_>) -> Result<Arc<dyn ExtensionObject>, CompileError> {
        Err(CompileError::NotSupported(unit.language))
    }

    fn name(&self) -> &'static str {
        "UnsupportedCompiler"
    }
}
