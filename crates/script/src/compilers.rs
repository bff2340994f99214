//! Per-language compiler configuration.

use msxsl_traits::{ScriptCompiler, UnsupportedCompiler};
use msxsl_types::ScriptLanguage;
use std::sync::Arc;

/// One compiler per supported scripting language.
///
/// Languages without a configured compiler fall back to
/// [`UnsupportedCompiler`].
#[derive(Debug, Clone)]
pub struct ScriptCompilers {
    jscript: Arc<dyn ScriptCompiler>,
    visual_basic: Arc<dyn ScriptCompiler>,
    csharp: Arc<dyn ScriptCompiler>,
}

impl Default for ScriptCompilers {
    fn default() -> Self {
        let unsupported: Arc<dyn ScriptCompiler> = Arc::new(UnsupportedCompiler);
        Self {
            jscript: Arc::clone(&unsupported),
            visual_basic: Arc::clone(&unsupported),
            csharp: unsupported,
        }
    }
}

impl ScriptCompilers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses `compiler` for every language.
    pub fn uniform(compiler: Arc<dyn ScriptCompiler>) -> Self {
        Self {
            jscript: Arc::clone(&compiler),
            visual_basic: Arc::clone(&compiler),
            csharp: compiler,
        }
    }

    /// Replaces the compiler for `language`.
    pub fn with(mut self, language: ScriptLanguage, compiler: Arc<dyn ScriptCompiler>) -> Self {
        *self.slot_mut(language) = compiler;
        self
    }

    pub fn get(&self, language: ScriptLanguage) -> &dyn ScriptCompiler {
        match language {
            ScriptLanguage::JScript => self.jscript.as_ref(),
            ScriptLanguage::VisualBasic => self.visual_basic.as_ref(),
            ScriptLanguage::CSharp => self.csharp.as_ref(),
        }
    }

    fn slot_mut(&mut self, language: ScriptLanguage) -> &mut Arc<dyn ScriptCompiler> {
        match language {
            ScriptLanguage::JScript => &mut self.jscript,
            ScriptLanguage::VisualBasic => &mut self.visual_basic,
            ScriptLanguage::CSharp => &mut self.csharp,
        }
    }
}
