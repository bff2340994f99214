pub mod fixtures;

use msxsl::{
    CompilationUnit, CompileError, ExtensionObject, InvokeError, NativeExtension, ScriptCompiler,
    ScriptValue,
};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A stand-in compiler that understands one toy convention: each non-blank
/// line of the script is `name = value`, producing a zero-argument method
/// `name` that returns `value`. A line without `=` is a compile error.
#[derive(Debug, Default)]
pub struct ConstantCompiler;

impl ScriptCompiler for ConstantCompiler {
    fn compile(&self, unit: &CompilationUnit<'_>) -> Result<Arc<dyn ExtensionObject>, CompileError> {
        let mut ext = NativeExtension::new(unit.language);
        for line in unit.code.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let (name, value) = line
                .split_once('=')
                .ok_or_else(|| CompileError::failed(unit.language, format!("expected 'name = value', got '{}'", line)))?;
            let value = value.trim().to_string();
            ext = ext.with_method(name.trim(), 0, move |_| Ok(ScriptValue::String(value.clone())));
        }
        Ok(Arc::new(ext))
    }

    fn name(&self) -> &'static str {
        "ConstantCompiler"
    }
}

/// Invokes `method` on the object bound to `prefix` and renders the result as a string.
pub fn call(
    registry: &msxsl::ScriptRegistry,
    prefix: &str,
    method: &str,
) -> Result<String, InvokeError> {
    let object = registry
        .get_extension_object(prefix)
        .ok_or_else(|| InvokeError::UnknownMethod(format!("{}:{}", prefix, method)))?;
    object.invoke(method, &[]).map(|v| v.to_string())
}
