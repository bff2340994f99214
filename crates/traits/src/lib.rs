pub mod compiler;
pub mod extension;

pub use compiler::{CompilationUnit, CompileError, ScriptCompiler, UnsupportedCompiler};
pub use extension::{ExtensionMethod, ExtensionObject, InvokeError, NativeExtension};
