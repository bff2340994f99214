//! Registration and lookup of `msxsl:script` extension blocks.
//!
//! A stylesheet loader hands every `msxsl:script` element to a
//! [`ScriptRegistry`], which parses it into a [`ScriptDescriptor`], compiles
//! it with the compiler configured for its language, and binds the result to
//! the block's `implements-prefix`. The evaluation engine later fetches the
//! bound object with [`ScriptRegistry::get_extension_object`].

pub mod compilers;
pub mod descriptor;
pub mod error;
pub mod loader;
pub mod registry;

pub use compilers::ScriptCompilers;
pub use descriptor::ScriptDescriptor;
pub use error::ScriptError;
pub use loader::{MSXSL_NAMESPACE, describe_scripts, is_script_element, load_scripts};
pub use registry::{DuplicatePrefixPolicy, RegistryConfig, ScriptRegistry};

pub use msxsl_traits::{
    CompilationUnit, CompileError, ExtensionObject, InvokeError, NativeExtension, ScriptCompiler,
    UnsupportedCompiler,
};
pub use msxsl_types::{ScriptLanguage, ScriptValue};
