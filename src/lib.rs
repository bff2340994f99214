//! msxsl: `msxsl:script` extension blocks for XSLT 1.0 processors.
//!
//! The crates of this workspace are re-exported here:
//! - [`types`]: script languages and the values passed to extension methods.
//! - [`datasource`]: the read-only node model script elements are read from.
//! - [`traits`]: the compiler and extension-object capabilities.
//! - [`script`]: descriptors, the registry and the stylesheet loader.

pub use msxsl_datasource as datasource;
pub use msxsl_script as script;
pub use msxsl_traits as traits;
pub use msxsl_types as types;

pub use msxsl_script::{
    CompilationUnit, CompileError, DuplicatePrefixPolicy, ExtensionObject, InvokeError,
    MSXSL_NAMESPACE, NativeExtension, RegistryConfig, ScriptCompiler, ScriptCompilers,
    ScriptDescriptor, ScriptError, ScriptLanguage, ScriptRegistry, ScriptValue,
    UnsupportedCompiler, describe_scripts, is_script_element, load_scripts,
};

pub mod error;
pub mod report;

pub use error::CliError;
pub use report::{describe_file, format_descriptor};
