//! ExtensionObject trait for the values bound to script namespaces.
//!
//! The evaluation engine resolves a call such as `user:twice(3)` by looking
//! up the object registered for `user` and invoking `twice` on it by name.

use msxsl_types::{ScriptLanguage, ScriptValue};
use std::collections::BTreeMap;
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Error type for extension method calls.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InvokeError {
    #[error("Unknown extension method '{0}'")]
    UnknownMethod(String),

    #[error("Extension method '{method}' expects {expected} argument(s), got {found}")]
    Arity {
        method: String,
        expected: usize,
        found: usize,
    },

    #[error("Extension method '{method}' failed: {message}")]
    Failed { method: String, message: String },
}

impl InvokeError {
    pub fn failed(method: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Failed {
            method: method.into(),
            message: message.into(),
        }
    }
}

/// A compiled script block, exposing its top-level functions by name.
///
/// Objects are shared across evaluations through `Arc`, so implementations
/// must be safe to call from several threads at once.
pub trait ExtensionObject: Send + Sync + Debug {
    /// The language the object was compiled from.
    fn language(&self) -> ScriptLanguage;

    /// True if `invoke(method, ..)` can succeed for some argument list.
    fn has_method(&self, method: &str) -> bool;

    /// Calls `method` with `args` and returns its result.
    fn invoke(&self, method: &str, args: &[ScriptValue]) -> Result<ScriptValue, InvokeError>;
}

/// The body of a [`NativeExtension`] method.
pub type ExtensionMethod =
    Arc<dyn Fn(&[ScriptValue]) -> Result<ScriptValue, InvokeError> + Send + Sync>;

#[derive(Clone)]
struct NativeMethod {
    arity: Option<usize>,
    body: ExtensionMethod,
}

/// An extension object backed by Rust closures.
///
/// Hosts use it to bind functions to a namespace without going through a
/// script compiler, and compilers can return it as their product.
#[derive(Clone)]
pub struct NativeExtension {
    language: ScriptLanguage,
    methods: BTreeMap<String, NativeMethod>,
}

impl Debug for NativeExtension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NativeExtension")
            .field("language", &self.language)
            .field("methods", &self.methods.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl NativeExtension {
    pub fn new(language: ScriptLanguage) -> Self {
        Self {
            language,
            methods: BTreeMap::new(),
        }
    }

    /// Adds a method taking exactly `arity` arguments.
    pub fn with_method<F>(mut self, name: impl Into<String>, arity: usize, body: F) -> Self
    where
        F: Fn(&[ScriptValue]) -> Result<ScriptValue, InvokeError> + Send + Sync + 'static,
    {
        self.methods.insert(
            name.into(),
            NativeMethod {
                arity: Some(arity),
                body: Arc::new(body),
            },
        );
        self
    }

    /// Adds a method accepting any number of arguments.
    pub fn with_variadic_method<F>(mut self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[ScriptValue]) -> Result<ScriptValue, InvokeError> + Send + Sync + 'static,
    {
        self.methods.insert(
            name.into(),
            NativeMethod {
                arity: None,
                body: Arc::new(body),
            },
        );
        self
    }

    /// The method names, in sorted order.
    pub fn method_names(&self) -> impl Iterator<Item = &str> {
        self.methods.keys().map(String::as_str)
    }
}

impl ExtensionObject for NativeExtension {
    fn language(&self) -> ScriptLanguage {
        self.language
    }

    fn has_method(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    fn invoke(&self, method: &str, args: &[ScriptValue]) -> Result<ScriptValue, InvokeError> {
        let entry = self
            .methods
            .get(method)
            .ok_or_else(|| InvokeError::UnknownMethod(method.to_string()))?;
        if let Some(expected) = entry.arity
            && expected != args.len()
        {
            return Err(InvokeError::Arity {
                method: method.to_string(),
                expected,
                found: args.len(),
            });
        }
        (entry.body)(args)
    }
}
