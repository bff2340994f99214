//! The prefix-to-extension-object table built while a stylesheet loads.

use crate::compilers::ScriptCompilers;
use crate::descriptor::ScriptDescriptor;
use crate::error::ScriptError;
use msxsl_datasource::DataSourceNode;
use msxsl_traits::ExtensionObject;
use std::collections::HashMap;
use std::sync::Arc;

/// What happens when a second script block claims a prefix that is already bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DuplicatePrefixPolicy {
    /// Fail with [`ScriptError::DuplicatePrefix`] and keep the first binding.
    #[default]
    Reject,
    /// Replace the earlier binding.
    Replace,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RegistryConfig {
    pub duplicate_prefixes: DuplicatePrefixPolicy,
}

/// Maps implements-prefixes to compiled extension objects.
///
/// The registry is filled through `&mut self` while the stylesheet is
/// loaded and only read afterwards, so a loaded registry can be shared
/// across evaluating threads behind an `Arc` without locking.
#[derive(Debug, Default)]
pub struct ScriptRegistry {
    scripts: HashMap<String, Arc<dyn ExtensionObject>>,
    compilers: ScriptCompilers,
    config: RegistryConfig,
}

impl ScriptRegistry {
    /// A registry whose compilers reject every language.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compilers(compilers: ScriptCompilers) -> Self {
        Self {
            compilers,
            ..Self::default()
        }
    }

    pub fn with_config(mut self, config: RegistryConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Parses, compiles and binds one script element.
    ///
    /// On error the registry is left exactly as it was.
    pub fn add_script<'a, N: DataSourceNode<'a>>(&mut self, node: N) -> Result<(), ScriptError> {
        let descriptor = ScriptDescriptor::from_node(node)?;
        self.check_duplicate(descriptor.implements_prefix())?;
        let object = descriptor.compile(&self.compilers)?;
        self.insert(descriptor.implements_prefix().to_string(), object);
        Ok(())
    }

    /// Binds an extension object provided by the host rather than compiled
    /// from a script block. Subject to the same duplicate policy.
    pub fn register_object(
        &mut self,
        prefix: impl Into<String>,
        object: Arc<dyn ExtensionObject>,
    ) -> Result<(), ScriptError> {
        let prefix = prefix.into();
        if prefix.is_empty() {
            return Err(ScriptError::EmptyImplementsPrefix);
        }
        self.check_duplicate(&prefix)?;
        self.insert(prefix, object);
        Ok(())
    }

    /// The object bound to `prefix`, if any.
    pub fn get_extension_object(&self, prefix: &str) -> Option<Arc<dyn ExtensionObject>> {
        self.scripts.get(prefix).cloned()
    }

    pub fn contains(&self, prefix: &str) -> bool {
        self.scripts.contains_key(prefix)
    }

    pub fn len(&self) -> usize {
        self.scripts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scripts.is_empty()
    }

    /// The bound prefixes, sorted.
    pub fn prefixes(&self) -> Vec<&str> {
        let mut prefixes: Vec<&str> = self.scripts.keys().map(String::as_str).collect();
        prefixes.sort_unstable();
        prefixes
    }

    fn check_duplicate(&self, prefix: &str) -> Result<(), ScriptError> {
        if self.config.duplicate_prefixes == DuplicatePrefixPolicy::Reject
            && self.scripts.contains_key(prefix)
        {
            return Err(ScriptError::DuplicatePrefix(prefix.to_string()));
        }
        Ok(())
    }

    fn insert(&mut self, prefix: String, object: Arc<dyn ExtensionObject>) {
        log::debug!("Binding {} extension object to prefix '{}'", object.language(), prefix);
        if self.scripts.insert(prefix.clone(), object).is_some() {
            log::warn!("Replaced existing extension object for prefix '{}'", prefix);
        }
    }
}
