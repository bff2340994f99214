//! Finds `msxsl:script` blocks in a stylesheet document.

use crate::descriptor::ScriptDescriptor;
use crate::error::ScriptError;
use crate::registry::ScriptRegistry;
use msxsl_datasource::{DataSourceNode, XmlDocument};

/// The namespace of the `msxsl` extension elements.
pub const MSXSL_NAMESPACE: &str = "urn:schemas-microsoft-com:xslt";

/// True for an `msxsl:script` element, whatever prefix it is written with.
pub fn is_script_element<'a, N: DataSourceNode<'a>>(node: &N) -> bool {
    node.is_element_named(Some(MSXSL_NAMESPACE), "script")
}

/// Top-level script elements, i.e. children of the document element, in
/// document order.
fn top_level_scripts<'a, N: DataSourceNode<'a>>(document_element: N) -> impl Iterator<Item = N> {
    document_element.children().filter(|n| is_script_element(n))
}

/// Registers every top-level `msxsl:script` block of `source`.
///
/// Stops at the first block that fails; blocks registered before it stay
/// registered. Returns the number of blocks registered.
pub fn load_scripts(source: &str, registry: &mut ScriptRegistry) -> Result<usize, ScriptError> {
    let doc = XmlDocument::parse(source)?;
    let mut count = 0;
    for script in top_level_scripts(doc.document_element()) {
        log::debug!("Registering msxsl:script at line {}", script.line());
        registry.add_script(script)?;
        count += 1;
    }
    log::debug!("Registered {} msxsl:script block(s)", count);
    Ok(count)
}

/// Parses every top-level `msxsl:script` block of `source` without compiling.
pub fn describe_scripts(source: &str) -> Result<Vec<ScriptDescriptor>, ScriptError> {
    let doc = XmlDocument::parse(source)?;
    top_level_scripts(doc.document_element())
        .map(ScriptDescriptor::from_node)
        .collect()
}
