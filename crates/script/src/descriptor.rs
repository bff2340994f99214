//! Parsing of a single `msxsl:script` element.

use crate::compilers::ScriptCompilers;
use crate::error::ScriptError;
use msxsl_datasource::{DataSourceNode, NodeType};
use msxsl_traits::{CompilationUnit, ExtensionObject};
use msxsl_types::ScriptLanguage;
use std::sync::Arc;

/// A validated script block: its language, the prefix it implements, and
/// its source code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptDescriptor {
    language: ScriptLanguage,
    implements_prefix: String,
    code: String,
}

impl ScriptDescriptor {
    /// Reads a descriptor from a script element.
    ///
    /// Attributes are matched by local name. `language` is optional and
    /// defaults to JScript; `implements-prefix` is required and must not be
    /// empty. Any other attribute is ignored. The code is the element's
    /// string value, taken verbatim.
    pub fn from_node<'a, N: DataSourceNode<'a>>(node: N) -> Result<Self, ScriptError> {
        if node.node_type() != NodeType::Element {
            return Err(ScriptError::NotAnElement);
        }

        let code = node.string_value();
        let mut language = ScriptLanguage::default();
        let mut implements_prefix = None;

        for attr in node.attributes() {
            let Some(name) = attr.name() else { continue };
            match name.local_part {
                "language" => language = attr.string_value().parse()?,
                "implements-prefix" => implements_prefix = Some(attr.string_value()),
                _ => {}
            }
        }

        let implements_prefix = implements_prefix.ok_or(ScriptError::MissingImplementsPrefix)?;
        if implements_prefix.is_empty() {
            return Err(ScriptError::EmptyImplementsPrefix);
        }

        Ok(Self {
            language,
            implements_prefix,
            code,
        })
    }

    pub fn language(&self) -> ScriptLanguage {
        self.language
    }

    pub fn implements_prefix(&self) -> &str {
        &self.implements_prefix
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    /// Compiles the code with the compiler configured for its language.
    pub fn compile(&self, compilers: &ScriptCompilers) -> Result<Arc<dyn ExtensionObject>, ScriptError> {
        let unit = CompilationUnit {
            language: self.language,
            implements_prefix: &self.implements_prefix,
            code: &self.code,
        };
        let compiler = compilers.get(self.language);
        log::debug!(
            "Compiling {} script for prefix '{}' with {}",
            self.language,
            self.implements_prefix,
            compiler.name()
        );
        Ok(compiler.compile(&unit)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use msxsl_datasource::tests::{MockTree, create_script_tree};
    use msxsl_datasource::{XmlDocument, XmlNode};
    use msxsl_traits::CompileError;

    fn script_element<'a>(doc: &'a XmlDocument<'a>) -> XmlNode<'a, 'a> {
        doc.document_element()
            .children()
            .find(|n| n.node_type() == NodeType::Element)
            .unwrap()
    }

    fn parse(attrs: &str, body: &str) -> Result<ScriptDescriptor, ScriptError> {
        let xml = format!(
            r#"<xsl:stylesheet xmlns:xsl="http://www.w3.org/1999/XSL/Transform"
                xmlns:msxsl="urn:schemas-microsoft-com:xslt"><msxsl:script {attrs}>{body}</msxsl:script></xsl:stylesheet>"#
        );
        let doc = XmlDocument::parse(&xml).unwrap();
        ScriptDescriptor::from_node(script_element(&doc))
    }

    #[test]
    fn test_language_tokens_map_case_insensitively() {
        let cases = [
            ("JScript", ScriptLanguage::JScript),
            ("JAVASCRIPT", ScriptLanguage::JScript),
            ("jscript", ScriptLanguage::JScript),
            ("vb", ScriptLanguage::VisualBasic),
            ("VisualBasic", ScriptLanguage::VisualBasic),
            ("c#", ScriptLanguage::CSharp),
            ("CSHARP", ScriptLanguage::CSharp),
        ];
        for (token, expected) in cases {
            let d = parse(&format!(r#"language="{token}" implements-prefix="user""#), "").unwrap();
            assert_eq!(d.language(), expected, "token {token}");
        }
    }

    #[test]
    fn test_missing_language_defaults_to_jscript() {
        let d = parse(r#"implements-prefix="user""#, "function f() {}").unwrap();
        assert_eq!(d.language(), ScriptLanguage::JScript);
        assert_eq!(d.implements_prefix(), "user");
        assert_eq!(d.code(), "function f() {}");
    }

    #[test]
    fn test_invalid_language() {
        let err = parse(r#"language="python" implements-prefix="user""#, "").unwrap_err();
        assert!(matches!(err, ScriptError::InvalidLanguage(ref l) if l == "python"));
        assert!(err.to_string().contains("python"));
    }

    #[test]
    fn test_invalid_language_reported_before_missing_prefix() {
        let err = parse(r#"language="perl""#, "").unwrap_err();
        assert!(matches!(err, ScriptError::InvalidLanguage(_)));
    }

    #[test]
    fn test_missing_implements_prefix() {
        for attrs in ["", r#"language="vb""#, r#"language="c#" extra="1""#] {
            let err = parse(attrs, "Function F() End Function").unwrap_err();
            assert!(matches!(err, ScriptError::MissingImplementsPrefix), "attrs {attrs}");
        }
    }

    #[test]
    fn test_empty_implements_prefix() {
        let err = parse(r#"implements-prefix="""#, "").unwrap_err();
        assert!(matches!(err, ScriptError::EmptyImplementsPrefix));
    }

    #[test]
    fn test_unknown_attributes_are_ignored() {
        let d = parse(r#"implements-prefix="user" version="2.0" language="C#" src="x.cs""#, "").unwrap();
        assert_eq!(d.language(), ScriptLanguage::CSharp);
    }

    #[test]
    fn test_attributes_match_by_local_name() {
        let d = parse(
            r#"xmlns:x="urn:other" x:language="vb" x:implements-prefix="ns""#,
            "",
        )
        .unwrap();
        assert_eq!(d.language(), ScriptLanguage::VisualBasic);
        assert_eq!(d.implements_prefix(), "ns");
    }

    #[test]
    fn test_implements_prefix_is_kept_verbatim() {
        let d = parse(r#"implements-prefix=" User ""#, "").unwrap();
        assert_eq!(d.implements_prefix(), " User ");
    }

    #[test]
    fn test_code_is_concatenated_text_including_cdata() {
        let d = parse(
            r#"language="C#" implements-prefix="user""#,
            "\n  int a = 1;<![CDATA[ if (a < 2) { } ]]>&amp;\n",
        )
        .unwrap();
        assert_eq!(d.code(), "\n  int a = 1; if (a < 2) { } &\n");
    }

    #[test]
    fn test_from_mock_tree() {
        let tree = create_script_tree();
        let d = ScriptDescriptor::from_node(tree.node(2)).unwrap();
        assert_eq!(d.language(), ScriptLanguage::VisualBasic);
        assert_eq!(d.implements_prefix(), "util");
        assert_eq!(d.code(), "Function F() ... End Function");
    }

    #[test]
    fn test_rejects_non_element_nodes() {
        let tree = create_script_tree();
        // Node 3 is the `language` attribute, node 0 the root.
        assert!(matches!(ScriptDescriptor::from_node(tree.node(3)), Err(ScriptError::NotAnElement)));
        assert!(matches!(ScriptDescriptor::from_node(tree.node(0)), Err(ScriptError::NotAnElement)));
    }

    #[test]
    fn test_attribute_order_does_not_matter() {
        let mut tree = MockTree::new();
        let script = tree.add_element(0, Some("msxsl"), "script", None);
        tree.add_attribute(script, "implements-prefix", "p");
        tree.add_attribute(script, "language", "csharp");
        let d = ScriptDescriptor::from_node(tree.node(script)).unwrap();
        assert_eq!(d.language(), ScriptLanguage::CSharp);
        assert_eq!(d.implements_prefix(), "p");
        assert_eq!(d.code(), "");
    }

    #[test]
    fn test_compile_with_default_compilers_is_not_supported() {
        let d = parse(r#"language="VB" implements-prefix="util""#, "Function F() ... End Function").unwrap();
        let err = d.compile(&ScriptCompilers::new()).unwrap_err();
        assert!(matches!(
            err,
            ScriptError::Compile(CompileError::NotSupported(ScriptLanguage::VisualBasic))
        ));
    }
}
