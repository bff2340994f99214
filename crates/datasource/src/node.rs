//! Defines the core abstraction for a navigable, read-only stylesheet tree.

/// A qualified name, consisting of an optional prefix and a local part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct QName<'a> {
    pub prefix: Option<&'a str>,
    pub local_part: &'a str,
}

/// The type of a node in the tree, aligned with the XPath 1.0 data model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeType {
    Root,
    Element,
    Attribute,
    Text,
    Comment,
    ProcessingInstruction,
}

/// The contract for a node in a read-only, hierarchical document.
///
/// Script registration is written exclusively against this trait, so a
/// stylesheet loader can hand over whatever node type its own parser
/// produces.
///
/// `'a` is the lifetime of the underlying document (e.g., the XML string).
pub trait DataSourceNode<'a>: std::fmt::Debug + Clone + Copy + PartialEq {
    /// The type of the node (Element, Text, Attribute, etc.).
    fn node_type(&self) -> NodeType;

    /// The qualified name of the node. Returns `None` for node types that
    /// do not have names, such as text or root nodes. For a processing
    /// instruction, this is its target.
    fn name(&self) -> Option<QName<'a>>;

    /// The namespace URI of an element or attribute name, if it has one.
    fn namespace_uri(&self) -> Option<&'a str> {
        None
    }

    /// The string value of the node, as defined by the XPath 1.0 `string()` function.
    /// - For a text node, this is its content.
    /// - For an element, this is the concatenation of the string values of all
    ///   its descendant text nodes.
    /// - For an attribute, this is its value.
    fn string_value(&self) -> String;

    /// An iterator over the attribute nodes of this node, in document order.
    /// The iterator will be empty for non-element nodes.
    fn attributes(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// An iterator over the child nodes of this node.
    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a>;

    /// The parent node. Returns `None` for the root node.
    fn parent(&self) -> Option<Self>;

    /// True if this node is an element whose local name is `local` and whose
    /// namespace URI is `namespace`.
    fn is_element_named(&self, namespace: Option<&str>, local: &str) -> bool {
        self.node_type() == NodeType::Element
            && self.name().is_some_and(|q| q.local_part == local)
            && self.namespace_uri() == namespace
    }
}

// Test utilities - publicly available for integration testing in downstream crates
pub mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Debug, Clone)]
    struct MockNodeData<'a> {
        node_type: NodeType,
        name: Option<QName<'a>>,
        namespace: Option<&'a str>,
        value: String,
        children: Vec<usize>,
        attributes: Vec<usize>,
    }

    /// An in-memory tree built node by node. Node `0` is the root.
    #[derive(Debug)]
    pub struct MockTree<'a> {
        nodes: Vec<MockNodeData<'a>>,
        parent_map: HashMap<usize, usize>,
    }

    /// A node handle that holds a reference to its tree so it can navigate.
    #[derive(Debug, Clone, Copy)]
    pub struct MockNode<'a> {
        pub id: usize,
        pub tree: &'a MockTree<'a>,
    }

    impl<'a> PartialEq for MockNode<'a> {
        fn eq(&self, other: &Self) -> bool {
            self.id == other.id
        }
    }

    impl<'a> Default for MockTree<'a> {
        fn default() -> Self {
            Self::new()
        }
    }

    impl<'a> MockTree<'a> {
        pub fn new() -> Self {
            Self {
                nodes: vec![MockNodeData {
                    node_type: NodeType::Root,
                    name: None,
                    namespace: None,
                    value: String::new(),
                    children: vec![],
                    attributes: vec![],
                }],
                parent_map: HashMap::new(),
            }
        }

        fn push(&mut self, parent: usize, data: MockNodeData<'a>) -> usize {
            let id = self.nodes.len();
            self.nodes.push(data);
            self.parent_map.insert(id, parent);
            id
        }

        pub fn add_element(
            &mut self,
            parent: usize,
            prefix: Option<&'a str>,
            local_part: &'a str,
            namespace: Option<&'a str>,
        ) -> usize {
            let id = self.push(
                parent,
                MockNodeData {
                    node_type: NodeType::Element,
                    name: Some(QName { prefix, local_part }),
                    namespace,
                    value: String::new(),
                    children: vec![],
                    attributes: vec![],
                },
            );
            self.nodes[parent].children.push(id);
            id
        }

        pub fn add_attribute(&mut self, element: usize, local_part: &'a str, value: &str) -> usize {
            let id = self.push(
                element,
                MockNodeData {
                    node_type: NodeType::Attribute,
                    name: Some(QName { prefix: None, local_part }),
                    namespace: None,
                    value: value.to_string(),
                    children: vec![],
                    attributes: vec![],
                },
            );
            self.nodes[element].attributes.push(id);
            id
        }

        pub fn add_text(&mut self, parent: usize, text: &str) -> usize {
            let id = self.push(
                parent,
                MockNodeData {
                    node_type: NodeType::Text,
                    name: None,
                    namespace: None,
                    value: text.to_string(),
                    children: vec![],
                    attributes: vec![],
                },
            );
            self.nodes[parent].children.push(id);
            id
        }

        pub fn node(&'a self, id: usize) -> MockNode<'a> {
            MockNode { id, tree: self }
        }

        fn text_of(&self, id: usize) -> String {
            let data = &self.nodes[id];
            match data.node_type {
                NodeType::Root | NodeType::Element => {
                    data.children.iter().map(|&c| self.text_of(c)).collect()
                }
                NodeType::Text => data.value.clone(),
                _ => String::new(),
            }
        }
    }

    impl<'a> DataSourceNode<'a> for MockNode<'a> {
        fn node_type(&self) -> NodeType {
            self.tree.nodes[self.id].node_type
        }

        fn name(&self) -> Option<QName<'a>> {
            self.tree.nodes[self.id].name
        }

        fn namespace_uri(&self) -> Option<&'a str> {
            self.tree.nodes[self.id].namespace
        }

        fn string_value(&self) -> String {
            match self.node_type() {
                NodeType::Root | NodeType::Element => self.tree.text_of(self.id),
                _ => self.tree.nodes[self.id].value.clone(),
            }
        }

        fn attributes(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
            let tree = self.tree; // Re-borrow to help the lifetime checker
            let attribute_ids = tree.nodes[self.id].attributes.clone();
            Box::new(attribute_ids.into_iter().map(move |id| MockNode { id, tree }))
        }

        fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
            let tree = self.tree;
            let children_ids = tree.nodes[self.id].children.clone();
            Box::new(children_ids.into_iter().map(move |id| MockNode { id, tree }))
        }

        fn parent(&self) -> Option<Self> {
            self.tree.parent_map.get(&self.id).map(|&pid| MockNode {
                id: pid,
                tree: self.tree,
            })
        }
    }

    pub const XSL_NS: &str = "http://www.w3.org/1999/XSL/Transform";
    pub const MSXSL_NS: &str = "urn:schemas-microsoft-com:xslt";

    /// Creates a small stylesheet tree for testing:
    /// <xsl:stylesheet>                                   <!-- id 1 -->
    ///   <msxsl:script language="VB" implements-prefix="util">  <!-- id 2, attrs 3 & 4 -->
    ///     Function F() ... End Function                  <!-- id 5 -->
    ///   </msxsl:script>
    ///   <xsl:template/>                                  <!-- id 6 -->
    /// </xsl:stylesheet>
    pub fn create_script_tree<'a>() -> MockTree<'a> {
        let mut tree = MockTree::new();
        let stylesheet = tree.add_element(0, Some("xsl"), "stylesheet", Some(XSL_NS));
        let script = tree.add_element(stylesheet, Some("msxsl"), "script", Some(MSXSL_NS));
        tree.add_attribute(script, "language", "VB");
        tree.add_attribute(script, "implements-prefix", "util");
        tree.add_text(script, "Function F() ... End Function");
        tree.add_element(stylesheet, Some("xsl"), "template", Some(XSL_NS));
        tree
    }

}
