// Stylesheet navigation over a roxmltree document
use crate::node::{DataSourceNode, NodeType, QName};
use roxmltree::{Attribute, Node};

const XML_NAMESPACE: &str = "http://www.w3.org/XML/1998/namespace";

/// A parsed stylesheet.
pub struct XmlDocument<'input> {
    doc: roxmltree::Document<'input>,
}

impl<'input> XmlDocument<'input> {
    pub fn parse(text: &'input str) -> Result<Self, roxmltree::Error> {
        Ok(Self {
            doc: roxmltree::Document::parse(text)?,
        })
    }

    /// The outermost element, e.g. `xsl:stylesheet`.
    pub fn document_element(&self) -> XmlNode<'_, 'input> {
        XmlNode::Element(self.doc.root_element())
    }
}

/// A tree node or an attribute. roxmltree keeps attributes as data on their
/// element, so an attribute is addressed by its owner and position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum XmlNode<'a, 'input> {
    Element(Node<'a, 'input>),
    Attribute { owner: Node<'a, 'input>, index: usize },
}

impl<'a, 'input> XmlNode<'a, 'input> {
    /// The element an attribute belongs to, or the node itself.
    fn anchor(&self) -> Node<'a, 'input> {
        match *self {
            XmlNode::Element(node) => node,
            XmlNode::Attribute { owner, .. } => owner,
        }
    }

    fn attribute(&self) -> Option<Attribute<'a, 'input>> {
        match *self {
            XmlNode::Element(_) => None,
            XmlNode::Attribute { owner, index } => owner.attributes().nth(index),
        }
    }

    /// The 1-based line number of the node (the owning element for attributes).
    pub fn line(&self) -> u32 {
        let node = self.anchor();
        node.document().text_pos_at(node.range().start).row
    }
}

impl<'a> DataSourceNode<'a> for XmlNode<'a, 'a> {
    fn node_type(&self) -> NodeType {
        let node = match self {
            XmlNode::Attribute { .. } => return NodeType::Attribute,
            XmlNode::Element(node) => node,
        };
        if node.is_root() {
            NodeType::Root
        } else if node.is_text() {
            NodeType::Text
        } else if node.is_comment() {
            NodeType::Comment
        } else if node.is_pi() {
            NodeType::ProcessingInstruction
        } else {
            NodeType::Element
        }
    }

    fn name(&self) -> Option<QName<'a>> {
        if let Some(attr) = self.attribute() {
            return Some(QName {
                prefix: (attr.namespace() == Some(XML_NAMESPACE)).then_some("xml"),
                local_part: attr.name(),
            });
        }
        let node = self.anchor();
        if node.is_element() {
            // roxmltree resolves prefixes away; only the expanded name survives.
            Some(QName {
                prefix: None,
                local_part: node.tag_name().name(),
            })
        } else {
            node.pi().map(|pi| QName {
                prefix: None,
                local_part: pi.target,
            })
        }
    }

    fn namespace_uri(&self) -> Option<&'a str> {
        match self.attribute() {
            Some(attr) => attr.namespace(),
            None if self.anchor().is_element() => self.anchor().tag_name().namespace(),
            None => None,
        }
    }

    fn string_value(&self) -> String {
        if let Some(attr) = self.attribute() {
            return attr.value().to_string();
        }
        let node = self.anchor();
        if node.is_element() || node.is_root() {
            node.descendants().filter_map(|n| n.is_text().then(|| n.text()).flatten()).collect()
        } else if let Some(pi) = node.pi() {
            pi.value.unwrap_or_default().to_string()
        } else {
            node.text().unwrap_or_default().to_string()
        }
    }

    fn attributes(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        match *self {
            XmlNode::Element(owner) => {
                let count = owner.attributes().len();
                Box::new((0..count).map(move |index| XmlNode::Attribute { owner, index }))
            }
            XmlNode::Attribute { .. } => Box::new(std::iter::empty()),
        }
    }

    fn children(&self) -> Box<dyn Iterator<Item = Self> + 'a> {
        match *self {
            XmlNode::Element(node) => Box::new(node.children().map(XmlNode::Element)),
            XmlNode::Attribute { .. } => Box::new(std::iter::empty()),
        }
    }

    fn parent(&self) -> Option<Self> {
        match *self {
            XmlNode::Element(node) => node.parent().map(XmlNode::Element),
            XmlNode::Attribute { owner, .. } => Some(XmlNode::Element(owner)),
        }
    }
}
