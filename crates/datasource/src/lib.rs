pub mod node;
pub mod xml;

pub use node::{DataSourceNode, NodeType, QName};
pub use xml::{XmlDocument, XmlNode};

// Re-export test utilities for integration testing in downstream crates
pub use node::tests;
