//! DOM Node
//!
//! Nodes link to their relatives by `NodeId` instead of pointers.

use crate::{DOMTokenList, NamedNodeMap, NodeId};
use crate::forms::{ControlKind, ControlState};

/// DOM Node - Core structure
#[derive(Debug)]
pub struct Node {
    /// Parent node (NONE if root)
    pub parent: NodeId,
    /// First child
    pub first_child: NodeId,
    /// Last child (for O(1) append)
    pub last_child: NodeId,
    /// Previous sibling
    pub prev_sibling: NodeId,
    /// Next sibling
    pub next_sibling: NodeId,
    /// Node-specific data
    pub data: NodeData,
}

impl Node {
    fn detached(data: NodeData) -> Self {
        Self {
            parent: NodeId::NONE,
            first_child: NodeId::NONE,
            last_child: NodeId::NONE,
            prev_sibling: NodeId::NONE,
            next_sibling: NodeId::NONE,
            data,
        }
    }

    /// Create a new element node
    pub fn element(tag_name: &str) -> Self {
        Self::detached(NodeData::Element(ElementData::new(tag_name)))
    }

    /// Create a new text node
    pub fn text(content: &str) -> Self {
        Self::detached(NodeData::Text(content.to_string()))
    }

    /// Create a comment node
    pub fn comment(content: &str) -> Self {
        Self::detached(NodeData::Comment(content.to_string()))
    }

    /// Create a doctype node
    pub fn doctype(name: &str) -> Self {
        Self::detached(NodeData::Doctype { name: name.to_string() })
    }

    /// Create a document node
    pub fn document() -> Self {
        Self::detached(NodeData::Document)
    }

    /// Check if this is an element
    #[inline]
    pub fn is_element(&self) -> bool {
        matches!(self.data, NodeData::Element(_))
    }

    /// Check if this is text
    #[inline]
    pub fn is_text(&self) -> bool {
        matches!(self.data, NodeData::Text(_))
    }

    /// Get element data if this is an element
    #[inline]
    pub fn as_element(&self) -> Option<&ElementData> {
        match &self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get mutable element data
    #[inline]
    pub fn as_element_mut(&mut self) -> Option<&mut ElementData> {
        match &mut self.data {
            NodeData::Element(e) => Some(e),
            _ => None,
        }
    }

    /// Get text content if this is a text node
    #[inline]
    pub fn as_text(&self) -> Option<&str> {
        match &self.data {
            NodeData::Text(t) => Some(t),
            _ => None,
        }
    }
}

/// Node-specific data
#[derive(Debug)]
pub enum NodeData {
    /// Document root
    Document,
    /// DOCTYPE
    Doctype { name: String },
    /// Element
    Element(ElementData),
    /// Text content
    Text(String),
    /// Comment
    Comment(String),
}

/// Element-specific data
#[derive(Debug)]
pub struct ElementData {
    /// Lowercased local name
    pub tag_name: String,
    /// Attribute map, including `id` and `class`
    pub attrs: NamedNodeMap,
    /// Tokens of the `class` attribute
    class_list: DOMTokenList,
    /// Live state for form controls, seeded by `Document::finalize`
    pub control: Option<ControlState>,
}

impl ElementData {
    pub fn new(tag_name: &str) -> Self {
        Self {
            tag_name: tag_name.to_ascii_lowercase(),
            attrs: NamedNodeMap::new(),
            class_list: DOMTokenList::new(),
            control: None,
        }
    }

    /// Get an attribute value
    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attrs.get_attribute(name)
    }

    /// Check for an attribute
    pub fn has_attribute(&self, name: &str) -> bool {
        self.attrs.has_attribute(name)
    }

    /// Set an attribute, keeping the class list in sync
    pub fn set_attribute(&mut self, name: &str, value: &str) {
        if name == "class" {
            self.class_list.set_value(value);
        }
        self.attrs.set_attribute(name, value);
    }

    /// Remove an attribute, returning whether it existed
    pub fn remove_attribute(&mut self, name: &str) -> bool {
        if name == "class" {
            self.class_list.set_value("");
        }
        self.attrs.remove_named_item(name).is_some()
    }

    /// The `id` attribute
    pub fn id(&self) -> Option<&str> {
        self.get_attribute("id")
    }

    /// The `name` attribute
    pub fn name(&self) -> Option<&str> {
        self.get_attribute("name")
    }

    /// Read-only class tokens
    pub fn class_list(&self) -> &DOMTokenList {
        &self.class_list
    }

    /// Check for a class token
    pub fn has_class(&self, class: &str) -> bool {
        self.class_list.contains(class)
    }

    /// Add a class token (no-op when already present)
    pub fn add_class(&mut self, class: &str) {
        if !self.class_list.contains(class) {
            self.class_list.add(&[class]);
            self.sync_class_attr();
        }
    }

    /// Remove a class token (no-op when absent)
    pub fn remove_class(&mut self, class: &str) {
        if self.class_list.contains(class) {
            self.class_list.remove(&[class]);
            self.sync_class_attr();
        }
    }

    fn sync_class_attr(&mut self) {
        let value = self.class_list.value();
        self.attrs.set_attribute("class", &value);
    }

    /// Form control classification from tag and `type`
    pub fn control_kind(&self) -> Option<ControlKind> {
        ControlKind::classify(&self.tag_name, self.get_attribute("type"))
    }
}
