//! Document - High-level document API

use crate::forms::{ControlKind, ControlState};
use crate::{DomResult, DomTree, NodeId, SelectorList};

/// HTML Document
#[derive(Debug)]
pub struct Document {
    /// The DOM tree
    pub tree: DomTree,
    /// Document URL
    url: String,
    /// Cached reference to <html> element
    html_element: NodeId,
    /// Cached reference to <head> element
    head_element: NodeId,
    /// Cached reference to <body> element
    body_element: NodeId,
}

impl Document {
    /// Create a new document with html/head/body
    pub fn new(url: &str) -> Self {
        let mut doc = Self::empty(url);
        let tree = &mut doc.tree;
        let html = tree.create_element("html");
        let head = tree.create_element("head");
        let body = tree.create_element("body");
        for (parent, child) in [(NodeId::ROOT, html), (html, head), (html, body)] {
            let linked = tree.append_child(parent, child);
            debug_assert!(linked.is_ok(), "linking fresh {child:?} under {parent:?}: {linked:?}");
        }
        doc.finalize();
        doc
    }

    /// Create an empty document (no structure)
    pub fn empty(url: &str) -> Self {
        Self {
            tree: DomTree::new(),
            url: url.to_string(),
            html_element: NodeId::NONE,
            head_element: NodeId::NONE,
            body_element: NodeId::NONE,
        }
    }

    /// Locate html/head/body and seed form control state from markup.
    ///
    /// Call once after the tree has been built.
    pub fn finalize(&mut self) {
        self.html_element = self.first_element_child(NodeId::ROOT, "html");
        self.head_element = self.first_element_child(self.html_element, "head");
        self.body_element = self.first_element_child(self.html_element, "body");

        let controls: Vec<(NodeId, ControlKind)> = self
            .tree
            .descendants(NodeId::ROOT)
            .filter_map(|id| {
                let kind = self.tree.get(id)?.as_element()?.control_kind()?;
                Some((id, kind))
            })
            .collect();

        for (id, kind) in controls {
            let default_value = match kind {
                ControlKind::Textarea => self.tree.text_content(id),
                _ => self.attr_or_empty(id, "value"),
            };
            let default_checked = kind.is_checkable() && self.has_attribute(id, "checked");
            if let Ok(elem) = self.tree.element_mut(id) {
                elem.control = Some(ControlState::new(default_value, default_checked));
            }
        }
        tracing::debug!("Document {} finalized ({} nodes)", self.url, self.tree.len());
    }

    fn first_element_child(&self, parent: NodeId, tag: &str) -> NodeId {
        self.tree
            .children(parent)
            .find(|(_, node)| node.as_element().is_some_and(|e| e.tag_name == tag))
            .map_or(NodeId::NONE, |(id, _)| id)
    }

    fn attr_or_empty(&self, id: NodeId, name: &str) -> String {
        self.get_attribute(id, name).unwrap_or_default().to_string()
    }

    /// Get document URL
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Text of the first <title> in <head>
    pub fn title(&self) -> String {
        if !self.head_element.is_valid() {
            return String::new();
        }
        let title = self.first_element_child(self.head_element, "title");
        if title.is_valid() {
            self.tree.text_content(title).trim().to_string()
        } else {
            String::new()
        }
    }

    /// Get <html> element
    pub fn document_element(&self) -> NodeId {
        self.html_element
    }

    /// Get <head> element
    pub fn head(&self) -> NodeId {
        self.head_element
    }

    /// Get <body> element
    pub fn body(&self) -> NodeId {
        self.body_element
    }

    /// Get element by ID (first in document order)
    pub fn get_element_by_id(&self, id: &str) -> Option<NodeId> {
        self.tree.descendants(NodeId::ROOT).find(|&node_id| {
            self.tree
                .get(node_id)
                .and_then(|n| n.as_element())
                .is_some_and(|e| e.id() == Some(id))
        })
    }

    /// All elements under `root` matching `selector`, in document order
    pub fn query_selector_all(&self, root: NodeId, selector: &str) -> DomResult<Vec<NodeId>> {
        let list = SelectorList::parse(selector)?;
        Ok(self
            .tree
            .descendants(root)
            .filter(|&id| self.tree.get(id).and_then(|n| n.as_element()).is_some_and(|e| list.matches(e)))
            .collect())
    }

    /// Check if `element` matches `selector`
    pub fn matches(&self, element: NodeId, selector: &str) -> DomResult<bool> {
        let list = SelectorList::parse(selector)?;
        Ok(list.matches(self.tree.element(element)?))
    }

    /// Nearest inclusive ancestor matching `selector`
    pub fn closest(&self, element: NodeId, selector: &str) -> DomResult<Option<NodeId>> {
        let list = SelectorList::parse(selector)?;
        Ok(std::iter::once(element)
            .chain(self.tree.ancestors(element))
            .find(|&id| self.tree.get(id).and_then(|n| n.as_element()).is_some_and(|e| list.matches(e))))
    }

    /// Attribute value of an element (None for non-elements too)
    pub fn get_attribute(&self, element: NodeId, name: &str) -> Option<&str> {
        self.tree.element(element).ok()?.get_attribute(name)
    }

    /// Check for an attribute on an element
    pub fn has_attribute(&self, element: NodeId, name: &str) -> bool {
        self.get_attribute(element, name).is_some()
    }

    /// Set an attribute
    pub fn set_attribute(&mut self, element: NodeId, name: &str, value: &str) -> DomResult<()> {
        self.tree.element_mut(element)?.set_attribute(name, value);
        Ok(())
    }

    /// Remove an attribute
    pub fn remove_attribute(&mut self, element: NodeId, name: &str) -> DomResult<()> {
        self.tree.element_mut(element)?.remove_attribute(name);
        Ok(())
    }

    /// Check for a class token
    pub fn has_class(&self, element: NodeId, class: &str) -> bool {
        self.tree.element(element).is_ok_and(|e| e.has_class(class))
    }

    /// `classList.add`
    pub fn add_class(&mut self, element: NodeId, class: &str) -> DomResult<()> {
        self.tree.element_mut(element)?.add_class(class);
        Ok(())
    }

    /// `classList.remove`
    pub fn remove_class(&mut self, element: NodeId, class: &str) -> DomResult<()> {
        self.tree.element_mut(element)?.remove_class(class);
        Ok(())
    }

    /// Text content of a node
    pub fn text_content(&self, node: NodeId) -> String {
        self.tree.text_content(node)
    }

    /// Replace the text content of a node
    pub fn set_text_content(&mut self, node: NodeId, text: &str) -> DomResult<()> {
        self.tree.set_text_content(node, text)
    }

    /// Access the DOM tree
    pub fn tree(&self) -> &DomTree {
        &self.tree
    }

    /// Access the DOM tree mutably
    pub fn tree_mut(&mut self) -> &mut DomTree {
        &mut self.tree
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new("about:blank")
    }
}
