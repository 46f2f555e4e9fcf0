//! In-memory document parsed from HTML text.
//!
//! Nodes live in an arena shared by every handle (`Rc<RefCell<..>>`), so an
//! element handle behaves like a browser reference: clone it freely, mutate
//! through `&self`. Not `Send`, like the DOM it stands in for.

use std::cell::RefCell;
use std::rc::Rc;

use thiserror::Error;

use super::{Document, Element, Selector};
use crate::utils::html::{opening_tag_attrs, parse_attributes, unescape};

/// Errors raised while building a document from HTML.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("failed to parse HTML: {0}")]
    Parse(String),
}

#[derive(Debug)]
enum NodeKind {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        /// Form value typed by the user, shadows the `value` attribute.
        value: Option<String>,
        hidden: bool,
    },
    Text(String),
}

#[derive(Debug)]
struct Node {
    kind: NodeKind,
    children: Vec<usize>,
}

#[derive(Debug, Default)]
struct Tree {
    nodes: Vec<Node>,
    roots: Vec<usize>,
}

impl Tree {
    fn push(&mut self, kind: NodeKind) -> usize {
        self.nodes.push(Node {
            kind,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Pre-order walk of the subtrees rooted at `start`, collecting matches.
    fn collect_matching(&self, start: &[usize], selector: &Selector<'_>, out: &mut Vec<usize>) {
        for &id in start {
            let node = &self.nodes[id];
            if let NodeKind::Element { tag, attrs, .. } = &node.kind
                && selector.matches(tag, |name| attrs.iter().any(|(k, _)| k.eq_ignore_ascii_case(name)))
            {
                out.push(id);
            }
            self.collect_matching(&node.children, selector, out);
        }
    }

    fn collect_text(&self, id: usize, out: &mut String) {
        let node = &self.nodes[id];
        match &node.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element { .. } => {
                for &child in &node.children {
                    self.collect_text(child, out);
                }
            }
        }
    }
}

// ============================================================================
// MemoryDocument
// ============================================================================

/// A document tree held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    tree: Rc<RefCell<Tree>>,
}

impl MemoryDocument {
    /// Parse an HTML page or fragment.
    ///
    /// Text keeps its whitespace and has entities decoded, so
    /// `text_content` reads the way the browser reports it.
    pub fn parse(html: &str) -> Result<Self, DomError> {
        let dom = tl::parse(html, tl::ParserOptions::default())
            .map_err(|e| DomError::Parse(format!("{e:?}")))?;

        let parser = dom.parser();
        let mut tree = Tree::default();
        for handle in dom.children() {
            if let Some(id) = convert_node(&mut tree, *handle, parser) {
                tree.roots.push(id);
            }
        }

        Ok(Self {
            tree: Rc::new(RefCell::new(tree)),
        })
    }

    fn element(&self, id: usize) -> MemoryElement {
        MemoryElement {
            tree: Rc::clone(&self.tree),
            id,
        }
    }
}

/// Convert a tl node handle into an arena node.
fn convert_node(tree: &mut Tree, handle: tl::NodeHandle, parser: &tl::Parser<'_>) -> Option<usize> {
    let node = handle.get(parser)?;

    match node {
        tl::Node::Tag(tag) => {
            let name = tag.name().as_utf8_str().to_ascii_lowercase();
            let raw = tag.raw().as_utf8_str();
            let attrs = parse_attributes(opening_tag_attrs(&raw))
                .into_iter()
                .map(|(key, value)| (key.to_ascii_lowercase(), unescape(&value).into_owned()))
                .collect();

            let id = tree.push(NodeKind::Element {
                tag: name,
                attrs,
                value: None,
                hidden: false,
            });

            let children: Vec<usize> = tag
                .children()
                .top()
                .iter()
                .filter_map(|child| convert_node(tree, *child, parser))
                .collect();
            tree.nodes[id].children = children;

            Some(id)
        }
        tl::Node::Raw(bytes) => {
            let text = unescape(&bytes.as_utf8_str()).into_owned();
            Some(tree.push(NodeKind::Text(text)))
        }
        tl::Node::Comment(_) => None,
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn query(&self, selector: &Selector<'_>) -> Option<MemoryElement> {
        self.query_all(selector).into_iter().next()
    }

    fn query_all(&self, selector: &Selector<'_>) -> Vec<MemoryElement> {
        let mut ids = Vec::new();
        {
            let tree = self.tree.borrow();
            tree.collect_matching(&tree.roots, selector, &mut ids);
        }
        ids.into_iter().map(|id| self.element(id)).collect()
    }
}

// ============================================================================
// MemoryElement
// ============================================================================

/// Handle to an element of a [`MemoryDocument`].
#[derive(Debug, Clone)]
pub struct MemoryElement {
    tree: Rc<RefCell<Tree>>,
    id: usize,
}

impl MemoryElement {
    /// Lower-cased tag name.
    pub fn tag(&self) -> String {
        match &self.tree.borrow().nodes[self.id].kind {
            NodeKind::Element { tag, .. } => tag.clone(),
            NodeKind::Text(_) => String::new(),
        }
    }

    /// Simulate the user typing into a form field.
    pub fn set_value(&self, text: &str) {
        if let NodeKind::Element { value, .. } = &mut self.tree.borrow_mut().nodes[self.id].kind {
            *value = Some(text.to_string());
        }
    }

    /// Whether the element is currently shown.
    pub fn is_visible(&self) -> bool {
        match &self.tree.borrow().nodes[self.id].kind {
            NodeKind::Element { hidden, .. } => !hidden,
            NodeKind::Text(_) => true,
        }
    }

    fn with_attrs<R>(&self, f: impl FnOnce(&mut Vec<(String, String)>) -> R) -> Option<R> {
        match &mut self.tree.borrow_mut().nodes[self.id].kind {
            NodeKind::Element { attrs, .. } => Some(f(attrs)),
            NodeKind::Text(_) => None,
        }
    }
}

impl PartialEq for MemoryElement {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.tree, &other.tree) && self.id == other.id
    }
}

impl Element for MemoryElement {
    fn attribute(&self, name: &str) -> Option<String> {
        self.with_attrs(|attrs| {
            attrs
                .iter()
                .find(|(k, _)| k.eq_ignore_ascii_case(name))
                .map(|(_, v)| v.clone())
        })
        .flatten()
    }

    fn set_attribute(&self, name: &str, value: &str) {
        self.with_attrs(|attrs| {
            match attrs.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(name)) {
                Some((_, v)) => *v = value.to_string(),
                None => attrs.push((name.to_ascii_lowercase(), value.to_string())),
            }
        });
    }

    fn remove_attribute(&self, name: &str) {
        self.with_attrs(|attrs| attrs.retain(|(k, _)| !k.eq_ignore_ascii_case(name)));
    }

    fn text_content(&self) -> String {
        let mut out = String::new();
        self.tree.borrow().collect_text(self.id, &mut out);
        out
    }

    fn set_text_content(&self, text: &str) {
        let mut tree = self.tree.borrow_mut();
        let child = tree.push(NodeKind::Text(text.to_string()));
        tree.nodes[self.id].children = vec![child];
    }

    fn value(&self) -> String {
        let typed = match &self.tree.borrow().nodes[self.id].kind {
            NodeKind::Element { value, .. } => value.clone(),
            NodeKind::Text(_) => None,
        };
        if let Some(typed) = typed {
            return typed;
        }
        if self.tag() == "textarea" {
            return self.text_content();
        }
        self.attribute("value").unwrap_or_default()
    }

    fn set_visible(&self, visible: bool) {
        if let NodeKind::Element { hidden, .. } = &mut self.tree.borrow_mut().nodes[self.id].kind {
            *hidden = !visible;
        }
    }

    fn query_all(&self, selector: &Selector<'_>) -> Vec<Self> {
        let mut ids = Vec::new();
        {
            let tree = self.tree.borrow();
            tree.collect_matching(&tree.nodes[self.id].children, selector, &mut ids);
        }
        ids.into_iter()
            .map(|id| Self {
                tree: Rc::clone(&self.tree),
                id,
            })
            .collect()
    }
}
