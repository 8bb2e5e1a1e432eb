//! In-memory document
//!
//! An arena of elements with attributes, a listener registry and focus
//! tracking. Implements [`Host`] so widgets can run without a browser.
//!
//! Selectors are matched with `scraper` against a snapshot of the arena.
//! Every element in the snapshot carries its arena index, so matches map
//! straight back to [`ElementId`]s. The tree must use valid HTML nesting;
//! the snapshot is re-parsed as HTML.

use std::collections::HashMap;

use scraper::{ElementRef, Html, Selector};

use crate::element::ElementId;
use crate::error::DomError;
use crate::event::{EventKind, ListenerId};
use crate::host::Host;
use crate::Result;

/// Attribute tagging snapshot elements with their arena index
const NODE_ATTR: &str = "data-aria-node";

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

#[derive(Debug, Clone)]
struct Node {
    tag_name: String,
    parent: Option<ElementId>,
    children: Vec<ElementId>,
    attrs: HashMap<String, String>,
}

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    /// The `<html>` element
    root: ElementId,
    body: ElementId,
    active_element: Option<ElementId>,
    /// Attached listeners per (element, kind), in attachment order
    listeners: HashMap<(ElementId, EventKind), Vec<ListenerId>>,
    next_listener: u64,
}

impl MemoryDocument {
    fn empty() -> Self {
        Self {
            nodes: Vec::new(),
            root: ElementId(0),
            body: ElementId(0),
            active_element: None,
            listeners: HashMap::new(),
            next_listener: 0,
        }
    }

    /// An empty document with `<html>` and `<body>`
    pub fn new() -> Self {
        let mut doc = Self::empty();
        doc.root = doc.create_element("html");
        doc.body = doc.append(doc.root, "body", &[]);
        doc
    }

    /// Build a document from HTML markup
    pub fn parse(markup: &str) -> Self {
        let html = Html::parse_document(markup);
        let mut doc = Self::empty();
        doc.root = doc.import(None, html.root_element());
        doc.body = doc
            .children(doc.root)
            .iter()
            .copied()
            .find(|child| doc.nodes[child.0].tag_name == "body")
            .unwrap_or(doc.root);
        doc
    }

    fn import(&mut self, parent: Option<ElementId>, element: ElementRef<'_>) -> ElementId {
        let id = self.create_element(element.value().name());
        for (name, value) in element.value().attrs() {
            self.nodes[id.0]
                .attrs
                .insert(name.to_ascii_lowercase(), value.to_string());
        }
        if let Some(parent) = parent {
            self.nodes[id.0].parent = Some(parent);
            self.nodes[parent.0].children.push(id);
        }
        for child in element.children().filter_map(ElementRef::wrap) {
            self.import(Some(id), child);
        }
        id
    }

    pub fn body(&self) -> ElementId {
        self.body
    }

    fn create_element(&mut self, tag_name: &str) -> ElementId {
        let id = ElementId(self.nodes.len());
        self.nodes.push(Node {
            tag_name: tag_name.to_ascii_lowercase(),
            parent: None,
            children: Vec::new(),
            attrs: HashMap::new(),
        });
        id
    }

    /// Create `<tag>` with `attrs` as the last child of `parent`.
    ///
    /// Panics if `parent` was not issued by this document.
    pub fn append(
        &mut self,
        parent: ElementId,
        tag_name: &str,
        attrs: &[(&str, &str)],
    ) -> ElementId {
        assert!(parent.0 < self.nodes.len(), "unknown parent {}", parent);

        let id = self.create_element(tag_name);
        for (name, value) in attrs {
            self.nodes[id.0]
                .attrs
                .insert(name.to_ascii_lowercase(), value.to_string());
        }
        self.nodes[id.0].parent = Some(parent);
        self.nodes[parent.0].children.push(id);
        id
    }

    pub fn tag_name(&self, element: ElementId) -> Option<&str> {
        self.nodes.get(element.0).map(|n| n.tag_name.as_str())
    }

    pub fn parent(&self, element: ElementId) -> Option<ElementId> {
        self.nodes.get(element.0).and_then(|n| n.parent)
    }

    pub fn children(&self, element: ElementId) -> &[ElementId] {
        self.nodes
            .get(element.0)
            .map(|n| n.children.as_slice())
            .unwrap_or(&[])
    }

    fn node(&self, element: ElementId) -> Result<&Node> {
        self.nodes
            .get(element.0)
            .ok_or(DomError::UnknownElement(element))
    }

    fn node_mut(&mut self, element: ElementId) -> Result<&mut Node> {
        self.nodes
            .get_mut(element.0)
            .ok_or(DomError::UnknownElement(element))
    }

    /// Descendants of `root` in document (pre-)order, excluding `root`
    fn descendants(&self, root: ElementId) -> Vec<ElementId> {
        let mut out = Vec::new();
        let mut stack: Vec<ElementId> = self.children(root).iter().rev().copied().collect();
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev().copied());
        }
        out
    }

    fn connected_elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        std::iter::once(self.root).chain(self.descendants(self.root))
    }

    /// Parse the connected tree into a `scraper` document
    fn snapshot(&self) -> Html {
        let mut markup = String::from("<!DOCTYPE html>");
        self.write_markup(self.root, &mut markup);
        Html::parse_document(&markup)
    }

    fn write_markup(&self, element: ElementId, out: &mut String) {
        let node = &self.nodes[element.0];

        out.push('<');
        out.push_str(&node.tag_name);
        out.push_str(&format!(" {}=\"{}\"", NODE_ATTR, element.0));
        for (name, value) in &node.attrs {
            out.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
        }
        out.push('>');

        if VOID_ELEMENTS.contains(&node.tag_name.as_str()) {
            return;
        }
        for child in &node.children {
            self.write_markup(*child, out);
        }
        out.push_str(&format!("</{}>", node.tag_name));
    }
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

fn parse_selector(selector: &str) -> Result<Selector> {
    Selector::parse(selector).map_err(|_| DomError::InvalidSelector(selector.to_string()))
}

fn arena_id(element: &ElementRef<'_>) -> Option<ElementId> {
    element
        .value()
        .attr(NODE_ATTR)
        .and_then(|raw| raw.parse().ok())
        .map(ElementId)
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Host for MemoryDocument {
    fn query_selector(&self, selector: &str) -> Result<Option<ElementId>> {
        let selector = parse_selector(selector)?;
        let html = self.snapshot();
        Ok(html.select(&selector).find_map(|el| arena_id(&el)))
    }

    fn query_selector_all(&self, root: ElementId, selector: &str) -> Result<Vec<ElementId>> {
        self.node(root)?;
        let selector = parse_selector(selector)?;
        let html = self.snapshot();

        let scope = html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .find(|el| arena_id(el) == Some(root));
        let Some(scope) = scope else {
            return Ok(Vec::new());
        };

        Ok(scope
            .select(&selector)
            .filter_map(|el| arena_id(&el))
            .filter(|id| *id != root)
            .collect())
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.connected_elements()
            .find(|el| self.nodes[el.0].attrs.get("id").map(String::as_str) == Some(id))
    }

    fn get_attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.nodes
            .get(element.0)
            .and_then(|n| n.attrs.get(&name.to_ascii_lowercase()))
            .cloned()
    }

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) -> Result<()> {
        self.node_mut(element)?
            .attrs
            .insert(name.to_ascii_lowercase(), value.to_string());
        Ok(())
    }

    fn remove_attribute(&mut self, element: ElementId, name: &str) -> Result<()> {
        self.node_mut(element)?
            .attrs
            .remove(&name.to_ascii_lowercase());
        Ok(())
    }

    fn is_natively_focusable(&self, element: ElementId) -> bool {
        let Ok(node) = self.node(element) else {
            return false;
        };
        let has = |name: &str| node.attrs.contains_key(name);

        match node.tag_name.as_str() {
            "a" | "area" => has("href"),
            "button" | "input" | "select" | "textarea" => !has("disabled"),
            "iframe" => true,
            _ => node
                .attrs
                .get("contenteditable")
                .is_some_and(|v| v != "false"),
        }
    }

    fn focus(&mut self, element: ElementId) -> Result<()> {
        self.node(element)?;
        if self.is_focusable(element) {
            self.active_element = Some(element);
        } else {
            tracing::trace!(element = %element, "Ignoring focus on non-focusable element");
        }
        Ok(())
    }

    fn active_element(&self) -> Option<ElementId> {
        self.active_element
    }

    fn bind(&mut self, element: ElementId, kind: EventKind) -> Result<ListenerId> {
        self.node(element)?;

        let listener = ListenerId::new(kind, self.next_listener);
        self.next_listener += 1;
        self.listeners
            .entry((element, kind))
            .or_default()
            .push(listener);

        tracing::trace!(element = %element, kind = %kind, "Listener attached");

        Ok(listener)
    }

    fn unbind(&mut self, element: ElementId, listener: ListenerId) -> bool {
        let key = (element, listener.kind());
        let Some(list) = self.listeners.get_mut(&key) else {
            return false;
        };
        let Some(pos) = list.iter().position(|l| *l == listener) else {
            return false;
        };

        list.remove(pos);
        if list.is_empty() {
            self.listeners.remove(&key);
        }

        tracing::trace!(element = %element, kind = %listener.kind(), "Listener detached");

        true
    }

    fn is_bound(&self, element: ElementId, listener: ListenerId) -> bool {
        self.listeners
            .get(&(element, listener.kind()))
            .is_some_and(|list| list.contains(&listener))
    }

    fn listener_count(&self, element: ElementId, kind: EventKind) -> usize {
        self.listeners
            .get(&(element, kind))
            .map(Vec::len)
            .unwrap_or(0)
    }
}
