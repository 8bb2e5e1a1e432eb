//! The host environment a widget runs against
//!
//! A `Host` is whatever owns the elements: a browser document behind
//! `web-sys`, or [`MemoryDocument`](crate::MemoryDocument) in tests.
//! Implementors provide the primitive operations; class-list, focusability
//! and id helpers are derived from them.

use uuid::Uuid;

use crate::classes;
use crate::element::ElementId;
use crate::event::{EventKind, ListenerId};
use crate::Result;

pub trait Host {
    /// First element in document order matching `selector`
    fn query_selector(&self, selector: &str) -> Result<Option<ElementId>>;

    /// Descendants of `root` matching `selector`, in document order
    fn query_selector_all(&self, root: ElementId, selector: &str) -> Result<Vec<ElementId>>;

    fn element_by_id(&self, id: &str) -> Option<ElementId>;

    fn get_attribute(&self, element: ElementId, name: &str) -> Option<String>;

    fn set_attribute(&mut self, element: ElementId, name: &str, value: &str) -> Result<()>;

    fn remove_attribute(&mut self, element: ElementId, name: &str) -> Result<()>;

    /// Whether the platform makes `element` focusable without a `tabindex`
    fn is_natively_focusable(&self, element: ElementId) -> bool;

    fn focus(&mut self, element: ElementId) -> Result<()>;

    fn active_element(&self) -> Option<ElementId>;

    /// Attach a listener of `kind` to `element`.
    ///
    /// Listeners on one element and kind are kept in attachment order. A
    /// widget only acts on an event while its listener is still attached
    /// here (see [`Host::is_bound`]).
    fn bind(&mut self, element: ElementId, kind: EventKind) -> Result<ListenerId>;

    /// Detach a listener. Returns false if it was not attached.
    fn unbind(&mut self, element: ElementId, listener: ListenerId) -> bool;

    /// Whether `listener` is currently attached to `element`
    fn is_bound(&self, element: ElementId, listener: ListenerId) -> bool;

    fn listener_count(&self, element: ElementId, kind: EventKind) -> usize;

    fn id(&self, element: ElementId) -> Option<String> {
        self.get_attribute(element, "id").filter(|id| !id.is_empty())
    }

    fn has_attribute(&self, element: ElementId, name: &str) -> bool {
        self.get_attribute(element, name).is_some()
    }

    fn has_class(&self, element: ElementId, class: &str) -> bool {
        self.get_attribute(element, "class")
            .is_some_and(|list| classes::contains(&list, class))
    }

    fn add_class(&mut self, element: ElementId, class: &str) -> Result<()> {
        let current = self.get_attribute(element, "class").unwrap_or_default();
        match classes::with_token(&current, class) {
            Some(list) => self.set_attribute(element, "class", &list),
            None => Ok(()),
        }
    }

    fn remove_class(&mut self, element: ElementId, class: &str) -> Result<()> {
        let Some(current) = self.get_attribute(element, "class") else {
            return Ok(());
        };
        match classes::without_token(&current, class) {
            Some(list) => self.set_attribute(element, "class", &list),
            None => Ok(()),
        }
    }

    /// Flip `class` on `element`. Returns whether the class is now present.
    fn toggle_class(&mut self, element: ElementId, class: &str) -> Result<bool> {
        if self.has_class(element, class) {
            self.remove_class(element, class)?;
            Ok(false)
        } else {
            self.add_class(element, class)?;
            Ok(true)
        }
    }

    fn is_focusable(&self, element: ElementId) -> bool {
        self.has_attribute(element, "tabindex") || self.is_natively_focusable(element)
    }

    /// A random id no element in this host currently carries
    fn unique_id(&self) -> String {
        loop {
            let id = format!("aria-{}", Uuid::new_v4().simple());
            if self.element_by_id(&id).is_none() {
                return id;
            }
        }
    }
}
