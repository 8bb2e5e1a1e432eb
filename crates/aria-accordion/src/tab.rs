//! Accordion tab
//!
//! The activator for one panel. Holds its listener registrations and
//! decides what a keydown means; the accordion carries the action out.

use aria_dom::{aria, DomEvent, ElementId, EventKind, Host, Key, ListenerId};

use crate::options::TabIndexPolicy;
use crate::panel::Panel;
use crate::Result;

/// What a keydown on a tab asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    FocusNext,
    FocusPrevious,
    /// Same as a click
    Activate,
    Ignore,
}

impl KeyAction {
    /// Map a keydown to an action.
    ///
    /// Anything with Ctrl held is ignored so access-key combinations pass
    /// through untouched.
    pub fn from_event(event: &DomEvent) -> Self {
        if event.modifiers.ctrl {
            return KeyAction::Ignore;
        }

        match event.key.as_ref() {
            Some(Key::ArrowDown | Key::ArrowRight) => KeyAction::FocusNext,
            Some(Key::ArrowUp | Key::ArrowLeft) => KeyAction::FocusPrevious,
            Some(Key::Enter | Key::Space) => KeyAction::Activate,
            _ => KeyAction::Ignore,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Listeners {
    click: Option<ListenerId>,
    keydown: Option<ListenerId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    element: ElementId,
    id: String,
    index: usize,
    /// Index of the paired panel
    panel: Option<usize>,
    listeners: Listeners,
}

impl Tab {
    pub(crate) fn new<H: Host + ?Sized>(
        host: &mut H,
        element: ElementId,
        index: usize,
        policy: TabIndexPolicy,
    ) -> Result<Self> {
        let id = crate::ensure_id(host, element)?;
        host.set_attribute(element, "role", "tab")?;

        let needs_tabindex = match policy {
            TabIndexPolicy::Always => true,
            TabIndexPolicy::IfNotFocusable => !host.is_focusable(element),
        };
        if needs_tabindex {
            host.set_attribute(element, "tabindex", "0")?;
        }

        Ok(Self {
            element,
            id,
            index,
            panel: None,
            listeners: Listeners::default(),
        })
    }

    /// Associate the tab with `panel` and (re)attach listeners
    pub(crate) fn set_panel<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        panel: &Panel,
    ) -> Result<()> {
        self.panel = Some(panel.index());
        aria::controls(host, self.element, panel.id())?;
        self.bind(host)
    }

    /// Attach click and keydown listeners, replacing any already attached
    pub(crate) fn bind<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<()> {
        self.unbind(host);
        self.listeners.click = Some(host.bind(self.element, EventKind::Click)?);
        self.listeners.keydown = Some(host.bind(self.element, EventKind::KeyDown)?);
        tracing::debug!(tab = %self.id, index = self.index, "Tab listeners bound");
        Ok(())
    }

    pub(crate) fn unbind<H: Host + ?Sized>(&mut self, host: &mut H) {
        let mut removed = false;
        if let Some(listener) = self.listeners.click.take() {
            removed |= host.unbind(self.element, listener);
        }
        if let Some(listener) = self.listeners.keydown.take() {
            removed |= host.unbind(self.element, listener);
        }
        if removed {
            tracing::debug!(tab = %self.id, index = self.index, "Tab listeners unbound");
        }
    }

    pub fn is_bound(&self) -> bool {
        self.listeners.click.is_some() || self.listeners.keydown.is_some()
    }

    /// The listener this tab attached for `kind`, if bound
    pub fn listener(&self, kind: EventKind) -> Option<ListenerId> {
        match kind {
            EventKind::Click => self.listeners.click,
            EventKind::KeyDown => self.listeners.keydown,
        }
    }

    /// Whether the host still delivers `kind` events to this tab
    pub(crate) fn listens_for<H: Host + ?Sized>(&self, host: &H, kind: EventKind) -> bool {
        self.listener(kind)
            .is_some_and(|listener| host.is_bound(self.element, listener))
    }

    /// Index of the following tab, wrapping to the first after the last
    pub fn next_index(&self, len: usize) -> usize {
        if self.index + 1 >= len {
            0
        } else {
            self.index + 1
        }
    }

    /// Index of the preceding tab, wrapping to the last before the first
    pub fn previous_index(&self, len: usize) -> usize {
        if self.index == 0 {
            len.saturating_sub(1)
        } else {
            self.index - 1
        }
    }

    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn panel(&self) -> Option<usize> {
        self.panel
    }
}
