//! Normalized DOM events
//!
//! Hosts translate their native event objects into [`DomEvent`] so widgets
//! see one shape: a target, a key name, modifier state, and the
//! preventDefault / stopPropagation flags.

use serde::{Deserialize, Serialize};

use crate::element::ElementId;

/// Event types a widget can listen for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Click,
    KeyDown,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::KeyDown => "keydown",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Keys the widgets care about. Everything else is carried through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    Enter,
    Space,
    Other(String),
}

impl Key {
    /// Build a key from a `KeyboardEvent.key` value.
    ///
    /// Accepts the legacy names older engines report ("Up", "Spacebar", ...).
    pub fn from_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            "ArrowLeft" | "Left" => Key::ArrowLeft,
            "ArrowRight" | "Right" => Key::ArrowRight,
            "Enter" => Key::Enter,
            " " | "Spacebar" | "Space" => Key::Space,
            other => Key::Other(other.to_string()),
        }
    }

    /// Build a key from a legacy `keyCode` / `which` value.
    pub fn from_code(code: u32) -> Self {
        match code {
            13 => Key::Enter,
            32 => Key::Space,
            37 => Key::ArrowLeft,
            38 => Key::ArrowUp,
            39 => Key::ArrowRight,
            40 => Key::ArrowDown,
            other => Key::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Key::ArrowUp => "ArrowUp",
            Key::ArrowDown => "ArrowDown",
            Key::ArrowLeft => "ArrowLeft",
            Key::ArrowRight => "ArrowRight",
            Key::Enter => "Enter",
            Key::Space => " ",
            Key::Other(name) => name,
        }
    }
}

/// Keyboard modifier state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn ctrl() -> Self {
        Self {
            ctrl: true,
            ..Self::default()
        }
    }

    pub fn shift() -> Self {
        Self {
            shift: true,
            ..Self::default()
        }
    }
}

/// A click or keydown delivered to one element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomEvent {
    pub kind: EventKind,
    pub target: ElementId,
    /// Set for keydown events only
    pub key: Option<Key>,
    pub modifiers: Modifiers,
    default_prevented: bool,
    propagation_stopped: bool,
}

impl DomEvent {
    pub fn click(target: ElementId) -> Self {
        Self {
            kind: EventKind::Click,
            target,
            key: None,
            modifiers: Modifiers::none(),
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn keydown(target: ElementId, key: Key) -> Self {
        Self {
            kind: EventKind::KeyDown,
            target,
            key: Some(key),
            modifiers: Modifiers::none(),
            default_prevented: false,
            propagation_stopped: false,
        }
    }

    pub fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }

    pub fn propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }
}

/// Handle for one registered listener, returned by [`Host::bind`](crate::Host::bind).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListenerId {
    pub(crate) kind: EventKind,
    pub(crate) serial: u64,
}

impl ListenerId {
    pub fn new(kind: EventKind, serial: u64) -> Self {
        Self { kind, serial }
    }

    pub fn kind(&self) -> EventKind {
        self.kind
    }
}
