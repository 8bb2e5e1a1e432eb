//! ARIA DOM bridge
//!
//! The host-environment side of the accordion: element handles, attribute
//! and class-list access, listener registration, focus, and id generation.
//! Widgets talk to the page only through the [`Host`] trait.
//! [`MemoryDocument`] is an in-memory host for headless use and tests.

pub mod aria;
mod classes;
mod document;
mod element;
mod error;
mod event;
mod host;

pub use aria::{AriaAttribute, AriaKind, AriaValue};
pub use document::MemoryDocument;
pub use element::ElementId;
pub use error::DomError;
pub use event::{DomEvent, EventKind, Key, ListenerId, Modifiers};
pub use host::Host;

pub type Result<T> = std::result::Result<T, DomError>;
