//! Accordion notifications
//!
//! A small publish-subscribe registry the accordion embeds. Handlers are
//! kept per event name and run in subscription order.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::panel::Panel;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventName {
    Select,
    Deselect,
    Destroyed,
}

impl EventName {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::Select => "select",
            EventName::Deselect => "deselect",
            EventName::Destroyed => "destroyed",
        }
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for EventName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "select" => Ok(EventName::Select),
            "deselect" => Ok(EventName::Deselect),
            "destroyed" => Ok(EventName::Destroyed),
            _ => Err(format!("Unknown accordion event: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum AccordionEvent<'a> {
    Select(&'a Panel),
    Deselect(&'a Panel),
    Destroyed,
}

impl AccordionEvent<'_> {
    pub fn name(&self) -> EventName {
        match self {
            AccordionEvent::Select(_) => EventName::Select,
            AccordionEvent::Deselect(_) => EventName::Deselect,
            AccordionEvent::Destroyed => EventName::Destroyed,
        }
    }

    pub fn panel(&self) -> Option<&Panel> {
        match self {
            AccordionEvent::Select(panel) | AccordionEvent::Deselect(panel) => Some(panel),
            AccordionEvent::Destroyed => None,
        }
    }
}

pub type Handler = Box<dyn FnMut(&AccordionEvent<'_>)>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

struct Subscription {
    id: HandlerId,
    once: bool,
    handler: Handler,
}

#[derive(Default)]
pub struct Emitter {
    handlers: HashMap<EventName, Vec<Subscription>>,
    next_id: u64,
}

impl Emitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on<F>(&mut self, name: EventName, handler: F) -> HandlerId
    where
        F: FnMut(&AccordionEvent<'_>) + 'static,
    {
        self.subscribe(name, false, Box::new(handler))
    }

    /// Subscribe for the next `name` event only
    pub fn once<F>(&mut self, name: EventName, handler: F) -> HandlerId
    where
        F: FnMut(&AccordionEvent<'_>) + 'static,
    {
        self.subscribe(name, true, Box::new(handler))
    }

    fn subscribe(&mut self, name: EventName, once: bool, handler: Handler) -> HandlerId {
        let id = HandlerId(self.next_id);
        self.next_id += 1;
        self.handlers.entry(name).or_default().push(Subscription {
            id,
            once,
            handler,
        });
        id
    }

    /// Remove one handler. Returns false if it was not subscribed to `name`.
    pub fn off(&mut self, name: EventName, id: HandlerId) -> bool {
        let Some(list) = self.handlers.get_mut(&name) else {
            return false;
        };
        let before = list.len();
        list.retain(|s| s.id != id);
        before != list.len()
    }

    pub fn off_all(&mut self, name: EventName) {
        self.handlers.remove(&name);
    }

    pub fn listener_count(&self, name: EventName) -> usize {
        self.handlers.get(&name).map(Vec::len).unwrap_or(0)
    }

    /// Run every handler for the event's name. Returns how many ran.
    pub fn emit(&mut self, event: &AccordionEvent<'_>) -> usize {
        let Some(list) = self.handlers.get_mut(&event.name()) else {
            return 0;
        };

        for subscription in list.iter_mut() {
            (subscription.handler)(event);
        }
        let count = list.len();
        list.retain(|s| !s.once);
        count
    }
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let counts: HashMap<EventName, usize> = self
            .handlers
            .iter()
            .map(|(name, list)| (*name, list.len()))
            .collect();
        f.debug_struct("Emitter").field("handlers", &counts).finish()
    }
}
