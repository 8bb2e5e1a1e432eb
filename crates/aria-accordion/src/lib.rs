//! ARIA Accordion
//!
//! Turns a container with tab and panel children into an accessible
//! accordion: roles and ARIA relationships on every element, click and
//! keyboard handling on the tabs, and `select` / `deselect` / `destroyed`
//! notifications.
//!
//! ```text
//! Accordion
//!   ├─ Tab[i]   role=tab, aria-controls=panel[i].id
//!   └─ Panel[i] role=tabpanel, aria-labelledby=tab[i].id, aria-hidden
//! ```

mod accordion;
mod emitter;
mod error;
mod options;
mod panel;
mod state;
mod tab;

pub use accordion::{Accordion, Root};
pub use emitter::{AccordionEvent, Emitter, EventName, Handler, HandlerId};
pub use error::AccordionError;
pub use options::{Options, RootRole, TabIndexPolicy};
pub use panel::Panel;
pub use state::PanelState;
pub use tab::{KeyAction, Tab};

pub use aria_dom;

pub type Result<T> = std::result::Result<T, AccordionError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

/// Return the element's id, assigning a fresh unique one if it has none
pub(crate) fn ensure_id<H: aria_dom::Host + ?Sized>(
    host: &mut H,
    element: aria_dom::ElementId,
) -> Result<String> {
    if let Some(id) = host.id(element) {
        return Ok(id);
    }

    let id = host.unique_id();
    host.set_attribute(element, "id", &id)?;
    Ok(id)
}
