//! Accordion panel
//!
//! One content region. Owns its selection state and keeps the element's
//! class list and `aria-hidden` in step with it.

use aria_dom::{aria, ElementId, Host};

use crate::state::PanelState;
use crate::tab::Tab;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    element: ElementId,
    /// DOM id, assigned at creation if the element had none
    id: String,
    /// Position in the accordion, fixed for its lifetime
    index: usize,
    /// Index of the paired tab
    tab: Option<usize>,
    state: PanelState,
}

impl Panel {
    pub(crate) fn new<H: Host + ?Sized>(
        host: &mut H,
        element: ElementId,
        index: usize,
    ) -> Result<Self> {
        let id = crate::ensure_id(host, element)?;
        host.set_attribute(element, "role", "tabpanel")?;

        Ok(Self {
            element,
            id,
            index,
            tab: None,
            state: PanelState::Deselected,
        })
    }

    /// Associate the panel with `tab`
    pub(crate) fn set_tab<H: Host + ?Sized>(&mut self, host: &mut H, tab: &Tab) -> Result<()> {
        self.tab = Some(tab.index());
        aria::labelled_by(host, self.element, tab.id())?;
        Ok(())
    }

    pub(crate) fn select<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        selected_class: &str,
    ) -> Result<()> {
        host.add_class(self.element, selected_class)?;
        aria::hidden(host, self.element, false)?;
        self.transition(PanelState::Selected);
        Ok(())
    }

    pub(crate) fn deselect<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        selected_class: &str,
    ) -> Result<()> {
        host.remove_class(self.element, selected_class)?;
        aria::hidden(host, self.element, true)?;
        self.transition(PanelState::Deselected);
        Ok(())
    }

    /// Flip the selection. Returns the new state.
    pub(crate) fn toggle<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        selected_class: &str,
    ) -> Result<PanelState> {
        if self.state.is_selected() {
            self.deselect(host, selected_class)?;
        } else {
            self.select(host, selected_class)?;
        }
        Ok(self.state)
    }

    fn transition(&mut self, new_state: PanelState) {
        tracing::debug!(
            panel = %self.id,
            index = self.index,
            from = %self.state,
            to = %new_state,
            "Panel state transition"
        );
        self.state = new_state;
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

    pub fn tab(&self) -> Option<usize> {
        self.tab
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn is_selected(&self) -> bool {
        self.state.is_selected()
    }
}
