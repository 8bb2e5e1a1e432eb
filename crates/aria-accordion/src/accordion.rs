//! Accordion orchestrator
//!
//! Discovers tab and panel elements under a root, pairs them by document
//! order, and routes click/keydown events from the tabs to their panels.
//! Selection changes are re-emitted to subscribers.

use aria_dom::{DomEvent, ElementId, EventKind, Host};

use crate::emitter::{AccordionEvent, Emitter, EventName, HandlerId};
use crate::error::AccordionError;
use crate::options::Options;
use crate::panel::Panel;
use crate::state::PanelState;
use crate::tab::{KeyAction, Tab};
use crate::Result;

/// Where to find the accordion root
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Root {
    Selector(String),
    Element(ElementId),
}

impl From<&str> for Root {
    fn from(selector: &str) -> Self {
        Root::Selector(selector.to_string())
    }
}

impl From<String> for Root {
    fn from(selector: String) -> Self {
        Root::Selector(selector)
    }
}

impl From<ElementId> for Root {
    fn from(element: ElementId) -> Self {
        Root::Element(element)
    }
}

#[derive(Debug)]
pub struct Accordion {
    root: ElementId,
    options: Options,
    tabs: Vec<Tab>,
    /// Index-aligned with `tabs`
    panels: Vec<Panel>,
    emitter: Emitter,
    destroyed: bool,
}

impl Accordion {
    /// Build an accordion under `root`.
    ///
    /// Fails before touching the DOM if the root cannot be found or the
    /// number of tabs and panels differ.
    pub fn create<H: Host + ?Sized>(
        host: &mut H,
        root: impl Into<Root>,
        options: Options,
    ) -> Result<Self> {
        options.validate()?;

        let root = match root.into() {
            Root::Element(element) => element,
            Root::Selector(selector) => match host.query_selector(&selector)? {
                Some(element) => element,
                None => {
                    tracing::warn!(selector = %selector, "Accordion root not found");
                    return Err(AccordionError::ElementNotFound(selector));
                }
            },
        };

        let tab_elements = host.query_selector_all(root, &options.tab_selector)?;
        let panel_elements = host.query_selector_all(root, &options.panel_selector)?;
        if tab_elements.len() != panel_elements.len() {
            tracing::warn!(
                tabs = tab_elements.len(),
                panels = panel_elements.len(),
                "Refusing to pair mismatched tabs and panels"
            );
            return Err(AccordionError::MismatchedCount {
                tabs: tab_elements.len(),
                panels: panel_elements.len(),
            });
        }

        host.set_attribute(root, "role", options.root_role.as_str())?;

        let mut tabs = tab_elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| Tab::new(host, element, index, options.tab_index))
            .collect::<Result<Vec<_>>>()?;
        let mut panels = panel_elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| Panel::new(host, element, index))
            .collect::<Result<Vec<_>>>()?;

        for (tab, panel) in tabs.iter_mut().zip(panels.iter_mut()) {
            tab.set_panel(host, panel)?;
            panel.set_tab(host, tab)?;
        }

        let mut accordion = Self {
            root,
            options,
            tabs,
            panels,
            emitter: Emitter::new(),
            destroyed: false,
        };
        accordion.deselect_all(host)?;

        tracing::info!(
            root = %accordion.root,
            tabs = accordion.tabs.len(),
            role = accordion.options.root_role.as_str(),
            "Accordion ready"
        );

        Ok(accordion)
    }

    /// Deselect every panel
    pub fn deselect_all<H: Host + ?Sized>(&mut self, host: &mut H) -> Result<&mut Self> {
        for index in 0..self.panels.len() {
            self.deselect(host, index)?;
        }
        Ok(self)
    }

    pub fn select<H: Host + ?Sized>(&mut self, host: &mut H, index: usize) -> Result<&Panel> {
        let class = &self.options.selected_class;
        let panel = self
            .panels
            .get_mut(index)
            .ok_or(AccordionError::PanelNotFound(index))?;
        panel.select(host, class)?;

        let panel = &self.panels[index];
        self.emitter.emit(&AccordionEvent::Select(panel));
        Ok(panel)
    }

    pub fn deselect<H: Host + ?Sized>(&mut self, host: &mut H, index: usize) -> Result<&Panel> {
        let class = &self.options.selected_class;
        let panel = self
            .panels
            .get_mut(index)
            .ok_or(AccordionError::PanelNotFound(index))?;
        panel.deselect(host, class)?;

        let panel = &self.panels[index];
        self.emitter.emit(&AccordionEvent::Deselect(panel));
        Ok(panel)
    }

    /// Flip panel `index`, emitting `select` or `deselect`
    pub fn toggle<H: Host + ?Sized>(&mut self, host: &mut H, index: usize) -> Result<PanelState> {
        let class = &self.options.selected_class;
        let panel = self
            .panels
            .get_mut(index)
            .ok_or(AccordionError::PanelNotFound(index))?;
        let state = panel.toggle(host, class)?;

        let panel = &self.panels[index];
        let event = match state {
            PanelState::Selected => AccordionEvent::Select(panel),
            PanelState::Deselected => AccordionEvent::Deselect(panel),
        };
        self.emitter.emit(&event);
        Ok(state)
    }

    /// Route a DOM event to the tab it targets.
    ///
    /// Returns false when no tab has a listener for it attached in `host`.
    pub fn handle_event<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        event: &mut DomEvent,
    ) -> Result<bool> {
        let Some(index) = self.tabs.iter().position(|tab| {
            tab.element() == event.target && tab.listens_for(&*host, event.kind)
        }) else {
            return Ok(false);
        };

        match event.kind {
            EventKind::Click => self.on_click(host, index, event)?,
            EventKind::KeyDown => self.on_keydown(host, index, event)?,
        }
        Ok(true)
    }

    fn on_click<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        index: usize,
        event: &mut DomEvent,
    ) -> Result<()> {
        if let Some(panel) = self.tabs[index].panel() {
            self.toggle(host, panel)?;
        }
        event.prevent_default();
        Ok(())
    }

    fn on_keydown<H: Host + ?Sized>(
        &mut self,
        host: &mut H,
        index: usize,
        event: &mut DomEvent,
    ) -> Result<()> {
        let len = self.tabs.len();
        match KeyAction::from_event(event) {
            KeyAction::FocusNext => {
                let next = self.tabs[index].next_index(len);
                host.focus(self.tabs[next].element())?;
                event.prevent_default();
            }
            KeyAction::FocusPrevious => {
                let previous = self.tabs[index].previous_index(len);
                host.focus(self.tabs[previous].element())?;
                event.prevent_default();
            }
            KeyAction::Activate => self.on_click(host, index, event)?,
            KeyAction::Ignore => {}
        }
        Ok(())
    }

    /// Detach every tab listener and emit `destroyed`.
    ///
    /// Attributes and classes written during setup are left in place.
    pub fn destroy<H: Host + ?Sized>(&mut self, host: &mut H) -> &mut Self {
        for tab in &mut self.tabs {
            tab.unbind(host);
        }
        self.destroyed = true;
        self.emitter.emit(&AccordionEvent::Destroyed);

        tracing::info!(root = %self.root, "Accordion destroyed");

        self
    }

    pub fn on<F>(&mut self, name: EventName, handler: F) -> HandlerId
    where
        F: FnMut(&AccordionEvent<'_>) + 'static,
    {
        self.emitter.on(name, handler)
    }

    pub fn once<F>(&mut self, name: EventName, handler: F) -> HandlerId
    where
        F: FnMut(&AccordionEvent<'_>) + 'static,
    {
        self.emitter.once(name, handler)
    }

    pub fn off(&mut self, name: EventName, id: HandlerId) -> bool {
        self.emitter.off(name, id)
    }

    pub fn emitter(&self) -> &Emitter {
        &self.emitter
    }

    pub fn root(&self) -> ElementId {
        self.root
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn panels(&self) -> &[Panel] {
        &self.panels
    }

    pub fn tab(&self, index: usize) -> Option<&Tab> {
        self.tabs.get(index)
    }

    pub fn panel(&self, index: usize) -> Option<&Panel> {
        self.panels.get(index)
    }

    pub fn next_tab(&self, index: usize) -> Option<&Tab> {
        let tab = self.tabs.get(index)?;
        self.tabs.get(tab.next_index(self.tabs.len()))
    }

    pub fn previous_tab(&self, index: usize) -> Option<&Tab> {
        let tab = self.tabs.get(index)?;
        self.tabs.get(tab.previous_index(self.tabs.len()))
    }

    pub fn selected_indices(&self) -> Vec<usize> {
        self.panels
            .iter()
            .filter(|p| p.is_selected())
            .map(Panel::index)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.tabs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tabs.is_empty()
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aria_dom::{aria, AriaAttribute, Key, MemoryDocument, Modifiers};
    use std::cell::RefCell;
    use std::rc::Rc;

    /// `#root` with `n` heading/section pairs
    fn fixture(n: usize) -> MemoryDocument {
        let mut doc = MemoryDocument::new();
        let root = doc.append(doc.body(), "div", &[("id", "root")]);
        for _ in 0..n {
            doc.append(root, "h3", &[("class", "tab")]);
            doc.append(root, "section", &[("class", "panel")]);
        }
        doc
    }

    fn record(accordion: &mut Accordion) -> Rc<RefCell<Vec<(EventName, Option<usize>)>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        for name in [EventName::Select, EventName::Deselect, EventName::Destroyed] {
            let log = Rc::clone(&log);
            accordion.on(name, move |event| {
                log.borrow_mut()
                    .push((event.name(), event.panel().map(Panel::index)));
            });
        }
        log
    }

    #[test]
    fn test_create_pairs_tabs_and_panels() {
        let mut doc = fixture(3);
        let accordion = Accordion::create(&mut doc, "#root", Options::default()).unwrap();

        assert_eq!(accordion.len(), 3);
        assert_eq!(accordion.panels().len(), 3);
        assert_eq!(
            doc.get_attribute(accordion.root(), "role").as_deref(),
            Some("application")
        );

        for (i, (tab, panel)) in accordion.tabs().iter().zip(accordion.panels()).enumerate() {
            assert_eq!(tab.index(), i);
            assert_eq!(panel.index(), i);
            assert_eq!(tab.panel(), Some(i));
            assert_eq!(panel.tab(), Some(i));

            let tab_id = doc.id(tab.element()).unwrap();
            let panel_id = doc.id(panel.element()).unwrap();
            assert_eq!(
                doc.get_attribute(tab.element(), "aria-controls"),
                Some(panel_id)
            );
            assert_eq!(
                doc.get_attribute(panel.element(), "aria-labelledby"),
                Some(tab_id)
            );
            assert_eq!(doc.get_attribute(tab.element(), "role").as_deref(), Some("tab"));
            assert_eq!(
                doc.get_attribute(panel.element(), "role").as_deref(),
                Some("tabpanel")
            );
            assert!(doc.is_focusable(tab.element()));
        }
    }

    #[test]
    fn test_all_panels_start_deselected() {
        let mut doc = fixture(3);
        let el = doc.query_selector("section").unwrap().unwrap();
        doc.add_class(el, "selected").unwrap();

        let accordion = Accordion::create(&mut doc, "#root", Options::default()).unwrap();

        for panel in accordion.panels() {
            assert!(!panel.is_selected());
            assert!(!doc.has_class(panel.element(), "selected"));
            assert_eq!(
                aria::get_bool(&doc, panel.element(), AriaAttribute::Hidden).unwrap(),
                Some(true)
            );
        }
        assert!(accordion.selected_indices().is_empty());
    }

    #[test]
    fn test_root_not_found() {
        let mut doc = fixture(1);
        let err = Accordion::create(&mut doc, "#missing", Options::default()).unwrap_err();
        assert!(matches!(err, AccordionError::ElementNotFound(ref s) if s == "#missing"));
    }

    #[test]
    fn test_mismatched_count_leaves_dom_untouched() {
        let mut doc = fixture(2);
        let root = doc.query_selector("#root").unwrap().unwrap();
        doc.append(root, "h3", &[("class", "tab")]);

        let err = Accordion::create(&mut doc, root, Options::default()).unwrap_err();
        assert!(matches!(
            err,
            AccordionError::MismatchedCount { tabs: 3, panels: 2 }
        ));
        assert_eq!(doc.get_attribute(root, "role"), None);
        for tab in doc.query_selector_all(root, ".tab").unwrap() {
            assert_eq!(doc.listener_count(tab, EventKind::Click), 0);
        }
    }

    #[test]
    fn test_empty_accordion() {
        let mut doc = fixture(0);
        let accordion = Accordion::create(&mut doc, "#root", Options::default()).unwrap();
        assert!(accordion.is_empty());
        assert!(accordion.next_tab(0).is_none());
    }

    #[test]
    fn test_click_toggles_and_notifies() {
        let mut doc = fixture(3);
        let mut accordion = Accordion::create(&mut doc, "#root", Options::default()).unwrap();
        let log = record(&mut accordion);
        let tab = accordion.tabs()[1].element();

        let mut click = DomEvent::click(tab);
        assert!(accordion.handle_event(&mut doc, &mut click).unwrap());
        assert!(click.default_prevented());
        assert!(accordion.panels()[1].is_selected());
        assert!(doc.has_class(accordion.panels()[1].element(), "selected"));
        assert_eq!(*log.borrow(), vec![(EventName::Select, Some(1))]);

        let mut click = DomEvent::click(tab);
        accordion.handle_event(&mut doc, &mut click).unwrap();
        assert!(!accordion.panels()[1].is_selected());
        assert!(!doc.has_class(accordion.panels()[1].element(), "selected"));
        assert_eq!(
            *log.borrow(),
            vec![(EventName::Select, Some(1)), (EventName::Deselect, Some(1))]
        );
    }

    #[test]
    fn test_panels_select_independently() {
        let mut doc = fixture(3);
        let mut accordion = Accordion::create(&mut doc, "#root", Options::default()).unwrap();

        for i in [0, 2] {
            let mut click = DomEvent::click(accordion.tabs()[i].element());
            accordion.handle_event(&mut doc, &mut click).unwrap();
        }
        assert_eq!(accordion.selected_indices(), vec![0, 2]);

        accordion.deselect_all(&mut doc).unwrap();
        assert!(accordion.selected_indices().is_empty());
    }

    #[test]
    fn test_enter_and_space_act_like_click() {
        let mut doc = fixture(2);
        let mut accordion = Accordion::create(&mut doc, "#root", Options::default()).unwrap();
        let log = record(&mut accordion);
        let tab = accordion.tabs()[0].element();

        let mut enter = DomEvent::keydown(tab, Key::Enter);
        accordion.handle_event(&mut doc, &mut enter).unwrap();
        assert!(enter.default_prevented());
        assert!(accordion.panels()[0].is_selected());

        let mut space = DomEvent::keydown(tab, Key::from_code(32));
        accordion.handle_event(&mut doc, &mut space).unwrap();
        assert!(!accordion.panels()[0].is_selected());

        assert_eq!(
            *log.borrow(),
            vec![(EventName::Select, Some(0)), (EventName::Deselect, Some(0))]
        );
    }

    #[test]
    fn test_arrow_navigation_wraps() {
        let mut doc = fixture(3);
        let mut accordion = Accordion::create(&mut doc, "#root", Options::default()).unwrap();
        let tabs: Vec<ElementId> = accordion.tabs().iter().map(Tab::element).collect();

        for i in 0..3 {
            doc.focus(tabs[i]).unwrap();
            let mut down = DomEvent::keydown(tabs[i], Key::ArrowDown);
            accordion.handle_event(&mut doc, &mut down).unwrap();
            assert!(down.default_prevented());
            assert_eq!(doc.active_element(), Some(tabs[(i + 1) % 3]));
        }

        doc.focus(tabs[1]).unwrap();
        let mut right = DomEvent::keydown(tabs[1], Key::ArrowRight);
        accordion.handle_event(&mut doc, &mut right).unwrap();
        assert_eq!(doc.active_element(), Some(tabs[2]));

        let mut left = DomEvent::keydown(tabs[2], Key::ArrowLeft);
        accordion.handle_event(&mut doc, &mut left).unwrap();
        assert_eq!(doc.active_element(), Some(tabs[1]));
    }

    #[test]
    fn test_arrow_up_from_first_focuses_last() {
        let mut doc = fixture(3);
        let mut accordion = Accordion::create(&mut doc, "#root", Options::default()).unwrap();
        let first = accordion.tabs()[0].element();
        let last = accordion.tabs()[2].element();

        doc.focus(first).unwrap();
        let mut up = DomEvent::keydown(first, Key::ArrowUp);
        assert!(accordion.handle_event(&mut doc, &mut up).unwrap());
        assert_eq!(doc.active_element(), Some(last));
        assert!(up.default_prevented());
        assert!(accordion.selected_indices().is_empty());
    }

    #[test]
    fn test_ctrl_and_other_keys_ignored() {
        let mut doc = fixture(2);
        let mut accordion = Accordion::create(&mut doc, "#root", Options::default()).unwrap();
        let first = accordion.tabs()[0].element();
        doc.focus(first).unwrap();

        let mut ctrl_down =
            DomEvent::keydown(first, Key::ArrowDown).with_modifiers(Modifiers::ctrl());
        accordion.handle_event(&mut doc, &mut ctrl_down).unwrap();
        assert!(!ctrl_down.default_prevented());
        assert_eq!(doc.active_element(), Some(first));

        let mut ctrl_enter = DomEvent::keydown(first, Key::Enter).with_modifiers(Modifiers::ctrl());
        accordion.handle_event(&mut doc, &mut ctrl_enter).unwrap();
        assert!(!accordion.panels()[0].is_selected());

        let mut tab_key = DomEvent::keydown(first, Key::from_name("Tab"));
        accordion.handle_event(&mut doc, &mut tab_key).unwrap();
        assert!(!tab_key.default_prevented());
        assert_eq!(doc.active_element(), Some(first));
    }

    #[test]
    fn test_foreign_targets_ignored() {
        let mut doc = fixture(1);
        let mut accordion = Accordion::create(&mut doc, "#root", Options::default()).unwrap();
        let panel = accordion.panels()[0].element();

        let mut click = DomEvent::click(panel);
        assert!(!accordion.handle_event(&mut doc, &mut click).unwrap());
        assert!(!click.default_prevented());
    }

    #[test]
    fn test_listener_detached_by_host_stops_routing() {
        let mut doc = fixture(2);
        let mut accordion = Accordion::create(&mut doc, "#root", Options::default()).unwrap();
        let tab = &accordion.tabs()[0];
        let element = tab.element();
        let listener = tab.listener(EventKind::Click).unwrap();

        assert!(doc.unbind(element, listener));

        let mut click = DomEvent::click(element);
        assert!(!accordion.handle_event(&mut doc, &mut click).unwrap());
        assert!(!accordion.panels()[0].is_selected());

        let mut enter = DomEvent::keydown(element, Key::Enter);
        assert!(accordion.handle_event(&mut doc, &mut enter).unwrap());
        assert!(accordion.panels()[0].is_selected());
    }

    #[test]
    fn test_css_selector_options() {
        let markup = r#"
            <div id="root">
              <h3 class="tab" title="a b">First</h3>
              <div class="panel"><h3 class="tab">Nested, not a direct child</h3></div>
              <h3 class="tab disabled">Off</h3>
              <div class="panel"></div>
            </div>"#;

        let mut doc = MemoryDocument::parse(markup);
        let accordion = Accordion::create(
            &mut doc,
            "#root",
            Options::default()
                .with_tab_selector("#root > .tab")
                .with_panel_selector("#root > .panel"),
        )
        .unwrap();
        assert_eq!(accordion.len(), 2);

        let mut doc = MemoryDocument::parse(markup);
        let accordion = Accordion::create(
            &mut doc,
            "#root",
            Options::default()
                .with_tab_selector(".tab:not(.disabled)")
                .with_panel_selector("#root > .panel"),
        )
        .unwrap();
        assert_eq!(accordion.len(), 2);
        assert_eq!(
            doc.get_attribute(accordion.tabs()[0].element(), "title").as_deref(),
            Some("a b")
        );

        let mut doc = MemoryDocument::parse(markup);
        let accordion = Accordion::create(
            &mut doc,
            "#root",
            Options::default()
                .with_tab_selector("[title=\"a b\"]")
                .with_panel_selector("#root > .panel:not(:last-child)"),
        )
        .unwrap();
        assert_eq!(accordion.len(), 1);
    }

    #[test]
    fn test_invalid_selector_rejected() {
        let mut doc = fixture(1);
        let err = Accordion::create(
            &mut doc,
            "#root",
            Options::default().with_tab_selector(".tab >"),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AccordionError::Dom(aria_dom::DomError::InvalidSelector(_))
        ));
    }

    #[test]
    fn test_destroy_unbinds_and_notifies() {
        let mut doc = fixture(2);
        let mut accordion = Accordion::create(&mut doc, "#root", Options::default()).unwrap();
        let log = record(&mut accordion);
        let tab = accordion.tabs()[0].element();
        assert_eq!(doc.listener_count(tab, EventKind::Click), 1);
        assert_eq!(doc.listener_count(tab, EventKind::KeyDown), 1);

        accordion.destroy(&mut doc);
        assert!(accordion.is_destroyed());
        assert_eq!(doc.listener_count(tab, EventKind::Click), 0);
        assert_eq!(doc.listener_count(tab, EventKind::KeyDown), 0);
        assert_eq!(*log.borrow(), vec![(EventName::Destroyed, None)]);

        let mut click = DomEvent::click(tab);
        assert!(!accordion.handle_event(&mut doc, &mut click).unwrap());
        assert!(!accordion.panels()[0].is_selected());

        // Attributes survive
        assert_eq!(doc.get_attribute(tab, "role").as_deref(), Some("tab"));
    }

    #[test]
    fn test_custom_options() {
        let mut doc = MemoryDocument::new();
        let root = doc.append(doc.body(), "dl", &[]);
        let button = doc.append(root, "dt", &[]);
        doc.append(button, "button", &[("class", "trigger")]);
        doc.append(root, "dd", &[("id", "first-panel")]);

        let options = Options::from_json(
            r#"{"tab": "button.trigger", "panel": "dd", "selected": "open", "role": "tablist"}"#,
        )
        .unwrap();
        let mut accordion = Accordion::create(&mut doc, root, options).unwrap();

        assert_eq!(doc.get_attribute(root, "role").as_deref(), Some("tablist"));
        let trigger = accordion.tabs()[0].element();
        assert_eq!(doc.get_attribute(trigger, "tabindex"), None);
        assert_eq!(accordion.panels()[0].id(), "first-panel");
        assert_eq!(
            doc.get_attribute(trigger, "aria-controls").as_deref(),
            Some("first-panel")
        );

        accordion.select(&mut doc, 0).unwrap();
        assert!(doc.has_class(accordion.panels()[0].element(), "open"));
    }

    #[test]
    fn test_programmatic_selection() {
        let mut doc = fixture(2);
        let mut accordion = Accordion::create(&mut doc, "#root", Options::default()).unwrap();
        let log = record(&mut accordion);

        assert_eq!(accordion.select(&mut doc, 1).unwrap().index(), 1);
        assert_eq!(accordion.toggle(&mut doc, 1).unwrap(), PanelState::Deselected);
        assert!(matches!(
            accordion.select(&mut doc, 5),
            Err(AccordionError::PanelNotFound(5))
        ));
        assert_eq!(
            *log.borrow(),
            vec![(EventName::Select, Some(1)), (EventName::Deselect, Some(1))]
        );
    }

    #[test]
    fn test_once_select_walks_every_tab() {
        let mut doc = fixture(3);
        let mut accordion = Accordion::create(&mut doc, "#root", Options::default()).unwrap();
        let seen = Rc::new(RefCell::new(Vec::new()));

        for i in 0..accordion.len() {
            let seen = Rc::clone(&seen);
            accordion.once(EventName::Select, move |event| {
                seen.borrow_mut().push(event.panel().map(Panel::index));
            });
            let mut click = DomEvent::click(accordion.tabs()[i].element());
            accordion.handle_event(&mut doc, &mut click).unwrap();
        }

        assert_eq!(*seen.borrow(), vec![Some(0), Some(1), Some(2)]);
        assert_eq!(accordion.emitter().listener_count(EventName::Select), 0);
    }

    #[test]
    fn test_existing_ids_reused_and_generated_ids_unique() {
        let mut doc = MemoryDocument::new();
        let root = doc.append(doc.body(), "div", &[("id", "root")]);
        doc.append(root, "h3", &[("class", "tab"), ("id", "faq-1")]);
        doc.append(root, "div", &[("class", "panel")]);
        doc.append(root, "h3", &[("class", "tab")]);
        doc.append(root, "div", &[("class", "panel")]);

        let accordion = Accordion::create(&mut doc, "#root", Options::default()).unwrap();
        assert_eq!(accordion.tabs()[0].id(), "faq-1");

        let mut ids: Vec<&str> = accordion
            .tabs()
            .iter()
            .map(Tab::id)
            .chain(accordion.panels().iter().map(Panel::id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }
}
