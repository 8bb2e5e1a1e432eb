//! Accordion construction options
//!
//! Deserialized from the options object a page passes in. Recognized keys
//! are `tab`, `panel`, `selected`, `role` and `tabindex`; anything missing
//! falls back to the default and unknown keys are ignored.

use serde::{Deserialize, Serialize};

use crate::error::AccordionError;
use crate::Result;

/// ARIA role written on the accordion root
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootRole {
    #[default]
    Application,
    Tablist,
}

impl RootRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            RootRole::Application => "application",
            RootRole::Tablist => "tablist",
        }
    }
}

/// When a tab element receives `tabindex="0"`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TabIndexPolicy {
    /// Only when the element is neither natively focusable nor carries a tabindex
    #[default]
    IfNotFocusable,
    /// Always overwrite with `0`
    Always,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Selector for tab elements, relative to the root
    #[serde(rename = "tab")]
    pub tab_selector: String,
    /// Selector for panel elements, relative to the root
    #[serde(rename = "panel")]
    pub panel_selector: String,
    /// Class added to a selected panel
    #[serde(rename = "selected")]
    pub selected_class: String,
    #[serde(rename = "role")]
    pub root_role: RootRole,
    #[serde(rename = "tabindex")]
    pub tab_index: TabIndexPolicy,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            tab_selector: ".tab".to_string(),
            panel_selector: ".panel".to_string(),
            selected_class: "selected".to_string(),
            root_role: RootRole::default(),
            tab_index: TabIndexPolicy::default(),
        }
    }
}

impl Options {
    /// Parse an options object, merging it over the defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Options = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let options: Options = serde_json::from_value(value)?;
        options.validate()?;
        Ok(options)
    }

    pub fn with_tab_selector(mut self, selector: impl Into<String>) -> Self {
        self.tab_selector = selector.into();
        self
    }

    pub fn with_panel_selector(mut self, selector: impl Into<String>) -> Self {
        self.panel_selector = selector.into();
        self
    }

    pub fn with_selected_class(mut self, class: impl Into<String>) -> Self {
        self.selected_class = class.into();
        self
    }

    pub fn with_root_role(mut self, role: RootRole) -> Self {
        self.root_role = role;
        self
    }

    pub fn with_tab_index(mut self, policy: TabIndexPolicy) -> Self {
        self.tab_index = policy;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.tab_selector.trim().is_empty() {
            return Err(AccordionError::InvalidOptions(
                "tab selector cannot be empty".to_string(),
            ));
        }
        if self.panel_selector.trim().is_empty() {
            return Err(AccordionError::InvalidOptions(
                "panel selector cannot be empty".to_string(),
            ));
        }
        if self.selected_class.is_empty()
            || self.selected_class.chars().any(char::is_whitespace)
        {
            return Err(AccordionError::InvalidOptions(format!(
                "selected class must be a single class name, got {:?}",
                self.selected_class
            )));
        }
        Ok(())
    }
}
