//! Accordion error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccordionError {
    #[error("Element not found: {0}")]
    ElementNotFound(String),

    #[error("Tab and panel counts differ: {tabs} tabs, {panels} panels")]
    MismatchedCount { tabs: usize, panels: usize },

    #[error("Panel not found: {0}")]
    PanelNotFound(usize),

    #[error("Invalid options: {0}")]
    InvalidOptions(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("DOM error: {0}")]
    Dom(#[from] aria_dom::DomError),
}
