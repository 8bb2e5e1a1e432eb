//! DOM bridge error types

use thiserror::Error;

use crate::element::ElementId;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomError {
    #[error("Invalid value for {attribute}: expected {expected}, got {actual}")]
    InvalidConfiguration {
        attribute: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid selector: {0}")]
    InvalidSelector(String),

    #[error("Unknown element: {0}")]
    UnknownElement(ElementId),
}
