//! Typed ARIA attribute access
//!
//! Every attribute declares the kind of value it takes. Writing a value of
//! the wrong kind, or reading one that does not parse, is an
//! `InvalidConfiguration` error surfaced to the caller.

use serde::{Deserialize, Serialize};

use crate::classes;
use crate::element::ElementId;
use crate::error::DomError;
use crate::host::Host;
use crate::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AriaKind {
    Boolean,
    Text,
    Integer,
    /// Space-delimited list of element ids
    IdList,
}

impl AriaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            AriaKind::Boolean => "boolean",
            AriaKind::Text => "string",
            AriaKind::Integer => "integer",
            AriaKind::IdList => "id list",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AriaAttribute {
    Hidden,
    Expanded,
    Selected,
    Controls,
    LabelledBy,
    Label,
    Level,
    PosInSet,
    SetSize,
}

impl AriaAttribute {
    pub fn name(&self) -> &'static str {
        match self {
            AriaAttribute::Hidden => "aria-hidden",
            AriaAttribute::Expanded => "aria-expanded",
            AriaAttribute::Selected => "aria-selected",
            AriaAttribute::Controls => "aria-controls",
            AriaAttribute::LabelledBy => "aria-labelledby",
            AriaAttribute::Label => "aria-label",
            AriaAttribute::Level => "aria-level",
            AriaAttribute::PosInSet => "aria-posinset",
            AriaAttribute::SetSize => "aria-setsize",
        }
    }

    pub fn kind(&self) -> AriaKind {
        match self {
            AriaAttribute::Hidden | AriaAttribute::Expanded | AriaAttribute::Selected => {
                AriaKind::Boolean
            }
            AriaAttribute::Controls | AriaAttribute::LabelledBy => AriaKind::IdList,
            AriaAttribute::Label => AriaKind::Text,
            AriaAttribute::Level | AriaAttribute::PosInSet | AriaAttribute::SetSize => {
                AriaKind::Integer
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AriaValue {
    Bool(bool),
    Text(String),
    Integer(i64),
    List(Vec<String>),
}

impl AriaValue {
    fn kind(&self) -> AriaKind {
        match self {
            AriaValue::Bool(_) => AriaKind::Boolean,
            AriaValue::Text(_) => AriaKind::Text,
            AriaValue::Integer(_) => AriaKind::Integer,
            AriaValue::List(_) => AriaKind::IdList,
        }
    }

    fn describe(&self) -> String {
        match self {
            AriaValue::Bool(b) => format!("boolean {}", b),
            AriaValue::Text(s) => format!("string {:?}", s),
            AriaValue::Integer(n) => format!("integer {}", n),
            AriaValue::List(ids) => format!("list {:?}", ids),
        }
    }

    /// Serialized attribute text
    fn render(&self) -> String {
        match self {
            AriaValue::Bool(b) => b.to_string(),
            AriaValue::Text(s) => s.clone(),
            AriaValue::Integer(n) => n.to_string(),
            AriaValue::List(ids) => ids.join(" "),
        }
    }
}

fn mismatch(attribute: AriaAttribute, actual: String) -> DomError {
    DomError::InvalidConfiguration {
        attribute: attribute.name().to_string(),
        expected: attribute.kind().as_str().to_string(),
        actual,
    }
}

/// Write `value` to `attribute`, checking the value kind first.
///
/// A single id is accepted where an id list is expected.
pub fn set<H: Host + ?Sized>(
    host: &mut H,
    element: ElementId,
    attribute: AriaAttribute,
    value: AriaValue,
) -> Result<()> {
    let expected = attribute.kind();
    let accepted = value.kind() == expected
        || (expected == AriaKind::IdList && value.kind() == AriaKind::Text);
    if !accepted {
        return Err(mismatch(attribute, value.describe()));
    }

    host.set_attribute(element, attribute.name(), &value.render())
}

pub fn get_bool<H: Host + ?Sized>(
    host: &H,
    element: ElementId,
    attribute: AriaAttribute,
) -> Result<Option<bool>> {
    if attribute.kind() != AriaKind::Boolean {
        return Err(mismatch(attribute, "boolean read".to_string()));
    }

    match host.get_attribute(element, attribute.name()) {
        None => Ok(None),
        Some(raw) => match raw.as_str() {
            "true" => Ok(Some(true)),
            "false" => Ok(Some(false)),
            _ => Err(mismatch(attribute, format!("{:?}", raw))),
        },
    }
}

pub fn get_integer<H: Host + ?Sized>(
    host: &H,
    element: ElementId,
    attribute: AriaAttribute,
) -> Result<Option<i64>> {
    if attribute.kind() != AriaKind::Integer {
        return Err(mismatch(attribute, "integer read".to_string()));
    }

    host.get_attribute(element, attribute.name())
        .map(|raw| {
            raw.trim()
                .parse::<i64>()
                .map_err(|_| mismatch(attribute, format!("{:?}", raw)))
        })
        .transpose()
}

pub fn get_list<H: Host + ?Sized>(
    host: &H,
    element: ElementId,
    attribute: AriaAttribute,
) -> Result<Vec<String>> {
    if attribute.kind() != AriaKind::IdList {
        return Err(mismatch(attribute, "id list read".to_string()));
    }

    Ok(host
        .get_attribute(element, attribute.name())
        .map(|raw| classes::tokens(&raw).map(str::to_string).collect())
        .unwrap_or_default())
}

pub fn hidden<H: Host + ?Sized>(host: &mut H, element: ElementId, value: bool) -> Result<()> {
    set(host, element, AriaAttribute::Hidden, AriaValue::Bool(value))
}

pub fn controls<H: Host + ?Sized>(host: &mut H, element: ElementId, id: &str) -> Result<()> {
    set(
        host,
        element,
        AriaAttribute::Controls,
        AriaValue::Text(id.to_string()),
    )
}

pub fn labelled_by<H: Host + ?Sized>(host: &mut H, element: ElementId, id: &str) -> Result<()> {
    set(
        host,
        element,
        AriaAttribute::LabelledBy,
        AriaValue::Text(id.to_string()),
    )
}
