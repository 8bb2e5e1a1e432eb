//! Panel State Machine
//!
//! ```text
//! Deselected  <-- toggle / select / deselect -->  Selected
//! ```
//!
//! Every panel starts deselected. There is no terminal state.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelState {
    /// Content visible, `aria-hidden="false"`, selected class present
    Selected,
    /// Content hidden, `aria-hidden="true"`
    #[default]
    Deselected,
}

impl PanelState {
    /// The state a toggle moves to
    pub fn toggled(&self) -> PanelState {
        match self {
            PanelState::Selected => PanelState::Deselected,
            PanelState::Deselected => PanelState::Selected,
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, PanelState::Selected)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelState::Selected => "selected",
            PanelState::Deselected => "deselected",
        }
    }
}

impl std::fmt::Display for PanelState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for PanelState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "selected" => Ok(PanelState::Selected),
            "deselected" => Ok(PanelState::Deselected),
            _ => Err(format!("Unknown panel state: {}", s)),
        }
    }
}
