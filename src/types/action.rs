//! Recommended support actions carried on assistant replies

use serde::{Deserialize, Serialize};

/// What a recommended action asks the host to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    /// Dial the crisis / emergency helpline
    Emergency,
    /// Open the counselor booking workflow
    Counselor,
    /// Open the resource catalog
    Resources,
    /// Continue the conversation with a follow-up prompt
    Followup,
}

/// A single recommended action attached to an assistant reply.
///
/// Actions are always produced fresh by the response selector; they have
/// no lifecycle of their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    pub kind: ActionKind,
    pub label: String,
    #[serde(default)]
    pub urgent: bool,
}

impl Action {
    /// Create a non-urgent action
    pub fn new(kind: ActionKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            urgent: false,
        }
    }

    /// Create an urgent action
    pub fn urgent(kind: ActionKind, label: impl Into<String>) -> Self {
        Self {
            kind,
            label: label.into(),
            urgent: true,
        }
    }
}

/// Resource catalog filter passed to the host on a resources dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceCategory {
    Crisis,
    Coping,
}
