use serde::{Deserialize, Serialize};

/// Commands the UI layer sends to a session, one per interaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    GetState,
    /// Change one parameter. `value` may be a JSON number, bool or string.
    Set {
        name:  String,
        value: serde_json::Value,
    },
    SetView {
        annual: bool,
    },
    /// Back to the default Parameter Set.
    Reset,
    Quit,
}

/// What applying a command did to the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    Updated,
    Unchanged,
    /// The change was refused; the previous Parameter Set is still current.
    Rejected { reason: String },
    Quit,
}
