//! Interactive session: the compute-then-render loop.
//!
//! RULES:
//!   - The session owns the only current ParameterSet.
//!   - A change is validated before it replaces the current set;
//!     invalid values never reach the model.
//!   - state() evaluates the whole table at once. Callers render
//!     only complete tables.

use crate::{
    command::{Command, Outcome},
    config::ParameterSet,
    error::ModelResult,
    model::RevenueModel,
    report::Report,
    rounding::RoundingPolicy,
    table::RevenueTable,
};
use serde::Serialize;

/// What the UI sees after each command: the outcome and a complete table.
#[derive(Debug, Clone, Serialize)]
pub struct UiState<'a> {
    #[serde(flatten)]
    pub outcome: &'a Outcome,
    pub params:  &'a ParameterSet,
    pub table:   RevenueTable,
}

/// Answer to one line of the JSON command protocol.
#[derive(Debug, Clone, PartialEq)]
pub enum LineReply {
    /// Blank line, nothing to send.
    Skip,
    /// One JSON value to write back: the new state, or `{"error": ...}`.
    Reply(serde_json::Value),
    Quit,
}

pub struct Session {
    params: ParameterSet,
    model:  RevenueModel,
}

impl Session {
    /// Start from a Parameter Set. Out-of-range sets are refused.
    pub fn new(params: ParameterSet, rounding: RoundingPolicy) -> ModelResult<Self> {
        params.ensure_valid()?;
        Ok(Self {
            params,
            model: RevenueModel::new(rounding),
        })
    }

    pub fn with_defaults() -> Self {
        Self {
            params: ParameterSet::default(),
            model:  RevenueModel::default(),
        }
    }

    pub fn params(&self) -> &ParameterSet {
        &self.params
    }

    pub fn apply(&mut self, command: Command) -> Outcome {
        match command {
            Command::GetState => Outcome::Unchanged,
            Command::Quit => Outcome::Quit,
            Command::Reset => self.replace(ParameterSet::default(), "reset"),
            Command::SetView { annual } => {
                let mut next = self.params.clone();
                next.annual_view = annual;
                self.replace(next, "annual_view")
            }
            Command::Set { name, value } => {
                let raw = match &value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                let mut next = self.params.clone();
                match next.set_by_name(&name, &raw) {
                    Ok(()) => self.replace(next, &name),
                    Err(e) => {
                        log::warn!("session: rejected {name}={raw}: {e}");
                        Outcome::Rejected { reason: e.to_string() }
                    }
                }
            }
        }
    }

    fn replace(&mut self, next: ParameterSet, what: &str) -> Outcome {
        if next == self.params {
            return Outcome::Unchanged;
        }
        log::info!("session: {what} changed");
        self.params = next;
        Outcome::Updated
    }

    pub fn state(&self) -> RevenueTable {
        self.model.evaluate(&self.params)
    }

    pub fn report(&self) -> Report {
        Report::build(&self.params, self.state())
    }

    /// Handle one line of the JSON command protocol. A malformed line
    /// yields an `{"error": ...}` reply and leaves the session as it was.
    pub fn handle_line(&mut self, line: &str) -> ModelResult<LineReply> {
        if line.trim().is_empty() {
            return Ok(LineReply::Skip);
        }
        let cmd: Command = match serde_json::from_str(line) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("session: malformed command line: {e}");
                return Ok(LineReply::Reply(serde_json::json!({ "error": e.to_string() })));
            }
        };

        let outcome = self.apply(cmd);
        if outcome == Outcome::Quit {
            return Ok(LineReply::Quit);
        }
        let state = UiState {
            outcome: &outcome,
            params:  &self.params,
            table:   self.state(),
        };
        Ok(LineReply::Reply(serde_json::to_value(&state)?))
    }
}
