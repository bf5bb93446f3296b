use crate::{AutoAction, AutoplayError};
use doudizhu_core::{Phase, Seat};
use serde::{Deserialize, Serialize};

/// One automated decision, as taken.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DecisionRecord {
    pub phase: Phase,
    pub seat: Seat,
    pub action: String,
}

/// Append-only record of a pilot's decisions, exportable as JSON lines.
#[derive(Debug, Default, Clone)]
pub struct Trace {
    records: Vec<DecisionRecord>,
}

impl Trace {
    pub fn record(&mut self, phase: Phase, seat: Seat, action: &AutoAction) {
        self.records.push(DecisionRecord {
            phase,
            seat,
            action: action.stable_key(),
        });
    }

    pub fn records(&self) -> &[DecisionRecord] {
        &self.records
    }

    pub fn to_jsonl(&self) -> Result<String, AutoplayError> {
        let mut out = String::new();
        for record in &self.records {
            out.push_str(&serde_json::to_string(record)?);
            out.push('\n');
        }
        Ok(out)
    }
}
