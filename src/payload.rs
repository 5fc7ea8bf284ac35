use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Issue fields accepted by the create and edit endpoints.
///
/// No local validation happens here: invalid variants (empty title,
/// out-of-range milestone) serialize just as well as valid ones, and the
/// remote service's status code is the only verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IssuePayload {
    pub title: String,
    pub body: String,
    pub state: IssueState,
    pub milestone: u64,
    pub labels: Vec<String>,
    pub assignees: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueState {
    Open,
    Closed,
}

impl IssuePayload {
    /// Serializes the payload to the wire-format JSON string the API
    /// endpoints take as request body.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize issue payload")
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse issue payload")
    }
}

/// Looks up a single field of a wire-format payload by key.
pub fn value_for_key(json: &str, key: &str) -> Result<Value> {
    let value: Value = serde_json::from_str(json).context("Failed to parse issue payload")?;
    value
        .get(key)
        .cloned()
        .with_context(|| format!("No field `{key}` in issue payload"))
}
