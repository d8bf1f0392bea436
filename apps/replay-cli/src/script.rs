//! JSONL move scripts: one `{"seat":1,"move":"call","args":["false"]}` per line.

use serde::Deserialize;
use serde_json::Value;

use euchre_engine::Seat;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ScriptLine {
    pub seat: Seat,
    #[serde(rename = "move")]
    pub name: String,
    #[serde(default)]
    pub args: Vec<Value>,
}

impl ScriptLine {
    pub fn parse(line: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(line)
    }

    /// Arguments as the text the dispatcher expects; `false` and `"false"` are the same.
    pub fn arg_strings(&self) -> Vec<String> {
        self.args
            .iter()
            .map(|v| match v {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect()
    }
}

/// Blank lines and `#` comments carry no move.
pub fn is_skippable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}
