use serde::Serialize;
use std::fmt;

/// The canonical, normalized representation of an agent export.
///
/// Every generator consumes this model and nothing else. It is constructed
/// once per normalization pass from immutable source JSON and never mutated
/// afterward; two passes over identical input produce structurally equal but
/// distinct documents.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentDocument {
    pub id: String,
    pub name: String,
    pub description: String,
    pub global_prompt: String,
    pub settings: Settings,
    pub nodes: Vec<AgentNode>,
    pub tools: Vec<AgentTool>,
    pub post_call_analysis: Vec<AnalysisField>,
    /// The original parsed JSON, retained verbatim so every output artifact
    /// can offer a lossless escape hatch back to the source.
    pub raw_json: serde_json::Value,
}

/// A single conversation node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentNode {
    /// Falls back to a random token when no dialect defines an id, so it is
    /// NOT referentially stable across normalization passes.
    pub id: String,
    pub name: String,
    /// Open string. `start`/`end`/`branch`/`function`/`conversation` get
    /// dedicated treatment in the diagram; anything else renders generically.
    pub node_type: String,
    pub prompt: String,
    /// Free-text annotations, not transition targets.
    pub conditions: Vec<String>,
    pub next: Vec<AgentEdge>,
}

/// A labeled transition between nodes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentEdge {
    /// `"default"` means "no label"; `"Else"` is a distinguished label.
    pub condition: String,
    /// May be empty ("drop this edge") or reference a node absent from the
    /// document (a dangling edge). Generators tolerate both.
    pub target_node_id: String,
}

impl AgentEdge {
    pub fn new(condition: impl Into<String>, target_node_id: impl Into<String>) -> Self {
        Self {
            condition: condition.into(),
            target_node_id: target_node_id.into(),
        }
    }

    /// Whether the edge carries a real target and survives rendering.
    pub fn is_usable(&self) -> bool {
        !self.target_node_id.is_empty()
    }
}

/// An external tool the agent can invoke. Independent of any node.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgentTool {
    pub id: String,
    pub name: String,
    pub tool_type: String,
    pub description: String,
}

/// One field extracted by post-call analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisField {
    pub name: String,
    pub description: String,
    pub field_type: String,
    pub choices: Option<Vec<String>>,
    pub examples: Option<Vec<String>>,
}

/// A single settings value.
///
/// A small tagged union keeps the renderers total and typed while the
/// `Other` variant preserves the "any extra key may appear" behavior of the
/// legacy settings object.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum SettingValue {
    Text(String),
    Number(f64),
    Bool(bool),
    /// A millisecond duration already formatted for display ("45s", "1.5 min").
    Duration(String),
    Other(serde_json::Value),
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingValue::Text(s) => write!(f, "{}", s),
            SettingValue::Number(n) => {
                if n.fract() == 0.0 {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
            SettingValue::Bool(b) => write!(f, "{}", b),
            SettingValue::Duration(s) => write!(f, "{}", s),
            SettingValue::Other(v) => {
                write!(f, "{}", serde_json::to_string(v).unwrap_or_default())
            }
        }
    }
}

impl From<&serde_json::Value> for SettingValue {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::String(s) => SettingValue::Text(s.clone()),
            serde_json::Value::Number(n) => {
                SettingValue::Number(n.as_f64().unwrap_or_default())
            }
            serde_json::Value::Bool(b) => SettingValue::Bool(*b),
            other => SettingValue::Other(other.clone()),
        }
    }
}

/// An insertion-ordered settings bag.
///
/// The final content depends on merge order, not just key presence: a legacy
/// settings object merged after the named probes overwrites them in place,
/// keeping the key's original position.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Settings(Vec<(String, SettingValue)>);

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites a key, preserving its first insertion position.
    pub fn insert(&mut self, key: impl Into<String>, value: SettingValue) {
        let key = key.into();
        match self.0.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => *slot = value,
            None => self.0.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&SettingValue> {
        self.0
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SettingValue)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }
}
