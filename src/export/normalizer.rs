use super::document::{AgentDocument, AgentEdge, AgentNode, AgentTool, AnalysisField};
use super::resolve::{FieldChain, coerce_str_list, resolve};
use super::settings::assemble_settings;
use crate::error::NormalizeError;
use rand::Rng;
use serde_json::Value;

// Agent-level chains. Order is significant: earlier paths belong to newer
// dialects and win over the spellings they replaced.
const AGENT_ID: FieldChain = FieldChain::new(&["agent_id", "id", "agentId"], "unknown");
const AGENT_NAME: FieldChain =
    FieldChain::new(&["agent_name", "name", "agentName"], "Unnamed Agent");
const AGENT_DESCRIPTION: FieldChain =
    FieldChain::new(&["description", "version_title", "desc"], "");
const GLOBAL_PROMPT: FieldChain =
    FieldChain::new(&["conversationFlow.global_prompt", "global_prompt"], "");
const NODE_LIST: FieldChain =
    FieldChain::new(&["conversationFlow.nodes", "nodes", "flow.nodes", "steps"], "");

// Node-level chains.
const NODE_ID: FieldChain = FieldChain::new(&["id", "node_id", "nodeId"], "");
const NODE_NAME: FieldChain = FieldChain::new(&["name", "label", "title"], "Unnamed Node");
const NODE_TYPE: FieldChain = FieldChain::new(&["type", "node_type", "nodeType"], "unknown");
const NODE_PROMPT: FieldChain =
    FieldChain::new(&["instruction.text", "prompt", "instructions", "content"], "");

// Edge-level chains, shared by every edge source.
const EDGE_TARGET: FieldChain = FieldChain::new(
    &["destination_node_id", "targetNodeId", "target", "next_node"],
    "",
);
const EDGE_CONDITION: FieldChain = FieldChain::new(
    &["transition_condition.prompt", "condition", "label"],
    "default",
);

// Distinguished edge objects hanging off a node.
const ELSE_EDGE_PATHS: &[&str] = &["else_edge", "elseEdge"];
const SKIP_EDGE_PATHS: &[&str] = &["skip_response_edge", "skipResponseEdge"];

// Tool-level chains.
const TOOL_LIST: FieldChain = FieldChain::new(&["general_tools", "tools"], "");
const TOOL_ID: FieldChain = FieldChain::new(&["tool_id", "id"], "");
const TOOL_NAME: FieldChain = FieldChain::new(&["name", "tool_name"], "Unnamed Tool");
const TOOL_TYPE: FieldChain = FieldChain::new(&["type", "tool_type"], "custom");
const TOOL_DESCRIPTION: FieldChain = FieldChain::new(&["description", "desc"], "");

// Post-call analysis chains.
const ANALYSIS_LIST: FieldChain =
    FieldChain::new(&["post_call_analysis_data", "postCallAnalysis"], "");
const ANALYSIS_NAME: FieldChain = FieldChain::new(&["name"], "");
const ANALYSIS_DESCRIPTION: FieldChain = FieldChain::new(&["description"], "");
const ANALYSIS_TYPE: FieldChain = FieldChain::new(&["type"], "string");

/// Parses raw export text and normalizes it into the canonical model.
///
/// This is the only fallible operation in the crate: it fails exactly when
/// `raw_text` is not syntactically valid JSON. Any valid JSON value,
/// including `{}` or a bare scalar, normalizes to a well-defined document.
pub fn normalize(raw_text: &str) -> Result<AgentDocument, NormalizeError> {
    let raw: Value = serde_json::from_str(raw_text)
        .map_err(|e| NormalizeError::MalformedInput(e.to_string()))?;
    Ok(normalize_value(raw))
}

/// Normalizes an already-parsed export value. Total.
pub fn normalize_value(raw: Value) -> AgentDocument {
    let nodes = NODE_LIST
        .resolve_array(&raw)
        .iter()
        .map(normalize_node)
        .collect();

    let tools = TOOL_LIST
        .resolve_array(&raw)
        .iter()
        .map(normalize_tool)
        .collect();

    let post_call_analysis = ANALYSIS_LIST
        .resolve_array(&raw)
        .iter()
        .map(normalize_analysis_field)
        .collect();

    AgentDocument {
        id: AGENT_ID.resolve_str(&raw),
        name: AGENT_NAME.resolve_str(&raw),
        description: AGENT_DESCRIPTION.resolve_str(&raw),
        global_prompt: GLOBAL_PROMPT.resolve_str(&raw),
        settings: assemble_settings(&raw),
        nodes,
        tools,
        post_call_analysis,
        raw_json: raw,
    }
}

fn normalize_node(node: &Value) -> AgentNode {
    let id = {
        let resolved = NODE_ID.resolve_str(node);
        if resolved.is_empty() {
            random_node_id()
        } else {
            resolved
        }
    };

    let conditions = node
        .get("conditions")
        .map(coerce_str_list)
        .unwrap_or_default();

    AgentNode {
        id,
        name: NODE_NAME.resolve_str(node),
        node_type: NODE_TYPE.resolve_str(node),
        prompt: NODE_PROMPT.resolve_str(node),
        conditions,
        next: collect_edges(node),
    }
}

/// Aggregates a node's outgoing edges from its four possible sources, in a
/// fixed order that also governs generator output order: the generic edges
/// collection, the distinguished else edge, the distinguished skip edge, and
/// the legacy flat `next` array. Sources concatenate without deduplication.
fn collect_edges(node: &Value) -> Vec<AgentEdge> {
    let mut edges = Vec::new();

    if let Some(entries) = node.get("edges").and_then(Value::as_array) {
        for entry in entries {
            let target = EDGE_TARGET.resolve_str(entry);
            if target.is_empty() {
                continue;
            }
            edges.push(AgentEdge::new(EDGE_CONDITION.resolve_str(entry), target));
        }
    }

    if let Some(else_edge) = resolve(node, ELSE_EDGE_PATHS) {
        let target = EDGE_TARGET.resolve_str(else_edge);
        if !target.is_empty() {
            edges.push(AgentEdge::new("Else", target));
        }
    }

    if let Some(skip_edge) = resolve(node, SKIP_EDGE_PATHS) {
        let target = EDGE_TARGET.resolve_str(skip_edge);
        if !target.is_empty() {
            edges.push(AgentEdge::new("Skip Response", target));
        }
    }

    if let Some(entries) = node.get("next").and_then(Value::as_array) {
        for entry in entries {
            edges.push(AgentEdge::new(
                EDGE_CONDITION.resolve_str(entry),
                EDGE_TARGET.resolve_str(entry),
            ));
        }
    }

    edges
}

fn normalize_tool(tool: &Value) -> AgentTool {
    AgentTool {
        id: TOOL_ID.resolve_str(tool),
        name: TOOL_NAME.resolve_str(tool),
        tool_type: TOOL_TYPE.resolve_str(tool),
        description: TOOL_DESCRIPTION.resolve_str(tool),
    }
}

fn normalize_analysis_field(field: &Value) -> AnalysisField {
    AnalysisField {
        name: ANALYSIS_NAME.resolve_str(field),
        description: ANALYSIS_DESCRIPTION.resolve_str(field),
        field_type: ANALYSIS_TYPE.resolve_str(field),
        choices: field.get("choices").map(coerce_str_list),
        examples: field.get("examples").map(coerce_str_list),
    }
}

/// Fallback id for a node no dialect assigns one to. Random, so repeated
/// normalization of the same input is not referentially stable for such
/// nodes.
fn random_node_id() -> String {
    format!("node_{:08x}", rand::rng().random::<u32>())
}
