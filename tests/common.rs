//! Common test utilities for building agent exports and documents.
use seizu::prelude::*;
use serde_json::json;

/// A current-generation export: fields nested under `conversationFlow`,
/// snake_case names, edge objects with `transition_condition` prompts.
#[allow(dead_code)]
pub fn dialect_a_export() -> String {
    json!({
        "agent_id": "agent-7f3a",
        "agent_name": "Clinic Scheduler",
        "description": "Books and reschedules clinic appointments.",
        "conversationFlow": {
            "global_prompt": "You are a friendly scheduling assistant.",
            "nodes": [
                {
                    "id": "start-greeting",
                    "name": "Greeting",
                    "type": "conversation",
                    "instruction": { "type": "prompt", "text": "Greet the caller and ask how you can help." },
                    "edges": [
                        {
                            "transition_condition": { "type": "prompt", "prompt": "Caller wants to book" },
                            "destination_node_id": "book"
                        },
                        {
                            "transition_condition": { "type": "prompt", "prompt": "Caller wants to cancel" },
                            "destination_node_id": "cancel"
                        }
                    ],
                    "else_edge": { "destination_node_id": "clarify" }
                },
                {
                    "id": "book",
                    "name": "Book Appointment",
                    "type": "function",
                    "instruction": { "type": "prompt", "text": "Call the calendar tool and confirm a slot." },
                    "edges": [
                        { "destination_node_id": "end-call" }
                    ],
                    "skip_response_edge": { "destination_node_id": "end-call" }
                },
                {
                    "id": "cancel",
                    "name": "Cancel Appointment",
                    "type": "conversation",
                    "instruction": { "type": "prompt", "text": "Confirm which appointment to cancel." },
                    "conditions": ["caller verified", "appointment exists"],
                    "edges": [
                        { "destination_node_id": "end-call" }
                    ]
                },
                {
                    "id": "clarify",
                    "name": "Clarify Request",
                    "type": "branch",
                    "edges": [
                        { "destination_node_id": "end-call" }
                    ]
                },
                {
                    "id": "end-call",
                    "name": "Goodbye",
                    "type": "end",
                    "instruction": { "type": "prompt", "text": "Thank the caller and end the call." }
                }
            ]
        },
        "model": "gpt-4o",
        "temperature": 0.7,
        "language": "en-US",
        "voice_id": "nova",
        "responsiveness": 0.8,
        "interruption_sensitivity": 0.5,
        "ambient_sound": "office",
        "stt_mode": "fast",
        "max_call_duration_ms": 3_600_000,
        "reminder_trigger_ms": 15_000,
        "end_call_after_silence_ms": 600_000,
        "settings": {
            "temperature": 0.9,
            "webhookUrl": "https://example.com/hook",
            "retired": null
        },
        "general_tools": [
            {
                "tool_id": "tool-calendar",
                "name": "check_calendar",
                "type": "custom",
                "description": "Looks up free appointment slots."
            }
        ],
        "post_call_analysis_data": [
            {
                "type": "enum",
                "name": "outcome",
                "description": "What the call accomplished",
                "choices": ["booked", "cancelled", "no_action"]
            },
            {
                "type": "string",
                "name": "caller_mood",
                "description": "Perceived caller mood",
                "examples": ["calm", "frustrated"]
            }
        ]
    })
    .to_string()
}

/// A legacy flat export: camelCase names, `steps` for the node list, a flat
/// `next` array per node, and a free-form `config` object.
#[allow(dead_code)]
pub fn dialect_b_export() -> String {
    json!({
        "agentId": "legacy-42",
        "agentName": "Survey Bot",
        "desc": "Runs a short customer survey.",
        "global_prompt": "Keep answers short.",
        "steps": [
            {
                "nodeId": "intro",
                "title": "Intro",
                "nodeType": "conversation",
                "content": "Introduce the survey.",
                "next": [
                    { "condition": "ready", "targetNodeId": "q1" },
                    { "label": "not interested", "target": "bye" }
                ]
            },
            {
                "nodeId": "q1",
                "title": "Question 1",
                "nodeType": "conversation",
                "content": "Ask question one.",
                "next": [
                    { "targetNodeId": "bye" }
                ]
            },
            {
                "nodeId": "bye",
                "title": "Bye",
                "nodeType": "end"
            }
        ],
        "config": {
            "model": "gpt-3.5-turbo",
            "recordCalls": true
        }
    })
    .to_string()
}

/// The ten-node scenario: a start node branching to three topics, converging
/// through intermediate nodes to one end node. `wrapup` is reached but has
/// no outgoing edges; `voicemail` is a detached utility node.
#[allow(dead_code)]
pub fn scenario_export() -> String {
    let node = |id: &str, name: &str, node_type: &str, edges: serde_json::Value| {
        json!({
            "id": id,
            "name": name,
            "type": node_type,
            "instruction": { "type": "prompt", "text": format!("Handle the {} step.", name) },
            "edges": edges
        })
    };

    json!({
        "agent_id": "agent-scenario",
        "agent_name": "Triage Agent",
        "nodes": [
            node("start", "Welcome", "conversation", json!([
                { "transition_condition": { "prompt": "Billing question" }, "destination_node_id": "topic-billing" },
                { "transition_condition": { "prompt": "Support issue" }, "destination_node_id": "topic-support" },
                { "transition_condition": { "prompt": "Sales inquiry" }, "destination_node_id": "topic-sales" }
            ])),
            node("topic-billing", "Billing", "conversation", json!([
                { "destination_node_id": "gather-details" }
            ])),
            node("topic-support", "Support", "conversation", json!([
                { "destination_node_id": "gather-details" }
            ])),
            node("topic-sales", "Sales", "conversation", json!([
                { "destination_node_id": "wrapup" }
            ])),
            node("gather-details", "Gather Details", "conversation", json!([
                { "destination_node_id": "verify-account" }
            ])),
            node("verify-account", "Verify Account", "function", json!([
                { "destination_node_id": "confirm-resolution" }
            ])),
            node("confirm-resolution", "Confirm Resolution", "branch", json!([
                { "destination_node_id": "end-call" }
            ])),
            node("wrapup", "Wrap Up", "conversation", json!([])),
            node("end-call", "Goodbye", "end", json!([])),
            node("voicemail", "Voicemail", "conversation", json!([]))
        ]
    })
    .to_string()
}

/// Builds a document directly, bypassing normalization, for generator tests
/// that need full control over ids and edges.
#[allow(dead_code)]
pub fn build_doc(nodes: Vec<AgentNode>) -> AgentDocument {
    AgentDocument {
        id: "doc-1".to_string(),
        name: "Test Agent".to_string(),
        description: String::new(),
        global_prompt: String::new(),
        settings: Settings::new(),
        nodes,
        tools: Vec::new(),
        post_call_analysis: Vec::new(),
        raw_json: serde_json::Value::Null,
    }
}

/// Builds a single node with the given edges.
#[allow(dead_code)]
pub fn build_node(id: &str, name: &str, node_type: &str, next: Vec<AgentEdge>) -> AgentNode {
    AgentNode {
        id: id.to_string(),
        name: name.to_string(),
        node_type: node_type.to_string(),
        prompt: String::new(),
        conditions: Vec::new(),
        next,
    }
}
