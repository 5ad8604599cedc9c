use super::diagram::to_diagram;
use super::text::{humanize_key, literal};
use super::{transition_list, value_list};
use crate::export::AgentDocument;
use std::fmt::Write;

/// Renders a document as a single Markdown artifact. Total.
///
/// Sections appear in fixed order and are omitted entirely when their guard
/// is false, so byte-stable output only depends on document content.
pub fn to_markdown(doc: &AgentDocument) -> String {
    let mut out = String::new();

    writeln!(&mut out, "# {}", literal(&doc.name)).unwrap();
    writeln!(&mut out).unwrap();

    writeln!(&mut out, "## Overview").unwrap();
    writeln!(&mut out).unwrap();
    writeln!(&mut out, "| Field | Value |").unwrap();
    writeln!(&mut out, "| --- | --- |").unwrap();
    writeln!(&mut out, "| Agent ID | `{}` |", literal(&doc.id)).unwrap();
    writeln!(&mut out, "| Name | {} |", literal(&doc.name)).unwrap();
    if !doc.description.is_empty() {
        writeln!(&mut out, "| Description | {} |", literal(&doc.description)).unwrap();
    }
    writeln!(&mut out).unwrap();

    if !doc.settings.is_empty() {
        writeln!(&mut out, "## Settings").unwrap();
        writeln!(&mut out).unwrap();
        writeln!(&mut out, "| Setting | Value |").unwrap();
        writeln!(&mut out, "| --- | --- |").unwrap();
        for (key, value) in doc.settings.iter() {
            writeln!(
                &mut out,
                "| {} | {} |",
                humanize_key(key),
                literal(&value.to_string())
            )
            .unwrap();
        }
        writeln!(&mut out).unwrap();
    }

    if !doc.global_prompt.is_empty() {
        writeln!(&mut out, "## Global Prompt").unwrap();
        writeln!(&mut out).unwrap();
        writeln!(&mut out, "```").unwrap();
        writeln!(&mut out, "{}", literal(&doc.global_prompt)).unwrap();
        writeln!(&mut out, "```").unwrap();
        writeln!(&mut out).unwrap();
    }

    writeln!(&mut out, "## Conversation Nodes").unwrap();
    writeln!(&mut out).unwrap();
    writeln!(&mut out, "Total nodes: {}", doc.nodes.len()).unwrap();
    writeln!(&mut out).unwrap();
    writeln!(&mut out, "| ID | Name | Type | Transitions |").unwrap();
    writeln!(&mut out, "| --- | --- | --- | --- |").unwrap();
    for node in &doc.nodes {
        writeln!(
            &mut out,
            "| `{}` | {} | {} | {} |",
            literal(&node.id),
            literal(&node.name),
            literal(&node.node_type),
            transition_list(&node.next)
        )
        .unwrap();
    }
    writeln!(&mut out).unwrap();

    writeln!(&mut out, "## Flow Diagram").unwrap();
    writeln!(&mut out).unwrap();
    writeln!(&mut out, "```mermaid").unwrap();
    write!(&mut out, "{}", to_diagram(doc)).unwrap();
    writeln!(&mut out, "```").unwrap();
    writeln!(&mut out).unwrap();

    for node in &doc.nodes {
        if node.prompt.is_empty() {
            continue;
        }
        writeln!(
            &mut out,
            "### {} (`{}`)",
            literal(&node.name),
            literal(&node.id)
        )
        .unwrap();
        writeln!(&mut out).unwrap();
        writeln!(&mut out, "```").unwrap();
        writeln!(&mut out, "{}", literal(&node.prompt)).unwrap();
        writeln!(&mut out, "```").unwrap();
        writeln!(&mut out).unwrap();
    }

    if !doc.tools.is_empty() {
        writeln!(&mut out, "## Tools").unwrap();
        writeln!(&mut out).unwrap();
        writeln!(&mut out, "| ID | Name | Type | Description |").unwrap();
        writeln!(&mut out, "| --- | --- | --- | --- |").unwrap();
        for tool in &doc.tools {
            writeln!(
                &mut out,
                "| `{}` | {} | {} | {} |",
                literal(&tool.id),
                literal(&tool.name),
                literal(&tool.tool_type),
                literal(&tool.description)
            )
            .unwrap();
        }
        writeln!(&mut out).unwrap();
    }

    if !doc.post_call_analysis.is_empty() {
        writeln!(&mut out, "## Post-Call Analysis").unwrap();
        writeln!(&mut out).unwrap();
        writeln!(&mut out, "| Name | Type | Description | Values |").unwrap();
        writeln!(&mut out, "| --- | --- | --- | --- |").unwrap();
        for field in &doc.post_call_analysis {
            writeln!(
                &mut out,
                "| {} | {} | {} | {} |",
                literal(&field.name),
                literal(&field.field_type),
                literal(&field.description),
                value_list(field.choices.as_deref(), field.examples.as_deref())
            )
            .unwrap();
        }
        writeln!(&mut out).unwrap();
    }

    writeln!(&mut out, "## Raw Export").unwrap();
    writeln!(&mut out).unwrap();
    writeln!(&mut out, "<details>").unwrap();
    writeln!(&mut out, "<summary>Raw JSON</summary>").unwrap();
    writeln!(&mut out).unwrap();
    writeln!(&mut out, "```json").unwrap();
    writeln!(
        &mut out,
        "{}",
        serde_json::to_string_pretty(&doc.raw_json).unwrap_or_default()
    )
    .unwrap();
    writeln!(&mut out, "```").unwrap();
    writeln!(&mut out).unwrap();
    writeln!(&mut out, "</details>").unwrap();

    out
}
