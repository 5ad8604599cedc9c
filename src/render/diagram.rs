use super::text::{sanitize_id, sanitize_label};
use crate::export::{AgentDocument, AgentNode};
use std::fmt::Write;

const NODE_LABEL_MAX: usize = 25;
const EDGE_LABEL_MAX: usize = 15;

/// Produces the directed-graph description for a document. Total.
///
/// Output is line-oriented flowchart source: a `graph TD` header, one node
/// declaration per node in document order, then one line per retained edge,
/// nodes iterated in order and each node's edges in their aggregation order.
pub fn to_diagram(doc: &AgentDocument) -> String {
    let mut output = String::new();
    writeln!(&mut output, "graph TD").unwrap();

    if doc.nodes.is_empty() {
        writeln!(&mut output, "    empty[No nodes found]").unwrap();
        return output;
    }

    for node in &doc.nodes {
        let id = sanitize_id(&node.id);
        let label = sanitize_label(&node.name, NODE_LABEL_MAX);
        writeln!(&mut output, "    {}", shape_declaration(node, &id, &label)).unwrap();
    }

    for node in &doc.nodes {
        let source = sanitize_id(&node.id);
        for edge in &node.next {
            if !edge.is_usable() {
                continue;
            }
            let target = sanitize_id(&edge.target_node_id);
            match edge.condition.as_str() {
                "default" => writeln!(&mut output, "    {} --> {}", source, target).unwrap(),
                "Else" => {
                    writeln!(&mut output, "    {} -->|Else| {}", source, target).unwrap()
                }
                other => writeln!(
                    &mut output,
                    "    {} -->|{}| {}",
                    source,
                    sanitize_label(other, EDGE_LABEL_MAX),
                    target
                )
                .unwrap(),
            }
        }
    }

    output
}

/// Picks the shape brackets for a node declaration. First matching rule wins:
/// terminal, start circle, decision diamond, subroutine, plain rectangle.
fn shape_declaration(node: &AgentNode, id: &str, label: &str) -> String {
    if node.node_type == "end" {
        format!("{}([{}])", id, label)
    } else if node.id.contains("start") {
        format!("{}(({}))", id, label)
    } else if node.node_type == "branch" {
        format!("{}{{{}}}", id, label)
    } else if node.node_type == "function" {
        format!("{}[[{}]]", id, label)
    } else {
        format!("{}[{}]", id, label)
    }
}
