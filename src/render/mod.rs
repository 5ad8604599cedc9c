pub mod diagram;
pub mod html;
pub mod markdown;
pub mod text;

pub use diagram::to_diagram;
pub use html::to_html;
pub use markdown::to_markdown;

use crate::export::AgentEdge;
use itertools::Itertools;
use self::text::literal;

/// Semicolon-joined `condition → target` pairs for a node's edge list; an
/// em-dash when no usable edge remains. A `"default"` condition renders as
/// an unlabeled arrow so all artifacts agree with the diagram's treatment.
fn transition_list(edges: &[AgentEdge]) -> String {
    let pairs = edges
        .iter()
        .filter(|edge| edge.is_usable())
        .map(|edge| {
            if edge.condition == "default" {
                format!("→ {}", literal(&edge.target_node_id))
            } else {
                format!(
                    "{} → {}",
                    literal(&edge.condition),
                    literal(&edge.target_node_id)
                )
            }
        })
        .collect::<Vec<_>>();

    if pairs.is_empty() {
        "—".to_string()
    } else {
        pairs.iter().join("; ")
    }
}

/// Analysis value column: choices when present, else examples, else em-dash.
fn value_list(choices: Option<&[String]>, examples: Option<&[String]>) -> String {
    match (choices, examples) {
        (Some(choices), _) if !choices.is_empty() => choices.iter().join(", "),
        (_, Some(examples)) if !examples.is_empty() => examples.iter().join(", "),
        _ => "—".to_string(),
    }
}
