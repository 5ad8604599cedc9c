use super::diagram::to_diagram;
use super::text::{humanize_key, literal, truncate_chars};
use super::{transition_list, value_list};
use crate::export::AgentDocument;
use itertools::Itertools;
use std::fmt::Write;

const PROMPT_PREVIEW_MAX: usize = 200;

const STYLES: &str = r#"    body { font-family: -apple-system, "Segoe UI", Roboto, sans-serif; margin: 2rem auto; max-width: 960px; color: #1f2430; }
    h1 { border-bottom: 2px solid #e3e6ec; padding-bottom: 0.3rem; }
    h2 { margin-top: 2rem; }
    table { border-collapse: collapse; width: 100%; margin: 0.75rem 0; }
    th, td { border: 1px solid #d4d8e0; padding: 0.4rem 0.6rem; text-align: left; vertical-align: top; }
    th { background: #f3f5f8; }
    code { background: #f3f5f8; padding: 0.1rem 0.3rem; border-radius: 3px; }
    pre { background: #f7f8fa; border: 1px solid #e3e6ec; border-radius: 4px; padding: 0.75rem; overflow-x: auto; white-space: pre-wrap; }
    .prompt-block { margin-bottom: 1.25rem; }
    .diagram { margin: 1rem 0; text-align: center; }
    details { margin-top: 2rem; }
    summary { cursor: pointer; font-weight: 600; }"#;

/// Renders a document as one self-contained HTML artifact. Total.
///
/// When a pre-rendered diagram fragment is supplied it is embedded verbatim;
/// otherwise the raw diagram text goes into a `pre.mermaid` block and the
/// referenced mermaid script renders it client-side.
pub fn to_html(doc: &AgentDocument, rendered_diagram: Option<&str>) -> String {
    let mut out = String::new();

    writeln!(&mut out, "<!DOCTYPE html>").unwrap();
    writeln!(&mut out, "<html lang=\"en\">").unwrap();
    writeln!(&mut out, "<head>").unwrap();
    writeln!(&mut out, "  <meta charset=\"UTF-8\">").unwrap();
    writeln!(&mut out, "  <title>{}</title>", literal(&doc.name)).unwrap();
    writeln!(&mut out, "  <style>").unwrap();
    writeln!(&mut out, "{}", STYLES).unwrap();
    writeln!(&mut out, "  </style>").unwrap();
    writeln!(
        &mut out,
        "  <script src=\"https://cdn.jsdelivr.net/npm/mermaid@10/dist/mermaid.min.js\"></script>"
    )
    .unwrap();
    writeln!(&mut out, "</head>").unwrap();
    writeln!(&mut out, "<body>").unwrap();

    writeln!(&mut out, "<h1>{}</h1>", literal(&doc.name)).unwrap();

    writeln!(&mut out, "<h2>Overview</h2>").unwrap();
    writeln!(&mut out, "<table>").unwrap();
    writeln!(
        &mut out,
        "  <tr><th>Agent ID</th><td><code>{}</code></td></tr>",
        literal(&doc.id)
    )
    .unwrap();
    writeln!(
        &mut out,
        "  <tr><th>Name</th><td>{}</td></tr>",
        literal(&doc.name)
    )
    .unwrap();
    if !doc.description.is_empty() {
        writeln!(
            &mut out,
            "  <tr><th>Description</th><td>{}</td></tr>",
            literal(&doc.description)
        )
        .unwrap();
    }
    writeln!(&mut out, "</table>").unwrap();

    if !doc.settings.is_empty() {
        writeln!(&mut out, "<h2>Settings</h2>").unwrap();
        writeln!(&mut out, "<table>").unwrap();
        writeln!(&mut out, "  <tr><th>Setting</th><th>Value</th></tr>").unwrap();
        for (key, value) in doc.settings.iter() {
            writeln!(
                &mut out,
                "  <tr><td>{}</td><td>{}</td></tr>",
                humanize_key(key),
                literal(&value.to_string())
            )
            .unwrap();
        }
        writeln!(&mut out, "</table>").unwrap();
    }

    if !doc.global_prompt.is_empty() {
        writeln!(&mut out, "<h2>Global Prompt</h2>").unwrap();
        writeln!(&mut out, "<pre>{}</pre>", literal(&doc.global_prompt)).unwrap();
    }

    writeln!(&mut out, "<h2>Conversation Nodes</h2>").unwrap();
    writeln!(&mut out, "<table>").unwrap();
    writeln!(
        &mut out,
        "  <tr><th>ID</th><th>Name</th><th>Type</th><th>Prompt</th><th>Transitions</th></tr>"
    )
    .unwrap();
    for node in &doc.nodes {
        let preview = truncate_chars(&node.prompt, PROMPT_PREVIEW_MAX).replace('\n', "<br>");
        writeln!(
            &mut out,
            "  <tr><td><code>{}</code></td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            literal(&node.id),
            literal(&node.name),
            literal(&node.node_type),
            literal(&preview),
            transition_list(&node.next)
        )
        .unwrap();
    }
    writeln!(&mut out, "</table>").unwrap();

    writeln!(&mut out, "<h2>Flow Diagram</h2>").unwrap();
    writeln!(&mut out, "<div class=\"diagram\">").unwrap();
    match rendered_diagram {
        Some(markup) => writeln!(&mut out, "{}", literal(markup)).unwrap(),
        None => {
            writeln!(&mut out, "<pre class=\"mermaid\">").unwrap();
            write!(&mut out, "{}", to_diagram(doc)).unwrap();
            writeln!(&mut out, "</pre>").unwrap();
        }
    }
    writeln!(&mut out, "</div>").unwrap();

    for node in &doc.nodes {
        if node.prompt.is_empty() {
            continue;
        }
        writeln!(&mut out, "<div class=\"prompt-block\">").unwrap();
        writeln!(
            &mut out,
            "<h3>{} (<code>{}</code>)</h3>",
            literal(&node.name),
            literal(&node.id)
        )
        .unwrap();
        if !node.conditions.is_empty() {
            writeln!(
                &mut out,
                "<p>Conditions: {}</p>",
                literal(&node.conditions.iter().join("; "))
            )
            .unwrap();
        }
        writeln!(&mut out, "<pre>{}</pre>", literal(&node.prompt)).unwrap();
        writeln!(&mut out, "</div>").unwrap();
    }

    if !doc.tools.is_empty() {
        writeln!(&mut out, "<h2>Tools</h2>").unwrap();
        writeln!(&mut out, "<table>").unwrap();
        writeln!(
            &mut out,
            "  <tr><th>ID</th><th>Name</th><th>Type</th><th>Description</th></tr>"
        )
        .unwrap();
        for tool in &doc.tools {
            writeln!(
                &mut out,
                "  <tr><td><code>{}</code></td><td>{}</td><td>{}</td><td>{}</td></tr>",
                literal(&tool.id),
                literal(&tool.name),
                literal(&tool.tool_type),
                literal(&tool.description)
            )
            .unwrap();
        }
        writeln!(&mut out, "</table>").unwrap();
    }

    if !doc.post_call_analysis.is_empty() {
        writeln!(&mut out, "<h2>Post-Call Analysis</h2>").unwrap();
        writeln!(&mut out, "<table>").unwrap();
        writeln!(
            &mut out,
            "  <tr><th>Name</th><th>Type</th><th>Description</th><th>Values</th></tr>"
        )
        .unwrap();
        for field in &doc.post_call_analysis {
            writeln!(
                &mut out,
                "  <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                literal(&field.name),
                literal(&field.field_type),
                literal(&field.description),
                value_list(field.choices.as_deref(), field.examples.as_deref())
            )
            .unwrap();
        }
        writeln!(&mut out, "</table>").unwrap();
    }

    writeln!(&mut out, "<details>").unwrap();
    writeln!(&mut out, "<summary>Raw JSON</summary>").unwrap();
    writeln!(
        &mut out,
        "<pre>{}</pre>",
        literal(&serde_json::to_string_pretty(&doc.raw_json).unwrap_or_default())
    )
    .unwrap();
    writeln!(&mut out, "</details>").unwrap();

    writeln!(
        &mut out,
        "<script>mermaid.initialize({{ startOnLoad: true }});</script>"
    )
    .unwrap();
    writeln!(&mut out, "</body>").unwrap();
    writeln!(&mut out, "</html>").unwrap();

    out
}
