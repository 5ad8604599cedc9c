//! # Seizu - Voice-Agent Export Normalizer and Document Generator
//!
//! **Seizu** ingests a JSON export describing a conversational voice agent,
//! produced by any of several historical schema dialects, and normalizes it
//! into one canonical in-memory model. From that model it deterministically
//! derives three artifacts: a flowchart diagram description, a Markdown
//! document, and a standalone HTML document.
//!
//! ## Core Workflow
//!
//! The engine is dialect-agnostic. Every canonical field is resolved through
//! an ordered chain of candidate accessor paths, so exports from old and new
//! schema versions normalize without failing on missing data. The primary
//! workflow is:
//!
//! 1.  **Normalize**: Parse the raw export text with [`export::normalize`].
//!     The only
//!     failure mode is input that is not syntactically valid JSON; any valid
//!     JSON value yields a well-defined [`AgentDocument`](export::AgentDocument).
//! 2.  **Generate**: Hand the document to [`to_diagram`](render::to_diagram),
//!     [`to_markdown`](render::to_markdown), or [`to_html`](render::to_html).
//!     All three are total and produce byte-stable, order-sensitive text.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use seizu::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let raw = std::fs::read_to_string("agent_export.json")?;
//!
//!     // Normalize the export into the canonical model.
//!     let doc = normalize(&raw)?;
//!     println!("Agent: {} ({} nodes)", doc.name, doc.nodes.len());
//!
//!     // Derive the three artifacts.
//!     let diagram = to_diagram(&doc);
//!     let markdown = to_markdown(&doc);
//!     // No pre-rendered diagram fragment available; the HTML falls back to
//!     // embedding the diagram source for client-side rendering.
//!     let html = to_html(&doc, None);
//!
//!     std::fs::write("agent.mmd", diagram)?;
//!     std::fs::write("agent.md", markdown)?;
//!     std::fs::write("agent.html", html)?;
//!     Ok(())
//! }
//! ```
//!
//! ## Fidelity Notes
//!
//! Field text is interpolated into the Markdown and HTML artifacts without
//! escaping; this is part of the byte-for-byte contract with existing
//! consumers, and every interpolation site routes through
//! [`render::text::literal`] so an escaping policy would be a single-site
//! change. A node lacking an id in every dialect receives a random token,
//! so such ids are not stable across normalization passes.

pub mod error;
pub mod export;
pub mod prelude;
pub mod render;
