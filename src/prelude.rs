//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the
//! seizu crate. Import this module to get access to the core functionality
//! without having to import each item individually.
//!
//! # Example
//!
//! ```rust,no_run
//! use seizu::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let raw = std::fs::read_to_string("agent_export.json")?;
//! let doc = normalize(&raw)?;
//!
//! let markdown = to_markdown(&doc);
//! println!("{}", markdown);
//! # Ok(())
//! # }
//! ```

// Normalization
pub use crate::export::{normalize, normalize_value};

// Canonical model
pub use crate::export::{
    AgentDocument, AgentEdge, AgentNode, AgentTool, AnalysisField, SettingValue, Settings,
};

// Generators
pub use crate::render::{to_diagram, to_html, to_markdown};

// Error types
pub use crate::error::NormalizeError;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
