use thiserror::Error;

/// Errors that can occur while normalizing an agent export.
///
/// Normalization is total over syntactically valid JSON: structurally absent
/// or misshapen fields fall back to documented defaults and are never an
/// error. The only failure mode is input that does not tokenize as JSON.
#[derive(Error, Debug, Clone)]
pub enum NormalizeError {
    #[error("Agent export is not valid JSON: {0}")]
    MalformedInput(String),
}
