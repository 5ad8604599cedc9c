use serde_json::Value;

/// An ordered list of candidate accessor paths plus a default.
///
/// Every canonical field of an agent export is extracted through one of these
/// chains. Each path is a dot-separated key sequence (`"conversationFlow.nodes"`)
/// representing where one historical schema dialect stores the field. Paths
/// are probed left to right and the first defined, non-null value wins; if
/// none match, the chain's default is used. Dialect support stays additive:
/// recognizing a new export shape means appending a path, not branching.
#[derive(Debug, Clone, Copy)]
pub struct FieldChain {
    pub paths: &'static [&'static str],
    pub default: &'static str,
}

impl FieldChain {
    pub const fn new(paths: &'static [&'static str], default: &'static str) -> Self {
        Self { paths, default }
    }

    /// Resolves the chain against `root` and coerces the winner to a string.
    ///
    /// A path that wins with a non-scalar value still ends the probe; the
    /// chain then falls back to its default rather than trying later paths.
    pub fn resolve_str(&self, root: &Value) -> String {
        resolve(root, self.paths)
            .and_then(coerce_str)
            .unwrap_or_else(|| self.default.to_string())
    }

    /// Resolves the chain to the raw JSON value, if any path matches.
    pub fn resolve_value<'a>(&self, root: &'a Value) -> Option<&'a Value> {
        resolve(root, self.paths)
    }

    /// Resolves the chain to an array, defaulting to the empty slice.
    pub fn resolve_array<'a>(&self, root: &'a Value) -> &'a [Value] {
        resolve(root, self.paths)
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

/// Walks a single dot-separated accessor path into a JSON value.
///
/// Returns `None` for a missing key, a non-object intermediate, or an
/// explicit `null` leaf; all three count as "this dialect does not define
/// the field".
pub fn probe<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let mut current = root;
    for segment in path.split('.') {
        current = current.get(segment)?;
    }
    if current.is_null() { None } else { Some(current) }
}

/// Probes `paths` in order and returns the first defined, non-null value.
pub fn resolve<'a>(root: &'a Value, paths: &[&str]) -> Option<&'a Value> {
    paths.iter().find_map(|path| probe(root, path))
}

/// Coerces a scalar JSON value to its string form.
///
/// Strings pass through untouched; numbers and booleans use their JSON
/// rendering. Arrays and objects do not coerce.
pub fn coerce_str(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Collects the scalar entries of an array value into strings.
///
/// Non-scalar entries are dropped; a non-array input yields an empty list.
pub fn coerce_str_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(coerce_str).collect())
        .unwrap_or_default()
}
