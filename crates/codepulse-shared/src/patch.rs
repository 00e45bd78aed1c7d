//! JSON Patch (RFC 6902) documents over flat string-field targets.
//!
//! A document is an ordered list of operations. Paths are JSON Pointers naming
//! a single top-level property of the target, e.g. `/name` or `/urlHandle`.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// A single patch operation, tagged by its `op` member.
///
/// `op` names are accepted in any case on input and written in lowercase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "lowercase", try_from = "RawOperation")]
pub enum PatchOperation {
    Add { path: String, value: Value },
    Remove { path: String },
    Replace { path: String, value: Value },
    Move { from: String, path: String },
    Copy { from: String, path: String },
    Test { path: String, value: Value },
}

/// Wire shape of an operation before `op` is resolved.
#[derive(Deserialize)]
struct RawOperation {
    op: String,
    path: String,
    from: Option<String>,
    value: Option<Value>,
}

impl TryFrom<RawOperation> for PatchOperation {
    type Error = String;

    fn try_from(raw: RawOperation) -> Result<Self, Self::Error> {
        let RawOperation {
            op,
            path,
            from,
            value,
        } = raw;
        let from = || from.ok_or_else(|| format!("'{op}' operation requires 'from'"));
        let value = || value.ok_or_else(|| format!("'{op}' operation requires 'value'"));

        match op.to_ascii_lowercase().as_str() {
            "add" => Ok(Self::Add {
                value: value()?,
                path,
            }),
            "remove" => Ok(Self::Remove { path }),
            "replace" => Ok(Self::Replace {
                value: value()?,
                path,
            }),
            "move" => Ok(Self::Move {
                from: from()?,
                path,
            }),
            "copy" => Ok(Self::Copy {
                from: from()?,
                path,
            }),
            "test" => Ok(Self::Test {
                value: value()?,
                path,
            }),
            _ => Err(format!("unknown patch operation '{op}'")),
        }
    }
}

/// An ordered sequence of patch operations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchDocument(pub Vec<PatchOperation>);

/// Errors raised while applying a patch document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PatchError {
    #[error("The target location specified by path '{0}' was not found.")]
    PathNotFound(String),

    #[error("The value for path '{0}' must be a string.")]
    InvalidValue(String),

    #[error("The current value '{actual}' at path '{path}' is not equal to '{expected}'.")]
    TestFailed {
        path: String,
        expected: String,
        actual: String,
    },
}

/// A structure whose named string fields can be edited by a patch document.
pub trait PatchTarget: Clone {
    /// Mutable access to the field called `name`, matched case-insensitively.
    fn field_mut(&mut self, name: &str) -> Option<&mut String>;
}

impl PatchDocument {
    pub fn operations(&self) -> &[PatchOperation] {
        &self.0
    }

    /// Apply every operation in order.
    ///
    /// The target is only modified if all operations succeed.
    pub fn apply_to<T: PatchTarget>(&self, target: &mut T) -> Result<(), PatchError> {
        let mut working = target.clone();
        for op in &self.0 {
            apply_operation(&mut working, op)?;
        }
        *target = working;
        Ok(())
    }
}

fn apply_operation<T: PatchTarget>(
    target: &mut T,
    op: &PatchOperation,
) -> Result<(), PatchError> {
    match op {
        PatchOperation::Add { path, value } | PatchOperation::Replace { path, value } => {
            let value = string_value(path, value)?;
            *field(target, path)? = value;
        }
        PatchOperation::Remove { path } => {
            field(target, path)?.clear();
        }
        PatchOperation::Move { from, path } => {
            let value = std::mem::take(field(target, from)?);
            // `from == path` leaves the value in place.
            *field(target, path)? = value;
        }
        PatchOperation::Copy { from, path } => {
            let value = field(target, from)?.clone();
            *field(target, path)? = value;
        }
        PatchOperation::Test { path, value } => {
            let expected = string_value(path, value)?;
            let actual = field(target, path)?;
            if *actual != expected {
                return Err(PatchError::TestFailed {
                    path: path.clone(),
                    expected,
                    actual: actual.clone(),
                });
            }
        }
    }
    Ok(())
}

fn field<'a, T: PatchTarget>(
    target: &'a mut T,
    path: &str,
) -> Result<&'a mut String, PatchError> {
    let name = parse_pointer(path).ok_or_else(|| PatchError::PathNotFound(path.to_string()))?;
    target
        .field_mut(&name)
        .ok_or_else(|| PatchError::PathNotFound(path.to_string()))
}

/// Decode a single-segment JSON Pointer (`/segment`), unescaping `~1` and `~0`.
fn parse_pointer(path: &str) -> Option<String> {
    let segment = path.strip_prefix('/')?;
    if segment.is_empty() || segment.contains('/') {
        return None;
    }
    Some(segment.replace("~1", "/").replace("~0", "~"))
}

fn string_value(path: &str, value: &Value) -> Result<String, PatchError> {
    value
        .as_str()
        .map(str::to_owned)
        .ok_or_else(|| PatchError::InvalidValue(path.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Target {
        name: String,
        url_handle: String,
    }

    impl PatchTarget for Target {
        fn field_mut(&mut self, name: &str) -> Option<&mut String> {
            if name.eq_ignore_ascii_case("name") {
                Some(&mut self.name)
            } else if name.eq_ignore_ascii_case("urlHandle") {
                Some(&mut self.url_handle)
            } else {
                None
            }
        }
    }

    fn target() -> Target {
        Target {
            name: "Tech".to_string(),
            url_handle: "tech".to_string(),
        }
    }

    fn doc(value: Value) -> PatchDocument {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_deserialize_document() {
        let document = doc(json!([
            { "op": "replace", "path": "/name", "value": "Rust" },
            { "op": "remove", "path": "/urlHandle" },
            { "op": "move", "from": "/name", "path": "/urlHandle" }
        ]));

        assert_eq!(document.operations().len(), 3);
        assert_eq!(
            document.operations()[1],
            PatchOperation::Remove {
                path: "/urlHandle".to_string()
            }
        );
    }

    #[test]
    fn test_op_names_ignore_case() {
        let document = doc(json!([
            { "op": "Replace", "path": "/name", "value": "Rust" },
            { "op": "COPY", "from": "/name", "path": "/urlHandle" }
        ]));

        let mut t = target();
        document.apply_to(&mut t).unwrap();
        assert_eq!(t.name, "Rust");
        assert_eq!(t.url_handle, "Rust");

        let written = serde_json::to_value(&document).unwrap();
        assert_eq!(written[0]["op"], "replace");
    }

    #[test]
    fn test_missing_operands_are_rejected() {
        let missing_value: Result<PatchDocument, _> =
            serde_json::from_value(json!([{ "op": "replace", "path": "/name" }]));
        assert!(missing_value.is_err());

        let missing_from: Result<PatchDocument, _> =
            serde_json::from_value(json!([{ "op": "move", "path": "/name" }]));
        assert!(missing_from.is_err());
    }

    #[test]
    fn test_unknown_op_is_rejected() {
        let result: Result<PatchDocument, _> =
            serde_json::from_value(json!([{ "op": "merge", "path": "/name" }]));
        assert!(result.is_err());
    }

    #[test]
    fn test_replace_and_add() {
        let mut t = target();
        doc(json!([
            { "op": "replace", "path": "/name", "value": "Rust" },
            { "op": "add", "path": "/urlhandle", "value": "rust-lang" }
        ]))
        .apply_to(&mut t)
        .unwrap();

        assert_eq!(t.name, "Rust");
        assert_eq!(t.url_handle, "rust-lang");
    }

    #[test]
    fn test_operations_apply_in_order() {
        let mut t = target();
        doc(json!([
            { "op": "replace", "path": "/name", "value": "First" },
            { "op": "replace", "path": "/name", "value": "Second" }
        ]))
        .apply_to(&mut t)
        .unwrap();

        assert_eq!(t.name, "Second");
    }

    #[test]
    fn test_remove_resets_to_default() {
        let mut t = target();
        doc(json!([{ "op": "remove", "path": "/name" }]))
            .apply_to(&mut t)
            .unwrap();

        assert_eq!(t.name, "");
        assert_eq!(t.url_handle, "tech");
    }

    #[test]
    fn test_move_and_copy() {
        let mut t = target();
        doc(json!([{ "op": "copy", "from": "/name", "path": "/urlHandle" }]))
            .apply_to(&mut t)
            .unwrap();
        assert_eq!(t.url_handle, "Tech");

        let mut t = target();
        doc(json!([{ "op": "move", "from": "/urlHandle", "path": "/name" }]))
            .apply_to(&mut t)
            .unwrap();
        assert_eq!(t.name, "tech");
        assert_eq!(t.url_handle, "");
    }

    #[test]
    fn test_failed_test_leaves_target_untouched() {
        let mut t = target();
        let result = doc(json!([
            { "op": "replace", "path": "/name", "value": "Rust" },
            { "op": "test", "path": "/urlHandle", "value": "other" }
        ]))
        .apply_to(&mut t);

        assert!(matches!(result, Err(PatchError::TestFailed { .. })));
        assert_eq!(t, target());
    }

    #[test]
    fn test_unknown_path() {
        let mut t = target();
        let result = doc(json!([{ "op": "replace", "path": "/id", "value": "x" }]))
            .apply_to(&mut t);
        assert_eq!(result, Err(PatchError::PathNotFound("/id".to_string())));

        let result = doc(json!([{ "op": "replace", "path": "/name/0", "value": "x" }]))
            .apply_to(&mut t);
        assert!(matches!(result, Err(PatchError::PathNotFound(_))));
    }

    #[test]
    fn test_non_string_value_is_rejected() {
        let mut t = target();
        let result = doc(json!([{ "op": "replace", "path": "/name", "value": 5 }]))
            .apply_to(&mut t);
        assert_eq!(result, Err(PatchError::InvalidValue("/name".to_string())));
    }
}
