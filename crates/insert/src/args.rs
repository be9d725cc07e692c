//! Invocation payload normalization.

use serde_json::{Map, Value};

/// Normalized insert-snippet arguments.
///
/// All fields are independently optional; `None` is distinct from an empty
/// string. Built once per invocation by [`InsertSnippetArgs::from_payload`]
/// and not modified afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InsertSnippetArgs {
	/// Literal template body (inline mode).
	pub snippet_text: Option<String>,
	/// Display name for catalog lookup (named mode).
	pub name: Option<String>,
	/// Explicit language id overriding the one at the cursor.
	pub language_id: Option<String>,
}

impl InsertSnippetArgs {
	/// Extracts the `snippet`, `name`, and `langId` keys from an untyped
	/// invocation payload.
	///
	/// Never fails: a payload that is not an object yields the empty triple,
	/// and any value that is not a string (numbers and booleans included)
	/// degrades to `None`. Normalization is idempotent.
	pub fn from_payload(raw: &Value) -> Self {
		let Some(object) = raw.as_object() else {
			return Self::default();
		};
		Self {
			snippet_text: string_field(object, "snippet"),
			name: string_field(object, "name"),
			language_id: string_field(object, "langId"),
		}
	}
}

fn string_field(object: &Map<String, Value>, key: &str) -> Option<String> {
	object.get(key).and_then(Value::as_str).map(str::to_owned)
}
