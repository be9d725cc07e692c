use serde::{Deserialize, Serialize};

/// A reusable text template.
///
/// `body` is the only field the expansion engine needs; the remaining fields
/// are catalog metadata used for named lookup and for labeling entries in
/// the interactive pick. Catalog-owned snippets are never mutated by
/// consumers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
	/// Template text, possibly containing tabstop/placeholder syntax. The
	/// syntax is opaque here; the expansion engine owns it.
	pub body: String,
	/// Display name, matched exactly by named lookup.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Human-readable description, shown as pick detail.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub description: Option<String>,
	/// Trigger prefix, shown as the pick label.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub prefix: Option<String>,
	/// Source that contributed the snippet (extension, user config, ...).
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub owner: Option<String>,
}

impl Snippet {
	/// Synthesizes a snippet from an inline invocation body. All catalog
	/// metadata is absent.
	pub fn inline(body: impl Into<String>) -> Self {
		Self {
			body: body.into(),
			..Self::default()
		}
	}
}
