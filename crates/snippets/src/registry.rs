//! In-memory snippet catalog, scoped per language id.

use std::collections::HashMap;

use thiserror::Error;
use tracing::trace;

use crate::Snippet;

/// Error raised when a snippet definition cannot be registered.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
	/// An empty body would make every insertion of the snippet a no-op.
	#[error("snippet body must not be empty")]
	EmptyBody,
}

/// Read-only, language-scoped view of the snippet catalog.
///
/// Entries come back in registry order. The sequence is finite and
/// restartable; consumers stop early by short-circuiting the iterator.
pub trait SnippetCatalog {
	/// Snippets registered for `language_id`, in registration order.
	/// Unknown language ids yield an empty sequence.
	fn for_language<'a>(&'a self, language_id: &str) -> Box<dyn Iterator<Item = &'a Snippet> + 'a>;
}

/// The in-process snippet catalog.
///
/// Hosts build one registry per process and pass it to the insert command
/// as an explicit dependency; there is no global registry.
#[derive(Debug, Clone, Default)]
pub struct SnippetRegistry {
	by_language: HashMap<String, Vec<Snippet>>,
}

impl SnippetRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends `snippet` to the catalog for `language_id`.
	///
	/// Registration order is lookup order: named lookup takes the first
	/// matching entry and the interactive pick lists entries as registered.
	/// Duplicate names are allowed; the earlier registration wins lookups.
	pub fn register(&mut self, language_id: impl Into<String>, snippet: Snippet) -> Result<(), RegistryError> {
		if snippet.body.is_empty() {
			return Err(RegistryError::EmptyBody);
		}
		let language_id = language_id.into();
		trace!(language = %language_id, name = ?snippet.name, "register snippet");
		self.by_language.entry(language_id).or_default().push(snippet);
		Ok(())
	}

	/// Language ids with at least one registered snippet, in no particular
	/// order.
	pub fn languages(&self) -> impl Iterator<Item = &str> {
		self.by_language.keys().map(String::as_str)
	}

	/// Number of snippets registered for `language_id`.
	pub fn len(&self, language_id: &str) -> usize {
		self.by_language.get(language_id).map_or(0, Vec::len)
	}

	pub fn is_empty(&self) -> bool {
		self.by_language.is_empty()
	}
}

impl SnippetCatalog for SnippetRegistry {
	fn for_language<'a>(&'a self, language_id: &str) -> Box<dyn Iterator<Item = &'a Snippet> + 'a> {
		Box::new(self.by_language.get(language_id).into_iter().flatten())
	}
}
