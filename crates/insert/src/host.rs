//! Collaborator interfaces the insert command consumes.
//!
//! The command owns none of these: the document, the picker widget, and the
//! expansion engine all belong to the host. Each trait is the narrow slice
//! of the collaborator this command actually touches.

use vellum_snippets::Snippet;

use crate::future::BoxFutureLocal;

/// Cursor location in the active buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
	pub line: usize,
	pub column: usize,
}

/// The active buffer's document, as seen by this command.
pub trait DocumentContext {
	/// Whether the buffer has an open document. When it does not, the whole
	/// command is a no-op.
	fn has_document(&self) -> bool;

	/// Current cursor location.
	fn cursor(&self) -> Position;

	/// Language id of the document at `position`.
	fn language_id_at(&self, position: Position) -> String;
}

/// Projection of a catalog snippet into a pick list row.
///
/// Invocation-scoped: built for one pick, discarded after selection. The
/// backing snippet stays owned by the catalog.
#[derive(Debug, Clone)]
pub struct PickEntry<'a> {
	/// Row label, the snippet's trigger prefix.
	pub label: String,
	/// Row detail, the snippet's description.
	pub detail: Option<String>,
	/// The cataloged snippet this row stands for.
	pub snippet: &'a Snippet,
}

impl<'a> PickEntry<'a> {
	pub fn for_snippet(snippet: &'a Snippet) -> Self {
		Self {
			label: snippet.prefix.clone().unwrap_or_default(),
			detail: snippet.description.clone(),
			snippet,
		}
	}
}

/// Host picker widget.
pub trait SnippetPicker {
	/// Presents `entries` in the given order and eventually yields the
	/// confirmed entry, or `None` when the user dismisses the pick. There is
	/// no timeout; the future stays pending until the user decides.
	fn pick<'a>(&'a self, entries: Vec<PickEntry<'a>>) -> BoxFutureLocal<'a, Option<PickEntry<'a>>>;
}

/// Host template-expansion engine.
///
/// Tabstop and placeholder semantics live entirely behind this trait; the
/// command's contract ends at the call boundary.
pub trait ExpansionEngine {
	/// Expands `body` at the cursor, replacing the span
	/// `range_start..range_end` expressed as offsets from the insertion
	/// point. The command always passes `(0, 0)`: insert, replace nothing.
	fn insert(&mut self, body: &str, range_start: usize, range_end: usize);
}
