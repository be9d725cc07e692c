//! Snippet resolution: inline body, named lookup, or interactive pick.

use std::borrow::Cow;

use tracing::trace;
use vellum_snippets::{Snippet, SnippetCatalog};

use crate::args::InsertSnippetArgs;
use crate::host::{PickEntry, SnippetPicker};

/// Resolves at most one snippet for this invocation.
///
/// Precedence is strict and there is no fallback chaining between modes:
/// 1. `snippet_text` present: synthesize an inline [`Snippet`]; completes
///    without yielding.
/// 2. `name` present: first catalog entry for `language_id` whose name
///    matches, scanning in catalog order; completes without yielding.
/// 3. Neither present: project every catalog entry into a [`PickEntry`]
///    (order preserved) and await the picker; `None` when the pick is
///    dismissed. An empty catalog still reaches the picker.
///
/// `language_id` is the effective language: the caller resolves the
/// explicit-argument-else-cursor fallback before calling in.
pub async fn resolve<'a>(
	args: &InsertSnippetArgs,
	language_id: &str,
	catalog: &'a dyn SnippetCatalog,
	picker: &'a dyn SnippetPicker,
) -> Option<Cow<'a, Snippet>> {
	if let Some(body) = args.snippet_text.as_deref() {
		trace!("resolve: inline body");
		return Some(Cow::Owned(Snippet::inline(body)));
	}

	if let Some(name) = args.name.as_deref() {
		let found = catalog.for_language(language_id).find(|snippet| snippet.name.as_deref() == Some(name));
		trace!(language = %language_id, name = %name, matched = found.is_some(), "resolve: named lookup");
		return found.map(Cow::Borrowed);
	}

	let entries: Vec<PickEntry<'a>> = catalog.for_language(language_id).map(PickEntry::for_snippet).collect();
	trace!(language = %language_id, entries = entries.len(), "resolve: interactive pick");
	picker.pick(entries).await.map(|entry| Cow::Borrowed(entry.snippet))
}
