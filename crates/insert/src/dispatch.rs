//! Hand-off to the host expansion engine.

use tracing::trace;
use vellum_snippets::Snippet;

use crate::host::ExpansionEngine;

/// Hands a resolved snippet body to the expansion engine.
///
/// `None` is the normal outcome of a cancelled pick or a missed named
/// lookup, not an error: no engine call happens and `false` comes back.
/// Otherwise the engine is invoked exactly once with the body and a
/// zero-length replacement span at the cursor; everything past that call
/// (tabstops, placeholders, variables) is the engine's business.
pub fn dispatch(snippet: Option<&Snippet>, engine: &mut dyn ExpansionEngine) -> bool {
	let Some(snippet) = snippet else {
		return false;
	};
	trace!(body_len = snippet.body.len(), "dispatch snippet to expansion engine");
	engine.insert(&snippet.body, 0, 0);
	true
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	#[derive(Default)]
	struct RecordingEngine {
		calls: Vec<(String, usize, usize)>,
	}

	impl ExpansionEngine for RecordingEngine {
		fn insert(&mut self, body: &str, range_start: usize, range_end: usize) {
			self.calls.push((body.to_string(), range_start, range_end));
		}
	}

	#[test]
	fn none_performs_no_engine_call() {
		let mut engine = RecordingEngine::default();
		assert!(!dispatch(None, &mut engine));
		assert_eq!(engine.calls.len(), 0);
	}

	#[test]
	fn some_invokes_engine_once_with_collapsed_range() {
		let mut engine = RecordingEngine::default();
		let snippet = Snippet::inline("foo($1)");

		assert!(dispatch(Some(&snippet), &mut engine));
		assert_eq!(engine.calls, vec![("foo($1)".to_string(), 0, 0)]);
	}
}
