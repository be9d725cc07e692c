//! The insert-snippet command flow.
//!
//! One [`InsertSnippetFlow`] drives one invocation end to end: normalize the
//! payload, resolve the effective language, resolve a snippet (possibly
//! suspending on the interactive pick), and dispatch the insertion.
//! Independent invocations use independent flows and share no state.

use serde_json::Value;
use tracing::debug;
use vellum_snippets::SnippetCatalog;

use crate::args::InsertSnippetArgs;
use crate::dispatch::dispatch;
use crate::host::{DocumentContext, ExpansionEngine, SnippetPicker};
use crate::resolve::resolve;

/// Where the flow currently is. Terminal states are `Resolved` and
/// `Cancelled`; `AwaitingLanguage` is skipped when the payload names a
/// language explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
	Idle,
	AwaitingLanguage,
	Resolving,
	Resolved,
	Cancelled,
}

/// How an invocation ended. Everything but `Inserted` is a silent no-op
/// from the user's point of view; the variants exist so hosts can trace
/// what happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
	/// The expansion engine was invoked with a resolved body.
	Inserted,
	/// No open document behind the active buffer; nothing ran.
	NoDocument,
	/// Named lookup scanned the catalog without a match.
	NoMatch,
	/// The interactive pick was dismissed.
	Cancelled,
}

/// Single-invocation state machine for the insert-snippet command.
#[derive(Debug)]
pub struct InsertSnippetFlow {
	state: FlowState,
}

impl Default for InsertSnippetFlow {
	fn default() -> Self {
		Self::new()
	}
}

impl InsertSnippetFlow {
	pub fn new() -> Self {
		Self { state: FlowState::Idle }
	}

	pub fn state(&self) -> FlowState {
		self.state
	}

	/// Runs the command against an untyped invocation payload.
	///
	/// At most one snippet resolves and at most one insertion happens per
	/// call. The only suspension point is the interactive pick, which waits
	/// on the user indefinitely; cancelling it terminates the flow, there
	/// are no retries and no fallback between resolution modes.
	pub async fn run(
		&mut self,
		payload: &Value,
		doc: &dyn DocumentContext,
		catalog: &dyn SnippetCatalog,
		picker: &dyn SnippetPicker,
		engine: &mut dyn ExpansionEngine,
	) -> InsertOutcome {
		if !doc.has_document() {
			debug!("insert snippet: no open document");
			return InsertOutcome::NoDocument;
		}

		let args = InsertSnippetArgs::from_payload(payload);
		let language_id = match args.language_id.clone() {
			Some(id) => id,
			None => {
				self.state = FlowState::AwaitingLanguage;
				doc.language_id_at(doc.cursor())
			}
		};

		self.state = FlowState::Resolving;
		let interactive = args.snippet_text.is_none() && args.name.is_none();
		let resolved = resolve(&args, &language_id, catalog, picker).await;

		match resolved {
			Some(snippet) => {
				self.state = FlowState::Resolved;
				dispatch(Some(snippet.as_ref()), engine);
				debug!(language = %language_id, "insert snippet: inserted");
				InsertOutcome::Inserted
			}
			None if interactive => {
				self.state = FlowState::Cancelled;
				debug!(language = %language_id, "insert snippet: pick cancelled");
				InsertOutcome::Cancelled
			}
			None => {
				// A missed named lookup still reaches the dispatcher, which
				// treats the absent snippet as "insert nothing".
				self.state = FlowState::Resolved;
				dispatch(None, engine);
				debug!(language = %language_id, name = ?args.name, "insert snippet: no matching snippet");
				InsertOutcome::NoMatch
			}
		}
	}
}
