//! Insert-snippet command core.
//!
//! Resolves a reusable text template from an invocation payload and hands
//! its body to the host's expansion engine at the cursor. Three modes, in
//! strict precedence order: an inline body supplied literally, a named
//! lookup against the per-language catalog, and an interactive
//! browse-and-select pick when neither is given.
//!
//! The catalog, the picker widget, the document, and the expansion engine
//! are host collaborators consumed through the traits in [`host`] and
//! [`vellum_snippets::SnippetCatalog`]; this crate carries only the
//! decision logic between them.

pub mod args;
pub mod dispatch;
pub mod flow;
pub mod future;
pub mod host;
pub mod resolve;

pub use args::InsertSnippetArgs;
pub use dispatch::dispatch;
pub use flow::{FlowState, InsertOutcome, InsertSnippetFlow};
pub use future::BoxFutureLocal;
pub use host::{DocumentContext, ExpansionEngine, PickEntry, Position, SnippetPicker};
pub use resolve::resolve;
pub use vellum_snippets::{Snippet, SnippetCatalog, SnippetRegistry};
