//! Snippet data model and the per-language catalog.
//!
//! A [`Snippet`] is a reusable text template whose body is handed to the
//! host's expansion engine; everything besides the body is lookup/display
//! metadata. The [`SnippetRegistry`] is the in-process catalog, scoped per
//! language id. Consumers that only read the catalog (the insert command)
//! depend on the [`SnippetCatalog`] trait instead of the concrete registry.

pub mod registry;
pub mod snippet;

pub use registry::{RegistryError, SnippetCatalog, SnippetRegistry};
pub use snippet::Snippet;
