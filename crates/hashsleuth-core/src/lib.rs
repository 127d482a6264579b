/// HashSleuth Core — hash-list curation and search dispatch.
///
/// This crate contains the business logic of the "search files by MD5 hash"
/// panel with zero UI dependencies, so the same engine can sit behind any
/// frontend (GUI, CLI, TUI).
///
/// # Modules
///
/// - [`model`] — Validated hash values and the ordered, deduplicated entry list.
/// - [`ingest`] — Ingest-status observation that locks the list while ingest runs.
/// - [`search`] — Search preconditions and snapshot handoff to the case searcher.
pub mod ingest;
pub mod model;
pub mod search;
