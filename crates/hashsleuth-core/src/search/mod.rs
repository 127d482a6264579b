/// Search dispatch — hands the curated hash list to the case searcher.
///
/// The file-matching itself belongs to an external collaborator and runs
/// on its own threads; match results come back through that collaborator's
/// channels. This module owns only the gate in front of it: the
/// preconditions a search must pass, the immutable [`SearchRequest`]
/// snapshot, and the lock that freezes the list while the request is
/// outstanding.
use crate::model::{HashEntryList, HashValue};
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

/// Why a search could not be dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The hash list is empty; there is nothing to search for.
    #[error("no hashes have been added to search for")]
    EmptyList,
    /// No file in the case has a computed MD5 hash, so no hash can match.
    #[error("no files in the case have an MD5 hash calculated")]
    NoHashableFiles,
}

/// Reports how many files in the case carry a computed MD5 hash.
///
/// Backed by the case index; a search against a case where ingest never
/// hashed anything is rejected up front instead of silently matching
/// nothing.
pub trait HashedFileCount {
    fn count_hashed_files(&self) -> u64;
}

/// The external searcher collaborator.
///
/// Takes ownership of a dispatched request and performs the file matching
/// in the background; how it runs and how it reports matches is its own
/// affair.
pub trait SearchDispatcher {
    fn dispatch(&mut self, request: SearchRequest);
}

/// An immutable, timestamped copy of the hash list at dispatch time.
///
/// The host keeps (or logs) the request as the record of what was searched
/// and when; later edits to the live list do not affect it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchRequest {
    /// The hashes to match, in the order the user entered them.
    pub hashes: Vec<HashValue>,
    /// Wall-clock time the dispatch was accepted.
    pub requested_at: DateTime<Local>,
}

/// Check the search preconditions and hand a snapshot to the dispatcher.
///
/// Fails with [`SearchError::EmptyList`] when no hashes have been added
/// and with [`SearchError::NoHashableFiles`] when the case index reports
/// zero hashed files; in both cases the dispatcher is not invoked and the
/// list is left exactly as it was. On success the list is locked for the
/// duration of the search; the host unlocks it again when the dispatcher
/// reports completion or cancellation.
pub fn dispatch_search<C, D>(
    list: &mut HashEntryList,
    counter: &C,
    dispatcher: &mut D,
) -> Result<(), SearchError>
where
    C: HashedFileCount,
    D: SearchDispatcher,
{
    if list.is_empty() {
        return Err(SearchError::EmptyList);
    }
    let hashed_files = counter.count_hashed_files();
    if hashed_files == 0 {
        return Err(SearchError::NoHashableFiles);
    }

    let request = SearchRequest {
        hashes: list.snapshot(),
        requested_at: Local::now(),
    };
    info!(
        "Dispatching search for {} hash(es) against {hashed_files} hashed file(s)",
        request.hashes.len()
    );
    list.set_locked(true);
    dispatcher.dispatch(request);
    Ok(())
}
