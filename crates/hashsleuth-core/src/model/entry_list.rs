/// The user-curated list of hashes queued up for a search.
///
/// Entries keep their insertion order because the list is displayed
/// top-to-bottom as table rows and rows are removed by position. The list
/// is single-owner and lives on whichever thread hosts the interactive
/// session; a background search works from a [`snapshot`] copy, never from
/// the live list.
///
/// [`snapshot`]: HashEntryList::snapshot
use super::hash_value::HashValue;
use thiserror::Error;
use tracing::debug;

/// Why a hash could not be added to the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddError {
    /// Input is not exactly 32 hex characters after trimming.
    #[error("not a valid MD5 hash (expected 32 hexadecimal characters)")]
    InvalidFormat,
    /// The identical hash text is already in the list.
    #[error("this hash has already been added")]
    Duplicate,
    /// The list is locked while ingest or a search is running.
    #[error("hash list cannot be edited while ingest or a search is running")]
    Locked,
}

/// Why rows could not be removed from the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RemoveError {
    /// An index does not refer to a current row. Nothing was removed.
    #[error("row index {index} is out of range (list has {len} entries)")]
    OutOfRange { index: usize, len: usize },
    /// The list is locked while ingest or a search is running.
    #[error("hash list cannot be edited while ingest or a search is running")]
    Locked,
}

/// An ordered, deduplicated collection of validated MD5 hashes.
///
/// All mutation is synchronous and reports failures to the caller directly.
/// While `locked` is set (ingest or an outstanding search), [`add`] and
/// [`remove`] fail with their `Locked` variants and leave the list
/// untouched; [`clear`] stays available to the host.
///
/// [`add`]: HashEntryList::add
/// [`remove`]: HashEntryList::remove
/// [`clear`]: HashEntryList::clear
#[derive(Debug, Clone, Default)]
pub struct HashEntryList {
    /// Entries in insertion order, no two byte-equal.
    entries: Vec<HashValue>,
    /// Edit gate, driven by ingest status and search dispatch.
    locked: bool,
    /// When set, `clear(false)` keeps the entries (the "save hashes for
    /// the next search" checkbox).
    preserve_on_clear: bool,
}

impl HashEntryList {
    /// Create an empty, unlocked list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `raw` and append it to the end of the list.
    ///
    /// The duplicate check is a byte-exact comparison against every current
    /// entry, so two hashes differing only in letter case are both
    /// accepted.
    pub fn add(&mut self, raw: &str) -> Result<(), AddError> {
        if self.locked {
            return Err(AddError::Locked);
        }
        let hash = HashValue::parse(raw)?;
        if self.entries.contains(&hash) {
            return Err(AddError::Duplicate);
        }
        debug!("hash list: adding {hash}");
        self.entries.push(hash);
        Ok(())
    }

    /// Remove the rows at the given positions.
    ///
    /// The index set may arrive in any order and may contain duplicates
    /// (a table selection model can produce both). Every index is checked
    /// against the current length before anything is removed, so a bad
    /// call removes nothing. An empty slice is a no-op.
    pub fn remove(&mut self, indices: &[usize]) -> Result<(), RemoveError> {
        if self.locked {
            return Err(RemoveError::Locked);
        }
        if indices.is_empty() {
            return Ok(());
        }
        let len = self.entries.len();
        if let Some(&index) = indices.iter().find(|&&index| index >= len) {
            return Err(RemoveError::OutOfRange { index, len });
        }

        let mut sorted: Vec<usize> = indices.to_vec();
        sorted.sort_unstable();
        sorted.dedup();
        // Delete from the highest row downward: removing a row shifts every
        // row after it, so ascending deletion would hit the wrong rows.
        for &index in sorted.iter().rev() {
            self.entries.remove(index);
        }
        debug!("hash list: removed {} row(s)", sorted.len());
        Ok(())
    }

    /// Empty the list, unless the preserve-on-clear flag vetoes it.
    ///
    /// `force` overrides the flag. Clearing is a host-initiated reset and
    /// is not gated by the lock.
    pub fn clear(&mut self, force: bool) {
        if self.preserve_on_clear && !force {
            return;
        }
        self.entries.clear();
    }

    /// Number of hashes currently in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the list holds no hashes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The hash at row `index`, if that row exists.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&HashValue> {
        self.entries.get(index)
    }

    /// Iterate the hashes top-to-bottom, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &HashValue> {
        self.entries.iter()
    }

    /// An owned copy of the current hashes, in insertion order.
    ///
    /// The copy is what gets handed to a search dispatch; later mutation
    /// of the list is invisible to it.
    pub fn snapshot(&self) -> Vec<HashValue> {
        self.entries.clone()
    }

    /// Whether editing is currently disabled.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Enable or disable editing.
    ///
    /// Set by the ingest watcher and by search dispatch; the host clears
    /// it again once the search completes or is cancelled.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Whether `clear(false)` currently keeps the entries.
    #[inline]
    pub fn preserve_on_clear(&self) -> bool {
        self.preserve_on_clear
    }

    /// Set the preserve-on-clear flag (the panel checkbox).
    pub fn set_preserve_on_clear(&mut self, preserve: bool) {
        self.preserve_on_clear = preserve;
    }
}
