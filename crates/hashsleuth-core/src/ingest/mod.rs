/// Ingest status observation — drives the hash list's edit lock.
///
/// The case-wide ingest pipeline (which scans and hashes files) runs on its
/// own threads and posts [`IngestEvent`]s on a bounded channel. The panel
/// host drains the channel once per frame via [`IngestWatcher::refresh`],
/// which flips the entry list's lock on ingest transitions so the user
/// cannot edit the hash list while ingest is rewriting the case index.
use crate::model::HashEntryList;
use crossbeam_channel::{bounded, Receiver, Sender};
use tracing::debug;

/// Maximum number of ingest events that may queue up in the channel.
///
/// Ingest transitions are rare (start / finish, occasionally per ingest
/// job), so a small bound is plenty; a stalled UI makes the ingest side
/// block rather than grow an unbounded backlog.
pub const INGEST_CHANNEL_CAPACITY: usize = 64;

/// Maximum events drained per [`IngestWatcher::refresh`] call.
///
/// Keeps a backlog (e.g. after the window was hidden) from occupying the
/// render thread; the remainder is picked up on the next frame.
const MAX_EVENTS_PER_REFRESH: usize = 32;

/// A transition in the external ingest pipeline's run state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IngestEvent {
    /// Ingest has started; hash-list editing must be disabled.
    Started,
    /// Ingest has finished; hash-list editing may resume.
    Completed,
}

/// Create the ingest event channel.
///
/// The `Sender` goes to the ingest pipeline (or whatever observes it);
/// the [`IngestWatcher`] stays with the panel host.
pub fn ingest_channel() -> (Sender<IngestEvent>, IngestWatcher) {
    let (tx, rx) = bounded::<IngestEvent>(INGEST_CHANNEL_CAPACITY);
    (
        tx,
        IngestWatcher {
            rx,
            running: false,
        },
    )
}

/// Receives ingest transitions and applies them to the entry list.
pub struct IngestWatcher {
    rx: Receiver<IngestEvent>,
    /// Last observed ingest run state.
    running: bool,
}

impl IngestWatcher {
    /// Whether ingest was running as of the last drained event.
    ///
    /// Presentation reads this to switch the panel title into its
    /// "ingest is ongoing" form.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Drain pending ingest events and update the list's lock.
    ///
    /// Called once per frame; never blocks. Returns `true` if the observed
    /// ingest state changed (the UI should repaint). The lock is written
    /// only on a transition, so a lock imposed by an outstanding search
    /// survives idle refreshes.
    pub fn refresh(&mut self, list: &mut HashEntryList) -> bool {
        let before = self.running;

        let mut events_this_refresh = 0usize;
        while events_this_refresh < MAX_EVENTS_PER_REFRESH {
            let event = match self.rx.try_recv() {
                Ok(e) => e,
                Err(_) => break,
            };
            events_this_refresh += 1;
            self.running = matches!(event, IngestEvent::Started);
        }

        if self.running == before {
            return false;
        }
        list.set_locked(self.running);
        if self.running {
            debug!("ingest started: hash list editing disabled");
        } else {
            debug!("ingest finished: hash list editing enabled");
        }
        true
    }
}
