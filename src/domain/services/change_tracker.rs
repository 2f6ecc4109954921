//! Change Tracker - the "unsaved changes" flag
//!
//! Every mutation of the document is reported here. While the tracker is
//! armed a mutation makes the document dirty; while it is suspended (only
//! during a save) mutations are housekeeping and leave the flag alone.
//!
//! Suspension is only available as a scoped [`Suspension`] guard, so a save
//! that fails or unwinds still re-arms the tracker.

use std::ops::{Deref, DerefMut};

/// Watching state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackerState {
    #[default]
    Armed,
    Suspended,
}

#[derive(Debug, Default)]
pub struct ChangeTracker {
    state: TrackerState,
    dirty: bool,
}

impl ChangeTracker {
    /// Armed and clean
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Start watching a freshly loaded document
    pub fn arm_clean(&mut self) {
        self.state = TrackerState::Armed;
        self.dirty = false;
    }

    /// Report a mutation of the document
    pub fn note_mutation(&mut self) {
        if self.state == TrackerState::Armed {
            self.dirty = true;
        }
    }

    /// Stop watching until the returned guard is dropped
    pub fn suspend(&mut self) -> Suspension<'_> {
        let previous = self.state;
        self.state = TrackerState::Suspended;
        Suspension {
            tracker: self,
            previous,
            committed: false,
        }
    }
}

/// Scoped suspension of a [`ChangeTracker`].
///
/// Dropping it restores the previous state and keeps the dirty flag;
/// [`Suspension::commit`] restores it with the flag cleared.
#[must_use = "dropping the guard re-arms the tracker immediately"]
pub struct Suspension<'a> {
    tracker: &'a mut ChangeTracker,
    previous: TrackerState,
    committed: bool,
}

impl Suspension<'_> {
    /// Finish a successful save: the document is clean again
    pub fn commit(mut self) {
        self.committed = true;
    }
}

impl Deref for Suspension<'_> {
    type Target = ChangeTracker;

    fn deref(&self) -> &ChangeTracker {
        self.tracker
    }
}

impl DerefMut for Suspension<'_> {
    fn deref_mut(&mut self) -> &mut ChangeTracker {
        self.tracker
    }
}

impl Drop for Suspension<'_> {
    fn drop(&mut self) {
        self.tracker.state = self.previous;
        if self.committed {
            self.tracker.dirty = false;
        }
    }
}
