//! Selection entity - the 0-or-1 record shown in the detail view

/// Position of the selected record within its collection, if any
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection(Option<usize>);

impl Selection {
    pub fn new() -> Self {
        Self(None)
    }

    pub fn index(&self) -> Option<usize> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// Number of selected records (0 or 1)
    pub fn len(&self) -> usize {
        usize::from(self.0.is_some())
    }

    /// Replace the selection.
    ///
    /// Returns `true` when this is a transition into a non-empty selection,
    /// the only case that should bring the detail view into focus.
    pub fn select(&mut self, index: usize) -> bool {
        if self.0 == Some(index) {
            return false;
        }
        self.0 = Some(index);
        true
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Keep the selection pointing at the same record after `removed` is taken out
    pub fn on_removed(&mut self, removed: usize) {
        match self.0 {
            Some(i) if i == removed => self.0 = None,
            Some(i) if i > removed => self.0 = Some(i - 1),
            _ => {}
        }
    }
}
