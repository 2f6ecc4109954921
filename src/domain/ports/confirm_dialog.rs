//! Confirm Dialog Port
//!
//! A yes/no question that blocks the operation asking it, e.g. before
//! unsaved changes are discarded.

pub trait ConfirmDialog {
    /// Ask the user; `true` means continue
    fn confirm(&self, title: &str, message: &str) -> bool;
}

impl<C: ConfirmDialog + ?Sized> ConfirmDialog for &C {
    fn confirm(&self, title: &str, message: &str) -> bool {
        (**self).confirm(title, message)
    }
}
