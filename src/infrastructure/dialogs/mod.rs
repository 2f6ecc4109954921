//! Non-interactive dialog adapters
//!
//! Front ends without a screen answer questions from configuration and have
//! no detail view to scroll to.

use crate::domain::ports::{ConfirmDialog, DetailNavigator};

/// Answers every confirmation the same way
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedAnswer(pub bool);

impl FixedAnswer {
    pub const YES: FixedAnswer = FixedAnswer(true);
    pub const NO: FixedAnswer = FixedAnswer(false);
}

impl ConfirmDialog for FixedAnswer {
    fn confirm(&self, _title: &str, _message: &str) -> bool {
        self.0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNavigator;

impl DetailNavigator for NoopNavigator {
    fn show_detail(&self) {
        // Nothing to scroll to
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_answer_ignores_question() {
        assert!(FixedAnswer::YES.confirm("Unsaved changes", "continue?"));
        assert!(!FixedAnswer::NO.confirm("Unsaved changes", "continue?"));
    }
}
