//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod confirm_dialog;
pub mod detail_navigator;
pub mod document_codec;
pub mod file_saver;
pub mod notifier;

pub use confirm_dialog::ConfirmDialog;
pub use detail_navigator::DetailNavigator;
pub use document_codec::DocumentCodec;
pub use file_saver::FileSaver;
pub use notifier::{NoopNotifier, Notification, NotificationLevel, Notifier, UndoAction};
