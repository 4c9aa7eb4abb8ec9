use std::path::PathBuf;

/// Results delivered back to the UI thread from dialog helper threads.
pub enum ShellEvent {
    /// The user chose an image file in the open dialog.
    OpenPicked(PathBuf),
}
