//! Clipboard functionality for copying the display.

use arboard::Clipboard;
#[cfg(target_os = "linux")]
use arboard::SetExtLinux;

use crate::error::ClipboardError;

/// Copy text to the system clipboard.
///
/// On Linux the text stays available only while this process runs; use
/// [`copy_and_wait`] from a process that is about to exit.
pub fn copy_to_clipboard(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;

    clipboard.set_text(text.to_string())?;
    tracing::debug!(text, "copied to clipboard");
    Ok(())
}

/// Copy text to the system clipboard and keep serving it.
///
/// On Linux (X11 and Wayland) this blocks until another client takes over
/// the clipboard, so the text survives after the copy. Elsewhere the
/// clipboard owns the text and this returns immediately.
pub fn copy_and_wait(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|e| ClipboardError::Access(e.to_string()))?;

    #[cfg(target_os = "linux")]
    {
        tracing::debug!(text, "serving clipboard until it is replaced");
        clipboard.set().wait().text(text)?;
    }
    #[cfg(not(target_os = "linux"))]
    clipboard.set_text(text.to_string())?;

    tracing::debug!(text, "copied to clipboard");
    Ok(())
}
