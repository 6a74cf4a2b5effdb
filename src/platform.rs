//! Platform-specific key bindings

use crossterm::event::KeyModifiers;

/// Modifier for copying the document link
/// - macOS: SUPER (Cmd key)
/// - Linux/Windows: CONTROL (Ctrl key)
#[cfg(target_os = "macos")]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::SUPER;

#[cfg(not(target_os = "macos"))]
pub const COPY_MODIFIER: KeyModifiers = KeyModifiers::CONTROL;

/// Copy link shortcut display
#[cfg(target_os = "macos")]
pub const COPY_SHORTCUT: &str = "Cmd+Y";

#[cfg(not(target_os = "macos"))]
pub const COPY_SHORTCUT: &str = "Ctrl+Y";

pub const GENERATE_SHORTCUT: &str = "Ctrl+G";
pub const SAMPLE_SHORTCUT: &str = "Ctrl+T";
pub const RESET_SHORTCUT: &str = "Ctrl+R";
