//! Dialog components for TUI

mod base;
mod fault_dialog;

pub use base::wrap_text;
pub use fault_dialog::render_fault_screen;
