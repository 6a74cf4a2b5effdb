//! Reusable UI components

mod banner;
mod button;
mod dialog;

pub use banner::{banner_height, draw_banner};
pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::render_fault_screen;
