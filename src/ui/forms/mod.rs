//! Form rendering module
//!
//! - `field_renderer`: single-line field and inline error rendering
//! - `form_view`: the sectioned, scrollable vendor form

mod field_renderer;
mod form_view;

pub use form_view::draw_form;
