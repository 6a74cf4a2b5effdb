//! Application state module

mod app_state;
mod forms;
mod message;
mod submission;
mod validation;

pub use app_state::*;
pub use forms::*;
pub use message::build_message;
pub use submission::*;
pub use validation::{validate, ValidationErrors};
