//! Form domain layer
//!
//! Field identities, option sets and the vendor form model.

mod field;
mod form_state;

pub use field::{choice_label, FieldId, FieldKind, Section, PAYMENT_METHODS, PAYMENT_TERMS};
pub use form_state::{FieldEdit, Form, Preset, VendorForm};
