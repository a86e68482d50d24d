//! Small shared helpers.

pub mod dark_mode;
pub mod validate;
