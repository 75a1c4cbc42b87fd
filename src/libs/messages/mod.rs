//! User-facing text for the whole application.
//!
//! Every string shown on the terminal is a [`Message`] variant; its `Display`
//! impl lives in `display.rs` and the output macros in `macros.rs`.

pub mod display;
pub mod macros;
pub mod types;

pub use types::Message;
