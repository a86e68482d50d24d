//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `notes`, `ui`) so individual
//! components can depend on small focused models. Every multi-field
//! transition happens inside a single `update` call on the owning signal,
//! so consumers never observe a torn combination of flags.

pub mod notes;
pub mod session;
pub mod ui;
