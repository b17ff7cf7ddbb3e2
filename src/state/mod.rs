//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is a plain struct wrapped in an `RwSignal` provided via context by
//! the application root, so components read and write through one holder
//! without any global singleton.

pub mod view;
