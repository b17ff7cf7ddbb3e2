//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and decorative layers while reading/writing
//! shared state from the Leptos context provider in `app`.

pub mod navbar;
pub mod particle_field;
pub mod pointer_glow;
pub mod section_host;
