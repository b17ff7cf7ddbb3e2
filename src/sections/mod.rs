//! Content section views, one module per `Section` variant.

pub mod about;
pub mod contact;
pub mod home;
pub mod projects;
