//! Row types.
//!
//! The entity and its request DTOs live in `knitnote_core::project`; this
//! module only knows how a stored row turns into one.

pub mod project;
