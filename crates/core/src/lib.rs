//! Domain rules shared by the knitnote server and client.
//!
//! Nothing in this crate performs I/O. It holds the project record and its
//! request DTOs, the validation rules applied to every create and edit, and
//! the error type the other crates build on.

pub mod error;
pub mod project;
pub mod types;
pub mod validation;
