//! Knitnote client: typed HTTP wrappers around the project API plus the
//! terminal UI state (project board, add/edit forms, list rendering).

pub mod api;
pub mod board;
pub mod form;
pub mod view;
