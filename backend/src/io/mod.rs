//! # IO Module
//!
//! The adapter layer between HTTP clients and the domain. It decodes
//! requests, calls [`crate::domain::BookService`], and turns results and
//! [`crate::domain::BookError`]s into HTTP responses.

pub mod rest;

pub use rest::*;
