//! # REST API Interface Layer
//!
//! HTTP endpoints for the book catalogue:
//! - JSON request/response handling
//! - Error translation from domain to HTTP status codes
//! - Request logging

pub mod book_apis;
pub mod error;
pub mod home_apis;
pub mod mappers;

pub use error::ApiError;
