//! Networking modules for the backend HTTP boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the REST calls and `types` defines the wire field names,
//! the submission error type, and the backend status DTO.

pub mod api;
pub mod types;
