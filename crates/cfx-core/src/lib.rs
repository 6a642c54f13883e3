//! # cfx-core
//!
//! Core types, ID generation, and error types for CrowdFix.
//!
//! This crate provides the foundational types shared across all CrowdFix crates:
//! - Entity structs for issues, geotags, and the authenticated session
//! - Status and page enums with state machine transitions
//! - Issue ID formatting helpers
//! - Cross-cutting error types
//! - Response types rendered by the `cfx` shell

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod identity;
pub mod responses;
