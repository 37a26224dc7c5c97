//! # devcat-core
//!
//! Core types and error types for DevCatalog.
//!
//! This crate provides the foundational types shared across all DevCatalog crates:
//! - The [`entities::ProjectRecord`] catalog entry and its media items
//! - Category, lifecycle status, and feedback kind enums with their display descriptors
//! - Cross-cutting error types
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod responses;
