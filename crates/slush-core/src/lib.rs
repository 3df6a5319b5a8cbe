//! # slush-core
//!
//! Core types, ID prefixes, and error types for SlushPilot.
//!
//! This crate provides the foundational types shared across all SlushPilot crates:
//! - Entity structs for all domain objects (profiles, projects, letters, messages)
//! - Stage and status enums with state machine transitions
//! - ID prefix constants
//! - The pure project stage resolver
//! - Cross-cutting error types
//! - Shared CLI response types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod resolver;
pub mod responses;
