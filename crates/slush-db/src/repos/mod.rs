//! Repository modules implementing the SlushPilot access surface.
//!
//! Each module adds methods to `SlushService` via `impl SlushService` blocks.
//! There are no delete operations anywhere on this surface: projects only
//! accumulate state, letters and messages are append-only.

pub mod letter;
pub mod manuscript;
pub mod message;
pub mod profile;
pub mod project;
