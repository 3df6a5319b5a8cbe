//! Update builder types for entity mutations.
//!
//! Each builder produces an update struct with `Option` fields. Only `Some`
//! fields generate SET clauses in the dynamic UPDATE SQL (or, for manuscript
//! intake, overwrite the stored field during the upsert merge).

pub mod manuscript;
pub mod profile;
