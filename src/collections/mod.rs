//! The container types themselves, grouped by family.
//!
//! # Purpose
//! Each family lives behind its own feature flag so that a build can pull in only the structures
//! it needs. Everything is enabled by default.
//!
//! # Method
//! Families share the persistence idiom from [`crate::persist`] but are otherwise independent
//! peers; no container calls into another.

#[cfg(feature = "circ")]
pub mod circ;
#[cfg(feature = "contiguous")]
pub mod contiguous;
#[cfg(feature = "hash")]
pub mod hash;
#[cfg(feature = "linked")]
pub mod linked;
#[cfg(feature = "tree")]
pub mod tree;
