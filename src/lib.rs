//! A small library of textbook data structures, each with file persistence.
//!
//! # Purpose
//! This crate implements the classic containers from a first data structures course (a dynamic
//! array, a stack, a circular-buffer queue, singly and doubly linked lists, a chaining hash table
//! and a complete binary tree), written out properly rather than sketched on a whiteboard. Each
//! container carries its own insertion, removal and search operations plus text and/or binary
//! serialization to a file, so a whole session's worth of state can be saved and restored.
//!
//! # Method
//! Every structure here is deliberately concrete: element payloads are [`String`]s (or `i32` keys
//! for the tree) rather than generic parameters, because the point is the structure, not the type
//! system. The node-based containers (both lists and the tree) share one representation: nodes
//! live in a growable arena table and link to each other by index, with `None` standing in for
//! the null pointer. This keeps all of the code safe while still making the pointer-juggling of
//! the textbook algorithms explicit.
//!
//! # Error Handling
//! Operations on in-memory containers are total: absence of a key is an ordinary outcome reported
//! through [`Option`] or `bool`, never an error. Index-based access comes in a panicking flavour
//! and a `try_` flavour returning a typed error. The only fallible calls are the `save_*` and
//! `load_*` pairs, which return a single [`PersistError`](persist::PersistError) covering I/O
//! failure and malformed data. A failed load never leaves a container half-filled; the previous
//! contents stay in place.
//!
//! # Persistence
//! All containers share one positional file idiom: a leading element count, followed by the
//! elements in the container's natural order. Text files are newline-delimited; binary files use
//! little-endian `i32` counts and length-prefixed UTF-8 records (the tree stores raw `i32` keys).
//! There is no magic number or version field.

#![warn(clippy::unwrap_used)]
#![warn(clippy::missing_panics_doc)]
#![allow(clippy::module_inception)]

pub mod collections;
pub mod persist;

pub(crate) mod util;
