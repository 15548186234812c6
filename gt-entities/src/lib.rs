#![deny(missing_debug_implementations)]
#![cfg_attr(test, deny(warnings))]

//! # gt-entities
//!
//! Reusable, agnostic domain entities for GratiTree.
//!
//! The entities only contain generic functionality that does not reveal any
//! application-specific business logic.

pub mod day;
pub mod entry;
pub mod id;
pub mod time;
pub mod tree;
pub mod user;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
