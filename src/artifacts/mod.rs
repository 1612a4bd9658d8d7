//! Snapshot engine data structures and algorithms
//!
//! This module contains the core value types and decision logic:
//!
//! - `clock`: injectable wall-clock source for identifier salting
//! - `commit_id`: snapshot identifiers and their derivation
//! - `digest`: content digesting
//! - `inspector`: change detection against the latest snapshot
//! - `record`: commit history records

pub mod clock;
pub mod commit_id;
pub mod digest;
pub mod inspector;
pub mod record;
