//! Domain model for the contacts store.
//!
//! # Responsibility
//! - Define the contact record and its partial-update shape.
//! - Keep storage representation details out of caller-facing types.
//!
//! # Invariants
//! - Every contact is identified by a storage-assigned `ContactId`.
//! - Deletion is a hard delete; there are no tombstones.

pub mod avatar;
pub mod contact;
