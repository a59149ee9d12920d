//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the data access contract for contacts.
//! - Isolate SQLite query details from the store/service layer.
//!
//! # Invariants
//! - Repositories only wrap connections whose `contacts` table passed
//!   shape checks (`SqliteContactRepository::try_new`).
//! - "No matching row" is a normal outcome, not an error.

pub mod contact_repo;
