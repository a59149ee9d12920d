//! Core use-case services.
//!
//! # Responsibility
//! - Own the store connection and its lifecycle.
//! - Keep UI/CLI layers decoupled from storage details.

pub mod contact_store;
