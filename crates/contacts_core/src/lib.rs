//! Core persistence layer for the contacts manager.
//! This crate is the only owner of the `contacts` table.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::StoreConfig;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::avatar::{encode_data_url, guess_mime};
pub use model::contact::{parse_contact_id, Contact, ContactId, ContactPatch};
pub use repo::contact_repo::{
    favorite_from_storage, favorite_to_storage, ContactRepository, MutationOutcome, RepoError,
    RepoResult, SqliteContactRepository,
};
pub use service::contact_store::ContactStore;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
