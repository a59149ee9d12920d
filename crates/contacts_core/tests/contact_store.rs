use contacts_core::{Contact, ContactPatch, ContactStore, StoreConfig};
use std::collections::HashSet;

#[test]
fn create_empty_returns_placeholder_with_fresh_id() {
    let store = ContactStore::open_in_memory().unwrap();

    let first = store.create_empty().unwrap();
    let second = store.create_empty().unwrap();

    assert_eq!(first.id, 1);
    assert_eq!(first.first, "New");
    assert_eq!(first.last, "Contact");
    assert_eq!(first.twitter, "");
    assert_eq!(first.notes, "");
    assert!(!first.favorite);
    assert_eq!(first.avatar, "");
    assert_ne!(first.id, second.id);
}

#[test]
fn get_after_create_returns_identical_record() {
    let store = ContactStore::open_in_memory().unwrap();

    let created = store.create_empty().unwrap();
    let loaded = store.get(&created.id.to_string()).unwrap().unwrap();

    assert_eq!(loaded, created);
}

#[test]
fn get_unknown_id_returns_none() {
    let store = ContactStore::open_in_memory().unwrap();
    store.create_empty().unwrap();

    assert!(store.get("-1").unwrap().is_none());
    assert!(store.get("999").unwrap().is_none());
}

#[test]
fn partial_update_changes_only_present_fields() {
    let store = ContactStore::open_in_memory().unwrap();
    let created = store.create_empty().unwrap();
    let id = created.id.to_string();

    let outcome = store
        .update(
            &id,
            &ContactPatch {
                favorite: Some(true),
                ..ContactPatch::default()
            },
        )
        .unwrap();
    assert_eq!(outcome.rows_affected, 1);

    let loaded = store.get(&id).unwrap().unwrap();
    assert!(loaded.favorite);
    assert_eq!(
        loaded,
        Contact {
            favorite: true,
            ..created
        }
    );
}

#[test]
fn update_can_clear_favorite_again() {
    let store = ContactStore::open_in_memory().unwrap();
    let id = store.create_empty().unwrap().id.to_string();

    let set = ContactPatch {
        favorite: Some(true),
        ..ContactPatch::default()
    };
    store.update(&id, &set).unwrap();
    let clear = ContactPatch {
        favorite: Some(false),
        ..ContactPatch::default()
    };
    store.update(&id, &clear).unwrap();

    assert!(!store.get(&id).unwrap().unwrap().favorite);
}

#[test]
fn update_without_favorite_keeps_stored_favorite() {
    let store = ContactStore::open_in_memory().unwrap();
    let id = store.create_empty().unwrap().id.to_string();

    let favorite = ContactPatch {
        favorite: Some(true),
        ..ContactPatch::default()
    };
    store.update(&id, &favorite).unwrap();

    let rename = ContactPatch {
        notes: Some("likes engines".to_string()),
        ..ContactPatch::default()
    };
    store.update(&id, &rename).unwrap();

    let loaded = store.get(&id).unwrap().unwrap();
    assert!(loaded.favorite);
    assert_eq!(loaded.notes, "likes engines");
}

#[test]
fn empty_patch_leaves_record_unchanged() {
    let store = ContactStore::open_in_memory().unwrap();
    let id = store.create_empty().unwrap().id.to_string();
    let before = store.get(&id).unwrap().unwrap();

    store.update(&id, &ContactPatch::default()).unwrap();

    assert_eq!(store.get(&id).unwrap().unwrap(), before);
}

#[test]
fn update_missing_id_is_noop() {
    let store = ContactStore::open_in_memory().unwrap();

    let outcome = store
        .update(
            "42",
            &ContactPatch {
                first: Some("Ghost".to_string()),
                ..ContactPatch::default()
            },
        )
        .unwrap();

    assert_eq!(outcome.rows_affected, 0);
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn delete_is_idempotent() {
    let store = ContactStore::open_in_memory().unwrap();
    let id = store.create_empty().unwrap().id.to_string();

    assert_eq!(store.delete(&id).unwrap().rows_affected, 1);
    assert!(store.get(&id).unwrap().is_none());
    assert_eq!(store.delete(&id).unwrap().rows_affected, 0);
}

#[test]
fn ids_are_not_reused_after_delete() {
    let store = ContactStore::open_in_memory().unwrap();
    let first = store.create_empty().unwrap();
    store.delete(&first.id.to_string()).unwrap();

    let second = store.create_empty().unwrap();
    assert!(second.id > first.id);
}

#[test]
fn list_contains_all_created_contacts_in_insertion_order() {
    let store = ContactStore::open_in_memory().unwrap();
    let created: Vec<_> = (0..5).map(|_| store.create_empty().unwrap()).collect();
    store
        .update(
            &created[2].id.to_string(),
            &ContactPatch {
                favorite: Some(true),
                ..ContactPatch::default()
            },
        )
        .unwrap();

    let listed = store.list().unwrap();
    assert!(listed.len() >= created.len());

    let listed_ids: Vec<_> = listed.iter().map(|contact| contact.id).collect();
    let mut sorted = listed_ids.clone();
    sorted.sort_unstable();
    assert_eq!(listed_ids, sorted);

    let ids: HashSet<_> = listed_ids.into_iter().collect();
    assert!(created.iter().all(|contact| ids.contains(&contact.id)));
    assert_eq!(
        listed.iter().filter(|contact| contact.favorite).count(),
        1
    );
}

#[test]
fn list_serializes_favorite_as_boolean() {
    let store = ContactStore::open_in_memory().unwrap();
    store.create_empty().unwrap();

    let json = serde_json::to_value(store.list().unwrap()).unwrap();
    assert!(json[0]["favorite"].is_boolean());
}

#[test]
fn rename_and_favorite_scenario() {
    let store = ContactStore::open_in_memory().unwrap();

    let created = store.create_empty().unwrap();
    assert_eq!(created.id, 1);

    store
        .update(
            "1",
            &ContactPatch {
                first: Some("Ada".to_string()),
                favorite: Some(true),
                ..ContactPatch::default()
            },
        )
        .unwrap();

    let loaded = store.get("1").unwrap().unwrap();
    assert_eq!(
        loaded,
        Contact {
            id: 1,
            first: "Ada".to_string(),
            last: "Contact".to_string(),
            twitter: String::new(),
            notes: String::new(),
            favorite: true,
            avatar: String::new(),
        }
    );
}

#[test]
fn patch_deserialized_from_sparse_json_updates_only_given_fields() {
    let store = ContactStore::open_in_memory().unwrap();
    let id = store.create_empty().unwrap().id.to_string();

    let patch: ContactPatch =
        serde_json::from_str(r#"{"twitter": "@ada", "avatar": "data:image/png;base64,AA=="}"#)
            .unwrap();
    store.update(&id, &patch).unwrap();

    let loaded = store.get(&id).unwrap().unwrap();
    assert_eq!(loaded.twitter, "@ada");
    assert_eq!(loaded.avatar, "data:image/png;base64,AA==");
    assert_eq!(loaded.first, "New");
    assert!(!loaded.favorite);
}

#[test]
fn file_backed_store_persists_across_reopen() {
    let dir = tempfile::tempdir().unwrap();
    let config = StoreConfig::new(dir.path().join("contacts.sqlite"));

    let created = {
        let store = ContactStore::open(&config).unwrap();
        let created = store.create_empty().unwrap();
        store
            .update(
                &created.id.to_string(),
                &ContactPatch {
                    last: Some("Lovelace".to_string()),
                    ..ContactPatch::default()
                },
            )
            .unwrap();
        store.close().unwrap();
        created
    };

    let store = ContactStore::open(&config).unwrap();
    let loaded = store.get(&created.id.to_string()).unwrap().unwrap();
    assert_eq!(loaded.last, "Lovelace");
    assert_eq!(store.list().unwrap().len(), 1);
}
