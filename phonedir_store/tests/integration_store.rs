//! Integration tests for the CSV contact store.
//!
//! These tests verify that:
//! - Rows survive a rewrite unchanged and in order
//! - Appends land at the end without disturbing earlier rows
//! - Malformed files are reported as read errors instead of being guessed at
//! - The directory service works end to end on top of the file

use std::fs;

use phonedir_core::{Contact, ContactStore, Directory, Error, Group, MatchPolicy, SearchOutcome};
use phonedir_store::CsvContactStore;
use tempfile::TempDir;

fn fresh_store() -> (CsvContactStore, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvContactStore::new(temp_dir.path().join("contacts.csv"));
    store.initialize().unwrap();
    (store, temp_dir)
}

fn sample() -> Vec<Contact> {
    vec![
        Contact::new("Alice", "100", "HR & Admin"),
        Contact::new("Bob", "200", "Desk"),
        Contact::new("Chowdhury, Tanvir", "+880 1711-000000", "Accounts_Marketing"),
        Contact::new("Dana \"DJ\" Islam", "300", "Bureau Office"),
    ]
}

#[test]
fn test_replace_all_then_load_round_trips() {
    let (store, _dir) = fresh_store();
    let contacts = sample();

    store.replace_all(&contacts).unwrap();
    let loaded = store.load_all().unwrap();
    assert_eq!(loaded, contacts);

    store.replace_all(&loaded).unwrap();
    assert_eq!(store.load_all().unwrap(), contacts);
}

#[test]
fn test_append_lands_last() {
    let (store, _dir) = fresh_store();
    store.replace_all(&sample()).unwrap();

    let extra = Contact::new("Eve", "400", "Fm");
    store.append(&extra).unwrap();

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded.len(), 5);
    assert_eq!(loaded[..4], sample()[..]);
    assert_eq!(loaded.last(), Some(&extra));
}

#[test]
fn test_append_does_not_deduplicate() {
    let (store, _dir) = fresh_store();
    let contact = Contact::new("Alice", "100", "Desk");
    store.append(&contact).unwrap();
    store.append(&contact).unwrap();
    assert_eq!(store.load_all().unwrap().len(), 2);
}

#[test]
fn test_append_initializes_missing_file() {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvContactStore::new(temp_dir.path().join("contacts.csv"));
    store.append(&Contact::new("Alice", "100", "Desk")).unwrap();
    assert_eq!(store.load_all().unwrap().len(), 1);
}

#[test]
fn test_reads_file_written_with_crlf() {
    let (store, _dir) = fresh_store();
    fs::write(store.path(), "name,phone,group\r\nAlice,100,Desk\r\nBob,200,Fm\r\n").unwrap();
    let loaded = store.load_all().unwrap();
    assert_eq!(
        loaded,
        vec![
            Contact::new("Alice", "100", "Desk"),
            Contact::new("Bob", "200", "Fm"),
        ]
    );
}

#[test]
fn test_append_after_unterminated_last_line() {
    let (store, _dir) = fresh_store();
    fs::write(store.path(), "name,phone,group\nAlice,100,Desk").unwrap();
    assert_eq!(store.load_all().unwrap().len(), 1);

    let bob = Contact::new("Bob", "200", "Fm");
    store.append(&bob).unwrap();

    let loaded = store.load_all().unwrap();
    assert_eq!(loaded, vec![Contact::new("Alice", "100", "Desk"), bob]);
}

#[test]
fn test_append_after_crlf_terminated_file() {
    let (store, _dir) = fresh_store();
    fs::write(store.path(), "name,phone,group\r\nAlice,100,Desk\r\n").unwrap();
    store.append(&Contact::new("Bob", "200", "Fm")).unwrap();

    let text = fs::read_to_string(store.path()).unwrap();
    assert!(!text.contains("\n\n"));
    assert_eq!(store.load_all().unwrap().len(), 2);
}

#[test]
fn test_missing_file_is_read_error() {
    let temp_dir = TempDir::new().unwrap();
    let store = CsvContactStore::new(temp_dir.path().join("absent.csv"));
    let err = store.load_all().unwrap_err();
    assert!(matches!(err, Error::StoreRead { .. }));
}

#[test]
fn test_empty_file_is_missing_header() {
    let (store, _dir) = fresh_store();
    fs::write(store.path(), "").unwrap();
    match store.load_all() {
        Err(Error::StoreRead { reason, .. }) => assert!(reason.contains("missing header")),
        other => panic!("expected StoreRead, got {other:?}"),
    }
}

#[test]
fn test_wrong_header_is_read_error() {
    let (store, _dir) = fresh_store();
    fs::write(store.path(), "phone,name,group\n100,Alice,Desk\n").unwrap();
    match store.load_all() {
        Err(Error::StoreRead { reason, .. }) => assert!(reason.contains("unexpected header")),
        other => panic!("expected StoreRead, got {other:?}"),
    }
}

#[test]
fn test_wrong_column_count_is_read_error() {
    let (store, _dir) = fresh_store();
    fs::write(store.path(), "name,phone,group\nAlice,100,Desk\nBob,200\n").unwrap();
    match store.load_all() {
        Err(Error::StoreRead { reason, .. }) => {
            assert!(reason.contains("expected 3 fields, found 2"), "{reason}");
        }
        other => panic!("expected StoreRead, got {other:?}"),
    }
}

#[test]
fn test_extra_column_is_read_error() {
    let (store, _dir) = fresh_store();
    fs::write(store.path(), "name,phone,group\nAlice,100,Desk,spare\n").unwrap();
    match store.load_all() {
        Err(Error::StoreRead { reason, .. }) => {
            assert!(reason.contains("expected 3 fields, found 4"), "{reason}");
        }
        other => panic!("expected StoreRead, got {other:?}"),
    }
}

#[test]
fn test_directory_add_search_update_on_disk() {
    let (store, _dir) = fresh_store();
    let allow = |_: &phonedir_core::AuthRequest<'_>| true;
    let dir = Directory::open(&store).unwrap().with_policy(MatchPolicy::PrefixFirst);

    dir.add("Alice", "100", Some(Group::HrAdmin), &allow).unwrap();
    dir.add("Bob", "200", Some(Group::Desk), &allow).unwrap();
    let err = dir.add("bob", "201", Some(Group::Desk), &allow).unwrap_err();
    assert!(matches!(err, Error::DuplicateName(_)));

    let contacts = dir.contacts().unwrap();
    match dir.search(&contacts, "ob") {
        SearchOutcome::Matches(found) => assert_eq!(found, vec![&contacts[1]]),
        SearchOutcome::NoResults => panic!("expected a substring match"),
    }

    dir.update(Some("Bob"), "Robert", "202", &allow).unwrap();
    let reloaded = CsvContactStore::new(store.path()).load_all().unwrap();
    assert_eq!(
        reloaded,
        vec![
            Contact::new("Alice", "100", "HR & Admin"),
            Contact::new("Robert", "202", "Desk"),
        ]
    );
}
