//! End-to-end tests for the public store API.

use std::fs;
use std::sync::Arc;
use std::thread;

use jsonstore_lib::sample::{USERS, User, employees};
use jsonstore_lib::{Store, StoreError};
use tempfile::TempDir;

#[test]
fn sample_users_roundtrip() {
  let temp = TempDir::new().unwrap();
  let store = Store::new(temp.path()).unwrap();

  for user in employees() {
    store.write(USERS, &user.name, &user).unwrap();
  }

  let zhora: User = store.read(USERS, "Zhora").unwrap();
  assert_eq!(zhora.company, "Dominate");

  let all: Vec<User> = store.read_all_as(USERS).unwrap();
  assert_eq!(all.len(), employees().len());

  store.delete(USERS, "John").unwrap();
  assert_eq!(store.read_all(USERS).unwrap().len(), employees().len() - 1);
  assert!(store.read::<User>(USERS, "John").unwrap_err().is_not_found());
}

#[test]
fn stored_user_uses_original_field_names() {
  let temp = TempDir::new().unwrap();
  let store = Store::new(temp.path()).unwrap();
  let john = employees().remove(0);

  store.write(USERS, "John", &john).unwrap();

  let content = fs::read_to_string(temp.path().join(USERS).join("John.json")).unwrap();
  assert!(content.starts_with("{\n\t\"Name\": \"John\",\n\t\"Age\": 23,"));
  assert!(content.contains("\t\"Address\": {\n\t\t\"City\": \"bangalore\","));
  assert!(content.ends_with("}\n"));
}

#[test]
fn shared_store_across_threads() {
  let temp = TempDir::new().unwrap();
  let store = Arc::new(Store::new(temp.path()).unwrap());

  let handles: Vec<_> = ["users", "orders", "items"]
    .into_iter()
    .flat_map(|collection| (0..10).map(move |i| (collection, i)))
    .map(|(collection, i)| {
      let store = Arc::clone(&store);
      thread::spawn(move || {
        store
          .write(collection, &format!("r{}", i), &serde_json::json!({ "i": i }))
          .unwrap();
      })
    })
    .collect();

  for handle in handles {
    handle.join().unwrap();
  }

  for collection in ["users", "orders", "items"] {
    assert_eq!(store.read_all(collection).unwrap().len(), 10);
  }
}

#[test]
fn writes_race_with_reads_without_torn_values() {
  let temp = TempDir::new().unwrap();
  let store = Store::new(temp.path()).unwrap();
  let big = |n: usize| serde_json::json!({ "n": n, "pad": "x".repeat(64 * 1024) });
  store.write("blobs", "one", &big(0)).unwrap();

  thread::scope(|scope| {
    scope.spawn(|| {
      for n in 1..50 {
        store.write("blobs", "one", &big(n)).unwrap();
      }
    });
    scope.spawn(|| {
      for _ in 0..200 {
        let value: serde_json::Value = store.read("blobs", "one").unwrap();
        assert_eq!(value["pad"].as_str().unwrap().len(), 64 * 1024);
      }
    });
  });
}

#[test]
fn reopening_keeps_existing_data() {
  let temp = TempDir::new().unwrap();
  {
    let store = Store::new(temp.path()).unwrap();
    store.write("users", "alice", &"hello").unwrap();
  }

  let store = Store::new(temp.path()).unwrap();
  let value: String = store.read("users", "alice").unwrap();
  assert_eq!(value, "hello");
}

#[test]
fn stray_temp_file_is_listed_by_read_all() {
  let temp = TempDir::new().unwrap();
  let store = Store::new(temp.path()).unwrap();
  store.write("users", "alice", &1).unwrap();
  fs::write(temp.path().join("users").join("bob.json.tmp"), "partial").unwrap();

  let records = store.read_all("users").unwrap();
  assert_eq!(records, vec!["1\n".to_string(), "partial".to_string()]);
  assert!(matches!(
    store.read::<i32>("users", "bob"),
    Err(StoreError::NotFound(_))
  ));
}
