//! Seed command implementation.
//!
//! Writes the sample employees, then walks through listing, reading and
//! deleting them so every store operation is exercised end to end.

use anyhow::{Context, Result};
use tracing::info;

use jsonstore_lib::Store;
use jsonstore_lib::sample::{User, employees};

use crate::output::{print_info, print_stat, print_success, print_warning, record_label};

/// Record read back after seeding.
const LOOKUP: &str = "Zhora";

/// Record deleted after seeding.
const REMOVE: &str = "John";

pub fn cmd_seed(store: &Store, collection: &str) -> Result<()> {
  let users = employees();

  for user in &users {
    store
      .write(collection, &user.name, user)
      .with_context(|| format!("Failed to write {}", record_label(collection, &user.name)))?;
    info!(collection, resource = %user.name, "seeded record");
  }
  print_success(&format!("Wrote {} user(s) to {}", users.len(), collection));

  let records = store.read_all(collection)?;
  let mut loaded = Vec::with_capacity(records.len());
  for raw in &records {
    let user: User = serde_json::from_str(raw).context("Stored record is not a user")?;
    loaded.push(user);
  }
  print_info(&format!("{} record(s) in {}", loaded.len(), collection));
  for user in &loaded {
    print_stat(&user.name, &format!("{} ({})", user.company, user.address.city));
  }

  let found: User = store.read(collection, LOOKUP)?;
  print_info(&format!("Read {}", record_label(collection, LOOKUP)));
  print_stat("Age", &found.age.to_string());
  print_stat("Company", &found.company);

  store.delete(collection, REMOVE)?;
  print_success(&format!("Deleted {}", record_label(collection, REMOVE)));

  // Deleting without a resource name is rejected before touching the disk.
  if let Err(e) = store.delete(collection, "") {
    print_warning(&e.to_string());
  }

  Ok(())
}
