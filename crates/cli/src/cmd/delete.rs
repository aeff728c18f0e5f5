use anyhow::Result;
use tracing::info;

use jsonstore_lib::Store;

use crate::output::{print_success, record_label};

pub fn cmd_delete(store: &Store, collection: &str, resource: &str) -> Result<()> {
  store.delete(collection, resource)?;

  info!(collection, resource, "deleted record");
  print_success(&format!("Deleted {}", record_label(collection, resource)));
  Ok(())
}
