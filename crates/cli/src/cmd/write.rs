use std::io::{self, Read};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::debug;

use jsonstore_lib::Store;

use crate::output::{print_success, record_label};

/// Store a JSON value, read from `json` or stdin when absent.
pub fn cmd_write(store: &Store, collection: &str, resource: &str, json: Option<String>) -> Result<()> {
  let raw = match json {
    Some(raw) => raw,
    None => {
      let mut buf = String::new();
      io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read value from stdin")?;
      buf
    }
  };

  let value: Value = serde_json::from_str(&raw).context("Value is not valid JSON")?;
  debug!(collection, resource, "writing record");

  store.write(collection, resource, &value)?;

  print_success(&format!("Wrote {}", record_label(collection, resource)));
  Ok(())
}
