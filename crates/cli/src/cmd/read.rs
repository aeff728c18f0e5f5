use anyhow::Result;
use serde::Serialize;
use serde_json::Value;

use jsonstore_lib::Store;

use crate::output::{OutputFormat, print_json};

pub fn cmd_read(store: &Store, collection: &str, resource: &str, output: OutputFormat) -> Result<()> {
  let value: Value = store.read(collection, resource)?;

  if output.is_json() {
    #[derive(Serialize)]
    struct ReadOutput<'a> {
      collection: &'a str,
      resource: &'a str,
      value: Value,
    }

    print_json(&ReadOutput {
      collection,
      resource,
      value,
    })?;
  } else {
    print_json(&value)?;
  }

  Ok(())
}
