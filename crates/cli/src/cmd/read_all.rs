use anyhow::{Context, Result};
use serde_json::Value;

use jsonstore_lib::Store;

use crate::output::{OutputFormat, print_info, print_json};

pub fn cmd_read_all(store: &Store, collection: &str, output: OutputFormat) -> Result<()> {
  let records = store.read_all(collection)?;

  if output.is_json() {
    let values = records
      .iter()
      .enumerate()
      .map(|(i, raw)| serde_json::from_str::<Value>(raw).with_context(|| format!("Record {} is not valid JSON", i)))
      .collect::<Result<Vec<_>>>()?;
    print_json(&values)?;
    return Ok(());
  }

  if records.is_empty() {
    print_info(&format!("No records in {}", collection));
    return Ok(());
  }

  for record in &records {
    print!("{}", record);
  }
  print_info(&format!("{} record(s) in {}", records.len(), collection));

  Ok(())
}
