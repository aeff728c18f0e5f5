mod delete;
mod read;
mod read_all;
mod seed;
mod write;

pub use delete::cmd_delete;
pub use read::cmd_read;
pub use read_all::cmd_read_all;
pub use seed::cmd_seed;
pub use write::cmd_write;

use std::path::PathBuf;

use anyhow::{Context, Result};
use jsonstore_lib::Store;
use jsonstore_lib::consts::ROOT_ENV_VAR;
use jsonstore_lib::platform::paths::default_root;

/// Open the store at `root`, falling back to the default location.
pub fn open_store(root: Option<PathBuf>) -> Result<Store> {
  let root = root.or_else(default_root).with_context(|| {
    format!(
      "Could not determine store root. Pass --root or set {}",
      ROOT_ENV_VAR
    )
  })?;

  Store::new(&root).with_context(|| format!("Failed to open store at {}", root.display()))
}
