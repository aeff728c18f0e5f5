//! Name validation and on-disk path resolution for collections and resources.

use std::ffi::OsString;
use std::fs::{self, Metadata};
use std::io;
use std::path::{Component, Path, PathBuf};

use crate::consts::{EXTENSION, TMP_SUFFIX};

use super::types::{Argument, Operation, StoreError};

/// A path that was found on disk, together with its metadata.
#[derive(Debug)]
pub struct Resolved {
  pub path: PathBuf,
  pub metadata: Metadata,
}

impl Resolved {
  pub fn is_dir(&self) -> bool {
    self.metadata.is_dir()
  }
}

/// Reject collection or resource names that do not name anything below the root.
///
/// An empty name, or one made only of `/`, `.` or `..` components, is missing.
pub fn validate_name(op: Operation, argument: Argument, value: &str) -> Result<(), StoreError> {
  if normalize_name(value).as_os_str().is_empty() {
    return Err(StoreError::MissingArgument { op, argument });
  }
  Ok(())
}

/// Relative form of a name: only its normal components, in order.
///
/// Root, prefix, `.` and `..` components are dropped, so the result always
/// stays below whatever it is joined onto.
pub fn normalize_name(name: &str) -> PathBuf {
  Path::new(name)
    .components()
    .filter_map(|component| match component {
      Component::Normal(part) => Some(part),
      _ => None,
    })
    .collect()
}

/// Key identifying a collection in the lock registry.
///
/// Names that resolve to the same directory share a key.
pub fn collection_key(collection: &str) -> String {
  normalize_name(collection).to_string_lossy().into_owned()
}

/// Append `suffix` to the final component of `path` without touching any existing extension.
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
  let mut raw: OsString = path.as_os_str().to_owned();
  raw.push(suffix);
  PathBuf::from(raw)
}

/// `<root>/<collection>`
pub fn collection_dir(root: &Path, collection: &str) -> PathBuf {
  root.join(normalize_name(collection))
}

/// `<root>/<collection>/<resource>`, without the extension.
pub fn record_path(root: &Path, collection: &str, resource: &str) -> PathBuf {
  collection_dir(root, collection).join(normalize_name(resource))
}

/// `<root>/<collection>/<resource>.json`
pub fn resource_path(root: &Path, collection: &str, resource: &str) -> PathBuf {
  with_suffix(&record_path(root, collection, resource), EXTENSION)
}

/// `<root>/<collection>/<resource>.json.tmp`
pub fn temp_path(final_path: &Path) -> PathBuf {
  with_suffix(final_path, TMP_SUFFIX)
}

/// Look up `path` on disk, falling back to `path.json`.
///
/// The bare path wins if it exists. Returns `Ok(None)` when neither exists; any
/// other stat failure is returned as-is.
pub fn resolve_existing(path: &Path) -> io::Result<Option<Resolved>> {
  match fs::metadata(path) {
    Ok(metadata) => {
      return Ok(Some(Resolved {
        path: path.to_path_buf(),
        metadata,
      }));
    }
    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
    Err(e) => return Err(e),
  }

  let with_ext = with_suffix(path, EXTENSION);
  match fs::metadata(&with_ext) {
    Ok(metadata) => Ok(Some(Resolved {
      path: with_ext,
      metadata,
    })),
    Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
    Err(e) => Err(e),
  }
}

/// Make `path` absolute and lexically drop `.` and `..` components.
///
/// Does not touch the filesystem beyond reading the current directory, so it
/// works for roots that do not exist yet.
pub fn clean_path(path: &Path) -> io::Result<PathBuf> {
  let absolute = std::path::absolute(path)?;

  let mut cleaned = PathBuf::new();
  for component in absolute.components() {
    match component {
      Component::CurDir => {}
      Component::ParentDir => {
        cleaned.pop();
      }
      other => cleaned.push(other.as_os_str()),
    }
  }
  Ok(cleaned)
}
