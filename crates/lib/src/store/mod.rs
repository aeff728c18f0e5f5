//! The document store.
//!
//! Every record lives in its own JSON file, grouped by collection:
//!
//! ```text
//! <root>/
//! └── <collection>/
//!     ├── <resource>.json        # tab-indented JSON, trailing newline
//!     └── <resource>.json.tmp    # only while a write is in flight
//! ```
//!
//! Writes go to the temp file first and are published with a rename, so readers
//! see either the previous complete record or the new one. Writes and deletes
//! are serialized per collection; reads take no lock.

pub mod locks;
pub mod paths;
pub mod types;

use std::fs::{self, DirBuilder, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::ser::PrettyFormatter;

use crate::consts::EXTENSION;
use crate::logger::Logger;

use locks::LockRegistry;
use paths::{
  clean_path, collection_dir, collection_key, record_path, resolve_existing, resource_path, temp_path, validate_name,
  with_suffix,
};
pub use types::{Argument, Operation, StoreError, StoreOptions};

#[derive(Debug)]
pub struct Store {
  root: PathBuf,
  locks: LockRegistry,
  options: StoreOptions,
}

impl Store {
  /// Open a store at `root` with default options, creating the directory if needed.
  pub fn new(root: impl AsRef<Path>) -> Result<Self, StoreError> {
    Self::open(root, StoreOptions::default())
  }

  /// Open a store at `root`, creating the directory if needed.
  ///
  /// The path is made absolute and cleaned first. Creation failures are
  /// returned as-is; nothing is retried.
  pub fn open(root: impl AsRef<Path>, options: StoreOptions) -> Result<Self, StoreError> {
    let requested = root.as_ref();
    let root = clean_path(requested).map_err(|source| StoreError::CreateDir {
      path: requested.to_path_buf(),
      source,
    })?;

    if root.is_dir() {
      options
        .logger
        .debug(&format!("Using '{}' (database already exists)", root.display()));
    } else {
      options
        .logger
        .debug(&format!("Creating the database at '{}'...", root.display()));
      create_dir(&root, options.dir_mode)?;
    }

    Ok(Self {
      root,
      locks: LockRegistry::new(),
      options,
    })
  }

  /// Root directory of this store.
  pub fn root(&self) -> &Path {
    &self.root
  }

  fn logger(&self) -> &Arc<dyn Logger> {
    &self.options.logger
  }

  /// Persist `value` as `<collection>/<resource>.json`.
  ///
  /// The value is written to a sibling temp file and renamed into place while the
  /// collection lock is held. On failure before the rename the previous content,
  /// if any, is untouched; a stray temp file may be left behind.
  pub fn write<T: Serialize + ?Sized>(&self, collection: &str, resource: &str, value: &T) -> Result<(), StoreError> {
    validate_name(Operation::Write, Argument::Collection, collection)?;
    validate_name(Operation::Write, Argument::Resource, resource)?;

    let lock = self.locks.acquire_or_create(&collection_key(collection));
    let _guard = lock.lock();

    let dir = collection_dir(&self.root, collection);
    let final_path = resource_path(&self.root, collection, resource);
    let tmp_path = temp_path(&final_path);

    create_dir(&dir, self.options.dir_mode)?;

    let bytes = encode(value).map_err(StoreError::Serialize)?;

    write_file(&tmp_path, &bytes, self.options.file_mode).map_err(|source| StoreError::Write {
      path: tmp_path.clone(),
      source,
    })?;
    fs::rename(&tmp_path, &final_path).map_err(|source| StoreError::Rename {
      path: final_path.clone(),
      source,
    })?;

    self
      .logger()
      .trace(&format!("wrote {}/{} ({} bytes)", collection, resource, bytes.len()));
    Ok(())
  }

  /// Load `<collection>/<resource>` and deserialize it.
  pub fn read<T: DeserializeOwned>(&self, collection: &str, resource: &str) -> Result<T, StoreError> {
    validate_name(Operation::Read, Argument::Collection, collection)?;
    validate_name(Operation::Read, Argument::Resource, resource)?;

    let record = record_path(&self.root, collection, resource);
    if self.resolve(&record)?.is_none() {
      return Err(StoreError::NotFound(record));
    }

    let path = with_suffix(&record, EXTENSION);
    let content = fs::read_to_string(&path).map_err(|source| {
      if source.kind() == io::ErrorKind::NotFound {
        StoreError::NotFound(path.clone())
      } else {
        StoreError::Read {
          path: path.clone(),
          source,
        }
      }
    })?;

    serde_json::from_str(&content).map_err(|source| StoreError::Deserialize { path, source })
  }

  /// Like [`read`](Self::read), but overwrites `destination` in place.
  ///
  /// `destination` is left unchanged when an error is returned.
  pub fn read_into<T: DeserializeOwned>(
    &self,
    collection: &str,
    resource: &str,
    destination: &mut T,
  ) -> Result<(), StoreError> {
    *destination = self.read(collection, resource)?;
    Ok(())
  }

  /// Raw text of every entry in `collection`, ordered by file name.
  ///
  /// One unreadable entry fails the whole call.
  pub fn read_all(&self, collection: &str) -> Result<Vec<String>, StoreError> {
    let records = self.read_entries(collection)?;
    Ok(records.into_iter().map(|(_, content)| content).collect())
  }

  /// [`read_all`](Self::read_all), deserializing each record into `T`.
  ///
  /// The first record that does not fit `T` fails the call, naming its file.
  pub fn read_all_as<T: DeserializeOwned>(&self, collection: &str) -> Result<Vec<T>, StoreError> {
    self
      .read_entries(collection)?
      .into_iter()
      .map(|(path, content)| serde_json::from_str(&content).map_err(|source| StoreError::Deserialize { path, source }))
      .collect()
  }

  fn read_entries(&self, collection: &str) -> Result<Vec<(PathBuf, String)>, StoreError> {
    validate_name(Operation::ReadAll, Argument::Collection, collection)?;

    let dir = collection_dir(&self.root, collection);
    match fs::metadata(&dir) {
      Ok(metadata) if metadata.is_dir() => {}
      Ok(_) => return Err(StoreError::NotFound(dir)),
      Err(e) if e.kind() == io::ErrorKind::NotFound => return Err(StoreError::NotFound(dir)),
      Err(source) => return Err(StoreError::ReadDir { path: dir, source }),
    }

    let mut entries = fs::read_dir(&dir)
      .and_then(|entries| entries.collect::<io::Result<Vec<_>>>())
      .map_err(|source| StoreError::ReadDir {
        path: dir.clone(),
        source,
      })?;
    entries.sort_by_key(|entry| entry.file_name());

    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
      let path = entry.path();
      match fs::read_to_string(&path) {
        Ok(content) => records.push((path, content)),
        Err(source) => return Err(StoreError::Read { path, source }),
      }
    }

    self
      .logger()
      .trace(&format!("read {} record(s) from {}", records.len(), collection));
    Ok(records)
  }

  /// Remove `<collection>/<resource>`.
  ///
  /// A directory at the bare resource path is removed recursively; otherwise the
  /// `.json` file is removed. Siblings are never touched.
  pub fn delete(&self, collection: &str, resource: &str) -> Result<(), StoreError> {
    validate_name(Operation::Delete, Argument::Collection, collection)?;
    validate_name(Operation::Delete, Argument::Resource, resource)?;

    let lock = self.locks.acquire_or_create(&collection_key(collection));
    let _guard = lock.lock();

    let record = record_path(&self.root, collection, resource);
    let Some(resolved) = self.resolve(&record)? else {
      return Err(StoreError::NotFound(record));
    };

    if resolved.is_dir() {
      fs::remove_dir_all(&resolved.path).map_err(|source| StoreError::Remove {
        path: resolved.path.clone(),
        source,
      })?;
    } else {
      let path = with_suffix(&record, EXTENSION);
      fs::remove_file(&path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
          StoreError::NotFound(path.clone())
        } else {
          StoreError::Remove {
            path: path.clone(),
            source,
          }
        }
      })?;
    }

    self.logger().debug(&format!("deleted {}/{}", collection, resource));
    Ok(())
  }

  fn resolve(&self, record: &Path) -> Result<Option<paths::Resolved>, StoreError> {
    resolve_existing(record).map_err(|source| StoreError::Read {
      path: record.to_path_buf(),
      source,
    })
  }
}

/// Tab-indented JSON with a trailing newline.
fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, serde_json::Error> {
  let mut buf = Vec::new();
  let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
  value.serialize(&mut serializer)?;
  buf.push(b'\n');
  Ok(buf)
}

fn create_dir(path: &Path, mode: u32) -> Result<(), StoreError> {
  let mut builder = DirBuilder::new();
  builder.recursive(true);
  #[cfg(unix)]
  {
    use std::os::unix::fs::DirBuilderExt;
    builder.mode(mode);
  }
  #[cfg(not(unix))]
  let _ = mode;

  builder.create(path).map_err(|source| StoreError::CreateDir {
    path: path.to_path_buf(),
    source,
  })
}

fn write_file(path: &Path, bytes: &[u8], mode: u32) -> io::Result<()> {
  let mut options = OpenOptions::new();
  options.write(true).create(true).truncate(true);
  #[cfg(unix)]
  {
    use std::os::unix::fs::OpenOptionsExt;
    options.mode(mode);
  }
  #[cfg(not(unix))]
  let _ = mode;

  let mut file = options.open(path)?;
  file.write_all(bytes)?;
  file.sync_all()
}
