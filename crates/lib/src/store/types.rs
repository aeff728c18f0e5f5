use std::fmt;
use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use crate::consts::{DIR_MODE, FILE_MODE};
use crate::logger::{Logger, TracingLogger};

/// Store operation, used to tag argument errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
  Write,
  Read,
  ReadAll,
  Delete,
}

impl Operation {
  pub fn as_str(&self) -> &'static str {
    match self {
      Operation::Write => "WRITE",
      Operation::Read => "READ",
      Operation::ReadAll => "READ_ALL",
      Operation::Delete => "DELETE",
    }
  }
}

impl fmt::Display for Operation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Which name argument was missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument {
  Collection,
  Resource,
}

impl fmt::Display for Argument {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Argument::Collection => f.write_str("collection"),
      Argument::Resource => f.write_str("resource"),
    }
  }
}

#[derive(Debug, Error)]
pub enum StoreError {
  #[error("[{op}] missing {argument}")]
  MissingArgument { op: Operation, argument: Argument },

  #[error("unable to find directory or resource: {}", .0.display())]
  NotFound(PathBuf),

  #[error("failed to serialize value: {0}")]
  Serialize(#[source] serde_json::Error),

  #[error("failed to parse {}: {source}", path.display())]
  Deserialize { path: PathBuf, source: serde_json::Error },

  #[error("failed to create directory {}: {source}", path.display())]
  CreateDir { path: PathBuf, source: io::Error },

  #[error("failed to write {}: {source}", path.display())]
  Write { path: PathBuf, source: io::Error },

  #[error("failed to publish {}: {source}", path.display())]
  Rename { path: PathBuf, source: io::Error },

  #[error("failed to read {}: {source}", path.display())]
  Read { path: PathBuf, source: io::Error },

  #[error("failed to list {}: {source}", path.display())]
  ReadDir { path: PathBuf, source: io::Error },

  #[error("failed to remove {}: {source}", path.display())]
  Remove { path: PathBuf, source: io::Error },
}

impl StoreError {
  pub fn is_not_found(&self) -> bool {
    matches!(self, StoreError::NotFound(_))
  }

  pub fn is_missing_argument(&self) -> bool {
    matches!(self, StoreError::MissingArgument { .. })
  }
}

/// Construction-time configuration for a [`Store`](super::Store).
#[derive(Clone)]
pub struct StoreOptions {
  /// Diagnostic sink. Defaults to [`TracingLogger`].
  pub logger: Arc<dyn Logger>,
  /// Unix permission bits for created directories.
  pub dir_mode: u32,
  /// Unix permission bits for resource files.
  pub file_mode: u32,
}

impl StoreOptions {
  pub fn with_logger(mut self, logger: Arc<dyn Logger>) -> Self {
    self.logger = logger;
    self
  }
}

impl Default for StoreOptions {
  fn default() -> Self {
    Self {
      logger: Arc::new(TracingLogger),
      dir_mode: DIR_MODE,
      file_mode: FILE_MODE,
    }
  }
}

impl fmt::Debug for StoreOptions {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("StoreOptions")
      .field("dir_mode", &format_args!("{:o}", self.dir_mode))
      .field("file_mode", &format_args!("{:o}", self.file_mode))
      .finish_non_exhaustive()
  }
}
