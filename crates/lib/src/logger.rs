//! Pluggable diagnostic logging for the store.
//!
//! The store never consults the logger for control flow; it only reports what it
//! is doing. The default sink forwards everything to `tracing`, so whatever
//! subscriber the host installs decides where messages end up.

use crate::consts::APP_NAME;

/// A leveled logging sink.
pub trait Logger: Send + Sync {
  fn fatal(&self, message: &str);
  fn error(&self, message: &str);
  fn warn(&self, message: &str);
  fn info(&self, message: &str);
  fn debug(&self, message: &str);
  fn trace(&self, message: &str);
}

/// Default logger that forwards to the `tracing` macros.
///
/// Events use the `jsonstore` target. `tracing` has no fatal level, so fatal
/// messages are emitted as errors tagged with `fatal = true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl Logger for TracingLogger {
  fn fatal(&self, message: &str) {
    tracing::error!(target: APP_NAME, fatal = true, "{}", message);
  }

  fn error(&self, message: &str) {
    tracing::error!(target: APP_NAME, "{}", message);
  }

  fn warn(&self, message: &str) {
    tracing::warn!(target: APP_NAME, "{}", message);
  }

  fn info(&self, message: &str) {
    tracing::info!(target: APP_NAME, "{}", message);
  }

  fn debug(&self, message: &str) {
    tracing::debug!(target: APP_NAME, "{}", message);
  }

  fn trace(&self, message: &str) {
    tracing::trace!(target: APP_NAME, "{}", message);
  }
}
