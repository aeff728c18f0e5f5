//! jsonstore-lib: an embedded document store backed by one JSON file per record.
//!
//! - `Store`: collections as directories, resources as `<name>.json` files
//! - `Logger`: pluggable diagnostic sink, `tracing` by default
//! - `platform::paths`: default root directory resolution

pub mod consts;
pub mod logger;
pub mod platform;
pub mod sample;
pub mod store;

pub use logger::{Logger, TracingLogger};
pub use store::{Argument, Operation, Store, StoreError, StoreOptions};
