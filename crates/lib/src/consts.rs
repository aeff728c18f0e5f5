/// Application name, used for default data directories.
pub const APP_NAME: &str = "jsonstore";

/// Environment variable that overrides the default store root.
pub const ROOT_ENV_VAR: &str = "JSONSTORE_ROOT";

/// Extension appended to every resource file.
pub const EXTENSION: &str = ".json";

/// Suffix appended to a resource path while a write is in flight.
pub const TMP_SUFFIX: &str = ".tmp";

/// Permission bits for the root and collection directories.
pub const DIR_MODE: u32 = 0o755;

/// Permission bits for resource files.
pub const FILE_MODE: u32 = 0o644;
