pub(crate) mod fs;
pub(crate) mod logging;

// Public API - utilities used by commands
pub use fs::{normalize_path, shorten_path};
pub use logging::init_logging;
