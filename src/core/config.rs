//! Configuration constants and settings

// Snapshot container conventions
//
// Each entry is a path relative to the search root. Order is priority: the
// first one that exists as a directory is the container, later ones are never
// consulted.
// - `.snap`          CephFS
// - `.snapshot`      NetApp / NFS filers
// - `.snapshots`     snapper on Btrfs
// - `.zfs/snapshot`  ZFS
pub const DEFAULT_CONTAINER_NAMES: &[&str] = &[".snap", ".snapshot", ".snapshots", ".zfs/snapshot"];

// Timestamp templates, tried in order. See `crate::timestamp` for the grammar.
pub const DEFAULT_TIMESTAMP_TEMPLATES: &[&str] = &[
    "*'scheduled-'yyyy-MM-dd-HH_mm_ss'_UTC'*",
    "*yyyy-MM-dd_HH.mm.ss*",
    "*yyyy-MM-dd-HHmm",
];

// Settings file discovery
pub const SETTINGS_ENV_VAR: &str = "SNAPS_CONFIG";
pub const SETTINGS_DIR_NAME: &str = "snaps";
pub const SETTINGS_FILE_NAME: &str = "config.toml";

// UI Constants
pub const NOT_SUPPORTED_MESSAGE: &str = "Snapshots are not supported at this location.";
pub const DATE_DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const NAME_COLUMN_MIN_WIDTH: usize = 12;
pub const PATH_DISPLAY_WIDTH: usize = 40;
pub const COLLAPSED_MARKER: &str = "▸";
pub const EXPANDED_MARKER: &str = "▾";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "snapshot_finder=warn,snaps=warn";
pub const VERBOSE_LOG_FILTER: &str = "snapshot_finder=debug,snaps=debug";

// Pre-allocation hint for snapshot listings
pub const ESTIMATED_SNAPSHOT_COUNT: usize = 32;
