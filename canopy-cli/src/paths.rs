//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "canopy";
const APPLICATION: &str = "canopy";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the cache directory for temporary/regenerable data.
///
/// - Linux: `$XDG_CACHE_HOME/canopy` or `~/.cache/canopy`
/// - macOS: `~/Library/Caches/dev.canopy.canopy`
/// - Windows: `C:\Users\<User>\AppData\Local\canopy\canopy\cache`
pub fn cache_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.cache_dir().to_path_buf())
}

/// Get the path to the latest log file.
pub fn log_file() -> Option<PathBuf> {
    cache_dir().map(|dir| dir.join("latest.log"))
}
