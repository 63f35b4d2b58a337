//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::path::PathBuf;

use directories::ProjectDirs;

const QUALIFIER: &str = "dev";
const ORGANIZATION: &str = "editables";
const APPLICATION: &str = "editables";

/// Get project directories, or None if home directory cannot be determined.
fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory for configuration files.
///
/// - Linux: `$XDG_CONFIG_HOME/editables` or `~/.config/editables`
/// - macOS: `~/Library/Application Support/dev.editables.editables`
/// - Windows: `C:\Users\<User>\AppData\Roaming\editables\editables\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the default binding configuration.
pub fn binding_config() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("binding.json"))
}
