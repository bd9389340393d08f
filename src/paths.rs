// SPDX-License-Identifier: MPL-2.0
//! Resolution of the bundled admin UI directory.
//!
//! The compiled UI ships next to the plugin itself, so the path is derived
//! from the plugin's own install location rather than from the process's
//! working directory. For an install at `/opt/host/plugins/admin-ui-plugin/bin`
//! the bundled app lives at `/opt/host/plugins/admin-ui-plugin/admin-ui`.
//!
//! Resolution happens exactly once per process and is cached; repeated reads
//! return the identical path. Existence of the directory is never checked
//! here — a host that points the UI server at a missing directory finds out
//! when it serves, not when it configures.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use tracing::debug;

/// Directory name of the bundled admin UI, a sibling of the install dir.
const APP_DIR_NAME: &str = "admin-ui";

/// Process-wide resolved app path (set once on first read).
static DEFAULT_APP_PATH: OnceLock<PathBuf> = OnceLock::new();

/// Resolves the bundled app directory for a given install directory.
///
/// Purely lexical: pops the last component and appends `admin-ui`, without
/// touching the filesystem. Given `/app/plugins/admin/dist` the result is
/// `/app/plugins/admin/admin-ui`.
pub fn resolve_app_path(install_dir: &Path) -> PathBuf {
    let mut path = install_dir.to_path_buf();
    path.pop();
    path.push(APP_DIR_NAME);
    path
}

/// Returns the default bundled app path for this process.
///
/// Resolved on first call from the directory containing the running
/// executable, then cached for the lifetime of the process. The result is
/// always absolute, regardless of the current working directory.
pub fn default_app_path() -> &'static Path {
    DEFAULT_APP_PATH
        .get_or_init(|| {
            let path = resolve_app_path(&install_dir());
            debug!(path = %path.display(), "resolved bundled admin UI directory");
            path
        })
        .as_path()
}

/// The plugin's install directory: where the running executable lives.
///
/// Falls back to the current directory if the executable path cannot be
/// determined (rare edge case); both sources yield absolute paths.
fn install_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .or_else(|| std::env::current_dir().ok())
        .unwrap_or_else(|| PathBuf::from("/"))
}
