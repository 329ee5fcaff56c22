use std::path::{Path, PathBuf};
use std::process;

use lingo_core::settings::{load_settings_file, Settings};
use tracing::debug;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            std::process::exit(1);
        })
    };
}

pub mod config_ops;
pub mod detect_ops;
pub mod dict_ops;

/// Options shared by every command that needs word lists.
#[derive(Debug, Default, Clone)]
pub struct ResourceOptions {
    /// Custom settings TOML; the embedded defaults otherwise.
    pub settings: Option<String>,
    /// Overrides `word_lists.base_dir`.
    pub assets: Option<String>,
}

/// Workspace root at build time; the bundled `assets/` live under it.
const BUILD_ROOT: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/../..");

/// Resolve the settings for this invocation, exiting on error.
///
/// With neither `--settings` nor `--assets`, the default relative `base_dir`
/// is anchored to the installation rather than the working directory.
pub fn load_settings(opts: &ResourceOptions) -> Settings {
    let settings = match &opts.settings {
        Some(path) => load_settings_file(Path::new(path)).unwrap_or_else(|e| {
            eprintln!("Error: {e}");
            process::exit(1);
        }),
        None => {
            let settings = Settings::default();
            let base_dir = anchor_base_dir(&settings.word_lists.base_dir, exe_dir().as_deref());
            debug!(base_dir = %base_dir.display(), "resolved default word-list directory");
            settings.with_base_dir(base_dir)
        }
    };
    match &opts.assets {
        Some(dir) => settings.with_base_dir(dir),
        None => settings,
    }
}

/// Anchor a relative `base_dir`: next to the executable when that directory
/// exists there, otherwise under the workspace the binary was built from.
pub fn anchor_base_dir(base_dir: &Path, exe_dir: Option<&Path>) -> PathBuf {
    if base_dir.is_absolute() {
        return base_dir.to_path_buf();
    }
    if let Some(dir) = exe_dir {
        let candidate = dir.join(base_dir);
        if candidate.is_dir() {
            return candidate;
        }
    }
    Path::new(BUILD_ROOT).join(base_dir)
}

fn exe_dir() -> Option<PathBuf> {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
}

/// Bundled word-list directory of this workspace.
#[cfg(test)]
pub(crate) fn bundled_assets() -> PathBuf {
    Path::new(BUILD_ROOT).join("assets")
}
