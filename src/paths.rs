use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "snippet_launcher";
pub const SNIPPETS_FILE: &str = "snippets.json";
pub const CONFIG_FILE: &str = "config.json";
pub const SETTINGS_FILE: &str = "settings.json";

/// Locations of every file the launcher reads or writes.
#[derive(Debug, Clone)]
pub struct DataPaths {
    pub dir: PathBuf,
    pub snippets: PathBuf,
    pub config: PathBuf,
    pub settings: PathBuf,
}

impl DataPaths {
    /// Paths rooted at `dir`. Nothing is created on disk.
    pub fn in_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        Self {
            snippets: dir.join(SNIPPETS_FILE),
            config: dir.join(CONFIG_FILE),
            settings: dir.join(SETTINGS_FILE),
            dir,
        }
    }

    /// Resolve the per-user data directory and make sure it exists.
    ///
    /// This is `%APPDATA%` on Windows, `~/Library/Application Support` on
    /// macOS and `$XDG_DATA_HOME` (usually `~/.local/share`) elsewhere. Falls
    /// back to the working directory when the platform reports none.
    pub fn user_default() -> anyhow::Result<Self> {
        let base = dirs_next::data_dir().unwrap_or_else(|| PathBuf::from("."));
        let paths = Self::in_dir(base.join(APP_NAME));
        paths.ensure_dir()?;
        Ok(paths)
    }

    pub fn ensure_dir(&self) -> anyhow::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        Ok(())
    }

    /// Resolve a log file setting relative to the data directory.
    pub fn log_file(&self, configured: &str) -> PathBuf {
        let p = Path::new(configured);
        if p.is_absolute() {
            p.to_path_buf()
        } else {
            self.dir.join(p)
        }
    }
}
