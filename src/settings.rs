use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_SVN_TOOL: &str = r"C:\Program Files\TortoiseSVN\bin\TortoiseProc.exe";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Settings {
    /// When enabled the application initialises the logger at debug level.
    #[serde(default)]
    pub debug_logging: bool,
    /// Optional log file, relative paths resolve against the data directory.
    #[serde(default)]
    pub log_file: Option<String>,
    /// Executable used for `svn ...` snippets.
    #[serde(default = "default_svn_tool")]
    pub svn_tool_path: String,
    #[serde(default)]
    pub always_on_top: bool,
    /// Enable toast notifications in the UI.
    #[serde(default = "default_toasts")]
    pub enable_toasts: bool,
    /// Duration of toast notifications in seconds.
    #[serde(default = "default_toast_duration")]
    pub toast_duration: f32,
    /// Ask before deleting a snippet.
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_svn_tool() -> String {
    DEFAULT_SVN_TOOL.into()
}

fn default_toasts() -> bool {
    true
}

fn default_toast_duration() -> f32 {
    3.0
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            debug_logging: false,
            log_file: None,
            svn_tool_path: default_svn_tool(),
            always_on_top: false,
            enable_toasts: default_toasts(),
            toast_duration: default_toast_duration(),
            confirm_delete: default_confirm_delete(),
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(&content)?)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let s: Settings = serde_json::from_str(r#"{ "debug_logging": true }"#).unwrap();
        assert!(s.debug_logging);
        assert_eq!(s.svn_tool_path, DEFAULT_SVN_TOOL);
        assert!(s.confirm_delete);
        assert!(s.enable_toasts);
        assert_eq!(s.toast_duration, 3.0);
    }

    #[test]
    fn missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let s = Settings::load(&dir.path().join("settings.json")).unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "[oops").unwrap();
        assert!(Settings::load(&path).is_err());
    }

    #[test]
    fn unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, [0xff, 0xfe, b'{', b'}']).unwrap();
        assert!(Settings::load(&path).is_err());
        assert!(Settings::load(dir.path()).is_err());
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let s = Settings {
            svn_tool_path: "/usr/bin/tortoise".into(),
            always_on_top: true,
            ..Default::default()
        };
        s.save(&path).unwrap();
        assert_eq!(Settings::load(&path).unwrap(), s);
    }
}
