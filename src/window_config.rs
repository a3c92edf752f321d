use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_WINDOW_SIZE: (f32, f32) = (340.0, 600.0);

/// Last known window geometry. Each field is independent so a partially
/// written file still restores what it can.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    pub width: Option<i32>,
    pub height: Option<i32>,
    pub x: Option<i32>,
    pub y: Option<i32>,
}

impl WindowConfig {
    pub fn new(size: (i32, i32), pos: (i32, i32)) -> Self {
        Self {
            width: Some(size.0),
            height: Some(size.1),
            x: Some(pos.0),
            y: Some(pos.1),
        }
    }

    /// Read the geometry file. A missing file, malformed JSON or fields of the
    /// wrong type never fail; they simply leave the affected values unset.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::warn!(path = %path.display(), "failed to read window config: {e}");
                }
                return Self::default();
            }
        };
        match serde_json::from_str::<serde_json::Value>(&content) {
            Ok(value) => Self::from_value(&value),
            Err(e) => {
                tracing::warn!(path = %path.display(), "error loading window config: {e}");
                Self::default()
            }
        }
    }

    fn from_value(value: &serde_json::Value) -> Self {
        let field = |key: &str| {
            value
                .get(key)
                .and_then(|v| v.as_i64())
                .and_then(|v| i32::try_from(v).ok())
        };
        Self {
            width: field("width"),
            height: field("height"),
            x: field("x"),
            y: field("y"),
        }
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Size to restore, only when both dimensions are present and non-zero.
    pub fn size(&self) -> Option<(f32, f32)> {
        match (self.width, self.height) {
            (Some(w), Some(h)) if w > 0 && h > 0 => Some((w as f32, h as f32)),
            _ => None,
        }
    }

    /// Position to restore, only when both coordinates are present.
    pub fn position(&self) -> Option<(f32, f32)> {
        match (self.x, self.y) {
            (Some(x), Some(y)) => Some((x as f32, y as f32)),
            _ => None,
        }
    }

    pub fn size_or_default(&self) -> (f32, f32) {
        self.size().unwrap_or(DEFAULT_WINDOW_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_fields_are_kept_individually() {
        let value = serde_json::json!({ "width": 500, "height": "tall", "x": 10, "y": 20 });
        let cfg = WindowConfig::from_value(&value);
        assert_eq!(cfg.width, Some(500));
        assert_eq!(cfg.height, None);
        assert_eq!(cfg.size(), None);
        assert_eq!(cfg.position(), Some((10.0, 20.0)));
    }

    #[test]
    fn zero_size_is_ignored() {
        let cfg = WindowConfig::new((0, 300), (1, 1));
        assert_eq!(cfg.size(), None);
        assert_eq!(cfg.size_or_default(), DEFAULT_WINDOW_SIZE);
    }

    #[test]
    fn non_object_json_is_default() {
        let cfg = WindowConfig::from_value(&serde_json::json!([1, 2, 3]));
        assert_eq!(cfg, WindowConfig::default());
    }
}
