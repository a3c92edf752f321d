use std::path::Path;

/// Open `path` in the system file explorer. The folder must exist.
pub fn open_folder(path: &Path) -> anyhow::Result<()> {
    if !path.is_dir() {
        anyhow::bail!("Folder not found: {}", path.display());
    }
    tracing::info!(path = %path.display(), "opening folder");
    open::that(path).map_err(|e| anyhow::anyhow!("Failed to open {}: {e}", path.display()))
}
