pub fn open_url(url: &str) -> anyhow::Result<()> {
    tracing::info!(url, "opening url");
    open::that(url).map_err(|e| anyhow::anyhow!("Failed to open {url}: {e}"))
}
