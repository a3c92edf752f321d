#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use snippet_launcher::gui::SnippetApp;
use snippet_launcher::logging;
use snippet_launcher::paths::DataPaths;
use snippet_launcher::settings::Settings;
use snippet_launcher::snippets::SnippetStore;
use snippet_launcher::window_config::WindowConfig;

use eframe::egui;

fn main() -> anyhow::Result<()> {
    let paths = DataPaths::user_default()?;
    let (settings, settings_err) = match Settings::load(&paths.settings) {
        Ok(s) => (s, None),
        Err(e) => (Settings::default(), Some(e)),
    };
    logging::init(
        settings.debug_logging,
        settings.log_file.as_deref().map(|f| paths.log_file(f)),
    );
    if let Some(e) = settings_err {
        tracing::warn!(path = %paths.settings.display(), "invalid settings, using defaults: {e}");
    } else if !paths.settings.exists() {
        if let Err(e) = settings.save(&paths.settings) {
            tracing::warn!("failed to write default settings: {e}");
        }
    }
    tracing::info!(dir = %paths.dir.display(), "starting snippet launcher");

    let window = WindowConfig::load(&paths.config);
    let store = SnippetStore::open(&paths.snippets);

    let mut viewport = egui::ViewportBuilder::default()
        .with_title("Snippets")
        .with_inner_size(window.size_or_default())
        .with_min_inner_size([220.0, 160.0])
        .with_decorations(false)
        .with_transparent(true)
        .with_resizable(true);
    if let Some(pos) = window.position() {
        viewport = viewport.with_position(pos);
    }
    if settings.always_on_top {
        viewport = viewport.with_always_on_top();
    }
    let native_options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    let config_path = paths.config.clone();
    eframe::run_native(
        "Snippets",
        native_options,
        Box::new(move |cc| {
            Box::new(SnippetApp::new(
                &cc.egui_ctx,
                store,
                settings,
                config_path,
                window,
            ))
        }),
    )
    .map_err(|e| anyhow::anyhow!("failed to run ui: {e}"))
}
