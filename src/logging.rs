use once_guard::store_guard;
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialise logging. Debug logging honours `RUST_LOG` and defaults to
/// `debug`; otherwise the level is forced to `info` regardless of the
/// environment. When `file` is given, output also goes to that file through a
/// non-blocking writer.
pub fn init(debug: bool, file: Option<PathBuf>) {
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let file_layer = file.and_then(|path| {
        let dir = path.parent()?.to_path_buf();
        let name = path.file_name()?.to_owned();
        if std::fs::create_dir_all(&dir).is_err() {
            return None;
        }
        let appender = tracing_appender::rolling::never(dir, name);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        store_guard(guard);
        Some(fmt::layer().with_ansi(false).with_writer(writer))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .with(file_layer)
        .try_init();
}

mod once_guard {
    use std::sync::Mutex;
    use tracing_appender::non_blocking::WorkerGuard;

    // Dropping the guard stops the writer thread, so keep it for the process.
    static GUARDS: Mutex<Vec<WorkerGuard>> = Mutex::new(Vec::new());

    pub fn store_guard(guard: WorkerGuard) {
        if let Ok(mut guards) = GUARDS.lock() {
            guards.push(guard);
        }
    }
}
