use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Env var holding the log file path.
pub const LOG_PATH_ENV: &str = "TEXTGEN_LOG";

/// Install a file-backed tracing subscriber when `TEXTGEN_LOG` is set.
///
/// Off by default: writing to the terminal would corrupt the TUI. The level
/// filter comes from `RUST_LOG` and falls back to `info`. Returns the file
/// actually written to.
pub fn init_tracing() -> Option<PathBuf> {
    let base = std::env::var(LOG_PATH_ENV).ok()?;
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let path = unique_log_path(&base, timestamp, std::process::id());

    let file = match std::fs::File::create(&path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("Warning: cannot create log file {}: {}", path.display(), err);
            return None;
        }
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let file_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    Some(path)
}

/// `{base}.{timestamp}.{pid}`, so concurrent instances never share a file.
fn unique_log_path(base: &str, timestamp: u64, pid: u32) -> PathBuf {
    PathBuf::from(format!("{}.{}.{}", base, timestamp, pid))
}
