use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Maximum log file size before rotation (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;

/// Rotate the log aside once it grows past `max_size`; the previous rotation
/// is overwritten.
fn rotate_if_needed(log_path: &Path, max_size: u64) -> std::io::Result<()> {
    match fs::metadata(log_path) {
        Ok(metadata) if metadata.len() > max_size => {
            fs::rename(log_path, log_path.with_extension("log.old"))
        }
        _ => Ok(()),
    }
}

/// Initialize logging to `{data_dir}/feescope.log`.
///
/// The terminal is owned by the UI, so nothing is ever written to stdout.
/// The level comes from the `RUST_LOG` environment variable when set, else
/// from the `level` parameter.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(data_dir)?;

    let log_path = data_dir.join("feescope.log");
    if let Err(error) = rotate_if_needed(&log_path, MAX_LOG_SIZE) {
        eprintln!("Warning: failed to rotate log file: {error}");
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    let default_filter = format!("feescope={level},feescope_core={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(log_path = %log_path.display(), "logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::rotate_if_needed;

    #[test]
    fn rotates_only_past_the_size_limit() {
        let dir = tempfile::tempdir().unwrap();
        let log_path = dir.path().join("feescope.log");

        std::fs::write(&log_path, b"small").unwrap();
        rotate_if_needed(&log_path, 64).unwrap();
        assert!(log_path.exists());
        assert!(!log_path.with_extension("log.old").exists());

        std::fs::write(&log_path, vec![b'x'; 128]).unwrap();
        rotate_if_needed(&log_path, 64).unwrap();
        assert!(!log_path.exists());
        assert!(log_path.with_extension("log.old").exists());
    }

    #[test]
    fn missing_file_is_fine() {
        let dir = tempfile::tempdir().unwrap();
        rotate_if_needed(&dir.path().join("feescope.log"), 64).unwrap();
    }
}
