mod backend;
mod config;
pub mod database;
pub mod keys;
mod memory;
mod store;

pub use backend::KvBackend;
pub use config::{BackendKind, Config, LoggingConfig, StopwatchConfig, StorageConfig};
pub use database::SqliteBackend;
pub use memory::MemoryBackend;
pub use store::Store;

use std::path::PathBuf;

/// Returns the deskkit data directory, creating it if needed.
///
/// `DESKKIT_DATA_DIR` wins when set. Otherwise `~/.config/deskkit[-dev]/`
/// based on `DESKKIT_ENV` (set `DESKKIT_ENV=dev` for a development directory).
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let dir = match std::env::var_os("DESKKIT_DATA_DIR") {
        Some(explicit) if !explicit.is_empty() => PathBuf::from(explicit),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("DESKKIT_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("deskkit-dev")
            } else {
                base_dir.join("deskkit")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
