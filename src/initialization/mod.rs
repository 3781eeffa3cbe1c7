//! Application initialization.
//!
//! This module provides logger setup and environment loading used by the CLI
//! binary before a run starts.

mod logger;

// Re-export public API
pub use logger::init_logger_with;

use crate::config::{BASE_URL_ENV, DEFAULT_BASE_URL};

/// Loads a `.env` file from the working directory, then next to the executable.
///
/// A missing file is not an error.
pub fn load_env() {
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }
}

/// Upstream base URL: `IP_LOOKUP_BASE_URL` if set and non-empty, else the default.
pub fn resolve_base_url() -> String {
    std::env::var(BASE_URL_ENV)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}
