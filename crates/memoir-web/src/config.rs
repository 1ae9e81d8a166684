//! Application configuration.
//!
//! Loaded from an optional TOML file; every field has a default so an
//! empty file (or no file at all) is a working configuration. The binary
//! layers CLI/environment overrides on top.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use memoir_core::{Error, Result};
use serde::Deserialize;

/// Web service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Listen address for the HTTP server.
    #[serde(default = "default_listen")]
    pub listen: String,

    /// Path to the roster document.
    #[serde(default = "default_roster_path")]
    pub roster_path: PathBuf,

    /// Path to the compiled document.
    #[serde(default = "default_compiled_path")]
    pub compiled_path: PathBuf,

    /// Title rendered on the browsing page.
    #[serde(default = "default_page_title")]
    pub page_title: String,
}

fn default_listen() -> String {
    "127.0.0.1:8080".to_string()
}

fn default_roster_path() -> PathBuf {
    PathBuf::from("data/roster.json")
}

fn default_compiled_path() -> PathBuf {
    PathBuf::from("data/compiled.json")
}

fn default_page_title() -> String {
    "Testimonial Viewer".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            roster_path: default_roster_path(),
            compiled_path: default_compiled_path(),
            page_title: default_page_title(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file and a file that fails to parse are both startup
    /// errors; fields the file omits take their defaults.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(Error::not_found(path.display().to_string()));
            }
            Err(e) => return Err(e.into()),
        };
        toml::from_str(&raw)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))
    }
}

// ============================================================================
// Tests
// ============================================================================
