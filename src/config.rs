//! Configuration management for Pagemill Server

use serde::Deserialize;
use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8000;
const DEFAULT_MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub conversion: ConversionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: String,
    /// Upper bound on the request body, in bytes.
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConversionConfig {
    /// Directory holding the pdfium shared library. When unset, the working
    /// directory and then the system library path are probed.
    pub pdfium_lib_dir: Option<PathBuf>,
    /// Directory for spooled uploads. Defaults to the OS temp dir.
    pub scratch_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: DEFAULT_PORT,
                static_dir: "static".to_string(),
                max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            conversion: ConversionConfig {
                pdfium_lib_dir: None,
                scratch_dir: None,
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: env::var("SERVER_PORT")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
                static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),
                max_upload_bytes: env::var("MAX_UPLOAD_BYTES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            },
            conversion: ConversionConfig {
                pdfium_lib_dir: env::var("PDFIUM_LIB_DIR").ok().map(PathBuf::from),
                scratch_dir: env::var("SCRATCH_DIR").ok().map(PathBuf::from),
            },
        }
    }
}
