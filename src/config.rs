use crate::constants::{
    API_KEY_VAR, API_URL_VAR, DEFAULT_API_URL, DEFAULT_ENV_FILE, IMAGE_DIR_VAR,
};
use crate::error::{Result, SqueezeError};
use std::path::{Path, PathBuf};

/// Run configuration, built once at startup and passed down explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,
    pub image_dir: PathBuf,
    pub api_url: String,
}

impl Config {
    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// The credential is checked before the directory, and empty values
    /// count as missing. No filesystem validation happens here.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let present = |key: &str| lookup(key).filter(|value| !value.is_empty());

        let api_key = present(API_KEY_VAR).ok_or(SqueezeError::MissingCredential)?;
        let image_dir = present(IMAGE_DIR_VAR).ok_or(SqueezeError::MissingDirectory)?;
        let api_url = present(API_URL_VAR)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            api_key,
            image_dir: PathBuf::from(image_dir),
            api_url,
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Loads `KEY=value` pairs from an env file into the process environment.
///
/// Variables that are already set are left untouched. A missing default
/// `.env` is not worth mentioning; a missing explicit file is.
pub fn load_env_file(path: Option<&Path>) {
    let explicit = path.is_some();
    let path = path.unwrap_or_else(|| Path::new(DEFAULT_ENV_FILE));

    match dotenvy::from_path(path) {
        Ok(()) => crate::verbose!("Loaded environment from {:?}", path),
        Err(e) if e.not_found() && !explicit => {}
        Err(e) => crate::warn!("Could not load env file {:?}: {}", path, e),
    }
}
