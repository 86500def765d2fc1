#[cfg(not(target_arch = "wasm32"))]
use std::path::{Path, PathBuf};

#[cfg(not(target_arch = "wasm32"))]
use anyhow::{anyhow, Context};
use anyhow::Result;

use crate::ui::hooks::viewport::Breakpoints;

pub const API_URL_ENV: &str = "COMPLIANCE_API_URL";
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    #[cfg(not(target_arch = "wasm32"))]
    pub db_path: PathBuf,
    pub breakpoints: Breakpoints,
}

/// Picks the configured backend URL, falling back to the local development server.
pub fn resolve_api_base_url(configured: Option<&str>) -> String {
    configured
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_API_BASE_URL)
        .trim_end_matches('/')
        .to_string()
}

impl AppConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();
        let configured = std::env::var(API_URL_ENV).ok();

        Ok(Self {
            api_base_url: resolve_api_base_url(configured.as_deref()),
            db_path: default_db_path()?,
            breakpoints: Breakpoints::default(),
        })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Result<Self> {
        Ok(Self {
            api_base_url: resolve_api_base_url(option_env!("COMPLIANCE_API_URL")),
            breakpoints: Breakpoints::default(),
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "compliance", "compliance-browser")
        .ok_or_else(|| anyhow!("unable to resolve data directory"))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_db_path() -> Result<PathBuf> {
    Ok(project_dirs()?.data_local_dir().join("frameworks.sqlite"))
}

#[cfg(not(target_arch = "wasm32"))]
fn ensure_webview_data_dir(base_data_dir: &Path) -> Result<PathBuf> {
    let webview_data_dir = base_data_dir.join("webview");
    std::fs::create_dir_all(&webview_data_dir).with_context(|| {
        format!(
            "failed to create webview dir: {}",
            webview_data_dir.display()
        )
    })?;
    Ok(webview_data_dir)
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_webview_data_dir() -> Result<PathBuf> {
    ensure_webview_data_dir(project_dirs()?.data_local_dir())
}
