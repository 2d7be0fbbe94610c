use anyhow::{anyhow, bail, Context};
use log::warn;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

pub const DEFAULT_API_BASE_URL: &str = "https://api.ethara.geonotes.in/api";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub api_base_url: Option<String>,
}

static API_BASE_URL: OnceLock<String> = OnceLock::new();

fn read_global_key(global: &str, keys: &[&str]) -> Option<String> {
    let w = web_sys::window()?;
    let any = js_sys::Reflect::get(&w, &global.into()).ok()?;
    if any.is_undefined() || any.is_null() {
        return None;
    }
    let obj = js_sys::Object::from(any);
    keys.iter()
        .filter_map(|key| js_sys::Reflect::get(&obj, &(*key).into()).ok())
        .find(|v| !v.is_undefined() && !v.is_null())
        .and_then(|v| v.as_string())
}

fn snapshot_from_globals() -> Option<String> {
    // window.__HRMS_ENV = { API_BASE_URL: "..." } (env.js) wins over
    // window.__HRMS_CONFIG = { api_base_url: "..." }.
    read_global_key("__HRMS_ENV", &["API_BASE_URL", "api_base_url"])
        .or_else(|| read_global_key("__HRMS_CONFIG", &["api_base_url", "API_BASE_URL"]))
        .filter(|url| !url.trim().is_empty())
}

fn cache_base_url(value: &str) -> String {
    let value = value.trim().to_string();
    let _ = API_BASE_URL.set(value.clone());
    API_BASE_URL.get().cloned().unwrap_or(value)
}

/// `config.json` next to the page that loaded the app.
fn config_url() -> anyhow::Result<reqwest::Url> {
    let href = web_sys::window()
        .context("no window")?
        .location()
        .href()
        .map_err(|_| anyhow!("location.href unavailable"))?;
    let page = reqwest::Url::parse(&href).context("page URL is not absolute")?;
    page.join("config.json").context("cannot build config.json URL")
}

async fn fetch_runtime_config() -> anyhow::Result<RuntimeConfig> {
    let resp = reqwest::get(config_url()?)
        .await
        .context("config.json request failed")?;
    if !resp.status().is_success() {
        bail!("config.json returned {}", resp.status());
    }
    resp.json::<RuntimeConfig>()
        .await
        .context("config.json is not valid JSON")
}

pub async fn await_api_base_url() -> String {
    if let Some(cached) = API_BASE_URL.get() {
        return cached.clone();
    }
    if let Some(existing) = snapshot_from_globals() {
        return cache_base_url(&existing);
    }
    match fetch_runtime_config().await {
        Ok(RuntimeConfig {
            api_base_url: Some(url),
        }) if !url.trim().is_empty() => return cache_base_url(&url),
        Ok(_) => warn!("config.json has no api_base_url, using default"),
        Err(err) => warn!("Runtime config unavailable ({:#}), using default", err),
    }
    cache_base_url(DEFAULT_API_BASE_URL)
}

pub async fn init() {
    let _ = await_api_base_url().await;
}
