use shared_types::{AppConfig, ClientConfig};

/// Path to the config file, relative to the working directory.
pub const CONFIG_PATH: &str = "config.toml";

/// Environment variable that overrides the backend base URL.
pub const BASE_URL_ENV: &str = "API_BASE_URL";

/// Combine the config sources. The environment wins over the file, and the
/// file wins over the built-in default. Blank values are ignored.
pub fn resolve_client_config(
    file_contents: Option<&str>,
    env_base_url: Option<String>,
) -> ClientConfig {
    let from_file =
        file_contents.and_then(|contents| match toml::from_str::<AppConfig>(contents) {
            Ok(config) => config.api.base_url,
            Err(e) => {
                tracing::warn!(
                    path = CONFIG_PATH,
                    error = %e,
                    "failed to parse config file, ignoring it"
                );
                None
            }
        });

    let base_url = env_base_url
        .filter(|v| !v.trim().is_empty())
        .or(from_file.filter(|v| !v.trim().is_empty()));

    match base_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::default(),
    }
}

/// Build the client configuration from `.env`, `config.toml` and the
/// `API_BASE_URL` variable.
#[cfg(not(target_arch = "wasm32"))]
pub fn load_client_config() -> ClientConfig {
    let _ = dotenvy::dotenv();

    let file_contents = match std::fs::read_to_string(CONFIG_PATH) {
        Ok(contents) => Some(contents),
        Err(e) => {
            tracing::debug!(path = CONFIG_PATH, error = %e, "no config file");
            None
        }
    };
    let env_base_url = std::env::var(BASE_URL_ENV).ok();

    let config = resolve_client_config(file_contents.as_deref(), env_base_url);
    tracing::info!(api_base_url = %config.api_base_url, "client config loaded");
    config
}

/// In the browser there is no file system or process environment, so the
/// base URL can only be baked in at build time.
#[cfg(target_arch = "wasm32")]
pub fn load_client_config() -> ClientConfig {
    let config = resolve_client_config(None, option_env!("API_BASE_URL").map(str::to_string));
    tracing::info!(api_base_url = %config.api_base_url, "client config loaded");
    config
}
