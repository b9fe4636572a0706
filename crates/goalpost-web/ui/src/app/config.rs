use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;
use yew::{
  hook,
  use_context
};

use super::theme::ThemeMode;

const APP_CONFIG_TOML: &str =
  include_str!("../../assets/app.toml");

#[derive(Debug, Error)]
pub enum ConfigError {
  #[error("invalid app config: {0}")]
  Parse(#[from] toml::de::Error),
  #[error(
    "api base url must be absolute or \
     start with '/': {0}"
  )]
  BaseUrl(String)
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct ApiConfig {
  pub base_url: String
}

impl Default for ApiConfig {
  fn default() -> Self {
    Self {
      base_url: "/api".to_string()
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct StorageConfig {
  pub token_key: String,
  pub user_key:  String,
  pub theme_key: String
}

impl Default for StorageConfig {
  fn default() -> Self {
    Self {
      token_key: "goalpost.auth.token"
        .to_string(),
      user_key:  "goalpost.auth.user"
        .to_string(),
      theme_key: "goalpost.theme"
        .to_string()
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct DashboardConfig {
  pub due_soon_days:     i64,
  pub recent_goal_limit: usize
}

impl Default for DashboardConfig {
  fn default() -> Self {
    Self {
      due_soon_days:     7,
      recent_goal_limit: 5
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Deserialize,
)]
#[serde(default)]
pub struct UiConfig {
  pub default_theme:    ThemeMode,
  pub toast_dismiss_ms: u32
}

impl Default for UiConfig {
  fn default() -> Self {
    Self {
      default_theme:    ThemeMode::Light,
      toast_dismiss_ms: 4_000
    }
  }
}

#[derive(
  Debug,
  Clone,
  PartialEq,
  Default,
  Deserialize,
)]
#[serde(default)]
pub struct AppConfig {
  pub api:       ApiConfig,
  pub storage:   StorageConfig,
  pub dashboard: DashboardConfig,
  pub ui:        UiConfig
}

fn normalize_base_url(
  raw: &str
) -> Result<String, ConfigError> {
  let trimmed =
    raw.trim().trim_end_matches('/');
  let valid = trimmed
    .starts_with("http://")
    || trimmed.starts_with("https://")
    || raw.trim().starts_with('/');
  if !valid {
    return Err(ConfigError::BaseUrl(
      raw.to_string()
    ));
  }
  Ok(trimmed.to_string())
}

pub fn parse_app_config(
  raw: &str,
  base_override: Option<&str>
) -> Result<AppConfig, ConfigError> {
  let mut config: AppConfig =
    toml::from_str(raw)?;

  if let Some(base) = base_override
    .map(str::trim)
    .filter(|base| !base.is_empty())
  {
    config.api.base_url = base.to_string();
  }
  config.api.base_url =
    normalize_base_url(&config.api.base_url)?;
  config.dashboard.due_soon_days =
    config.dashboard.due_soon_days.max(0);
  config.ui.toast_dismiss_ms =
    config.ui.toast_dismiss_ms.max(500);
  Ok(config)
}

pub fn load_app_config() -> AppConfig {
  match parse_app_config(
    APP_CONFIG_TOML,
    option_env!("GOALPOST_API_BASE")
  ) {
    | Ok(config) => {
      tracing::info!(
        base_url = %config.api.base_url,
        "loaded app config"
      );
      config
    }
    | Err(error) => {
      tracing::error!(
        %error,
        "failed parsing embedded app \
         config, using defaults"
      );
      AppConfig::default()
    }
  }
}

#[hook]
pub fn use_config() -> Rc<AppConfig> {
  use_context::<Rc<AppConfig>>()
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn embedded_config_parses() {
    let config =
      parse_app_config(APP_CONFIG_TOML, None)
        .expect("embedded config");
    assert_eq!(
      config.api.base_url,
      "http://localhost:5000/api"
    );
    assert_eq!(
      config.storage.token_key,
      "goalpost.auth.token"
    );
    assert_eq!(
      config.ui.default_theme,
      ThemeMode::Light
    );
  }

  #[test]
  fn override_replaces_base_and_trims_slash()
  {
    let config = parse_app_config(
      "",
      Some("https://goals.example.com/api/")
    )
    .expect("override");
    assert_eq!(
      config.api.base_url,
      "https://goals.example.com/api"
    );
    assert_eq!(
      config.dashboard,
      DashboardConfig::default()
    );
  }

  #[test]
  fn relative_base_is_allowed_but_bare_host_is_not(
  ) {
    assert!(
      parse_app_config(
        "[api]\nbase_url = \"/api\"",
        None
      )
      .is_ok()
    );
    assert!(matches!(
      parse_app_config(
        "[api]\nbase_url = \"localhost:5000\"",
        None
      ),
      Err(ConfigError::BaseUrl(_))
    ));
  }

  #[test]
  fn out_of_range_values_are_clamped() {
    let config = parse_app_config(
      "[dashboard]\ndue_soon_days = -3\n\
       [ui]\ntoast_dismiss_ms = 10\n\
       default_theme = \"dark\"",
      None
    )
    .expect("config");
    assert_eq!(
      config.dashboard.due_soon_days,
      0
    );
    assert_eq!(
      config.ui.toast_dismiss_ms,
      500
    );
    assert_eq!(
      config.ui.default_theme,
      ThemeMode::Dark
    );
  }
}
