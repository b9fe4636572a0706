use serde::{
  Deserialize,
  Serialize
};
use yew::{
  Callback,
  ContextProvider,
  Html,
  Properties,
  function_component,
  hook,
  html,
  use_context
};

use super::config::use_config;
use super::storage::use_local_storage;

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Serialize,
  Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
  Light,
  Dark
}

impl ThemeMode {
  pub fn as_class(self) -> &'static str {
    match self {
      | Self::Light => "theme-light",
      | Self::Dark => "theme-dark"
    }
  }

  pub fn next(self) -> Self {
    match self {
      | Self::Light => Self::Dark,
      | Self::Dark => Self::Light
    }
  }

  pub fn toggle_label(
    self
  ) -> &'static str {
    match self {
      | Self::Light => "Dark mode",
      | Self::Dark => "Light mode"
    }
  }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
  pub mode:   ThemeMode,
  pub toggle: Callback<()>
}

impl ThemeContext {
  pub fn is_dark(&self) -> bool {
    self.mode == ThemeMode::Dark
  }

  /// Picks the class variant for the active
  /// theme.
  pub fn pick(
    &self,
    light: &'static str,
    dark: &'static str
  ) -> &'static str {
    if self.is_dark() { dark } else { light }
  }
}

#[hook]
pub fn use_theme() -> ThemeContext {
  use_context::<ThemeContext>()
    .unwrap_or_else(|| {
      ThemeContext {
        mode:   ThemeMode::Light,
        toggle: Callback::noop()
      }
    })
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
  pub children: Html
}

#[function_component(ThemeProvider)]
pub fn theme_provider(
  props: &ThemeProviderProps
) -> Html {
  let config = use_config();
  let stored = use_local_storage(
    &config.storage.theme_key,
    config.ui.default_theme
  );

  let toggle = {
    let stored = stored.clone();
    Callback::from(move |_: ()| {
      let next = stored.get().next();
      tracing::debug!(
        theme = next.as_class(),
        "toggled theme"
      );
      stored.set(next);
    })
  };

  let context = ThemeContext {
    mode: stored.get(),
    toggle
  };

  html! {
      <ContextProvider<ThemeContext> context={context}>
          { props.children.clone() }
      </ContextProvider<ThemeContext>>
  }
}
