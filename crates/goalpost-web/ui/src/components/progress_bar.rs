use goalpost_shared::progress::ProgressTone;
use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

use crate::app::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct ProgressBarProps {
  pub value:   u8,
  #[prop_or_default]
  pub compact: bool
}

#[function_component(ProgressBar)]
pub fn progress_bar(
  props: &ProgressBarProps
) -> Html {
  let theme = use_theme();
  let value = props.value.min(100);
  let tone =
    ProgressTone::from_percent(value);

  html! {
      <div class={classes!("progress", theme.is_dark().then_some("progress-dark"), props.compact.then_some("compact"))}>
          <div class="progress-track">
              <div
                  class={classes!("progress-fill", tone.as_class())}
                  style={format!("width:{value}%;")}
              ></div>
          </div>
          <span class="progress-label">{ format!("{value}%") }</span>
      </div>
  }
}
