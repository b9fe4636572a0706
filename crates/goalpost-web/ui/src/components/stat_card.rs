use yew::{
  Html,
  Properties,
  classes,
  function_component,
  html
};

use crate::app::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
  pub label:  String,
  pub value:  String,
  #[prop_or_default]
  pub hint:   Option<String>,
  #[prop_or_default]
  pub accent: Option<&'static str>
}

#[function_component(StatCard)]
pub fn stat_card(
  props: &StatCardProps
) -> Html {
  let theme = use_theme();

  html! {
      <div class={classes!("panel", "stat-card", theme.is_dark().then_some("panel-dark"), props.accent)}>
          <div class="stat-label">{ &props.label }</div>
          <div class="stat-value">{ &props.value }</div>
          {
              if let Some(hint) = &props.hint {
                  html! { <div class="stat-hint">{ hint }</div> }
              } else {
                  html! {}
              }
          }
      </div>
  }
}
