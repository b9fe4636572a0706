use goalpost_shared::GoalStatus;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
  pub status: GoalStatus
}

#[function_component(StatusBadge)]
pub fn status_badge(
  props: &StatusBadgeProps
) -> Html {
  html! {
      <span class={format!("badge status-{}", props.status.key())}>
          { props.status.label() }
      </span>
  }
}
