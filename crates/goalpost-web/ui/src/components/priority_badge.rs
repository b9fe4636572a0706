use goalpost_shared::Priority;
use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct PriorityBadgeProps {
  pub priority: Priority
}

#[function_component(PriorityBadge)]
pub fn priority_badge(
  props: &PriorityBadgeProps
) -> Html {
  html! {
      <span class={format!("badge priority-{}", props.priority.key())}>
          { props.priority.label() }
      </span>
  }
}
