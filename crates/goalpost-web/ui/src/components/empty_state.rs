use yew::{
  Html,
  Properties,
  function_component,
  html
};

#[derive(Properties, PartialEq)]
pub struct EmptyStateProps {
  pub title:    String,
  #[prop_or_default]
  pub detail:   Option<String>,
  #[prop_or_default]
  pub children: Html
}

#[function_component(EmptyState)]
pub fn empty_state(
  props: &EmptyStateProps
) -> Html {
  html! {
      <div class="empty-state">
          <div class="empty-title">{ &props.title }</div>
          {
              if let Some(detail) = &props.detail {
                  html! { <div class="empty-detail">{ detail }</div> }
              } else {
                  html! {}
              }
          }
          { props.children.clone() }
      </div>
  }
}
