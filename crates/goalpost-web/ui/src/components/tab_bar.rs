use yew::{
  Callback,
  Html,
  Properties,
  classes,
  function_component,
  html
};

#[derive(Clone, PartialEq)]
pub struct TabItem {
  pub key:   &'static str,
  pub label: String
}

#[derive(Properties, PartialEq)]
pub struct TabBarProps {
  pub tabs:   Vec<TabItem>,
  pub active: &'static str,
  pub on_select: Callback<&'static str>,
  #[prop_or_default]
  pub small:  bool
}

#[function_component(TabBar)]
pub fn tab_bar(
  props: &TabBarProps
) -> Html {
  html! {
      <div class={classes!("tab-bar", props.small.then_some("small"))} role="tablist">
          {
              for props.tabs.iter().cloned().map(|tab| {
                  let is_active = tab.key == props.active;
                  let on_select = props.on_select.clone();
                  let key = tab.key;
                  html! {
                      <button
                          type="button"
                          role="tab"
                          class={classes!("tab", is_active.then_some("active"))}
                          onclick={move |_| on_select.emit(key)}
                      >
                          { tab.label }
                      </button>
                  }
              })
          }
      </div>
  }
}

