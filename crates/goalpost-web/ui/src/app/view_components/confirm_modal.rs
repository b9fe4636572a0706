use yew::{
  Callback,
  Html,
  MouseEvent,
  Properties,
  classes,
  function_component,
  html
};

use super::stop_propagation;
use crate::app::theme::use_theme;

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
  pub title:         String,
  pub message:       String,
  #[prop_or_else(|| "Delete".to_string())]
  pub confirm_label: String,
  #[prop_or_default]
  pub busy:          bool,
  pub on_confirm:    Callback<()>,
  pub on_close:      Callback<MouseEvent>
}

#[function_component(ConfirmModal)]
pub fn confirm_modal(
  props: &ConfirmModalProps
) -> Html {
  let theme = use_theme();
  let on_confirm = {
    let on_confirm = props.on_confirm.clone();
    Callback::from(move |_: MouseEvent| {
      on_confirm.emit(())
    })
  };

  html! {
      <div class="modal-backdrop" onclick={props.on_close.clone()}>
          <div
              class={classes!("modal", "modal-sm", theme.is_dark().then_some("modal-dark"))}
              onclick={stop_propagation()}
          >
              <div class="header">{ &props.title }</div>
              <div class="content">
                  <div>{ &props.message }</div>
                  <div class="field-help">{ "This cannot be undone." }</div>
              </div>
              <div class="footer">
                  <button class="btn" type="button" onclick={props.on_close.clone()}>
                      { "Cancel" }
                  </button>
                  <button class="btn danger" type="button" onclick={on_confirm} disabled={props.busy}>
                      { &props.confirm_label }
                  </button>
              </div>
          </div>
      </div>
  }
}
