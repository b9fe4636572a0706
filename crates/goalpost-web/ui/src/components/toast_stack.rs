use yew::{
  Callback,
  Html,
  MouseEvent,
  function_component,
  html
};

use crate::app::toast::use_toaster;

#[function_component(ToastStack)]
pub fn toast_stack() -> Html {
  let toaster = use_toaster();

  html! {
      <div class="toast-stack" aria-live="polite">
          {
              for toaster.toasts.iter().cloned().map(|toast| {
                  let dismiss = toaster.dismiss.clone();
                  let id = toast.id;
                  html! {
                      <div key={id.to_string()} class={toast.kind.as_class()} role="status">
                          <span>{ toast.message }</span>
                          <button
                              class="toast-close"
                              type="button"
                              onclick={Callback::from(move |_: MouseEvent| dismiss.emit(id))}
                          >
                              { "×" }
                          </button>
                      </div>
                  }
              })
          }
      </div>
  }
}
