use goalpost_shared::RegisterRequest;
use goalpost_shared::validate::validate_register;
use yew::{
  Callback,
  Html,
  SubmitEvent,
  UseStateHandle,
  classes,
  function_component,
  html,
  use_state
};
use yew_router::prelude::{
  Link,
  Redirect,
  use_navigator
};

use super::input_value;
use crate::app::routes::Route;
use crate::app::session::{
  use_api,
  use_session
};
use crate::app::theme::use_theme;
use crate::app::toast::use_toaster;

fn bind(
  field: &UseStateHandle<String>,
  error: &UseStateHandle<Option<String>>
) -> Callback<web_sys::InputEvent> {
  let field = field.clone();
  let error = error.clone();
  Callback::from(
    move |e: web_sys::InputEvent| {
      field.set(input_value(&e));
      error.set(None);
    }
  )
}

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
  let theme = use_theme();
  let session = use_session();
  let api = use_api();
  let toaster = use_toaster();
  let navigator = use_navigator();
  let name = use_state(String::new);
  let email = use_state(String::new);
  let password = use_state(String::new);
  let confirmation = use_state(String::new);
  let error = use_state(|| None::<String>);
  let busy = use_state(|| false);

  if session.is_authenticated() {
    return html! { <Redirect<Route> to={Route::Dashboard} /> };
  }

  let onsubmit = {
    let name = name.clone();
    let email = email.clone();
    let password = password.clone();
    let confirmation = confirmation.clone();
    let error = error.clone();
    let busy = busy.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      if *busy {
        return;
      }
      let request = RegisterRequest {
        name:     name.trim().to_string(),
        email:    email.trim().to_string(),
        password: (*password).clone()
      };
      if let Err(invalid) = validate_register(
        &request,
        &confirmation
      ) {
        error.set(Some(invalid.to_string()));
        return;
      }

      busy.set(true);
      let api = api.clone();
      let sign_in = session.sign_in.clone();
      let toaster = toaster.clone();
      let navigator = navigator.clone();
      let error = error.clone();
      let busy = busy.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          match api.register(&request).await {
            | Ok(auth) => {
              tracing::info!(
                user = %auth.user.email,
                "account created"
              );
              toaster
                .success("Account created");
              sign_in.emit(auth);
              if let Some(navigator) = navigator {
                navigator.push(&Route::Dashboard);
              }
            }
            | Err(failure) => {
              toaster.error(failure.to_string());
              error.set(Some(failure.to_string()));
            }
          }
          busy.set(false);
        }
      );
    })
  };

  html! {
      <section class="auth-page">
          <form class={classes!("panel", "auth-card", theme.is_dark().then_some("panel-dark"))} {onsubmit}>
              <h1>{ "Create account" }</h1>
              <label class="field">
                  <span>{ "Name" }</span>
                  <input autocomplete="name" value={(*name).clone()} oninput={bind(&name, &error)} />
              </label>
              <label class="field">
                  <span>{ "Email" }</span>
                  <input type="email" autocomplete="email" value={(*email).clone()} oninput={bind(&email, &error)} />
              </label>
              <label class="field">
                  <span>{ "Password" }</span>
                  <input type="password" autocomplete="new-password" value={(*password).clone()} oninput={bind(&password, &error)} />
              </label>
              <label class="field">
                  <span>{ "Confirm password" }</span>
                  <input type="password" autocomplete="new-password" value={(*confirmation).clone()} oninput={bind(&confirmation, &error)} />
              </label>
              {
                  if let Some(message) = &*error {
                      html! { <div class="field-error">{ message }</div> }
                  } else {
                      html! {}
                  }
              }
              <button class="btn ok" type="submit" disabled={*busy}>
                  { if *busy { "Creating…" } else { "Create account" } }
              </button>
              <div class="auth-switch">
                  { "Already registered? " }
                  <Link<Route> to={Route::Login}>{ "Sign in" }</Link<Route>>
              </div>
          </form>
      </section>
  }
}
