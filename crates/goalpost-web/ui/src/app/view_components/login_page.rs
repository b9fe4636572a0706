use goalpost_shared::LoginRequest;
use goalpost_shared::validate::validate_login;
use yew::{
  Callback,
  Html,
  SubmitEvent,
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

#[function_component(LoginPage)]
pub fn login_page() -> Html {
  let theme = use_theme();
  let session = use_session();
  let api = use_api();
  let toaster = use_toaster();
  let navigator = use_navigator();
  let email = use_state(String::new);
  let password = use_state(String::new);
  let error = use_state(|| None::<String>);
  let busy = use_state(|| false);

  if session.is_authenticated() {
    return html! { <Redirect<Route> to={Route::Dashboard} /> };
  }

  let on_email = {
    let email = email.clone();
    let error = error.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        email.set(input_value(&e));
        error.set(None);
      }
    )
  };
  let on_password = {
    let password = password.clone();
    let error = error.clone();
    Callback::from(
      move |e: web_sys::InputEvent| {
        password.set(input_value(&e));
        error.set(None);
      }
    )
  };

  let onsubmit = {
    let email = email.clone();
    let password = password.clone();
    let error = error.clone();
    let busy = busy.clone();
    Callback::from(move |e: SubmitEvent| {
      e.prevent_default();
      if *busy {
        return;
      }
      let request = LoginRequest {
        email:    email.trim().to_string(),
        password: (*password).clone()
      };
      if let Err(invalid) =
        validate_login(&request)
      {
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
          match api.login(&request).await {
            | Ok(auth) => {
              toaster.success(format!(
                "Welcome back, {}",
                auth.user.name
              ));
              sign_in.emit(auth);
              if let Some(navigator) = navigator {
                navigator.push(&Route::Dashboard);
              }
            }
            | Err(failure) => {
              tracing::warn!(
                error = %failure,
                "login failed"
              );
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
              <h1>{ "Sign in" }</h1>
              <label class="field">
                  <span>{ "Email" }</span>
                  <input type="email" autocomplete="email" value={(*email).clone()} oninput={on_email} />
              </label>
              <label class="field">
                  <span>{ "Password" }</span>
                  <input type="password" autocomplete="current-password" value={(*password).clone()} oninput={on_password} />
              </label>
              {
                  if let Some(message) = &*error {
                      html! { <div class="field-error">{ message }</div> }
                  } else {
                      html! {}
                  }
              }
              <button class="btn ok" type="submit" disabled={*busy}>
                  { if *busy { "Signing in…" } else { "Sign in" } }
              </button>
              <div class="auth-switch">
                  { "No account yet? " }
                  <Link<Route> to={Route::Register}>{ "Create one" }</Link<Route>>
              </div>
          </form>
      </section>
  }
}
