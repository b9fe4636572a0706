use yew::{
  Callback,
  Html,
  MouseEvent,
  classes,
  function_component,
  html
};
use yew_router::prelude::{
  Link,
  use_navigator,
  use_route
};

use crate::app::routes::Route;
use crate::app::session::use_session;
use crate::app::theme::use_theme;

#[function_component(NavBar)]
pub fn nav_bar() -> Html {
  let theme = use_theme();
  let session = use_session();
  let navigator = use_navigator();
  let route = use_route::<Route>()
    .unwrap_or(Route::NotFound);

  let on_toggle_theme = {
    let toggle = theme.toggle.clone();
    Callback::from(move |_: MouseEvent| {
      toggle.emit(());
    })
  };

  let on_logout = {
    let sign_out = session.sign_out.clone();
    Callback::from(move |_: MouseEvent| {
      sign_out.emit(());
      if let Some(navigator) = &navigator {
        navigator.push(&Route::Login);
      }
    })
  };

  let make_link =
    |target: Route, label: &str| {
      let active = route == target;
      html! {
          <Link<Route> to={target} classes={classes!("nav-item", active.then_some("active"))}>
              { label.to_string() }
          </Link<Route>>
      }
    };

  html! {
      <header class={classes!("nav-bar", theme.pick("nav-light", "nav-dark"))}>
          <div class="nav-brand">
              <span class="nav-logo">{ "◎" }</span>
              <span>{ "Goalpost" }</span>
          </div>
          {
              if session.is_authenticated() {
                  html! {
                      <nav class="nav-links">
                          { make_link(Route::Dashboard, "Dashboard") }
                          { make_link(Route::Goals, "Goals") }
                          { make_link(Route::Achievements, "Achievements") }
                          { make_link(Route::Profile, "Profile") }
                      </nav>
                  }
              } else {
                  html! {}
              }
          }
          <div class="nav-actions">
              <button class="btn" type="button" onclick={on_toggle_theme}>
                  { theme.mode.toggle_label() }
              </button>
              {
                  if session.is_authenticated() {
                      html! {
                          <>
                              <span class="nav-user">{ session.display_name() }</span>
                              <button class="btn" type="button" onclick={on_logout}>{ "Log out" }</button>
                          </>
                      }
                  } else if !route.is_public() || route == Route::NotFound {
                      html! { <Link<Route> to={Route::Login} classes="btn">{ "Sign in" }</Link<Route>> }
                  } else {
                      html! {}
                  }
              }
          </div>
      </header>
  }
}
