use std::rc::Rc;

use yew::{
  ContextProvider,
  Html,
  classes,
  function_component,
  html,
  use_effect_with,
  use_memo
};
use yew_router::prelude::{
  BrowserRouter,
  Switch
};

use super::config::{
  AppConfig,
  load_app_config
};
use super::routes::{
  Route,
  switch
};
use super::session::SessionProvider;
use super::theme::{
  ThemeProvider,
  use_theme
};
use super::toast::ToastProvider;
use super::ui_debug;
use crate::components::{
  NavBar,
  ToastStack
};

#[function_component(Shell)]
fn shell() -> Html {
  let theme = use_theme();

  html! {
      <div class={classes!("app", theme.mode.as_class())}>
          <NavBar />
          <main class="main">
              <Switch<Route> render={switch} />
          </main>
          <ToastStack />
      </div>
  }
}

#[function_component(App)]
pub fn app() -> Html {
  let config: Rc<AppConfig> =
    use_memo((), |_| load_app_config());

  {
    use_effect_with((), move |_| {
      ui_debug(
        "app.mounted",
        "frontend mounted and providers \
         initialized"
      );
      || ()
    });
  }

  html! {
      <ContextProvider<Rc<AppConfig>> context={config}>
          <ThemeProvider>
              <ToastProvider>
                  <SessionProvider>
                      <BrowserRouter>
                          <Shell />
                      </BrowserRouter>
                  </SessionProvider>
              </ToastProvider>
          </ThemeProvider>
      </ContextProvider<Rc<AppConfig>>>
  }
}
