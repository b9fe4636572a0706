use goalpost_shared::stats::achievements;
use yew::{
  Callback,
  Html,
  MouseEvent,
  classes,
  function_component,
  html
};
use yew_router::prelude::use_navigator;

use super::{
  render_load_state,
  use_goal_list
};
use crate::app::routes::Route;
use crate::app::session::use_session;
use crate::app::theme::use_theme;
use crate::components::StatCard;

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
  let theme = use_theme();
  let session = use_session();
  let navigator = use_navigator();
  let list = use_goal_list();

  let on_toggle_theme = {
    let toggle = theme.toggle.clone();
    Callback::from(move |_: MouseEvent| {
      toggle.emit(())
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

  let email = session
    .user
    .as_ref()
    .map(|user| user.email.clone())
    .unwrap_or_default();
  let member_since = session
    .user
    .as_ref()
    .and_then(|user| user.created_at.clone());
  let summary = render_load_state(&list.load)
    .unwrap_or_else(|| {
      let unlocked = achievements(&list.goals)
        .into_iter()
        .filter(|achievement| achievement.unlocked)
        .count();
      html! {
          <div class="stat-grid">
              <StatCard label="Goals" value={list.goals.len().to_string()} />
              <StatCard label="Achievements" value={unlocked.to_string()} />
          </div>
      }
    });

  html! {
      <section class="page profile">
          <div class={classes!("panel", "profile-card", theme.is_dark().then_some("panel-dark"))}>
              <div class="avatar">
                  { session.display_name().chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default() }
              </div>
              <div class="profile-info">
                  <h1>{ session.display_name() }</h1>
                  <div class="field-help">{ email }</div>
                  {
                      if let Some(since) = member_since.as_deref() {
                          html! { <div class="field-help">{ format!("Member since {}", since.get(..10).unwrap_or(since)) }</div> }
                      } else {
                          html! {}
                      }
                  }
              </div>
          </div>
          { summary }
          <div class="actions">
              <button class="btn" type="button" onclick={on_toggle_theme}>{ theme.mode.toggle_label() }</button>
              <button class="btn danger" type="button" onclick={on_logout}>{ "Log out" }</button>
          </div>
      </section>
  }
}
