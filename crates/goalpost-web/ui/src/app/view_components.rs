use yew::{
  Html,
  TargetCast,
  UseReducerHandle,
  hook,
  html,
  use_effect_with,
  use_reducer
};

use super::session::{
  report_api_error,
  use_api,
  use_session
};
use super::state::{
  GoalListAction,
  GoalListState,
  LoadState
};
use super::toast::use_toaster;
use crate::components::EmptyState;

mod achievements_page;
mod confirm_modal;
mod dashboard_page;
mod goal_detail_page;
mod goal_modal;
mod goals_page;
mod login_page;
mod milestone_modal;
mod not_found_page;
mod profile_page;
mod register_page;

pub use achievements_page::AchievementsPage;
pub use dashboard_page::DashboardPage;
pub use goal_detail_page::GoalDetailPage;
pub use goals_page::GoalsPage;
pub use login_page::LoginPage;
pub use not_found_page::NotFoundPage;
pub use profile_page::ProfilePage;
pub use register_page::RegisterPage;

fn input_value(
  event: &web_sys::InputEvent
) -> String {
  let input: web_sys::HtmlInputElement =
    event.target_unchecked_into();
  input.value()
}

fn textarea_value(
  event: &web_sys::InputEvent
) -> String {
  let input: web_sys::HtmlTextAreaElement =
    event.target_unchecked_into();
  input.value()
}

fn select_value(
  event: &web_sys::Event
) -> String {
  let select: web_sys::HtmlSelectElement =
    event.target_unchecked_into();
  select.value()
}

fn stop_propagation() -> yew::Callback<yew::MouseEvent>
{
  yew::Callback::from(
    |event: yew::MouseEvent| {
      event.stop_propagation()
    }
  )
}

/// Placeholder for anything but a ready
/// view.
fn render_load_state(
  load: &LoadState
) -> Option<Html> {
  match load {
    | LoadState::Ready => None,
    | LoadState::Loading => Some(html! {
        <div class="loading">{ "Loading…" }</div>
    }),
    | LoadState::Failed(message) => {
      Some(html! {
          <EmptyState
              title="Something went wrong"
              detail={message.clone()}
          />
      })
    }
  }
}

/// Fetches the goal list whenever the API
/// client (and so the token) changes.
#[hook]
fn use_goal_list()
-> UseReducerHandle<GoalListState> {
  let list =
    use_reducer(GoalListState::default);
  let api = use_api();
  let session = use_session();
  let toaster = use_toaster();

  {
    let dispatcher = list.dispatcher();
    use_effect_with(api, move |api| {
      let api = api.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          match api.list_goals().await {
            | Ok(goals) => {
              tracing::info!(
                count = goals.len(),
                "goals loaded"
              );
              dispatcher.dispatch(
                GoalListAction::Loaded(goals)
              );
            }
            | Err(error) => {
              report_api_error(
                &session,
                &toaster,
                "load goals",
                &error
              );
              dispatcher.dispatch(
                GoalListAction::Failed(
                  error.to_string()
                )
              );
            }
          }
        }
      );
      || ()
    });
  }

  list
}
