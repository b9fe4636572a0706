use yew::{
  Html,
  Properties,
  function_component,
  html
};
use yew_router::prelude::{
  Redirect,
  Routable
};

use super::session::use_session;
use super::view_components::{
  AchievementsPage,
  DashboardPage,
  GoalDetailPage,
  GoalsPage,
  LoginPage,
  NotFoundPage,
  ProfilePage,
  RegisterPage
};

#[derive(
  Debug, Clone, PartialEq, Routable,
)]
pub enum Route {
  #[at("/login")]
  Login,
  #[at("/register")]
  Register,
  #[at("/")]
  Dashboard,
  #[at("/goals")]
  Goals,
  #[at("/goals/:id")]
  GoalDetail { id: String },
  #[at("/achievements")]
  Achievements,
  #[at("/profile")]
  Profile,
  #[not_found]
  #[at("/404")]
  NotFound
}

impl Route {
  pub fn is_public(&self) -> bool {
    matches!(
      self,
      Self::Login
        | Self::Register
        | Self::NotFound
    )
  }
}

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
  pub children: Html
}

/// Sends visitors without a stored token to
/// the login page.
#[function_component(RequireAuth)]
pub fn require_auth(
  props: &RequireAuthProps
) -> Html {
  let session = use_session();
  if session.is_authenticated() {
    props.children.clone()
  } else {
    html! { <Redirect<Route> to={Route::Login} /> }
  }
}

pub fn switch(route: Route) -> Html {
  let page = match route {
    | Route::Login => {
      return html! { <LoginPage /> };
    }
    | Route::Register => {
      return html! { <RegisterPage /> };
    }
    | Route::NotFound => {
      return html! { <NotFoundPage /> };
    }
    | Route::Dashboard => {
      html! { <DashboardPage /> }
    }
    | Route::Goals => html! { <GoalsPage /> },
    | Route::GoalDetail { id } => {
      html! { <GoalDetailPage id={id} /> }
    }
    | Route::Achievements => {
      html! { <AchievementsPage /> }
    }
    | Route::Profile => {
      html! { <ProfilePage /> }
    }
  };

  html! { <RequireAuth>{ page }</RequireAuth> }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn routes_recognize_paths() {
    assert_eq!(
      Route::recognize("/goals/abc123"),
      Some(Route::GoalDetail {
        id: "abc123".to_string()
      })
    );
    assert_eq!(
      Route::recognize("/"),
      Some(Route::Dashboard)
    );
    assert_eq!(
      Route::GoalDetail {
        id: "g1".to_string()
      }
      .to_path(),
      "/goals/g1"
    );
  }

  #[test]
  fn only_auth_pages_are_public() {
    assert!(Route::Login.is_public());
    assert!(Route::Register.is_public());
    assert!(!Route::Goals.is_public());
    assert!(!Route::Dashboard.is_public());
  }
}
