use goalpost_shared::{
  AuthResponse,
  User
};
use yew::{
  Callback,
  ContextProvider,
  Html,
  Properties,
  function_component,
  hook,
  html,
  use_context,
  use_effect_with
};

use super::config::use_config;
use super::storage::{
  load_stored,
  use_local_storage
};
use super::toast::Toaster;
use crate::api::{
  ApiClient,
  ApiError
};

#[derive(Clone, PartialEq)]
pub struct SessionContext {
  pub token:    Option<String>,
  pub user:     Option<User>,
  pub sign_in:  Callback<AuthResponse>,
  /// Tells the backend, then clears local
  /// state whether or not that succeeded.
  pub sign_out: Callback<()>,
  /// Clears local state only, for expired
  /// tokens.
  pub expire:   Callback<()>
}

impl SessionContext {
  pub fn is_authenticated(&self) -> bool {
    self
      .token
      .as_deref()
      .is_some_and(|token| {
        !token.trim().is_empty()
      })
  }

  pub fn display_name(&self) -> String {
    self
      .user
      .as_ref()
      .map(|user| {
        if user.name.trim().is_empty() {
          user.email.clone()
        } else {
          user.name.clone()
        }
      })
      .unwrap_or_default()
  }
}

#[hook]
pub fn use_session() -> SessionContext {
  use_context::<SessionContext>()
    .unwrap_or_else(|| SessionContext {
      token:    None,
      user:     None,
      sign_in:  Callback::noop(),
      sign_out: Callback::noop(),
      expire:   Callback::noop()
    })
}

/// Client bound to the configured base URL
/// and the current token.
#[hook]
pub fn use_api() -> ApiClient {
  let config = use_config();
  let session = use_session();
  ApiClient::new(
    &config.api.base_url,
    session.token.clone()
  )
}

/// Any unauthorized response means the
/// stored token is no longer valid.
pub fn should_expire(error: &ApiError) -> bool {
  error.is_unauthorized()
}

/// Logs a failed logout request. Local state
/// is cleared either way.
fn logout_clears_session(
  result: &Result<(), ApiError>
) -> bool {
  if let Err(error) = result {
    tracing::warn!(
      %error,
      "logout request failed, clearing \
       local session anyway"
    );
  }
  true
}

/// What to do with a `/auth/me` result.
#[derive(Debug, PartialEq)]
enum Refresh {
  /// The token changed while the request was
  /// in flight.
  Stale,
  Update(User),
  Expire,
  Keep
}

fn refresh_outcome(
  requested: &str,
  stored: Option<&str>,
  result: Result<User, ApiError>
) -> Refresh {
  if stored != Some(requested) {
    return Refresh::Stale;
  }
  match result {
    | Ok(profile) => Refresh::Update(profile),
    | Err(error) if should_expire(&error) => {
      Refresh::Expire
    }
    | Err(error) => {
      tracing::warn!(
        %error,
        "failed refreshing user"
      );
      Refresh::Keep
    }
  }
}

/// Catch-and-toast for failed requests.
pub fn report_api_error(
  session: &SessionContext,
  toaster: &Toaster,
  action: &str,
  error: &ApiError
) {
  tracing::error!(
    action,
    %error,
    "api call failed"
  );
  if should_expire(error) {
    session.expire.emit(());
    toaster.error(
      "Your session has expired. Please \
       sign in again."
    );
  } else {
    toaster.error(format!(
      "Could not {action}: {error}"
    ));
  }
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
  pub children: Html
}

#[function_component(SessionProvider)]
pub fn session_provider(
  props: &SessionProviderProps
) -> Html {
  let config = use_config();
  let token = use_local_storage::<
    Option<String>
  >(
    &config.storage.token_key, None
  );
  let user = use_local_storage::<
    Option<User>
  >(
    &config.storage.user_key, None
  );

  let sign_in = {
    let token = token.clone();
    let user = user.clone();
    Callback::from(
      move |auth: AuthResponse| {
        tracing::info!(
          user = %auth.user.email,
          "signed in"
        );
        token.set(Some(auth.token));
        user.set(Some(auth.user));
      }
    )
  };

  let expire = {
    let token = token.clone();
    let user = user.clone();
    Callback::from(move |_: ()| {
      token.clear();
      user.clear();
    })
  };

  let sign_out = {
    let token = token.clone();
    let expire = expire.clone();
    let base_url =
      config.api.base_url.clone();
    Callback::from(move |_: ()| {
      let client =
        ApiClient::new(&base_url, token.get());
      let expire = expire.clone();
      wasm_bindgen_futures::spawn_local(
        async move {
          let result = client.logout().await;
          if logout_clears_session(&result) {
            expire.emit(());
          }
        }
      );
    })
  };

  // Refreshes the stored profile and drops
  // tokens the backend no longer accepts.
  {
    let user = user.clone();
    let expire = expire.clone();
    let base_url =
      config.api.base_url.clone();
    let token_key =
      config.storage.token_key.clone();
    use_effect_with(
      token.get(),
      move |token| {
        if let Some(requested) = token
          .clone()
          .filter(|token| !token.trim().is_empty())
        {
          let client = ApiClient::new(
            &base_url,
            Some(requested.clone())
          );
          wasm_bindgen_futures::spawn_local(
            async move {
              let result = client.me().await;
              // Signing out or in again while
              // waiting replaces the stored
              // token.
              let stored =
                load_stored::<Option<String>>(
                  &token_key, None
                );
              match refresh_outcome(
                &requested,
                stored.as_deref(),
                result
              ) {
                | Refresh::Stale => {
                  tracing::debug!(
                    "dropping user refresh for \
                     a replaced token"
                  );
                }
                | Refresh::Update(profile) => {
                  user.set(Some(profile))
                }
                | Refresh::Expire => {
                  tracing::info!(
                    "stored token rejected"
                  );
                  expire.emit(());
                }
                | Refresh::Keep => {}
              }
            }
          );
        }
        || ()
      }
    );
  }

  let context = SessionContext {
    token: token.get(),
    user: user.get(),
    sign_in,
    sign_out,
    expire
  };

  html! {
      <ContextProvider<SessionContext> context={context}>
          { props.children.clone() }
      </ContextProvider<SessionContext>>
  }
}

#[cfg(test)]
mod tests {
  use std::cell::{
    Cell,
    RefCell
  };
  use std::rc::Rc;

  use super::*;
  use crate::app::toast::Toast;

  fn ada() -> User {
    User {
      id:         "u1".to_string(),
      name:       "Ada".to_string(),
      email:      "ada@example.com"
        .to_string(),
      created_at: None
    }
  }

  fn context(
    token: Option<&str>,
    user: Option<User>
  ) -> SessionContext {
    SessionContext {
      token: token.map(str::to_string),
      user,
      sign_in: Callback::noop(),
      sign_out: Callback::noop(),
      expire: Callback::noop()
    }
  }

  #[test]
  fn blank_token_is_not_authenticated() {
    assert!(!context(None, None)
      .is_authenticated());
    assert!(!context(Some(" "), None)
      .is_authenticated());
    assert!(context(Some("jwt"), None)
      .is_authenticated());
  }

  #[test]
  fn display_name_falls_back_to_email() {
    let user = User {
      id:         "u1".to_string(),
      name:       String::new(),
      email:      "ada@example.com"
        .to_string(),
      created_at: None
    };
    assert_eq!(
      context(Some("jwt"), Some(user))
        .display_name(),
      "ada@example.com"
    );
  }

  fn recording(
    expired: &Rc<Cell<u32>>,
    toasts: &Rc<RefCell<Vec<Toast>>>
  ) -> (SessionContext, Toaster) {
    let mut session = context(Some("jwt"), None);
    let counter = expired.clone();
    session.expire = Callback::from(move |_: ()| {
      counter.set(counter.get() + 1)
    });
    let sink = toasts.clone();
    let toaster = Toaster {
      toasts:  Vec::new(),
      push:    Callback::from(move |toast: Toast| {
        sink.borrow_mut().push(toast)
      }),
      dismiss: Callback::noop()
    };
    (session, toaster)
  }

  #[test]
  fn only_unauthorized_expires() {
    assert!(should_expire(
      &ApiError::Unauthorized(
        "jwt expired".to_string()
      )
    ));
    assert!(!should_expire(&ApiError::Forbidden(
      "not yours".to_string()
    )));
    assert!(!should_expire(&ApiError::NotFound(
      "gone".to_string()
    )));
    assert!(!should_expire(&ApiError::Server {
      status:  500,
      message: "boom".to_string()
    }));
  }

  #[test]
  fn unauthorized_from_any_call_expires_session()
  {
    let expired = Rc::new(Cell::new(0));
    let toasts = Rc::new(RefCell::new(Vec::new()));
    let (session, toaster) =
      recording(&expired, &toasts);

    report_api_error(
      &session,
      &toaster,
      "delete the task",
      &ApiError::Unauthorized(
        "invalid token".to_string()
      )
    );
    assert_eq!(expired.get(), 1);
    assert!(
      toasts.borrow()[0]
        .message
        .contains("session has expired")
    );

    report_api_error(
      &session,
      &toaster,
      "delete the task",
      &ApiError::Network("offline".to_string())
    );
    assert_eq!(expired.get(), 1);
    assert_eq!(
      toasts.borrow()[1].message,
      "Could not delete the task: could not \
       reach the server: offline"
    );
  }

  #[test]
  fn failed_logout_still_clears_session() {
    assert!(logout_clears_session(&Ok(())));
    assert!(logout_clears_session(&Err(
      ApiError::Network("offline".to_string())
    )));
    assert!(logout_clears_session(&Err(
      ApiError::Server {
        status:  502,
        message: "bad gateway".to_string()
      }
    )));
  }

  #[test]
  fn refresh_for_current_token_applies() {
    assert_eq!(
      refresh_outcome("jwt", Some("jwt"), Ok(ada())),
      Refresh::Update(ada())
    );
    assert_eq!(
      refresh_outcome(
        "jwt",
        Some("jwt"),
        Err(ApiError::Unauthorized(
          "expired".to_string()
        ))
      ),
      Refresh::Expire
    );
    assert_eq!(
      refresh_outcome(
        "jwt",
        Some("jwt"),
        Err(ApiError::Network(
          "offline".to_string()
        ))
      ),
      Refresh::Keep
    );
  }

  #[test]
  fn refresh_for_replaced_token_is_dropped() {
    // Signed out while waiting.
    assert_eq!(
      refresh_outcome("old", None, Ok(ada())),
      Refresh::Stale
    );
    // Signed in as someone else while waiting.
    assert_eq!(
      refresh_outcome(
        "old",
        Some("new"),
        Err(ApiError::Unauthorized(
          "expired".to_string()
        ))
      ),
      Refresh::Stale
    );
  }
}
