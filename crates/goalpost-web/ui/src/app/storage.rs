use std::rc::Rc;

use serde::Serialize;
use serde::de::DeserializeOwned;
use yew::{
  UseStateHandle,
  hook,
  use_state
};

fn local_storage() -> Option<web_sys::Storage>
{
  web_sys::window().and_then(|window| {
    window.local_storage().ok().flatten()
  })
}

/// Parses a stored JSON value. Missing keys
/// and corrupt entries both yield `default`.
pub fn decode_stored<T>(
  key: &str,
  raw: Option<&str>,
  default: T
) -> T
where
  T: DeserializeOwned
{
  let Some(raw) = raw else {
    return default;
  };

  match serde_json::from_str::<T>(raw) {
    | Ok(value) => value,
    | Err(error) => {
      tracing::error!(
        key,
        %error,
        "failed parsing value from local \
         storage"
      );
      default
    }
  }
}

pub fn load_stored<T>(
  key: &str,
  default: T
) -> T
where
  T: DeserializeOwned
{
  let stored = local_storage().and_then(
    |storage| {
      storage.get_item(key).ok().flatten()
    }
  );
  decode_stored(key, stored.as_deref(), default)
}

pub fn save_stored<T>(key: &str, value: &T)
where
  T: Serialize
{
  let Some(storage) = local_storage() else {
    tracing::warn!(
      key,
      "local storage unavailable"
    );
    return;
  };

  match serde_json::to_string(value) {
    | Ok(json) => {
      if let Err(error) =
        storage.set_item(key, &json)
      {
        tracing::error!(
          key,
          ?error,
          "failed writing local storage"
        );
      }
    }
    | Err(error) => {
      tracing::error!(
        key,
        %error,
        "failed encoding value for local \
         storage"
      );
    }
  }
}

pub fn remove_stored(key: &str) {
  if let Some(storage) = local_storage() {
    let _ = storage.remove_item(key);
  }
}

/// State mirrored into local storage under a
/// fixed key.
#[derive(Clone)]
pub struct LocalStorageHandle<T> {
  key:     Rc<str>,
  default: Rc<T>,
  state:   UseStateHandle<T>
}

impl<T> LocalStorageHandle<T>
where
  T: Serialize + Clone
{
  pub fn get(&self) -> T {
    (*self.state).clone()
  }

  pub fn set(&self, value: T) {
    save_stored(&self.key, &value);
    self.state.set(value);
  }

  pub fn clear(&self) {
    remove_stored(&self.key);
    self
      .state
      .set((*self.default).clone());
  }
}

#[hook]
pub fn use_local_storage<T>(
  key: &str,
  default: T
) -> LocalStorageHandle<T>
where
  T: Serialize + DeserializeOwned + Clone + 'static
{
  let key: Rc<str> = Rc::from(key);
  let default = Rc::new(default);
  let state = {
    let key = key.clone();
    let default = default.clone();
    use_state(move || {
      load_stored(
        &key,
        (*default).clone()
      )
    })
  };

  LocalStorageHandle {
    key,
    default,
    state
  }
}

#[cfg(test)]
mod tests {
  use goalpost_shared::User;

  use super::*;

  #[test]
  fn missing_value_uses_default() {
    let token: Option<String> =
      decode_stored("token", None, None);
    assert!(token.is_none());
  }

  #[test]
  fn stored_token_and_user_decode() {
    let token: Option<String> = decode_stored(
      "token",
      Some("\"abc.def\""),
      None
    );
    assert_eq!(token.as_deref(), Some("abc.def"));

    let user: Option<User> = decode_stored(
      "user",
      Some(
        r#"{"id":"u1","name":"Ada","email":"ada@example.com"}"#
      ),
      None
    );
    assert_eq!(
      user.map(|user| user.name),
      Some("Ada".to_string())
    );
  }

  #[test]
  fn corrupt_value_falls_back_to_default() {
    let user: Option<User> = decode_stored(
      "user",
      Some("{not json"),
      None
    );
    assert!(user.is_none());
  }
}
