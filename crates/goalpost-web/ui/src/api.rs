use gloo::net::http::{
  Request,
  RequestBuilder
};
use goalpost_shared::{
  ApiMessage,
  AuthResponse,
  Goal,
  GoalCreate,
  GoalPatch,
  LoginRequest,
  Milestone,
  MilestoneCreate,
  MilestonePatch,
  RegisterRequest,
  Task,
  TaskCreate,
  TaskPatch,
  User
};
use serde::de::DeserializeOwned;
use serde::{
  Deserialize,
  Serialize
};
use thiserror::Error;

#[derive(
  Debug, Clone, PartialEq, Eq, Error,
)]
pub enum ApiError {
  #[error("could not reach the server: {0}")]
  Network(String),
  #[error("{0}")]
  Unauthorized(String),
  #[error("{0}")]
  Forbidden(String),
  #[error("{0}")]
  NotFound(String),
  #[error("{0}")]
  Validation(String),
  #[error("server error ({status}): {message}")]
  Server {
    status:  u16,
    message: String
  },
  #[error("unexpected response: {0}")]
  Decode(String)
}

impl ApiError {
  pub fn is_unauthorized(&self) -> bool {
    matches!(self, Self::Unauthorized(_))
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
enum Verb {
  Get,
  Post,
  Put,
  Delete
}

impl Verb {
  fn as_str(self) -> &'static str {
    match self {
      | Self::Get => "GET",
      | Self::Post => "POST",
      | Self::Put => "PUT",
      | Self::Delete => "DELETE"
    }
  }
}

#[derive(Deserialize)]
struct DataEnvelope<R> {
  data: R
}

/// Headers sent with every request. The
/// bearer token is replayed when present.
pub fn request_headers(
  token: Option<&str>
) -> Vec<(&'static str, String)> {
  let mut headers = vec![
    (
      "Content-Type",
      "application/json".to_string()
    ),
    ("Accept", "application/json".to_string()),
  ];
  if let Some(token) = token
    .map(str::trim)
    .filter(|token| !token.is_empty())
  {
    headers.push((
      "Authorization",
      format!("Bearer {token}")
    ));
  }
  headers
}

/// Maps a non-2xx response onto an
/// `ApiError`, preferring the backend's own
/// message over the status text.
pub fn translate_error(
  status: u16,
  status_text: &str,
  body: &str
) -> ApiError {
  let message =
    serde_json::from_str::<ApiMessage>(body)
      .ok()
      .and_then(|envelope| {
        envelope.text().map(str::to_string)
      })
      .unwrap_or_else(|| {
        let text = status_text.trim();
        if text.is_empty() {
          format!("request failed ({status})")
        } else {
          text.to_string()
        }
      });

  match status {
    | 401 => ApiError::Unauthorized(message),
    | 403 => ApiError::Forbidden(message),
    | 404 => ApiError::NotFound(message),
    | 400 | 422 => {
      ApiError::Validation(message)
    }
    | _ => ApiError::Server {
      status,
      message
    }
  }
}

/// Decodes a success body. Empty bodies decode
/// as JSON `null`, and `{ "data": ... }`
/// envelopes are unwrapped.
pub fn decode_body<R>(
  body: &str
) -> Result<R, ApiError>
where
  R: DeserializeOwned
{
  let body = if body.trim().is_empty() {
    "null"
  } else {
    body
  };

  match serde_json::from_str::<R>(body) {
    | Ok(value) => Ok(value),
    | Err(direct) => {
      serde_json::from_str::<
        DataEnvelope<R>
      >(body)
      .map(|envelope| envelope.data)
      .map_err(|_| {
        ApiError::Decode(direct.to_string())
      })
    }
  }
}

fn join_url(
  base_url: &str,
  path: &str
) -> String {
  format!(
    "{}/{}",
    base_url.trim_end_matches('/'),
    path.trim_start_matches('/')
  )
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct ApiClient {
  base_url: String,
  token:    Option<String>
}

impl ApiClient {
  pub fn new(
    base_url: &str,
    token: Option<String>
  ) -> Self {
    Self {
      base_url: base_url.to_string(),
      token
    }
  }

  pub fn url(&self, path: &str) -> String {
    join_url(&self.base_url, path)
  }

  fn builder(
    &self,
    verb: Verb,
    url: &str
  ) -> RequestBuilder {
    let mut builder = match verb {
      | Verb::Get => Request::get(url),
      | Verb::Post => Request::post(url),
      | Verb::Put => Request::put(url),
      | Verb::Delete => Request::delete(url)
    };
    for (name, value) in
      request_headers(self.token.as_deref())
    {
      builder = builder.header(name, &value);
    }
    builder
  }

  async fn send<B>(
    &self,
    verb: Verb,
    path: &str,
    body: Option<&B>
  ) -> Result<String, ApiError>
  where
    B: Serialize + ?Sized
  {
    let url = self.url(path);
    let builder = self.builder(verb, &url);
    let request = match body {
      | Some(payload) => builder
        .json(payload)
        .map_err(|e| {
          ApiError::Decode(format!(
            "failed to encode body: {e}"
          ))
        })?,
      | None => builder.build().map_err(
        |e| ApiError::Network(e.to_string())
      )?
    };

    tracing::debug!(
      method = verb.as_str(),
      url = %url,
      "api request"
    );

    let response =
      request.send().await.map_err(|e| {
        ApiError::Network(e.to_string())
      })?;
    let status = response.status();
    let text =
      response.text().await.map_err(|e| {
        ApiError::Network(e.to_string())
      })?;

    if (200..300).contains(&status) {
      Ok(text)
    } else {
      let error = translate_error(
        status,
        &response.status_text(),
        &text
      );
      tracing::warn!(
        method = verb.as_str(),
        url = %url,
        status,
        error = %error,
        "api request failed"
      );
      Err(error)
    }
  }

  pub async fn get<R>(
    &self,
    path: &str
  ) -> Result<R, ApiError>
  where
    R: DeserializeOwned
  {
    let text = self
      .send::<()>(Verb::Get, path, None)
      .await?;
    decode_body(&text)
  }

  pub async fn post<R, B>(
    &self,
    path: &str,
    body: &B
  ) -> Result<R, ApiError>
  where
    R: DeserializeOwned,
    B: Serialize + ?Sized
  {
    let text = self
      .send(Verb::Post, path, Some(body))
      .await?;
    decode_body(&text)
  }

  pub async fn put<R, B>(
    &self,
    path: &str,
    body: &B
  ) -> Result<R, ApiError>
  where
    R: DeserializeOwned,
    B: Serialize + ?Sized
  {
    let text = self
      .send(Verb::Put, path, Some(body))
      .await?;
    decode_body(&text)
  }

  /// Body of a successful delete is ignored.
  pub async fn delete(
    &self,
    path: &str
  ) -> Result<(), ApiError> {
    self
      .send::<()>(Verb::Delete, path, None)
      .await
      .map(|_| ())
  }

  pub async fn login(
    &self,
    request: &LoginRequest
  ) -> Result<AuthResponse, ApiError> {
    self.post("/auth/login", request).await
  }

  pub async fn register(
    &self,
    request: &RegisterRequest
  ) -> Result<AuthResponse, ApiError> {
    self
      .post("/auth/register", request)
      .await
  }

  pub async fn logout(
    &self
  ) -> Result<(), ApiError> {
    self
      .send(
        Verb::Post,
        "/auth/logout",
        Some(&serde_json::json!({}))
      )
      .await
      .map(|_| ())
  }

  pub async fn me(
    &self
  ) -> Result<User, ApiError> {
    self.get("/auth/me").await
  }

  pub async fn list_goals(
    &self
  ) -> Result<Vec<Goal>, ApiError> {
    self.get("/goals").await
  }

  pub async fn get_goal(
    &self,
    id: &str
  ) -> Result<Goal, ApiError> {
    self.get(&format!("/goals/{id}")).await
  }

  pub async fn create_goal(
    &self,
    draft: &GoalCreate
  ) -> Result<Goal, ApiError> {
    self.post("/goals", draft).await
  }

  pub async fn update_goal(
    &self,
    id: &str,
    patch: &GoalPatch
  ) -> Result<Goal, ApiError> {
    self
      .put(&format!("/goals/{id}"), patch)
      .await
  }

  pub async fn delete_goal(
    &self,
    id: &str
  ) -> Result<(), ApiError> {
    self.delete(&format!("/goals/{id}")).await
  }

  pub async fn list_milestones(
    &self,
    goal_id: &str
  ) -> Result<Vec<Milestone>, ApiError> {
    self
      .get(&format!(
        "/goals/{goal_id}/milestones"
      ))
      .await
  }

  pub async fn create_milestone(
    &self,
    goal_id: &str,
    draft: &MilestoneCreate
  ) -> Result<Milestone, ApiError> {
    self
      .post(
        &format!(
          "/goals/{goal_id}/milestones"
        ),
        draft
      )
      .await
  }

  pub async fn update_milestone(
    &self,
    id: &str,
    patch: &MilestonePatch
  ) -> Result<Milestone, ApiError> {
    self
      .put(
        &format!("/milestones/{id}"),
        patch
      )
      .await
  }

  pub async fn delete_milestone(
    &self,
    id: &str
  ) -> Result<(), ApiError> {
    self
      .delete(&format!("/milestones/{id}"))
      .await
  }

  pub async fn list_tasks(
    &self,
    milestone_id: &str
  ) -> Result<Vec<Task>, ApiError> {
    self
      .get(&format!(
        "/milestones/{milestone_id}/tasks"
      ))
      .await
  }

  pub async fn create_task(
    &self,
    milestone_id: &str,
    draft: &TaskCreate
  ) -> Result<Task, ApiError> {
    self
      .post(
        &format!(
          "/milestones/{milestone_id}/tasks"
        ),
        draft
      )
      .await
  }

  pub async fn update_task(
    &self,
    id: &str,
    patch: &TaskPatch
  ) -> Result<Task, ApiError> {
    self
      .put(&format!("/tasks/{id}"), patch)
      .await
  }

  pub async fn delete_task(
    &self,
    id: &str
  ) -> Result<(), ApiError> {
    self.delete(&format!("/tasks/{id}")).await
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn headers_include_bearer_only_with_token(
  ) {
    let anonymous = request_headers(None);
    assert!(
      anonymous
        .iter()
        .all(|(name, _)| *name
          != "Authorization")
    );

    let blank = request_headers(Some("  "));
    assert_eq!(blank.len(), 2);

    let authed =
      request_headers(Some("abc.def"));
    assert!(authed.contains(&(
      "Authorization",
      "Bearer abc.def".to_string()
    )));
    assert!(authed.contains(&(
      "Content-Type",
      "application/json".to_string()
    )));
  }

  #[test]
  fn translate_error_uses_backend_message()
  {
    let error = translate_error(
      400,
      "Bad Request",
      r#"{"message":"Title is required"}"#
    );
    assert_eq!(
      error,
      ApiError::Validation(
        "Title is required".to_string()
      )
    );

    let error = translate_error(
      401,
      "Unauthorized",
      r#"{"error":"jwt expired"}"#
    );
    assert!(error.is_unauthorized());
    assert_eq!(error.to_string(), "jwt expired");
  }

  #[test]
  fn translate_error_falls_back_to_status_text(
  ) {
    assert_eq!(
      translate_error(
        503,
        "Service Unavailable",
        "<html>oops</html>"
      ),
      ApiError::Server {
        status:  503,
        message: "Service Unavailable"
          .to_string()
      }
    );
    assert_eq!(
      translate_error(404, "", ""),
      ApiError::NotFound(
        "request failed (404)".to_string()
      )
    );
  }

  #[test]
  fn decode_body_handles_empty_and_envelopes(
  ) {
    decode_body::<()>("  ")
      .expect("empty body decodes as unit");

    let goals: Vec<Goal> = decode_body(
      r#"{"data":[{"_id":"g1","title":"x"}]}"#
    )
    .expect("enveloped goals");
    assert_eq!(goals[0].id, "g1");

    let error =
      decode_body::<Vec<Goal>>("{\"oops\":1}")
        .expect_err("not a goal list");
    assert!(matches!(
      error,
      ApiError::Decode(_)
    ));
  }

  #[test]
  fn urls_join_without_double_slashes() {
    let client = ApiClient::new(
      "http://localhost:5000/api/",
      None
    );
    assert_eq!(
      client.url("/goals/g1"),
      "http://localhost:5000/api/goals/g1"
    );
    assert_eq!(
      client.url("auth/login"),
      "http://localhost:5000/api/auth/login"
    );
  }
}
