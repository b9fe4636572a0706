use chrono::NaiveDate;
use serde::{
  Deserialize,
  Serialize
};

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
  Low,
  #[default]
  Medium,
  High
}

impl Priority {
  pub fn all() -> [Self; 3] {
    [Self::High, Self::Medium, Self::Low]
  }

  pub fn key(self) -> &'static str {
    match self {
      | Self::Low => "low",
      | Self::Medium => "medium",
      | Self::High => "high"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::Low => "Low",
      | Self::Medium => "Medium",
      | Self::High => "High"
    }
  }

  /// Sort rank, highest priority first.
  pub fn rank(self) -> u8 {
    match self {
      | Self::High => 0,
      | Self::Medium => 1,
      | Self::Low => 2
    }
  }

  pub fn from_key(
    raw: &str
  ) -> Option<Self> {
    match raw.trim() {
      | "low" => Some(Self::Low),
      | "medium" => Some(Self::Medium),
      | "high" => Some(Self::High),
      | _ => None
    }
  }
}

#[derive(
  Debug,
  Clone,
  Copy,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
  Hash,
  Default,
)]
#[serde(rename_all = "snake_case")]
pub enum GoalStatus {
  #[default]
  NotStarted,
  InProgress,
  Completed,
  OnHold
}

impl GoalStatus {
  pub fn all() -> [Self; 4] {
    [
      Self::NotStarted,
      Self::InProgress,
      Self::Completed,
      Self::OnHold
    ]
  }

  pub fn key(self) -> &'static str {
    match self {
      | Self::NotStarted => "not_started",
      | Self::InProgress => "in_progress",
      | Self::Completed => "completed",
      | Self::OnHold => "on_hold"
    }
  }

  pub fn label(self) -> &'static str {
    match self {
      | Self::NotStarted => "Not started",
      | Self::InProgress => "In progress",
      | Self::Completed => "Completed",
      | Self::OnHold => "On hold"
    }
  }

  pub fn from_key(
    raw: &str
  ) -> Option<Self> {
    Self::all()
      .into_iter()
      .find(|status| {
        status.key() == raw.trim()
      })
  }

  pub fn is_open(self) -> bool {
    !matches!(self, Self::Completed)
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct Task {
  #[serde(alias = "_id")]
  pub id:           String,
  #[serde(default)]
  pub milestone_id: String,
  #[serde(default)]
  pub title:        String,
  #[serde(default)]
  pub description:  Option<String>,
  #[serde(
    default,
    with = "flexible_date"
  )]
  pub due_date:     Option<NaiveDate>,
  #[serde(default)]
  pub priority:     Priority,
  #[serde(default)]
  pub completed:    bool,
  #[serde(default)]
  pub created_at:   Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct Milestone {
  #[serde(alias = "_id")]
  pub id:          String,
  #[serde(default)]
  pub goal_id:     String,
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub description: String,
  #[serde(
    default,
    with = "flexible_date"
  )]
  pub due_date:    Option<NaiveDate>,
  #[serde(default)]
  pub priority:    Priority,
  #[serde(default)]
  pub completed:   bool,
  #[serde(default)]
  pub tasks:       Vec<Task>,
  #[serde(default)]
  pub created_at:  Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
  #[serde(alias = "_id")]
  pub id:          String,
  #[serde(default)]
  pub title:       String,
  #[serde(default)]
  pub description: String,
  #[serde(
    default,
    with = "flexible_date"
  )]
  pub start_date:  Option<NaiveDate>,
  #[serde(
    default,
    with = "flexible_date"
  )]
  pub end_date:    Option<NaiveDate>,
  #[serde(default)]
  pub priority:    Priority,
  #[serde(default)]
  pub status:      GoalStatus,
  #[serde(
    default,
    deserialize_with = "lenient_percent"
  )]
  pub progress:    u8,
  #[serde(default)]
  pub category:    Option<String>,
  #[serde(default)]
  pub milestones:  Vec<Milestone>,
  #[serde(default)]
  pub created_at:  Option<String>,
  #[serde(default)]
  pub updated_at:  Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Eq,
)]
#[serde(rename_all = "camelCase")]
pub struct User {
  #[serde(alias = "_id")]
  pub id:         String,
  #[serde(default)]
  pub name:       String,
  #[serde(default)]
  pub email:      String,
  #[serde(default)]
  pub created_at: Option<String>
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Default,
)]
#[serde(rename_all = "camelCase")]
pub struct GoalCreate {
  pub title:       String,
  pub description: String,
  pub start_date:  Option<NaiveDate>,
  pub end_date:    Option<NaiveDate>,
  pub priority:    Priority,
  pub status:      GoalStatus,
  pub category:    Option<String>
}

/// Partial goal update. Outer `None` leaves a
/// field untouched, `Some(None)` clears it.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Default,
)]
#[serde(rename_all = "camelCase")]
pub struct GoalPatch {
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub title: Option<String>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub description: Option<String>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub start_date:
    Option<Option<NaiveDate>>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub end_date:
    Option<Option<NaiveDate>>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub priority: Option<Priority>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub status: Option<GoalStatus>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub progress: Option<u8>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub category: Option<Option<String>>
}

impl GoalPatch {
  /// Full replacement of the editable fields,
  /// as sent by the edit form.
  pub fn from_create(
    draft: &GoalCreate
  ) -> Self {
    Self {
      title:       Some(
        draft.title.clone()
      ),
      description: Some(
        draft.description.clone()
      ),
      start_date:  Some(
        draft.start_date
      ),
      end_date:    Some(draft.end_date),
      priority:    Some(draft.priority),
      status:      Some(draft.status),
      progress:    None,
      category:    Some(
        draft.category.clone()
      )
    }
  }

  pub fn apply(&self, goal: &mut Goal) {
    if let Some(title) = &self.title {
      goal.title = title.clone();
    }
    if let Some(description) =
      &self.description
    {
      goal.description =
        description.clone();
    }
    if let Some(start) = self.start_date
    {
      goal.start_date = start;
    }
    if let Some(end) = self.end_date {
      goal.end_date = end;
    }
    if let Some(priority) = self.priority
    {
      goal.priority = priority;
    }
    if let Some(status) = self.status {
      goal.status = status;
    }
    if let Some(progress) = self.progress
    {
      goal.progress = progress.min(100);
    }
    if let Some(category) = &self.category
    {
      goal.category = category.clone();
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Default,
)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneCreate {
  pub title:       String,
  pub description: String,
  pub due_date:    Option<NaiveDate>,
  pub priority:    Priority
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Default,
)]
#[serde(rename_all = "camelCase")]
pub struct MilestonePatch {
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub title: Option<String>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub description: Option<String>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub due_date:
    Option<Option<NaiveDate>>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub priority: Option<Priority>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub completed: Option<bool>
}

impl MilestonePatch {
  pub fn from_create(
    draft: &MilestoneCreate
  ) -> Self {
    Self {
      title:       Some(
        draft.title.clone()
      ),
      description: Some(
        draft.description.clone()
      ),
      due_date:    Some(draft.due_date),
      priority:    Some(draft.priority),
      completed:   None
    }
  }

  pub fn apply(
    &self,
    milestone: &mut Milestone
  ) {
    if let Some(title) = &self.title {
      milestone.title = title.clone();
    }
    if let Some(description) =
      &self.description
    {
      milestone.description =
        description.clone();
    }
    if let Some(due) = self.due_date {
      milestone.due_date = due;
    }
    if let Some(priority) = self.priority
    {
      milestone.priority = priority;
    }
    if let Some(completed) =
      self.completed
    {
      milestone.completed = completed;
    }
  }
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Default,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskCreate {
  pub title:       String,
  pub description: Option<String>,
  pub due_date:    Option<NaiveDate>,
  pub priority:    Priority
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
  Default,
)]
#[serde(rename_all = "camelCase")]
pub struct TaskPatch {
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub title: Option<String>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub description: Option<Option<String>>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub due_date:
    Option<Option<NaiveDate>>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub priority: Option<Priority>,
  #[serde(
    skip_serializing_if = "Option::is_none"
  )]
  pub completed: Option<bool>
}

impl TaskPatch {
  pub fn completion(
    completed: bool
  ) -> Self {
    Self {
      completed: Some(completed),
      ..Self::default()
    }
  }

  pub fn apply(&self, task: &mut Task) {
    if let Some(title) = &self.title {
      task.title = title.clone();
    }
    if let Some(description) =
      &self.description
    {
      task.description =
        description.clone();
    }
    if let Some(due) = self.due_date {
      task.due_date = due;
    }
    if let Some(priority) = self.priority
    {
      task.priority = priority;
    }
    if let Some(completed) =
      self.completed
    {
      task.completed = completed;
    }
  }
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct LoginRequest {
  pub email:    String,
  pub password: String
}

#[derive(
  Debug, Clone, Serialize, Deserialize,
)]
pub struct RegisterRequest {
  pub name:     String,
  pub email:    String,
  pub password: String
}

#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  PartialEq,
)]
pub struct AuthResponse {
  pub token: String,
  pub user:  User
}

/// Error envelope returned by the backend on
/// non-2xx responses.
#[derive(
  Debug,
  Clone,
  Serialize,
  Deserialize,
  Default,
)]
pub struct ApiMessage {
  #[serde(default)]
  pub message: Option<String>,
  #[serde(default)]
  pub error:   Option<String>
}

impl ApiMessage {
  pub fn text(&self) -> Option<&str> {
    fn clean(
      value: &Option<String>
    ) -> Option<&str> {
      value
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
    }
    clean(&self.message)
      .or_else(|| clean(&self.error))
  }
}

/// Accepts `YYYY-MM-DD` as well as full ISO
/// timestamps, keeping only the date part.
pub fn parse_date(
  raw: &str
) -> Option<NaiveDate> {
  let head = raw.trim().get(..10)?;
  NaiveDate::parse_from_str(
    head, "%Y-%m-%d"
  )
  .ok()
}

/// Any JSON number (or `null`) as a whole
/// percentage, rounded and clamped to
/// `0..=100`.
fn lenient_percent<'de, D>(
  deserializer: D
) -> Result<u8, D::Error>
where
  D: serde::Deserializer<'de>
{
  let raw =
    Option::<f64>::deserialize(deserializer)?;
  Ok(match raw {
    | Some(value) if value.is_finite() => {
      value.round().clamp(0.0, 100.0) as u8
    }
    | _ => 0
  })
}

mod flexible_date {
  use chrono::NaiveDate;
  use serde::de::Error as _;
  use serde::{
    Deserialize,
    Deserializer,
    Serializer
  };

  pub fn serialize<S>(
    value: &Option<NaiveDate>,
    serializer: S
  ) -> Result<S::Ok, S::Error>
  where
    S: Serializer
  {
    match value {
      | Some(date) => serializer
        .serialize_some(
          &date
            .format("%Y-%m-%d")
            .to_string()
        ),
      | None => serializer.serialize_none()
    }
  }

  pub fn deserialize<'de, D>(
    deserializer: D
  ) -> Result<Option<NaiveDate>, D::Error>
  where
    D: Deserializer<'de>
  {
    let raw =
      Option::<String>::deserialize(
        deserializer
      )?;
    match raw.as_deref().map(str::trim) {
      | None | Some("") => Ok(None),
      | Some(value) => {
        super::parse_date(value)
          .map(Some)
          .ok_or_else(|| {
            D::Error::custom(format!(
              "invalid date: {value}"
            ))
          })
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn goal_decodes_backend_shape() {
    let raw = r#"{
      "_id": "g1",
      "title": "Run a marathon",
      "description": "42km",
      "startDate": "2026-01-01T00:00:00.000Z",
      "endDate": "2026-10-01",
      "priority": "high",
      "status": "in_progress",
      "progress": 40,
      "milestones": [
        {
          "_id": "m1",
          "goalId": "g1",
          "title": "Half",
          "completed": true,
          "tasks": [
            { "_id": "t1", "milestoneId": "m1", "title": "10k", "completed": true }
          ]
        }
      ]
    }"#;

    let goal: Goal =
      serde_json::from_str(raw)
        .expect("decode goal");
    assert_eq!(goal.id, "g1");
    assert_eq!(
      goal.start_date,
      NaiveDate::from_ymd_opt(
        2026, 1, 1
      )
    );
    assert_eq!(
      goal.status,
      GoalStatus::InProgress
    );
    assert_eq!(
      goal.priority,
      Priority::High
    );
    assert_eq!(
      goal.milestones[0].tasks[0].id,
      "t1"
    );
  }

  #[test]
  fn missing_optional_fields_use_defaults()
  {
    let goal: Goal = serde_json::from_str(
      r#"{ "id": "g2", "endDate": "" }"#
    )
    .expect("decode sparse goal");
    assert_eq!(
      goal.priority,
      Priority::Medium
    );
    assert_eq!(
      goal.status,
      GoalStatus::NotStarted
    );
    assert!(goal.end_date.is_none());
    assert!(goal.milestones.is_empty());
  }

  #[test]
  fn invalid_date_is_rejected() {
    let result =
      serde_json::from_str::<Task>(
        r#"{ "id": "t", "dueDate": "soon" }"#
      );
    assert!(result.is_err());
  }

  #[test]
  fn patch_serializes_only_touched_fields()
  {
    let patch = TaskPatch::completion(true);
    let json = serde_json::to_value(&patch)
      .expect("encode patch");
    assert_eq!(
      json,
      serde_json::json!({ "completed": true })
    );

    let clear = GoalPatch {
      end_date: Some(None),
      ..GoalPatch::default()
    };
    let json = serde_json::to_value(&clear)
      .expect("encode clear patch");
    assert_eq!(
      json,
      serde_json::json!({ "endDate": null })
    );
  }

  #[test]
  fn goal_patch_apply_clamps_progress() {
    let mut goal: Goal =
      serde_json::from_str(
        r#"{ "id": "g", "title": "old" }"#
      )
      .expect("decode goal");
    GoalPatch {
      title: Some("new".to_string()),
      progress: Some(250),
      category: Some(Some(
        "health".to_string()
      )),
      ..GoalPatch::default()
    }
    .apply(&mut goal);
    assert_eq!(goal.title, "new");
    assert_eq!(goal.progress, 100);
    assert_eq!(
      goal.category.as_deref(),
      Some("health")
    );
  }

  #[test]
  fn fractional_and_out_of_range_progress_decodes(
  ) {
    let goals: Vec<Goal> = serde_json::from_str(
      r#"[
        {"id": "g1", "progress": 33.33},
        {"id": "g2"},
        {"id": "g3", "progress": 140},
        {"id": "g4", "progress": -5},
        {"id": "g5", "progress": null},
        {"id": "g6", "progress": 66.5}
      ]"#
    )
    .expect("lenient progress");
    let progress: Vec<u8> = goals
      .iter()
      .map(|goal| goal.progress)
      .collect();
    assert_eq!(
      progress,
      vec![33, 0, 100, 0, 0, 67]
    );
  }

  #[test]
  fn api_message_prefers_message_then_error()
  {
    let both = ApiMessage {
      message: Some("bad".to_string()),
      error:   Some("worse".to_string())
    };
    assert_eq!(both.text(), Some("bad"));

    let only_error = ApiMessage {
      message: Some("  ".to_string()),
      error:   Some("worse".to_string())
    };
    assert_eq!(
      only_error.text(),
      Some("worse")
    );
  }
}
