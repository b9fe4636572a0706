use chrono::NaiveDate;
use goalpost_shared::model::parse_date;
use goalpost_shared::validate::{
  ValidationError,
  validate_goal,
  validate_milestone,
  validate_task
};
use goalpost_shared::{
  Goal,
  GoalCreate,
  GoalStatus,
  Milestone,
  MilestoneCreate,
  Priority,
  TaskCreate
};

fn date_input(
  date: Option<NaiveDate>
) -> String {
  date
    .map(|date| {
      date.format("%Y-%m-%d").to_string()
    })
    .unwrap_or_default()
}

fn optional_text(
  raw: &str
) -> Option<String> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    None
  } else {
    Some(trimmed.to_string())
  }
}

/// Raw field values of the goal modal, kept
/// as strings the way the inputs hold them.
#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub struct GoalDraft {
  pub title:       String,
  pub description: String,
  pub start_date:  String,
  pub end_date:    String,
  pub priority:    Priority,
  pub status:      GoalStatus,
  pub category:    String,
  pub error:       Option<String>
}

impl GoalDraft {
  pub fn from_goal(goal: &Goal) -> Self {
    Self {
      title:       goal.title.clone(),
      description: goal.description.clone(),
      start_date:  date_input(
        goal.start_date
      ),
      end_date:    date_input(goal.end_date),
      priority:    goal.priority,
      status:      goal.status,
      category:    goal
        .category
        .clone()
        .unwrap_or_default(),
      error:       None
    }
  }

  pub fn to_create(
    &self
  ) -> Result<GoalCreate, ValidationError>
  {
    let draft = GoalCreate {
      title:       self.title.trim().to_string(),
      description: self
        .description
        .trim()
        .to_string(),
      start_date:  parse_date(&self.start_date),
      end_date:    parse_date(&self.end_date),
      priority:    self.priority,
      status:      self.status,
      category:    optional_text(
        &self.category
      )
    };
    validate_goal(&draft)?;
    Ok(draft)
  }
}

#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub struct MilestoneDraft {
  pub title:       String,
  pub description: String,
  pub due_date:    String,
  pub priority:    Priority,
  pub error:       Option<String>
}

impl MilestoneDraft {
  pub fn from_milestone(
    milestone: &Milestone
  ) -> Self {
    Self {
      title:       milestone.title.clone(),
      description: milestone
        .description
        .clone(),
      due_date:    date_input(
        milestone.due_date
      ),
      priority:    milestone.priority,
      error:       None
    }
  }

  pub fn to_create(
    &self
  ) -> Result<MilestoneCreate, ValidationError>
  {
    let draft = MilestoneCreate {
      title:       self.title.trim().to_string(),
      description: self
        .description
        .trim()
        .to_string(),
      due_date:    parse_date(&self.due_date),
      priority:    self.priority
    };
    validate_milestone(&draft)?;
    Ok(draft)
  }
}

#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub struct TaskDraft {
  pub title:    String,
  pub due_date: String,
  pub priority: Priority
}

impl TaskDraft {
  pub fn to_create(
    &self
  ) -> Result<TaskCreate, ValidationError>
  {
    let draft = TaskCreate {
      title:       self.title.trim().to_string(),
      description: None,
      due_date:    parse_date(&self.due_date),
      priority:    self.priority
    };
    validate_task(&draft)?;
    Ok(draft)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn goal_draft_round_trips_dates_and_category(
  ) {
    let goal: Goal = serde_json::from_str(
      r#"{
        "_id": "g1",
        "title": "Learn piano",
        "startDate": "2026-02-01",
        "endDate": "2026-08-01T12:00:00Z",
        "category": "Music"
      }"#
    )
    .expect("goal");

    let draft = GoalDraft::from_goal(&goal);
    assert_eq!(draft.end_date, "2026-08-01");

    let create =
      draft.to_create().expect("valid");
    assert_eq!(create.start_date, goal.start_date);
    assert_eq!(create.end_date, goal.end_date);
    assert_eq!(
      create.category.as_deref(),
      Some("Music")
    );
  }

  #[test]
  fn blank_category_and_dates_become_none() {
    let draft = GoalDraft {
      title: "  Stretch daily ".to_string(),
      category: "   ".to_string(),
      ..GoalDraft::default()
    };
    let create =
      draft.to_create().expect("valid");
    assert_eq!(create.title, "Stretch daily");
    assert!(create.category.is_none());
    assert!(create.start_date.is_none());
  }

  #[test]
  fn reversed_dates_fail_validation() {
    let draft = GoalDraft {
      title: "Trip".to_string(),
      start_date: "2026-09-10".to_string(),
      end_date: "2026-09-01".to_string(),
      ..GoalDraft::default()
    };
    assert_eq!(
      draft.to_create(),
      Err(ValidationError::DateRange)
    );
  }

  #[test]
  fn milestone_and_task_drafts_require_titles(
  ) {
    assert!(
      MilestoneDraft::default()
        .to_create()
        .is_err()
    );
    let task = TaskDraft {
      title: "Book venue".to_string(),
      due_date: "2026-11-02".to_string(),
      priority: Priority::High
    };
    let create =
      task.to_create().expect("valid task");
    assert_eq!(
      create.due_date,
      NaiveDate::from_ymd_opt(2026, 11, 2)
    );
  }
}
