use chrono::NaiveDate;
use goalpost_shared::filter::{
  GoalQuery,
  GoalTab,
  filter_goals
};
use goalpost_shared::list;
use goalpost_shared::progress::goal_progress;
use goalpost_shared::stats::{
  achievements,
  dashboard_stats
};
use goalpost_shared::{
  Goal,
  GoalPatch,
  GoalStatus,
  TaskPatch
};

const GOALS_JSON: &str = r#"[
  {
    "_id": "g1",
    "title": "Run a half marathon",
    "description": "Build up to 21km",
    "endDate": "2026-11-30",
    "priority": "high",
    "status": "in_progress",
    "milestones": [
      {
        "_id": "m1",
        "goalId": "g1",
        "title": "Base mileage",
        "tasks": [
          { "_id": "t1", "milestoneId": "m1", "title": "5k", "completed": true },
          { "_id": "t2", "milestoneId": "m1", "title": "10k", "completed": false }
        ]
      }
    ]
  },
  {
    "_id": "g2",
    "title": "Read twelve books",
    "status": "not_started",
    "progress": 0
  }
]"#;

#[test]
fn toggle_task_updates_progress_and_dashboard() {
  let mut goals: Vec<Goal> =
    serde_json::from_str(GOALS_JSON)
      .expect("decode goals");
  let today =
    NaiveDate::from_ymd_opt(2026, 10, 18)
      .expect("valid date");

  assert_eq!(goal_progress(&goals[0]), 50);

  let milestone =
    &mut goals[0].milestones[0];
  let previous = list::update_with(
    &mut milestone.tasks,
    "t2",
    |task| TaskPatch::completion(true).apply(task)
  )
  .expect("task present");
  assert!(!previous.completed);
  assert_eq!(goal_progress(&goals[0]), 100);

  // A failed request puts the old value back.
  list::upsert(
    &mut goals[0].milestones[0].tasks,
    previous
  );
  assert_eq!(goal_progress(&goals[0]), 50);

  let stats = dashboard_stats(&goals, today);
  assert_eq!(stats.total_goals, 2);
  assert_eq!(stats.active_goals, 2);
  assert_eq!(stats.average_progress, 25);
}

#[test]
fn optimistic_delete_and_rollback_preserve_filtering() {
  let mut goals: Vec<Goal> =
    serde_json::from_str(GOALS_JSON)
      .expect("decode goals");

  let (index, removed) =
    list::remove(&mut goals, "g1")
      .expect("goal present");
  let query = GoalQuery {
    tab: GoalTab::Active,
    ..GoalQuery::default()
  };
  assert_eq!(filter_goals(&goals, &query).len(), 1);

  list::restore(&mut goals, index, removed);
  assert_eq!(goals[0].id, "g1");
  assert_eq!(filter_goals(&goals, &query).len(), 2);
}

#[test]
fn completing_a_goal_unlocks_achievements() {
  let mut goals: Vec<Goal> =
    serde_json::from_str(GOALS_JSON)
      .expect("decode goals");

  GoalPatch {
    status: Some(GoalStatus::Completed),
    ..GoalPatch::default()
  }
  .apply(&mut goals[0]);

  let unlocked: Vec<&str> = achievements(&goals)
    .into_iter()
    .filter(|achievement| achievement.unlocked)
    .map(|achievement| achievement.key)
    .collect();
  assert!(unlocked.contains(&"first_completed"));
  assert!(unlocked.contains(&"high_priority"));
  assert!(!unlocked.contains(&"perfect_record"));
}
