use chrono::NaiveDate;

use crate::model::{
  Goal,
  GoalStatus,
  Priority
};
use crate::progress::{
  goal_progress,
  goal_task_counts
};

#[derive(
  Debug, Clone, PartialEq, Default,
)]
pub struct DashboardStats {
  pub total_goals:      usize,
  pub completed_goals:  usize,
  pub active_goals:     usize,
  pub on_hold_goals:    usize,
  pub average_progress: u8,
  pub total_tasks:      usize,
  pub completed_tasks:  usize,
  pub overdue_goals:    usize,
  pub completion_rate:  u8
}

pub fn days_remaining(
  date: NaiveDate,
  today: NaiveDate
) -> i64 {
  (date - today).num_days()
}

fn is_overdue(
  goal: &Goal,
  today: NaiveDate
) -> bool {
  goal.status.is_open()
    && goal
      .end_date
      .is_some_and(|end| end < today)
}

fn rounded_percent(
  part: usize,
  whole: usize
) -> u8 {
  if whole == 0 {
    return 0;
  }
  ((part as f64 / whole as f64) * 100.0)
    .round() as u8
}

pub fn dashboard_stats(
  goals: &[Goal],
  today: NaiveDate
) -> DashboardStats {
  let mut stats = DashboardStats {
    total_goals: goals.len(),
    ..DashboardStats::default()
  };

  let mut progress_sum = 0_usize;
  for goal in goals {
    match goal.status {
      | GoalStatus::Completed => {
        stats.completed_goals += 1
      }
      | GoalStatus::OnHold => {
        stats.on_hold_goals += 1
      }
      | GoalStatus::NotStarted
      | GoalStatus::InProgress => {
        stats.active_goals += 1
      }
    }

    if is_overdue(goal, today) {
      stats.overdue_goals += 1;
    }

    let counts = goal_task_counts(goal);
    stats.total_tasks += counts.total;
    stats.completed_tasks +=
      counts.completed;
    progress_sum +=
      usize::from(goal_progress(goal));
  }

  if !goals.is_empty() {
    stats.average_progress =
      (progress_sum as f64
        / goals.len() as f64)
        .round() as u8;
  }
  stats.completion_rate = rounded_percent(
    stats.completed_goals,
    stats.total_goals
  );
  stats
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum DeadlineKind {
  Goal,
  Milestone,
  Task
}

impl DeadlineKind {
  pub fn label(self) -> &'static str {
    match self {
      | Self::Goal => "Goal",
      | Self::Milestone => "Milestone",
      | Self::Task => "Task"
    }
  }
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Deadline {
  pub kind:       DeadlineKind,
  pub goal_id:    String,
  pub title:      String,
  pub due:        NaiveDate,
  pub days_left:  i64,
  pub overdue:    bool,
  pub priority:   Priority
}

/// Open goals, milestones and tasks due on or
/// before `today + within_days`. Overdue items
/// are kept and flagged.
pub fn upcoming_deadlines(
  goals: &[Goal],
  today: NaiveDate,
  within_days: i64
) -> Vec<Deadline> {
  let mut deadlines = Vec::new();
  let mut push = |kind: DeadlineKind,
                  goal: &Goal,
                  title: &str,
                  due: NaiveDate,
                  priority: Priority| {
    let days_left =
      days_remaining(due, today);
    if days_left <= within_days {
      deadlines.push(Deadline {
        kind,
        goal_id: goal.id.clone(),
        title: title.to_string(),
        due,
        days_left,
        overdue: days_left < 0,
        priority
      });
    }
  };

  for goal in goals
    .iter()
    .filter(|goal| goal.status.is_open())
  {
    if let Some(end) = goal.end_date {
      push(
        DeadlineKind::Goal,
        goal,
        &goal.title,
        end,
        goal.priority
      );
    }

    for milestone in &goal.milestones {
      if milestone.completed {
        continue;
      }
      if let Some(due) = milestone.due_date
      {
        push(
          DeadlineKind::Milestone,
          goal,
          &milestone.title,
          due,
          milestone.priority
        );
      }

      for task in milestone
        .tasks
        .iter()
        .filter(|task| !task.completed)
      {
        if let Some(due) = task.due_date {
          push(
            DeadlineKind::Task,
            goal,
            &task.title,
            due,
            task.priority
          );
        }
      }
    }
  }

  deadlines.sort_by(|left, right| {
    left
      .due
      .cmp(&right.due)
      .then_with(|| {
        left.title.cmp(&right.title)
      })
  });
  deadlines
}

pub fn recent_goals(
  goals: &[Goal],
  limit: usize
) -> Vec<Goal> {
  let mut sorted = goals.to_vec();
  sorted.sort_by(|left, right| {
    right
      .created_at
      .cmp(&left.created_at)
      .then_with(|| {
        left.title.cmp(&right.title)
      })
  });
  sorted.truncate(limit);
  sorted
}

#[derive(
  Debug, Clone, PartialEq, Eq,
)]
pub struct Achievement {
  pub key:         &'static str,
  pub title:       &'static str,
  pub description: &'static str,
  pub icon:        &'static str,
  pub current:     usize,
  pub target:      usize,
  pub unlocked:    bool
}

impl Achievement {
  pub fn percent(&self) -> u8 {
    rounded_percent(
      self.current.min(self.target),
      self.target
    )
  }
}

struct AchievementDef {
  key:         &'static str,
  title:       &'static str,
  description: &'static str,
  icon:        &'static str,
  target:      usize,
  measure:     fn(&Tally) -> usize
}

#[derive(Default)]
struct Tally {
  goals:               usize,
  completed_goals:     usize,
  completed_tasks:     usize,
  completed_milestones: usize,
  completed_high:      usize
}

const CATALOG: &[AchievementDef] = &[
  AchievementDef {
    key:         "first_goal",
    title:       "First Step",
    description: "Create your first goal",
    icon:        "🎯",
    target:      1,
    measure:     |tally| tally.goals
  },
  AchievementDef {
    key:         "first_completed",
    title:       "Goal Getter",
    description: "Complete a goal",
    icon:        "🏁",
    target:      1,
    measure:     |tally| {
      tally.completed_goals
    }
  },
  AchievementDef {
    key:         "five_completed",
    title:       "High Five",
    description: "Complete five goals",
    icon:        "🖐",
    target:      5,
    measure:     |tally| {
      tally.completed_goals
    }
  },
  AchievementDef {
    key:         "first_milestone",
    title:       "Milestone Maker",
    description: "Complete a milestone",
    icon:        "🪨",
    target:      1,
    measure:     |tally| {
      tally.completed_milestones
    }
  },
  AchievementDef {
    key:         "ten_tasks",
    title:       "Busy Bee",
    description: "Complete ten tasks",
    icon:        "🐝",
    target:      10,
    measure:     |tally| {
      tally.completed_tasks
    }
  },
  AchievementDef {
    key:         "fifty_tasks",
    title:       "Task Master",
    description: "Complete fifty tasks",
    icon:        "⚡",
    target:      50,
    measure:     |tally| {
      tally.completed_tasks
    }
  },
  AchievementDef {
    key:         "high_priority",
    title:       "Priority Pro",
    description:
      "Complete a high priority goal",
    icon:        "🔥",
    target:      1,
    measure:     |tally| {
      tally.completed_high
    }
  },
  AchievementDef {
    key:         "perfect_record",
    title:       "Perfect Record",
    description:
      "Finish every goal, with at least \
       three goals",
    icon:        "🏆",
    target:      3,
    measure:     |tally| {
      if tally.completed_goals
        == tally.goals
      {
        tally.goals
      } else {
        0
      }
    }
  }
];

fn tally(goals: &[Goal]) -> Tally {
  let mut tally = Tally {
    goals: goals.len(),
    ..Tally::default()
  };

  for goal in goals {
    if goal.status == GoalStatus::Completed
    {
      tally.completed_goals += 1;
      if goal.priority == Priority::High {
        tally.completed_high += 1;
      }
    }
    tally.completed_milestones += goal
      .milestones
      .iter()
      .filter(|milestone| {
        milestone.completed
      })
      .count();
    tally.completed_tasks +=
      goal_task_counts(goal).completed;
  }
  tally
}

pub fn achievements(
  goals: &[Goal]
) -> Vec<Achievement> {
  let tally = tally(goals);
  CATALOG
    .iter()
    .map(|def| {
      let current = (def.measure)(&tally);
      Achievement {
        key: def.key,
        title: def.title,
        description: def.description,
        icon: def.icon,
        current,
        target: def.target,
        unlocked: current >= def.target
      }
    })
    .collect()
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::{
    Milestone,
    Task
  };

  fn date(
    y: i32,
    m: u32,
    d: u32
  ) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d)
      .expect("valid date")
  }

  fn goal(
    id: &str,
    status: GoalStatus
  ) -> Goal {
    Goal {
      id: id.to_string(),
      title: format!("goal {id}"),
      description: String::new(),
      start_date: None,
      end_date: None,
      priority: Priority::Medium,
      status,
      progress: 0,
      category: None,
      milestones: vec![],
      created_at: None,
      updated_at: None
    }
  }

  fn task(
    title: &str,
    done: bool,
    due: Option<NaiveDate>
  ) -> Task {
    Task {
      id: title.to_string(),
      milestone_id: "m".to_string(),
      title: title.to_string(),
      description: None,
      due_date: due,
      priority: Priority::Low,
      completed: done,
      created_at: None
    }
  }

  fn milestone(
    title: &str,
    completed: bool,
    due: Option<NaiveDate>,
    tasks: Vec<Task>
  ) -> Milestone {
    Milestone {
      id: title.to_string(),
      goal_id: "g".to_string(),
      title: title.to_string(),
      description: String::new(),
      due_date: due,
      priority: Priority::High,
      completed,
      tasks,
      created_at: None
    }
  }

  #[test]
  fn dashboard_counts_and_averages() {
    let today = date(2026, 10, 18);
    let mut late =
      goal("1", GoalStatus::InProgress);
    late.end_date = Some(date(2026, 10, 1));
    late.milestones = vec![milestone(
      "m",
      false,
      None,
      vec![
        task("a", true, None),
        task("b", false, None),
      ]
    )];

    let mut finished_late =
      goal("2", GoalStatus::Completed);
    finished_late.end_date =
      Some(date(2026, 1, 1));

    let goals = vec![
      late,
      finished_late,
      goal("3", GoalStatus::OnHold),
    ];

    let stats =
      dashboard_stats(&goals, today);
    assert_eq!(stats.total_goals, 3);
    assert_eq!(stats.completed_goals, 1);
    assert_eq!(stats.active_goals, 1);
    assert_eq!(stats.on_hold_goals, 1);
    assert_eq!(stats.overdue_goals, 1);
    assert_eq!(stats.total_tasks, 2);
    assert_eq!(stats.completed_tasks, 1);
    assert_eq!(stats.average_progress, 50);
    assert_eq!(stats.completion_rate, 33);
  }

  #[test]
  fn empty_dashboard_is_zeroed() {
    assert_eq!(
      dashboard_stats(
        &[],
        date(2026, 1, 1)
      ),
      DashboardStats::default()
    );
  }

  #[test]
  fn deadlines_window_and_ordering() {
    let today = date(2026, 10, 18);
    let mut g =
      goal("1", GoalStatus::InProgress);
    g.end_date = Some(date(2026, 12, 1));
    g.milestones = vec![
      milestone(
        "ship",
        false,
        Some(date(2026, 10, 20)),
        vec![
          task(
            "late task",
            false,
            Some(date(2026, 10, 16))
          ),
          task(
            "done task",
            true,
            Some(date(2026, 10, 19))
          ),
        ]
      ),
      milestone(
        "finished",
        true,
        Some(date(2026, 10, 19)),
        vec![]
      ),
    ];
    let mut closed =
      goal("2", GoalStatus::Completed);
    closed.end_date =
      Some(date(2026, 10, 19));

    let deadlines = upcoming_deadlines(
      &[g, closed],
      today,
      7
    );
    let titles: Vec<&str> = deadlines
      .iter()
      .map(|d| d.title.as_str())
      .collect();
    assert_eq!(titles, vec![
      "late task",
      "ship"
    ]);
    assert!(deadlines[0].overdue);
    assert_eq!(deadlines[0].days_left, -2);
    assert_eq!(
      deadlines[1].kind,
      DeadlineKind::Milestone
    );
  }

  #[test]
  fn recent_goals_newest_first() {
    let mut a =
      goal("a", GoalStatus::NotStarted);
    a.created_at =
      Some("2026-01-01T00:00:00Z".into());
    let mut b =
      goal("b", GoalStatus::NotStarted);
    b.created_at =
      Some("2026-03-01T00:00:00Z".into());
    let c = goal("c", GoalStatus::NotStarted);

    let recent =
      recent_goals(&[a, b, c], 2);
    let ids: Vec<&str> = recent
      .iter()
      .map(|goal| goal.id.as_str())
      .collect();
    assert_eq!(ids, vec!["b", "a"]);
  }

  #[test]
  fn achievements_unlock_from_tally() {
    let mut high =
      goal("1", GoalStatus::Completed);
    high.priority = Priority::High;
    high.milestones = vec![milestone(
      "m",
      true,
      None,
      (0..10)
        .map(|i| {
          task(&format!("t{i}"), true, None)
        })
        .collect()
    )];

    let unlocked: Vec<&str> =
      achievements(&[
        high,
        goal("2", GoalStatus::InProgress),
      ])
      .into_iter()
      .filter(|a| a.unlocked)
      .map(|a| a.key)
      .collect();
    assert_eq!(unlocked, vec![
      "first_goal",
      "first_completed",
      "first_milestone",
      "ten_tasks",
      "high_priority"
    ]);
  }

  #[test]
  fn perfect_record_needs_three_finished_goals(
  ) {
    let two = vec![
      goal("1", GoalStatus::Completed),
      goal("2", GoalStatus::Completed),
    ];
    let record = achievements(&two)
      .into_iter()
      .find(|a| a.key == "perfect_record")
      .expect("catalog entry");
    assert!(!record.unlocked);
    assert_eq!(record.percent(), 67);

    let mut three = two.clone();
    three.push(goal(
      "3",
      GoalStatus::Completed
    ));
    assert!(
      achievements(&three)
        .iter()
        .any(|a| {
          a.key == "perfect_record"
            && a.unlocked
        })
    );
  }
}
