use crate::model::{
  Goal,
  GoalStatus,
  Milestone
};

#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Default,
)]
pub struct TaskCounts {
  pub total:     usize,
  pub completed: usize
}

impl TaskCounts {
  pub fn open(self) -> usize {
    self.total - self.completed
  }

  pub fn percent(self) -> Option<u8> {
    percent(self.completed, self.total)
  }
}

fn percent(
  done: usize,
  total: usize
) -> Option<u8> {
  if total == 0 {
    return None;
  }
  let done = done.min(total);
  // 0 and 100 are reserved for none and
  // all done.
  Some(match done {
    | 0 => 0,
    | done if done == total => 100,
    | done => {
      let ratio = done as f64 / total as f64;
      ((ratio * 100.0).round() as u8)
        .clamp(1, 99)
    }
  })
}

pub fn milestone_task_counts(
  milestone: &Milestone
) -> TaskCounts {
  TaskCounts {
    total:     milestone.tasks.len(),
    completed: milestone
      .tasks
      .iter()
      .filter(|task| task.completed)
      .count()
  }
}

pub fn goal_task_counts(
  goal: &Goal
) -> TaskCounts {
  goal.milestones.iter().fold(
    TaskCounts::default(),
    |acc, milestone| {
      let counts =
        milestone_task_counts(milestone);
      TaskCounts {
        total:     acc.total
          + counts.total,
        completed: acc.completed
          + counts.completed
      }
    }
  )
}

pub fn milestone_progress(
  milestone: &Milestone
) -> u8 {
  milestone_task_counts(milestone)
    .percent()
    .unwrap_or(if milestone.completed {
      100
    } else {
      0
    })
}

/// Progress is derived from the finest
/// granularity available: tasks, then
/// milestones, then the stored percentage.
pub fn goal_progress(goal: &Goal) -> u8 {
  if goal.status == GoalStatus::Completed
  {
    return 100;
  }

  if let Some(value) =
    goal_task_counts(goal).percent()
  {
    return value;
  }

  let milestones_done = goal
    .milestones
    .iter()
    .filter(|milestone| {
      milestone.completed
    })
    .count();
  percent(
    milestones_done,
    goal.milestones.len()
  )
  .unwrap_or(goal.progress.min(100))
}

/// Suggested status for the detail view.
/// Never written back without the user
/// confirming it. A goal put on hold stays
/// on hold whatever its progress.
pub fn derived_status(
  goal: &Goal
) -> GoalStatus {
  let has_work =
    !goal.milestones.is_empty();
  let all_tasks_done =
    goal_task_counts(goal).open() == 0;
  let progress = goal_progress(goal);

  if goal.status == GoalStatus::OnHold {
    return goal.status;
  }

  match progress {
    | 100 if has_work && all_tasks_done => {
      GoalStatus::Completed
    }
    | 1..=99 => GoalStatus::InProgress,
    | _ => goal.status
  }
}

#[derive(
  Debug, Clone, Copy, PartialEq, Eq,
)]
pub enum ProgressTone {
  Low,
  Medium,
  High,
  Done
}

impl ProgressTone {
  pub fn from_percent(
    value: u8
  ) -> Self {
    match value {
      | 100..=u8::MAX => Self::Done,
      | 67..=99 => Self::High,
      | 34..=66 => Self::Medium,
      | _ => Self::Low
    }
  }

  pub fn as_class(
    self
  ) -> &'static str {
    match self {
      | Self::Low => "tone-low",
      | Self::Medium => "tone-medium",
      | Self::High => "tone-high",
      | Self::Done => "tone-done"
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::model::Task;

  fn task(done: bool) -> Task {
    Task {
      id:           format!("t-{done}"),
      milestone_id: "m".to_string(),
      title:        "task".to_string(),
      description:  None,
      due_date:     None,
      priority:     Default::default(),
      completed:    done,
      created_at:   None
    }
  }

  fn milestone(
    completed: bool,
    tasks: Vec<Task>
  ) -> Milestone {
    Milestone {
      id: "m".to_string(),
      goal_id: "g".to_string(),
      title: "milestone".to_string(),
      description: String::new(),
      due_date: None,
      priority: Default::default(),
      completed,
      tasks,
      created_at: None
    }
  }

  fn goal(
    progress: u8,
    milestones: Vec<Milestone>
  ) -> Goal {
    Goal {
      id: "g".to_string(),
      title: "goal".to_string(),
      description: String::new(),
      start_date: None,
      end_date: None,
      priority: Default::default(),
      status: GoalStatus::InProgress,
      progress,
      category: None,
      milestones,
      created_at: None,
      updated_at: None
    }
  }

  #[test]
  fn milestone_progress_uses_tasks_when_present(
  ) {
    let m = milestone(false, vec![
      task(true),
      task(false),
      task(false),
    ]);
    assert_eq!(milestone_progress(&m), 33);
  }

  #[test]
  fn milestone_without_tasks_uses_flag() {
    assert_eq!(
      milestone_progress(&milestone(
        true,
        vec![]
      )),
      100
    );
    assert_eq!(
      milestone_progress(&milestone(
        false,
        vec![]
      )),
      0
    );
  }

  #[test]
  fn goal_progress_prefers_tasks_over_milestones(
  ) {
    let g = goal(10, vec![
      milestone(true, vec![task(true)]),
      milestone(false, vec![
        task(false),
        task(false),
        task(true),
      ]),
    ]);
    assert_eq!(goal_progress(&g), 50);
    assert_eq!(
      goal_task_counts(&g),
      TaskCounts {
        total:     4,
        completed: 2
      }
    );
  }

  #[test]
  fn goal_progress_falls_back_to_milestones_then_stored(
  ) {
    let by_milestones = goal(0, vec![
      milestone(true, vec![]),
      milestone(false, vec![]),
    ]);
    assert_eq!(
      goal_progress(&by_milestones),
      50
    );

    let stored = goal(250, vec![]);
    assert_eq!(goal_progress(&stored), 100);
  }

  #[test]
  fn completed_goal_reports_full_progress()
  {
    let mut g = goal(0, vec![milestone(
      false,
      vec![task(false)]
    )]);
    g.status = GoalStatus::Completed;
    assert_eq!(goal_progress(&g), 100);
  }

  #[test]
  fn derived_status_suggests_completion() {
    let mut g = goal(0, vec![milestone(
      false,
      vec![task(true)]
    )]);
    g.status = GoalStatus::NotStarted;
    assert_eq!(
      derived_status(&g),
      GoalStatus::Completed
    );

    g.status = GoalStatus::OnHold;
    assert_eq!(
      derived_status(&g),
      GoalStatus::OnHold
    );
  }

  #[test]
  fn one_open_task_in_many_is_not_complete() {
    let mut tasks = vec![task(true); 199];
    tasks.push(task(false));
    let g = goal(0, vec![milestone(
      false, tasks
    )]);

    assert_eq!(goal_task_counts(&g).open(), 1);
    assert_eq!(goal_progress(&g), 99);
    assert_eq!(
      derived_status(&g),
      GoalStatus::InProgress
    );
  }

  #[test]
  fn one_done_task_in_many_is_started() {
    let mut tasks = vec![task(false); 299];
    tasks.push(task(true));
    let m = milestone(false, tasks);
    assert_eq!(milestone_progress(&m), 1);

    let mut g = goal(0, vec![m]);
    g.status = GoalStatus::NotStarted;
    assert_eq!(
      derived_status(&g),
      GoalStatus::InProgress
    );
  }

  #[test]
  fn stored_full_progress_without_work_keeps_status(
  ) {
    let mut g = goal(100, vec![]);
    g.status = GoalStatus::NotStarted;
    assert_eq!(
      derived_status(&g),
      GoalStatus::NotStarted
    );
  }

  #[test]
  fn tone_thresholds() {
    assert_eq!(
      ProgressTone::from_percent(0),
      ProgressTone::Low
    );
    assert_eq!(
      ProgressTone::from_percent(34),
      ProgressTone::Medium
    );
    assert_eq!(
      ProgressTone::from_percent(67),
      ProgressTone::High
    );
    assert_eq!(
      ProgressTone::from_percent(100),
      ProgressTone::Done
    );
  }
}
